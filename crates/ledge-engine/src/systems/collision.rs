//! Axis-separated tile collision and the entity attack overlap pass.
//!
//! The X pass runs against the pre-gravity Y position and the Y pass
//! against the post-move X position, the usual platformer separation of
//! axes. When a hitbox overlaps several tiles at once, the deepest
//! penetration along the pass axis resolves first and every later
//! candidate is re-tested against the updated hitbox, so the outcome does
//! not depend on tile enumeration order.

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::hitbox::Rect;
use crate::core::scene::Scene;

/// Distance the Y pass extends the hitbox bottom when testing, so a body
/// resting flush on a surface still registers as touching instead of
/// alternating between grounded and free-fall. Tunable heuristic.
pub const GROUND_PROBE: f32 = 1.0;

/// X pass: snap out of any overlapping tile and hard-stop horizontal
/// motion. `colliding_tiles` reports whether this pass saw any overlap.
pub fn resolve_horizontal(entity: &mut Entity, solids: &[Rect]) {
    entity.colliding_tiles = false;
    let hitbox = entity.hitbox();
    let moving_right = entity.velocity.x > 0.0;
    let moving_left = entity.velocity.x < 0.0;

    let mut hits: Vec<(f32, Rect)> = solids
        .iter()
        .filter(|tile| hitbox.overlaps(tile))
        .map(|tile| {
            let depth = if moving_right {
                hitbox.right() - tile.x
            } else if moving_left {
                tile.right() - hitbox.x
            } else {
                (hitbox.right() - tile.x).min(tile.right() - hitbox.x)
            };
            (depth, *tile)
        })
        .collect();
    if hits.is_empty() {
        return;
    }
    hits.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, tile) in &hits {
        let hitbox = entity.hitbox();
        if !hitbox.overlaps(tile) {
            continue;
        }
        if moving_right {
            entity.position.x = tile.x - entity.descriptor.width;
        } else if moving_left {
            entity.position.x = tile.right();
        }
    }
    entity.velocity.x = 0.0;
    entity.colliding_tiles = true;
}

/// Y pass: probe the hitbox bottom down by `GROUND_PROBE`, then land on
/// or bump against overlapping tiles. `on_ground` is cleared first, so a
/// body touching nothing is airborne by default; landing sets it, zeroes
/// the fall and snaps the feet to the tile top, which also ends any jump.
pub fn resolve_vertical(entity: &mut Entity, solids: &[Rect]) {
    entity.on_ground = false;
    let probe = probed(entity.hitbox());
    let falling = entity.velocity.y > 0.0;
    let rising = entity.velocity.y < 0.0;

    let mut hits: Vec<(f32, Rect)> = solids
        .iter()
        .filter(|tile| probe.overlaps(tile))
        .map(|tile| {
            let depth = if falling {
                probe.bottom() - tile.y
            } else if rising {
                tile.bottom() - probe.y
            } else {
                (probe.bottom() - tile.y).min(tile.bottom() - probe.y)
            };
            (depth, *tile)
        })
        .collect();
    hits.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, tile) in &hits {
        let probe = probed(entity.hitbox());
        if !probe.overlaps(tile) {
            continue;
        }
        if entity.velocity.y > 0.0 {
            // Landing: feet to the tile top.
            entity.on_ground = true;
            entity.jumping = false;
            entity.velocity.y = 0.0;
            entity.position.y = tile.y;
        } else if entity.velocity.y < 0.0 {
            // Ceiling: feet pushed down to tile bottom plus body height.
            entity.velocity.y = 0.0;
            entity.position.y = tile.bottom() + entity.descriptor.height;
        }
    }
}

/// Entity-vs-entity pass: an entity is struck when its body hitbox
/// overlaps another entity's attack hitbox. Runs on last-committed
/// positions and sets `colliding_entities` flags only.
pub fn resolve_entity_contacts(scene: &mut Scene) {
    let attacks: Vec<(EntityId, Rect)> = scene
        .iter()
        .map(|e| (e.id, e.attack_hitbox()))
        .collect();
    for entity in scene.iter_mut() {
        let body = entity.hitbox();
        entity.colliding_entities = attacks
            .iter()
            .any(|(id, attack)| *id != entity.id && body.overlaps(attack));
    }
}

fn probed(hitbox: Rect) -> Rect {
    Rect::new(hitbox.x, hitbox.y, hitbox.w, hitbox.h + GROUND_PROBE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::descriptor::EntityDescriptor;
    use glam::Vec2;

    fn entity_at(x: f32, y: f32) -> Entity {
        let mut e = Entity::new(
            EntityId(1),
            EntityDescriptor::default().with_size(64.0, 64.0),
        );
        e.bind_to_level(10.0, -0.22).unwrap();
        e.position = Vec2::new(x, y);
        e
    }

    fn tile(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 32.0, 32.0)
    }

    #[test]
    fn moving_right_snaps_to_tile_left_edge() {
        let mut e = entity_at(150.0, 200.0);
        e.velocity.x = 8.0;
        let wall = tile(208.0, 168.0);
        resolve_horizontal(&mut e, &[wall]);
        assert_eq!(e.position.x, 144.0);
        assert_eq!(e.velocity.x, 0.0);
        assert!(e.colliding_tiles);
    }

    #[test]
    fn moving_left_snaps_to_tile_right_edge() {
        let mut e = entity_at(200.0, 200.0);
        e.velocity.x = -8.0;
        let wall = tile(170.0, 168.0);
        resolve_horizontal(&mut e, &[wall]);
        assert_eq!(e.position.x, 202.0);
        assert_eq!(e.velocity.x, 0.0);
        assert!(e.colliding_tiles);
    }

    #[test]
    fn no_overlap_leaves_entity_alone() {
        let mut e = entity_at(0.0, 200.0);
        e.velocity.x = 8.0;
        resolve_horizontal(&mut e, &[tile(500.0, 200.0)]);
        assert_eq!(e.position.x, 0.0);
        assert_eq!(e.velocity.x, 8.0);
        assert!(!e.colliding_tiles);
    }

    #[test]
    fn multi_tile_resolution_is_order_independent() {
        // Two wall tiles at different penetration depths: the deeper one
        // decides the final position whichever order they are listed in.
        let deep = tile(200.0, 168.0);
        let shallow = tile(232.0, 168.0);

        let mut a = entity_at(170.0, 200.0);
        a.velocity.x = 8.0;
        resolve_horizontal(&mut a, &[deep, shallow]);

        let mut b = entity_at(170.0, 200.0);
        b.velocity.x = 8.0;
        resolve_horizontal(&mut b, &[shallow, deep]);

        assert_eq!(a.position.x, b.position.x);
        assert_eq!(a.position.x, 136.0);
    }

    #[test]
    fn landing_snaps_feet_to_tile_top() {
        let mut e = entity_at(64.0, 220.4);
        e.velocity.y = 20.4;
        e.jumping = true;
        resolve_vertical(&mut e, &[Rect::new(0.0, 216.0, 320.0, 16.0)]);
        assert!(e.on_ground);
        assert!(!e.jumping);
        assert_eq!(e.velocity.y, 0.0);
        assert_eq!(e.position.y, 216.0);
    }

    #[test]
    fn low_gravity_deep_fall_lands_flush() {
        // One long step overshoots the floor by a wide margin; the
        // resolve must still end with the feet flush on the surface.
        let mut e = entity_at(64.0, 200.0);
        e.bind_to_level(0.85, -0.22).unwrap();
        crate::systems::kinematics::integrate_vertical(&mut e, 6.0);
        assert!(e.position.y - 200.0 >= 16.0);

        resolve_vertical(&mut e, &[Rect::new(0.0, 216.0, 320.0, 32.0)]);
        assert!(e.on_ground);
        assert_eq!(e.velocity.y, 0.0);
        assert_eq!(e.position.y, 216.0);
    }

    #[test]
    fn resting_body_stays_grounded() {
        // Feet exactly on the tile top: only the probe sees the tile.
        let floor = Rect::new(0.0, 216.0, 320.0, 16.0);
        let mut e = entity_at(64.0, 216.0);
        e.velocity.y = 10.0; // gravity applied this frame
        resolve_vertical(&mut e, &[floor]);
        assert!(e.on_ground);
        assert_eq!(e.position.y, 216.0);
        assert_eq!(e.velocity.y, 0.0);
    }

    #[test]
    fn airborne_by_default() {
        let mut e = entity_at(64.0, 100.0);
        e.on_ground = true;
        e.velocity.y = 5.0;
        resolve_vertical(&mut e, &[]);
        assert!(!e.on_ground);
    }

    #[test]
    fn ceiling_bump_zeroes_ascent() {
        let mut e = entity_at(64.0, 200.0);
        e.velocity.y = -30.0;
        let ceiling = tile(64.0, 120.0);
        resolve_vertical(&mut e, &[ceiling]);
        assert_eq!(e.velocity.y, 0.0);
        assert_eq!(e.position.y, 152.0 + 64.0);
        assert!(!e.on_ground);
    }

    #[test]
    fn axis_passes_do_not_cross_contaminate() {
        // Diagonal push into a corner: X resolves without touching the
        // vertical velocity, then Y resolves without touching horizontal.
        let wall = tile(208.0, 168.0);
        let floor = Rect::new(0.0, 232.0, 320.0, 32.0);

        let mut e = entity_at(150.0, 200.0);
        e.velocity = Vec2::new(8.0, 12.0);
        resolve_horizontal(&mut e, &[wall, floor]);
        assert_eq!(e.velocity.x, 0.0);
        assert_eq!(e.velocity.y, 12.0);

        e.position.y += 40.0; // the vertical move this frame
        resolve_vertical(&mut e, &[wall, floor]);
        assert_eq!(e.velocity.y, 0.0);
        assert_eq!(e.position.y, 232.0);
    }

    #[test]
    fn attack_overlap_marks_the_struck_entity() {
        let mut scene = Scene::new();
        let mut attacker = entity_at(100.0, 200.0);
        attacker.attacking = true; // reach 16 toward Facing::Right
        let mut victim = entity_at(170.0, 200.0);
        victim.id = EntityId(2);
        scene.spawn(attacker);
        scene.spawn(victim);

        resolve_entity_contacts(&mut scene);

        // Attacker's reach (100..180) crosses the victim's body (170..234);
        // the victim's plain body box does not reach the attacker.
        assert!(scene.get(EntityId(2)).unwrap().colliding_entities);
        assert!(!scene.get(EntityId(1)).unwrap().colliding_entities);
    }

    #[test]
    fn idle_neighbors_do_not_strike() {
        let mut scene = Scene::new();
        let a = entity_at(100.0, 200.0);
        let mut b = entity_at(170.0, 200.0);
        b.id = EntityId(2);
        scene.spawn(a);
        scene.spawn(b);

        resolve_entity_contacts(&mut scene);
        assert!(!scene.get(EntityId(1)).unwrap().colliding_entities);
        assert!(!scene.get(EntityId(2)).unwrap().colliding_entities);
    }
}
