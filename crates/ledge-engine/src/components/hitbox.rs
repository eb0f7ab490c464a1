//! Collision rectangles.
//!
//! Hitboxes are pure functions of authoritative entity state, recomputed
//! on every query. Nothing here is cached between frames, so a hitbox can
//! never go stale against the position it was derived from.

use glam::Vec2;

use crate::api::types::Facing;

/// Axis-aligned rectangle in world units. `y` grows downward, so `y` is
/// the top edge and `bottom()` is the larger coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge coordinate (Y grows downward).
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles sharing only an edge do not
    /// overlap. A body standing flush on a tile therefore does not
    /// collide with it until it actually penetrates.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// The same rectangle translated by `offset`.
    pub fn shifted(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }
}

/// Body hitbox for tile collision. The anchor is the feet: left edge at
/// `position.x`, bottom edge at `position.y`.
pub fn body_hitbox(position: Vec2, width: f32, height: f32) -> Rect {
    Rect::new(position.x, position.y - height, width, height)
}

/// Attack hitbox for entity-vs-entity checks. Identical to the body
/// hitbox when `reach` is zero; otherwise widened by `reach` on the side
/// the entity faces.
pub fn attack_hitbox(position: Vec2, width: f32, height: f32, facing: Facing, reach: f32) -> Rect {
    let body = body_hitbox(position, width, height);
    match facing {
        Facing::Right => Rect::new(body.x, body.y, body.w + reach, body.h),
        Facing::Left => Rect::new(body.x - reach, body.y, body.w + reach, body.h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_detects_penetration() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn body_hitbox_is_feet_anchored() {
        let hb = body_hitbox(Vec2::new(100.0, 200.0), 64.0, 64.0);
        assert_eq!(hb.x, 100.0);
        assert_eq!(hb.bottom(), 200.0);
        assert_eq!(hb.y, 136.0);
        assert_eq!(hb.w, 64.0);
    }

    #[test]
    fn attack_hitbox_extends_toward_facing() {
        let pos = Vec2::new(100.0, 200.0);
        let right = attack_hitbox(pos, 64.0, 64.0, Facing::Right, 16.0);
        assert_eq!(right.x, 100.0);
        assert_eq!(right.right(), 180.0);

        let left = attack_hitbox(pos, 64.0, 64.0, Facing::Left, 16.0);
        assert_eq!(left.x, 84.0);
        assert_eq!(left.right(), 164.0);
    }

    #[test]
    fn zero_reach_matches_body() {
        let pos = Vec2::new(32.0, 64.0);
        let body = body_hitbox(pos, 48.0, 48.0);
        let attack = attack_hitbox(pos, 48.0, 48.0, Facing::Left, 0.0);
        assert_eq!(body, attack);
    }

    #[test]
    fn shifted_translates() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).shifted(Vec2::new(10.0, -2.0));
        assert_eq!(r, Rect::new(11.0, 0.0, 3.0, 4.0));
    }
}
