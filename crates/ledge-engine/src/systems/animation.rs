//! Animation system: picks each entity's state and advances its counter.

use crate::components::animation::AnimationState;
use crate::components::entity::Entity;
use crate::core::scene::Scene;

/// Derive the animation state from physics and action flags.
///
/// Attack outranks everything, airborne outranks ground movement, and
/// the rise/fall split keys off the velocity sign. On the ground the
/// horizontal velocity decides between idle and walk/run; the dead zone
/// guarantees it is exactly zero when the entity has stopped.
pub fn select_state(entity: &Entity) -> AnimationState {
    if entity.attacking {
        AnimationState::Attack
    } else if !entity.on_ground {
        if entity.velocity.y < 0.0 {
            AnimationState::Jump
        } else {
            AnimationState::Fall
        }
    } else if entity.velocity.x != 0.0 {
        if entity.running {
            AnimationState::Run
        } else {
            AnimationState::Walk
        }
    } else {
        AnimationState::Idle
    }
}

/// Tick all entity animations for this frame.
///
/// Call this once per frame after physics, so the selected state sees
/// settled velocities and ground flags. A state change restarts the
/// counter; staying in the same state lets it run.
pub fn tick_animations(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        let state = select_state(entity);
        entity.animation.play_if_different(state);
        let def = *entity.descriptor.animations.def(state);
        entity.animation.tick(&def, dt);
    }
}
