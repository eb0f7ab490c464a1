//! Kinematic integration: horizontal thrust and drag, gravity, jumps.
//!
//! All constants are calibrated for dt in target-frame units (dt = 1.0
//! at the target rate). Entities without a level binding are skipped;
//! binding happens at spawn and validates the constants, so the math
//! here never has to guard against zero weight or negative gravity.

use crate::components::entity::Entity;

/// Velocity magnitude under which horizontal motion is zeroed, so
/// sub-pixel drift cannot creep forever.
pub const DEAD_ZONE: f32 = 0.18;

/// Speed divisor in the slipperiness term of the drag model.
const DRAG_SPEED_DIVISOR: f32 = 30.0;

/// Fraction of the horizontal speed cap above which a jump's impulse is
/// scaled by speed (run-jumps go higher).
const RUN_JUMP_THRESHOLD: f32 = 0.75;

/// Horizontal integration step.
///
/// Thrust follows intent with a tie-break on the current velocity sign:
/// pushing against residual motion brakes with reduced magnitude
/// (`thrust - traction * |v|`) instead of full thrust. A weight-scaled
/// drag term then damps toward rest, velocity is clamped and dead-zoned,
/// and position integrates kinematically with pixel snapping on X.
pub fn integrate_horizontal(entity: &mut Entity, dt: f32) {
    let Some(binding) = entity.binding() else {
        return;
    };
    let boost = if entity.running {
        entity.descriptor.run_boost
    } else {
        0.0
    };
    let thrust = entity.descriptor.walk_accel + boost;
    let slipperiness = entity.descriptor.slipperiness;

    entity.acceleration.x = 0.0;
    if entity.move_left {
        if entity.velocity.x <= 0.0 {
            entity.acceleration.x -= thrust;
        } else {
            // Braking against residual rightward motion.
            entity.acceleration.x -= thrust - binding.traction * entity.velocity.x.abs();
        }
    } else if entity.move_right {
        if entity.velocity.x >= 0.0 {
            entity.acceleration.x += thrust;
        } else {
            entity.acceleration.x += thrust - binding.traction * entity.velocity.x.abs();
        }
    }

    // Inertial drag; friction is non-positive, so this damps toward rest.
    entity.acceleration.x += entity.velocity.x
        * binding.weight
        * (binding.friction + slipperiness * entity.velocity.x.abs() / DRAG_SPEED_DIVISOR);

    entity.velocity.x += entity.acceleration.x * dt;
    limit_horizontal(entity);
    entity.position.x += entity.velocity.x * dt + 0.5 * entity.acceleration.x * dt * dt;
    entity.position.x = entity.position.x.round();
}

/// Vertical integration step. `acceleration.y` stays pinned to gravity;
/// only the fall speed is capped, never the ascent.
pub fn integrate_vertical(entity: &mut Entity, dt: f32) {
    if entity.binding().is_none() {
        return;
    }
    entity.velocity.y += entity.acceleration.y * dt;
    if entity.velocity.y > entity.descriptor.max_y_velocity {
        entity.velocity.y = entity.descriptor.max_y_velocity;
    }
    entity.position.y += entity.velocity.y * dt + 0.5 * entity.acceleration.y * dt * dt;
}

/// Jump impulse. Fires only from the ground: `velocity.y` gets
/// `jump_force / weight` upward, scaled by `|velocity.x| * run_jump_scale`
/// when moving faster than the run-jump threshold, plus a horizontal kick
/// in the direction of travel. Sets `jumping`, which suspends the
/// horizontal clamp until landing or a jump cut.
pub fn jump(entity: &mut Entity) {
    let Some(binding) = entity.binding() else {
        return;
    };
    if !entity.on_ground {
        return;
    }
    entity.jumping = true;

    let mut impulse = entity.descriptor.jump_force / binding.weight;
    if entity.velocity.x.abs() > RUN_JUMP_THRESHOLD * entity.descriptor.max_x_velocity {
        impulse *= entity.velocity.x.abs() * entity.descriptor.run_jump_scale;
    }
    entity.velocity.y -= impulse;

    let kick = entity.descriptor.jump_kick / binding.weight;
    if entity.velocity.x > 0.0 {
        entity.velocity.x += kick;
    } else if entity.velocity.x < 0.0 {
        entity.velocity.x -= kick;
    }
    entity.on_ground = false;
}

/// Variable jump height: releasing the jump control mid-jump keeps only
/// `jump_control` of the remaining vertical velocity and ends the jump's
/// clamp suspension.
pub fn cut_jump(entity: &mut Entity) {
    if entity.jumping {
        entity.velocity.y *= entity.descriptor.jump_control;
        entity.jumping = false;
    }
}

/// Clamp horizontal speed (suspended mid-jump) and apply the dead-zone.
fn limit_horizontal(entity: &mut Entity) {
    if !entity.jumping {
        let max = entity.descriptor.max_x_velocity;
        entity.velocity.x = entity.velocity.x.clamp(-max, max);
    }
    if entity.velocity.x.abs() < DEAD_ZONE {
        entity.velocity.x = 0.0;
    }
}
