//! Input edge handling: key transitions into intent flags and actions.
//!
//! Transitions are edge-triggered. Key-down sets an intent flag or fires
//! an instantaneous action (jump, attack, reset); key-up clears the flag,
//! cuts a jump short, or re-arms the attack latch. Holding a key produces
//! no repeat events, so state changes happen exactly once per edge.

use crate::api::types::Facing;
use crate::components::entity::Entity;
use crate::systems::kinematics;

/// Logical buttons the engine understands. Raw key codes map to these
/// through `KeyBindings`; unmapped codes never reach an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Jump,
    Run,
    Attack,
    Reset,
    Quit,
}

/// Key-down transition. Movement sets intent and facing; jump, attack
/// and reset fire immediately. `Quit` is session-level and ignored here.
pub fn press(entity: &mut Entity, button: Button) {
    match button {
        Button::Left => {
            entity.move_left = true;
            entity.facing = Facing::Left;
        }
        Button::Right => {
            entity.move_right = true;
            entity.facing = Facing::Right;
        }
        Button::Run => entity.running = true,
        Button::Jump => kinematics::jump(entity),
        Button::Attack => {
            // The latch blocks both re-triggers and held-key repeats;
            // there is no attack queuing.
            if entity.attack_ready && !entity.attacking {
                entity.attacking = true;
                entity.attack_ready = false;
                entity.attack_timer = entity.descriptor.attack_frames;
            }
        }
        Button::Reset => entity.reset(),
        Button::Quit => {}
    }
}

/// Key-up transition. Releasing jump mid-flight performs the variable
/// height cut; releasing attack re-arms the latch.
pub fn release(entity: &mut Entity, button: Button) {
    match button {
        Button::Left => entity.move_left = false,
        Button::Right => entity.move_right = false,
        Button::Run => entity.running = false,
        Button::Jump => kinematics::cut_jump(entity),
        Button::Attack => entity.attack_ready = true,
        Button::Reset | Button::Quit => {}
    }
}

/// Per-frame action upkeep: the attack state runs down its timer.
pub fn tick(entity: &mut Entity, dt: f32) {
    if entity.attacking {
        entity.attack_timer -= dt;
        if entity.attack_timer <= 0.0 {
            entity.attacking = false;
            entity.attack_timer = 0.0;
        }
    }
}
