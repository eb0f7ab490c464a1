//! Data-driven entity descriptors.
//!
//! Entity kinds are configuration, not subclasses: a descriptor carries
//! dimensions, tuning constants, the sprite atlas and animation strips,
//! and a control policy. Level manifests define descriptors by name and
//! `EntityRegistry` resolves them; game code may also build them directly.

use serde::{Deserialize, Serialize};

use crate::api::types::AtlasId;
use crate::components::animation::{AnimationDef, AnimationSet};

/// Who drives an entity each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPolicy {
    /// Consumes mapped input events.
    Player,
    /// Physics only; ignores input.
    #[default]
    Inert,
}

/// Everything fixed about an entity kind.
///
/// Dimensions are in world units; the tuning constants are calibrated for
/// dt in target-frame units. The defaults give a 64-unit character a
/// controllable feel on 32-unit tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDescriptor {
    /// Registry key; doubles as the default entity tag.
    pub name: String,
    /// Hitbox width.
    pub width: f32,
    /// Hitbox height.
    pub height: f32,
    /// Mass; `weight = mass * gravity` at level bind time.
    pub mass: f32,
    /// Speed-quadratic term in the drag model.
    pub slipperiness: f32,
    /// Base horizontal thrust while a movement key is held.
    pub walk_accel: f32,
    /// Additional thrust while the run key is held.
    pub run_boost: f32,
    /// Horizontal speed clamp (suspended mid-jump).
    pub max_x_velocity: f32,
    /// Terminal fall speed.
    pub max_y_velocity: f32,
    /// Vertical jump impulse, divided by weight when applied.
    pub jump_force: f32,
    /// Horizontal kick applied at takeoff in the direction of travel.
    pub jump_kick: f32,
    /// Fraction of upward velocity kept when the jump key is released.
    pub jump_control: f32,
    /// Impulse multiplier per unit of speed for run-jumps.
    pub run_jump_scale: f32,
    /// How far the attack hitbox extends past the body, facing-side.
    pub attack_reach: f32,
    /// Attack duration in frame units.
    pub attack_frames: f32,
    /// Atlas holding this kind's sprite strips.
    pub atlas: AtlasId,
    /// Per-state animation strips.
    pub animations: AnimationSet,
    /// Input handling policy.
    pub control: ControlPolicy,
}

impl Default for EntityDescriptor {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: 64.0,
            height: 64.0,
            mass: 0.11,
            slipperiness: 0.03,
            walk_accel: 1.9,
            run_boost: 1.75,
            max_x_velocity: 20.0,
            max_y_velocity: 65.0,
            jump_force: 65.0,
            jump_kick: 10.0,
            jump_control: 0.2,
            run_jump_scale: 0.07,
            attack_reach: 16.0,
            attack_frames: 14.0,
            atlas: AtlasId(0),
            animations: AnimationSet::uniform(AnimationDef::new(0, 1, 0.0)),
            control: ControlPolicy::Inert,
        }
    }
}

impl EntityDescriptor {
    // -- Builder pattern --

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_atlas(mut self, atlas: AtlasId) -> Self {
        self.atlas = atlas;
        self
    }

    pub fn with_animations(mut self, animations: AnimationSet) -> Self {
        self.animations = animations;
        self
    }

    pub fn with_control(mut self, control: ControlPolicy) -> Self {
        self.control = control;
        self
    }

    pub fn with_attack_reach(mut self, reach: f32) -> Self {
        self.attack_reach = reach;
        self
    }
}
