use glam::Vec2;
use thiserror::Error;

use crate::api::types::{EntityId, Facing};
use crate::components::animation::AnimationCounter;
use crate::components::descriptor::{ControlPolicy, EntityDescriptor};
use crate::components::hitbox::{self, Rect};

/// Physical constants an entity receives from the level it joins.
/// `traction` and `weight` are derived once at bind time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelBinding {
    pub gravity: f32,
    /// Non-positive drag coefficient.
    pub friction: f32,
    /// `|friction|`; scales braking thrust against residual motion.
    pub traction: f32,
    /// `mass * gravity`.
    pub weight: f32,
}

/// Rejected level binding: the combination of descriptor and level
/// constants would produce non-finite physics.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BindError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("gravity must be positive and finite, got {0}")]
    InvalidGravity(f32),
    #[error("friction must be non-positive and finite, got {0}")]
    InvalidFriction(f32),
}

/// Fat entity struct: kinematic state, intent and action flags, and the
/// animation counter, all mutated in place by the per-frame systems.
///
/// `position` is the feet anchor: the body hitbox's left edge sits at
/// `position.x` and its bottom edge at `position.y`. Y grows downward.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    pub descriptor: EntityDescriptor,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Load-time position restored by `reset`.
    pub spawn: Vec2,
    pub facing: Facing,
    // Intent flags, written by the controller.
    pub move_left: bool,
    pub move_right: bool,
    pub running: bool,
    // Action state.
    pub jumping: bool,
    pub on_ground: bool,
    pub attacking: bool,
    pub attack_ready: bool,
    /// Remaining attack duration in frame units.
    pub attack_timer: f32,
    // Collision flags, rewritten by the resolver each frame.
    pub colliding_tiles: bool,
    pub colliding_entities: bool,
    pub animation: AnimationCounter,
    binding: Option<LevelBinding>,
}

impl Entity {
    /// Create an entity of the given kind at the origin. The tag starts
    /// as the descriptor's name.
    pub fn new(id: EntityId, descriptor: EntityDescriptor) -> Self {
        Self {
            id,
            tag: descriptor.name.clone(),
            descriptor,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            spawn: Vec2::ZERO,
            facing: Facing::Right,
            move_left: false,
            move_right: false,
            running: false,
            jumping: false,
            on_ground: false,
            attacking: false,
            attack_ready: true,
            attack_timer: 0.0,
            colliding_tiles: false,
            colliding_entities: false,
            animation: AnimationCounter::default(),
            binding: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Place the entity; also records the position as its spawn point.
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self.spawn = position;
        self
    }

    /// Inject the level's physical constants. Must run before any physics
    /// step touches this entity; the integrator skips unbound entities.
    /// Rebinding is allowed when an entity moves between levels.
    pub fn bind_to_level(&mut self, gravity: f32, friction: f32) -> Result<(), BindError> {
        let mass = self.descriptor.mass;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BindError::InvalidMass(mass));
        }
        if !(gravity.is_finite() && gravity > 0.0) {
            return Err(BindError::InvalidGravity(gravity));
        }
        if !(friction.is_finite() && friction <= 0.0) {
            return Err(BindError::InvalidFriction(friction));
        }
        self.binding = Some(LevelBinding {
            gravity,
            friction,
            traction: friction.abs(),
            weight: mass * gravity,
        });
        self.acceleration = Vec2::new(0.0, gravity);
        Ok(())
    }

    /// The injected constants, if bound.
    pub fn binding(&self) -> Option<LevelBinding> {
        self.binding
    }

    /// Whether this entity consumes mapped input.
    pub fn is_controllable(&self) -> bool {
        self.descriptor.control == ControlPolicy::Player
    }

    /// Body hitbox at the current position.
    pub fn hitbox(&self) -> Rect {
        hitbox::body_hitbox(self.position, self.descriptor.width, self.descriptor.height)
    }

    /// Attack hitbox at the current position. Matches the body hitbox
    /// unless an attack is in progress.
    pub fn attack_hitbox(&self) -> Rect {
        let reach = if self.attacking {
            self.descriptor.attack_reach
        } else {
            0.0
        };
        hitbox::attack_hitbox(
            self.position,
            self.descriptor.width,
            self.descriptor.height,
            self.facing,
            reach,
        )
    }

    /// Return to the load-time state: spawn position, zero velocity,
    /// gravity-pinned acceleration, cleared action state and animation.
    /// Movement intent is left alone so held keys stay truthful; the
    /// level binding is kept.
    pub fn reset(&mut self) {
        self.position = self.spawn;
        self.velocity = Vec2::ZERO;
        self.acceleration = match self.binding {
            Some(b) => Vec2::new(0.0, b.gravity),
            None => Vec2::ZERO,
        };
        self.facing = Facing::Right;
        self.jumping = false;
        self.on_ground = false;
        self.attacking = false;
        self.attack_ready = true;
        self.attack_timer = 0.0;
        self.colliding_tiles = false;
        self.colliding_entities = false;
        self.animation.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::AnimationState;

    #[test]
    fn bind_derives_traction_and_weight() {
        let mut e = Entity::new(EntityId(1), EntityDescriptor::default());
        e.bind_to_level(10.0, -0.22).unwrap();
        let b = e.binding().unwrap();
        assert_eq!(b.traction, 0.22);
        assert!((b.weight - 1.1).abs() < 1e-6);
        assert_eq!(e.acceleration.y, 10.0);
    }

    #[test]
    fn bind_rejects_bad_constants() {
        let mut e = Entity::new(EntityId(1), EntityDescriptor::default());
        assert_eq!(
            e.bind_to_level(0.0, -0.22),
            Err(BindError::InvalidGravity(0.0))
        );
        assert_eq!(
            e.bind_to_level(10.0, 0.5),
            Err(BindError::InvalidFriction(0.5))
        );
        assert!(e.binding().is_none());

        let mut weightless =
            Entity::new(EntityId(2), EntityDescriptor::default().with_mass(0.0));
        assert_eq!(
            weightless.bind_to_level(10.0, -0.22),
            Err(BindError::InvalidMass(0.0))
        );
    }

    #[test]
    fn bind_rejects_non_finite() {
        let mut e = Entity::new(EntityId(1), EntityDescriptor::default());
        assert!(e.bind_to_level(f32::NAN, -0.22).is_err());
        assert!(e.bind_to_level(10.0, f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn reset_restores_load_time_state() {
        let mut e = Entity::new(EntityId(1), EntityDescriptor::default())
            .with_position(Vec2::new(64.0, 128.0));
        e.bind_to_level(10.0, -0.22).unwrap();

        e.position = Vec2::new(500.0, 900.0);
        e.velocity = Vec2::new(12.0, -30.0);
        e.jumping = true;
        e.attacking = true;
        e.attack_ready = false;
        e.attack_timer = 7.0;
        e.animation.play_if_different(AnimationState::Jump);
        e.animation.counter = 2.5;

        e.reset();

        assert_eq!(e.position, Vec2::new(64.0, 128.0));
        assert_eq!(e.velocity, Vec2::ZERO);
        assert_eq!(e.acceleration, Vec2::new(0.0, 10.0));
        assert!(!e.jumping);
        assert!(!e.attacking);
        assert!(e.attack_ready);
        assert_eq!(e.attack_timer, 0.0);
        assert_eq!(e.animation.state, AnimationState::Idle);
        assert_eq!(e.animation.counter, 0.0);
        // Binding survives reset.
        assert!(e.binding().is_some());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut e = Entity::new(EntityId(1), EntityDescriptor::default())
            .with_position(Vec2::new(10.0, 20.0));
        e.bind_to_level(10.0, -0.22).unwrap();
        e.reset();
        let once = (e.position, e.velocity, e.acceleration, e.animation);
        e.reset();
        assert_eq!(once, (e.position, e.velocity, e.acceleration, e.animation));
    }

    #[test]
    fn attack_hitbox_widens_only_while_attacking() {
        let mut e = Entity::new(EntityId(1), EntityDescriptor::default())
            .with_position(Vec2::new(100.0, 200.0));
        assert_eq!(e.attack_hitbox(), e.hitbox());
        e.attacking = true;
        let attack = e.attack_hitbox();
        assert_eq!(attack.w, e.descriptor.width + e.descriptor.attack_reach);
    }
}
