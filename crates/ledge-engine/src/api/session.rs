use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::descriptor::EntityDescriptor;
use crate::components::entity::{BindError, Entity};
use crate::core::level::Level;
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::input::bindings::KeyBindings;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::Camera;
use crate::renderer::frame::FrameView;
use crate::systems::control::Button;
use crate::systems::{animation, collision, control, kinematics, render};

/// Configuration for a play session, provided by the host.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Viewport width in pixels.
    pub screen_width: f32,
    /// Viewport height in pixels.
    pub screen_height: f32,
    /// Frame rate the physics constants are tuned for (default: 60).
    pub target_fps: f32,
    /// World-space Y below which an entity is sent back to its spawn.
    /// None disables the check.
    pub kill_plane: Option<f32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 448.0,
            target_fps: 60.0,
            kill_plane: None,
        }
    }
}

/// A running level: the scene, camera and input plumbing around it.
///
/// The host feeds events with `push_input`, calls `advance` with wall
/// clock time (or `step` directly for lockstep hosts), and draws
/// whatever `frame_view` returns.
pub struct Session {
    pub scene: Scene,
    /// Raw key code to button map; hosts may rebind at any time.
    pub bindings: KeyBindings,
    level: Level,
    camera: Camera,
    config: SessionConfig,
    input: InputQueue,
    clock: FrameClock,
    follow_target: Option<EntityId>,
    next_id: u32,
    quit: bool,
}

impl Session {
    pub fn new(level: Level, config: SessionConfig) -> Self {
        log::info!(
            "session started: level {:?}, viewport {}x{}",
            level.name,
            config.screen_width,
            config.screen_height
        );
        Self {
            scene: Scene::new(),
            bindings: KeyBindings::default(),
            camera: Camera::new(config.screen_width, config.screen_height),
            clock: FrameClock::new(config.target_fps),
            level,
            config,
            input: InputQueue::new(),
            follow_target: None,
            next_id: 1,
            quit: false,
        }
    }

    /// Spawn an entity of the given kind, bound to this level's
    /// physics. Returns its id for later lookups.
    pub fn spawn(
        &mut self,
        descriptor: EntityDescriptor,
        position: Vec2,
    ) -> Result<EntityId, BindError> {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let mut entity = Entity::new(id, descriptor).with_position(position);
        entity.bind_to_level(self.level.physics.gravity, self.level.physics.friction)?;
        self.scene.spawn(entity);
        Ok(id)
    }

    /// Keep the camera centered on this entity from the next step on.
    pub fn follow(&mut self, id: EntityId) {
        self.follow_target = Some(id);
    }

    /// Queue an input event for the next step.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Whether a quit was requested via input. Latches once set.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Feed wall-clock time and run whole frame steps as they come due.
    /// Returns the number of steps executed.
    pub fn advance(&mut self, elapsed_seconds: f32) -> u32 {
        let steps = self.clock.advance(elapsed_seconds);
        for _ in 0..steps {
            self.step(1.0);
        }
        steps
    }

    /// Run one simulation step. `dt` is in frame units; hosts that pace
    /// themselves call this with 1.0, everyone else goes through
    /// `advance`.
    pub fn step(&mut self, dt: f32) {
        self.drain_input();

        // Physics, one entity at a time. Each axis integrates and then
        // resolves against the collision layer before the other axis
        // moves, so X penetration never leaks into the Y pass.
        let solids = self.level.collision_rects();
        for entity in self.scene.iter_mut() {
            kinematics::integrate_horizontal(entity, dt);
            collision::resolve_horizontal(entity, solids);
            kinematics::integrate_vertical(entity, dt);
            collision::resolve_vertical(entity, solids);
            control::tick(entity, dt);
        }

        collision::resolve_entity_contacts(&mut self.scene);

        if let Some(kill_y) = self.config.kill_plane {
            for entity in self.scene.iter_mut() {
                if entity.position.y > kill_y {
                    log::debug!("entity {:?} fell out of the level, resetting", entity.tag);
                    entity.reset();
                }
            }
        }

        if let Some(id) = self.follow_target {
            if let Some(target) = self.scene.get(id) {
                let position = target.position;
                self.camera.follow(position);
            }
        }

        animation::tick_animations(&mut self.scene, dt);
    }

    /// Build the draw lists for the current state.
    pub fn frame_view(&self) -> FrameView {
        render::build_frame_view(&self.scene, &self.level, &self.camera)
    }

    fn drain_input(&mut self) {
        for event in self.input.drain() {
            match event {
                InputEvent::Quit => self.quit = true,
                InputEvent::KeyDown { key_code } => {
                    if let Some(button) = self.bindings.lookup(key_code) {
                        if button == Button::Quit {
                            self.quit = true;
                            continue;
                        }
                        for entity in self.scene.iter_mut() {
                            if entity.is_controllable() {
                                control::press(entity, button);
                            }
                        }
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    if let Some(button) = self.bindings.lookup(key_code) {
                        if button == Button::Quit {
                            continue;
                        }
                        for entity in self.scene.iter_mut() {
                            if entity.is_controllable() {
                                control::release(entity, button);
                            }
                        }
                    }
                }
            }
        }
    }
}
