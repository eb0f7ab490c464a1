pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::session::{Session, SessionConfig};
pub use api::types::{AtlasId, EntityId, Facing};
pub use assets::loader::{load_level, parse_blueprint};
pub use assets::manifest::{
    AtlasDescriptor, EntityEntry, LayerDescriptor, LevelManifest, PhysicsDescriptor,
};
pub use assets::registry::EntityRegistry;
pub use components::animation::{AnimationCounter, AnimationDef, AnimationSet, AnimationState};
pub use components::descriptor::{ControlPolicy, EntityDescriptor};
pub use components::entity::{BindError, Entity, LevelBinding};
pub use components::hitbox::{attack_hitbox, body_hitbox, Rect};
pub use components::tilemap::{Tile, TileLayer};
pub use core::level::{Level, LevelError, LevelPhysics};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::bindings::KeyBindings;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::Camera;
pub use renderer::frame::{FrameView, SpriteInstance, TileInstance};
pub use systems::animation::tick_animations;
pub use systems::collision::GROUND_PROBE;
pub use systems::control::Button;
pub use systems::kinematics::DEAD_ZONE;
