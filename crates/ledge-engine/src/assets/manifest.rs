use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::components::animation::AnimationSet;
use crate::components::descriptor::ControlPolicy;

/// Level manifest describing atlases, tile layers and entity kinds.
/// Loaded from a JSON file at runtime; the layer mappings point at CSV
/// blueprint files next to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelManifest {
    /// Human-readable level name.
    pub name: String,
    /// Tile edge length in world units.
    pub tile_size: f32,
    /// Level-wide physical constants.
    pub physics: PhysicsDescriptor,
    /// Optional background image path, drawn behind all layers.
    #[serde(default)]
    pub background: Option<String>,
    /// List of texture atlases. Layer and entity entries reference
    /// these by name; their index here becomes the runtime `AtlasId`.
    pub atlases: Vec<AtlasDescriptor>,
    /// Tile layers in paint order; the last one is the collision layer.
    pub layers: Vec<LayerDescriptor>,
    /// Entity kinds this level can spawn, by name.
    #[serde(default)]
    pub entities: HashMap<String, EntityEntry>,
}

/// Level-wide physics constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsDescriptor {
    /// Downward acceleration, pixels per frame squared.
    pub gravity: f32,
    /// Non-positive drag coefficient.
    pub friction: f32,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "dungeon_tiles").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file (e.g., "dungeon_tiles.png").
    pub path: String,
}

/// One tile layer: which atlas it draws from and the CSV blueprint
/// holding its grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDescriptor {
    /// Atlas name, resolved against `LevelManifest::atlases`.
    pub atlas: String,
    /// Relative path to the CSV blueprint.
    pub mapping: String,
}

/// An entity kind as written in a manifest. Size, atlas and animations
/// are required; every tuning number is optional and falls back to the
/// engine default when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityEntry {
    /// Atlas name, resolved against `LevelManifest::atlases`.
    pub atlas: String,
    /// Hitbox width in world units.
    pub width: f32,
    /// Hitbox height in world units.
    pub height: f32,
    #[serde(default)]
    pub mass: Option<f32>,
    #[serde(default)]
    pub slipperiness: Option<f32>,
    #[serde(default)]
    pub walk_accel: Option<f32>,
    #[serde(default)]
    pub run_boost: Option<f32>,
    #[serde(default)]
    pub max_x_velocity: Option<f32>,
    #[serde(default)]
    pub max_y_velocity: Option<f32>,
    #[serde(default)]
    pub jump_force: Option<f32>,
    #[serde(default)]
    pub jump_kick: Option<f32>,
    #[serde(default)]
    pub jump_control: Option<f32>,
    #[serde(default)]
    pub run_jump_scale: Option<f32>,
    #[serde(default)]
    pub attack_reach: Option<f32>,
    #[serde(default)]
    pub attack_frames: Option<f32>,
    /// Per-state animation strips.
    pub animations: AnimationSet,
    /// Who drives this entity.
    #[serde(default)]
    pub control: ControlPolicy,
}

impl LevelManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
