//! Levels: named stacks of tile layers plus the physical constants
//! entities inherit when they spawn in.

use thiserror::Error;

use crate::api::types::AtlasId;
use crate::assets::manifest::LevelManifest;
use crate::components::hitbox::Rect;
use crate::components::tilemap::TileLayer;

/// Anything that can go wrong turning manifest plus blueprints into a
/// playable level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile index {index} at row {row} col {col} exceeds atlas capacity {capacity}")]
    TileIndexOutOfRange {
        row: usize,
        col: usize,
        index: u32,
        capacity: u32,
    },
    #[error("unreadable cell {value:?} at row {row} col {col}")]
    BadCell {
        row: usize,
        col: usize,
        value: String,
    },
    #[error("layer {layer} references unknown atlas {name:?}")]
    UnknownAtlas { layer: usize, name: String },
    #[error("entity {entity:?} references unknown atlas {name:?}")]
    UnknownEntityAtlas { entity: String, name: String },
    #[error("atlas {name:?} has no cells ({cols}x{rows})")]
    EmptyAtlas { name: String, cols: u32, rows: u32 },
    #[error("level has no layers")]
    NoLayers,
    #[error("manifest lists {layers} layers but {blueprints} blueprints were supplied")]
    LayerCountMismatch { layers: usize, blueprints: usize },
    #[error("tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),
    #[error("gravity must be positive and finite, got {0}")]
    InvalidGravity(f32),
    #[error("friction must be non-positive and finite, got {0}")]
    InvalidFriction(f32),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed level manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Physical constants shared by everything in a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPhysics {
    /// Downward acceleration, in pixels per frame squared.
    pub gravity: f32,
    /// Non-positive drag coefficient applied to horizontal motion.
    pub friction: f32,
}

impl LevelPhysics {
    fn validated(self) -> Result<Self, LevelError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(LevelError::InvalidGravity(self.gravity));
        }
        if !(self.friction.is_finite() && self.friction <= 0.0) {
            return Err(LevelError::InvalidFriction(self.friction));
        }
        Ok(self)
    }
}

/// A playable level: layers in paint order, back to front. The last
/// layer is the collision layer; earlier ones are decorative.
#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    pub tile_size: f32,
    pub physics: LevelPhysics,
    /// Whether the level wants its background image drawn.
    pub background: bool,
    layers: Vec<TileLayer>,
}

impl Level {
    /// Assemble a level from its manifest and one blueprint grid per
    /// layer, in the manifest's layer order.
    pub fn build(manifest: &LevelManifest, blueprints: &[Vec<Vec<i32>>]) -> Result<Self, LevelError> {
        if manifest.layers.is_empty() {
            return Err(LevelError::NoLayers);
        }
        if manifest.layers.len() != blueprints.len() {
            return Err(LevelError::LayerCountMismatch {
                layers: manifest.layers.len(),
                blueprints: blueprints.len(),
            });
        }
        if !(manifest.tile_size.is_finite() && manifest.tile_size > 0.0) {
            return Err(LevelError::InvalidTileSize(manifest.tile_size));
        }
        let physics = LevelPhysics {
            gravity: manifest.physics.gravity,
            friction: manifest.physics.friction,
        }
        .validated()?;

        let mut layers = Vec::with_capacity(manifest.layers.len());
        for (i, (descriptor, blueprint)) in
            manifest.layers.iter().zip(blueprints).enumerate()
        {
            let position = manifest
                .atlases
                .iter()
                .position(|a| a.name == descriptor.atlas)
                .ok_or_else(|| LevelError::UnknownAtlas {
                    layer: i,
                    name: descriptor.atlas.clone(),
                })?;
            let atlas = &manifest.atlases[position];
            if atlas.cols == 0 || atlas.rows == 0 {
                return Err(LevelError::EmptyAtlas {
                    name: atlas.name.clone(),
                    cols: atlas.cols,
                    rows: atlas.rows,
                });
            }
            layers.push(TileLayer::from_blueprint(
                blueprint,
                manifest.tile_size,
                AtlasId(position as u32),
                atlas.cols,
                atlas.rows,
            )?);
        }

        let level = Self {
            name: manifest.name.clone(),
            tile_size: manifest.tile_size,
            physics,
            background: manifest.background.is_some(),
            layers,
        };
        log::info!(
            "level {:?} built: {} layers, {} solid tiles",
            level.name,
            level.layers.len(),
            level.collision_rects().len()
        );
        Ok(level)
    }

    /// Layers in paint order.
    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// Solid rects of the collision layer.
    pub fn collision_rects(&self) -> &[Rect] {
        match self.layers.last() {
            Some(layer) => layer.solid_rects(),
            None => &[],
        }
    }

    /// Level width in world units, from the collision layer.
    pub fn pixel_width(&self) -> f32 {
        self.layers.last().map_or(0.0, TileLayer::pixel_width)
    }

    /// Level height in world units, from the collision layer.
    pub fn pixel_height(&self) -> f32 {
        self.layers.last().map_or(0.0, TileLayer::pixel_height)
    }
}
