//! Tile layers built from level blueprints.
//!
//! A blueprint is a grid of atlas indices (negative means empty). Each
//! layer resolves those indices into atlas cells up front and bakes a
//! solid rect per placed tile, so the collision pass never touches the
//! grid. Rendering culls to the camera viewport.

use crate::api::types::AtlasId;
use crate::components::hitbox::Rect;
use crate::core::level::LevelError;
use crate::renderer::camera::Camera;
use crate::renderer::frame::TileInstance;

/// A single placed tile: the atlas cell it draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Column in the atlas grid.
    pub col: u32,
    /// Row in the atlas grid.
    pub row: u32,
}

/// One layer of the level grid.
///
/// Tiles are stored in row-major order: index = row * width + col.
/// Every placed tile is solid; decorative layers simply never reach
/// the collision pass.
#[derive(Debug, Clone)]
pub struct TileLayer {
    /// Width of the layer in tiles.
    pub width: u32,
    /// Height of the layer in tiles.
    pub height: u32,
    /// Size of each tile in world units.
    pub tile_size: f32,
    /// Atlas containing the tile graphics.
    pub atlas: AtlasId,
    tiles: Vec<Option<Tile>>,
    solids: Vec<Rect>,
}

impl TileLayer {
    /// Build a layer from a blueprint grid of atlas indices.
    ///
    /// Cell values index the atlas left-to-right, top-to-bottom;
    /// negative values mean no tile. All rows must match the first
    /// row's width.
    pub fn from_blueprint(
        blueprint: &[Vec<i32>],
        tile_size: f32,
        atlas: AtlasId,
        atlas_cols: u32,
        atlas_rows: u32,
    ) -> Result<Self, LevelError> {
        let height = blueprint.len() as u32;
        let width = blueprint.first().map_or(0, |r| r.len()) as u32;
        let capacity = atlas_cols * atlas_rows;

        let mut tiles = Vec::with_capacity((width * height) as usize);
        let mut solids = Vec::new();

        for (row_idx, row) in blueprint.iter().enumerate() {
            if row.len() != width as usize {
                return Err(LevelError::RaggedRow {
                    row: row_idx,
                    expected: width as usize,
                    found: row.len(),
                });
            }
            for (col_idx, &cell) in row.iter().enumerate() {
                if cell < 0 {
                    tiles.push(None);
                    continue;
                }
                let index = cell as u32;
                if index >= capacity {
                    return Err(LevelError::TileIndexOutOfRange {
                        row: row_idx,
                        col: col_idx,
                        index,
                        capacity,
                    });
                }
                tiles.push(Some(Tile {
                    col: index % atlas_cols,
                    row: index / atlas_cols,
                }));
                solids.push(Rect::new(
                    col_idx as f32 * tile_size,
                    row_idx as f32 * tile_size,
                    tile_size,
                    tile_size,
                ));
            }
        }

        Ok(Self {
            width,
            height,
            tile_size,
            atlas,
            tiles,
            solids,
        })
    }

    /// Get the tile at grid position (col, row).
    pub fn get(&self, col: u32, row: u32) -> Option<&Tile> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.tiles[(row * self.width + col) as usize].as_ref()
    }

    /// World-space rects of every placed tile.
    pub fn solid_rects(&self) -> &[Rect] {
        &self.solids
    }

    /// Count of placed tiles.
    pub fn tile_count(&self) -> usize {
        self.solids.len()
    }

    /// Layer width in world units.
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * self.tile_size
    }

    /// Layer height in world units.
    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * self.tile_size
    }

    /// Append draw instances for the tiles the camera can see.
    pub fn push_visible_tiles(&self, camera: &Camera, out: &mut Vec<TileInstance>) {
        let offset = camera.offset();

        // Visible tile range, clamped to the grid
        let min_col = ((offset.x as f32 / self.tile_size).floor() as i32).max(0) as u32;
        let min_row = ((offset.y as f32 / self.tile_size).floor() as i32).max(0) as u32;
        let max_col =
            (((offset.x as f32 + camera.screen_width) / self.tile_size).ceil() as i32).max(0)
                as u32;
        let max_row =
            (((offset.y as f32 + camera.screen_height) / self.tile_size).ceil() as i32).max(0)
                as u32;
        let max_col = max_col.min(self.width);
        let max_row = max_row.min(self.height);

        for row in min_row..max_row {
            for col in min_col..max_col {
                if let Some(tile) = self.get(col, row) {
                    let world = Rect::new(
                        col as f32 * self.tile_size,
                        row as f32 * self.tile_size,
                        self.tile_size,
                        self.tile_size,
                    );
                    out.push(TileInstance {
                        rect: camera.to_screen(world),
                        atlas: self.atlas,
                        col: tile.col,
                        row: tile.row,
                    });
                }
            }
        }
    }
}
