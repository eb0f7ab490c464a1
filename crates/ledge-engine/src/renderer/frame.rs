//! Host-facing draw lists. The engine stays headless: each frame it
//! builds a `FrameView` of screen-space rects plus atlas cells, and the
//! host (canvas, GPU quad batcher, terminal) draws them however it likes.

use glam::IVec2;

use crate::api::types::AtlasId;
use crate::components::hitbox::Rect;

/// One entity sprite to draw: a screen rect and the atlas cell holding
/// the current animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    /// Screen-space rect, camera already applied.
    pub rect: Rect,
    pub atlas: AtlasId,
    /// Atlas row of the active animation strip.
    pub row: u32,
    /// Frame index within the strip (the atlas column).
    pub frame: u32,
    /// Mirror horizontally (entity faces left).
    pub flip_x: bool,
}

/// One tile to draw: a screen rect and its atlas cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileInstance {
    /// Screen-space rect, camera already applied.
    pub rect: Rect,
    pub atlas: AtlasId,
    pub col: u32,
    pub row: u32,
}

/// Everything the host needs to draw one frame, in paint order:
/// background first, then tiles layer by layer, then sprites.
#[derive(Debug, Clone, Default)]
pub struct FrameView {
    /// Whether the level asks for its background image behind the tiles.
    pub background: bool,
    pub tiles: Vec<TileInstance>,
    pub sprites: Vec<SpriteInstance>,
    /// Camera offset this view was built with, for parallax effects.
    pub camera_offset: IVec2,
}
