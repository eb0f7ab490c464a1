//! Frame assembly: world state into the host's draw lists.

use crate::api::types::Facing;
use crate::core::level::Level;
use crate::core::scene::Scene;
use crate::renderer::camera::Camera;
use crate::renderer::frame::{FrameView, SpriteInstance};

/// Build the draw lists for one frame: culled tiles from every layer
/// in paint order, then a sprite per entity the camera can see.
pub fn build_frame_view(scene: &Scene, level: &Level, camera: &Camera) -> FrameView {
    let mut view = FrameView {
        background: level.background,
        camera_offset: camera.offset(),
        ..Default::default()
    };

    for layer in level.layers() {
        layer.push_visible_tiles(camera, &mut view.tiles);
    }

    for entity in scene.iter() {
        let hitbox = entity.hitbox();
        if !camera.sees(&hitbox) {
            continue;
        }
        let def = entity.descriptor.animations.def(entity.animation.state);
        view.sprites.push(SpriteInstance {
            rect: camera.to_screen(hitbox),
            atlas: entity.descriptor.atlas,
            row: def.row,
            frame: entity.animation.frame(def),
            flip_x: entity.facing == Facing::Left,
        });
    }

    view
}
