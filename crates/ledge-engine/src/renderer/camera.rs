use glam::{IVec2, Vec2};

use crate::components::hitbox::Rect;

/// Scrolling camera expressed as a world-space offset.
///
/// Screen space is Y-down with the origin at the viewport's top-left;
/// a world rect lands on screen at `world - offset`. `follow` closes
/// the full gap to the target every update, keeping it centered. The
/// offset is tracked in floats and truncated to whole pixels for
/// rendering, so sub-pixel motion never makes tiles and sprites round
/// apart.
pub struct Camera {
    /// Viewport width in pixels.
    pub screen_width: f32,
    /// Viewport height in pixels.
    pub screen_height: f32,
    offset_exact: Vec2,
    offset: IVec2,
}

impl Camera {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            offset_exact: Vec2::ZERO,
            offset: IVec2::ZERO,
        }
    }

    /// Center the viewport on a world-space point.
    pub fn follow(&mut self, target: Vec2) {
        self.offset_exact.x += target.x - self.offset_exact.x - self.screen_width / 2.0;
        self.offset_exact.y += target.y - self.offset_exact.y - self.screen_height / 2.0;
        self.offset = self.offset_exact.as_ivec2();
    }

    /// The whole-pixel offset used for rendering.
    pub fn offset(&self) -> IVec2 {
        self.offset
    }

    /// Translate a world rect into screen space.
    pub fn to_screen(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x - self.offset.x as f32,
            rect.y - self.offset.y as f32,
            rect.w,
            rect.h,
        )
    }

    /// Whether any part of a world rect falls inside the viewport.
    pub fn sees(&self, rect: &Rect) -> bool {
        let left = self.offset.x as f32;
        let top = self.offset.y as f32;
        rect.right() >= left
            && rect.x <= left + self.screen_width
            && rect.bottom() >= top
            && rect.y <= top + self.screen_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_centers_the_target() {
        let mut cam = Camera::new(800.0, 448.0);
        cam.follow(Vec2::new(464.0, 288.0));
        assert_eq!(cam.offset(), IVec2::new(64, 64));

        // Screen position of the target is the viewport center.
        let screen = cam.to_screen(Rect::new(464.0, 288.0, 0.0, 0.0));
        assert_eq!(screen.x, 400.0);
        assert_eq!(screen.y, 224.0);
    }

    #[test]
    fn offset_truncates_toward_zero() {
        let mut cam = Camera::new(100.0, 100.0);
        cam.follow(Vec2::new(10.4, 20.6));
        // Exact offset is (-39.6, -29.4); int() drops the fraction.
        assert_eq!(cam.offset(), IVec2::new(-39, -29));
    }

    #[test]
    fn sees_uses_the_viewport_rect() {
        let mut cam = Camera::new(100.0, 100.0);
        cam.follow(Vec2::new(50.0, 50.0)); // offset (0, 0)

        assert!(cam.sees(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(cam.sees(&Rect::new(-10.0, -10.0, 20.0, 20.0))); // straddles corner
        assert!(!cam.sees(&Rect::new(150.0, 10.0, 20.0, 20.0)));
        assert!(!cam.sees(&Rect::new(10.0, -50.0, 20.0, 20.0)));
    }
}
