/// Frame-unit accumulator.
/// Converts variable wall-clock deltas into whole steps of dt = 1.0,
/// where 1.0 is one frame at the target rate. Physics constants are
/// tuned in these units, so a step at the target rate always sees
/// dt = 1.0 regardless of how the host paces its loop.
pub struct FrameClock {
    /// Target frames per second; the scale between seconds and frame units.
    target_fps: f32,
    /// Accumulated time, in frame units.
    accumulator: f32,
    /// Most steps a single advance may return.
    max_steps: u32,
}

impl FrameClock {
    pub fn new(target_fps: f32) -> Self {
        Self {
            target_fps,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    /// Change the per-advance step cap (minimum 1).
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add elapsed wall-clock time. Returns the number of whole frame
    /// steps to run, each with dt = 1.0.
    pub fn advance(&mut self, elapsed_seconds: f32) -> u32 {
        self.accumulator += elapsed_seconds * self.target_fps;
        // Cap to prevent spiral of death after a long stall
        self.accumulator = self.accumulator.min(self.max_steps as f32);
        let steps = self.accumulator as u32;
        self.accumulator -= steps as f32;
        steps
    }

    /// Leftover fraction of a frame (0.0 to 1.0), for interpolated rendering.
    pub fn alpha(&self) -> f32 {
        self.accumulator
    }

    /// The target frame rate this clock normalizes to.
    pub fn target_fps(&self) -> f32 {
        self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_at_target_rate() {
        let mut clock = FrameClock::new(60.0);
        let steps = clock.advance(1.0 / 60.0);
        assert_eq!(steps, 1);
        assert!(clock.alpha() < 1e-4);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = FrameClock::new(60.0);
        let steps = clock.advance(0.008); // under half a frame
        assert_eq!(steps, 0);
        let steps = clock.advance(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_after_a_stall() {
        let mut clock = FrameClock::new(60.0);
        let steps = clock.advance(1.0); // 60 frames worth, but capped at 10
        assert_eq!(steps, 10);
    }

    #[test]
    fn alpha_is_between_zero_and_one() {
        let mut clock = FrameClock::new(60.0);
        clock.advance(0.008);
        let a = clock.alpha();
        assert!(a >= 0.0 && a < 1.0, "alpha was {}", a);
    }
}
