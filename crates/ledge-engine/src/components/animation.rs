//! Sprite animation strips and counters.
//!
//! Each entity kind carries one strip per animation state (a row in its
//! atlas). Playback is a fractional counter advanced by `rate * dt`; the
//! discrete frame index shown to the renderer is the truncated counter.

use serde::{Deserialize, Serialize};

/// Animation states an entity can be in, selected each frame from its
/// physics and action flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
    Attack,
}

/// One animation strip: a row in the entity's atlas and how to step
/// through its frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationDef {
    /// Row in the atlas grid.
    pub row: u32,
    /// Number of frames in the strip.
    pub frames: u32,
    /// Frames advanced per unit of dt (dt is in target-frame units).
    pub rate: f32,
    /// Whether to wrap at the end or hold the last frame.
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_looping() -> bool {
    true
}

impl AnimationDef {
    pub fn new(row: u32, frames: u32, rate: f32) -> Self {
        Self {
            row,
            frames,
            rate,
            looping: true,
        }
    }

    /// Same strip, but holding the last frame instead of wrapping.
    pub fn once(row: u32, frames: u32, rate: f32) -> Self {
        Self {
            row,
            frames,
            rate,
            looping: false,
        }
    }
}

/// Per-state animation strips for one entity kind. Only `idle` is
/// required; a missing strip falls back along run -> walk -> idle and
/// fall -> jump -> idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSet {
    pub idle: AnimationDef,
    #[serde(default)]
    pub walk: Option<AnimationDef>,
    #[serde(default)]
    pub run: Option<AnimationDef>,
    #[serde(default)]
    pub jump: Option<AnimationDef>,
    #[serde(default)]
    pub fall: Option<AnimationDef>,
    #[serde(default)]
    pub attack: Option<AnimationDef>,
}

impl AnimationSet {
    /// All states share one strip. Handy for tests and placeholder art.
    pub fn uniform(def: AnimationDef) -> Self {
        Self {
            idle: def,
            walk: None,
            run: None,
            jump: None,
            fall: None,
            attack: None,
        }
    }

    /// The strip for a state, applying the documented fallbacks.
    pub fn def(&self, state: AnimationState) -> &AnimationDef {
        let slot = match state {
            AnimationState::Idle => None,
            AnimationState::Walk => self.walk.as_ref(),
            AnimationState::Run => self.run.as_ref().or(self.walk.as_ref()),
            AnimationState::Jump => self.jump.as_ref(),
            AnimationState::Fall => self.fall.as_ref().or(self.jump.as_ref()),
            AnimationState::Attack => self.attack.as_ref(),
        };
        slot.unwrap_or(&self.idle)
    }
}

/// Animation playback state for one entity: the active state plus a
/// fractional frame counter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationCounter {
    pub state: AnimationState,
    /// Fractional position within the strip, in frames.
    pub counter: f32,
}

impl AnimationCounter {
    /// Switch state, restarting the counter only on an actual change.
    pub fn play_if_different(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.counter = 0.0;
        }
    }

    /// Advance the counter by `rate * dt`, wrapping or holding per the def.
    pub fn tick(&mut self, def: &AnimationDef, dt: f32) {
        if def.frames == 0 {
            return;
        }
        self.counter += def.rate * dt;
        let len = def.frames as f32;
        if self.counter >= len {
            if def.looping {
                self.counter %= len;
            } else {
                self.counter = len;
            }
        }
    }

    /// Discrete frame index for rendering, clamped to the strip.
    pub fn frame(&self, def: &AnimationDef) -> u32 {
        if def.frames == 0 {
            return 0;
        }
        (self.counter as u32).min(def.frames - 1)
    }

    /// Whether a non-looping strip has played out.
    pub fn finished(&self, def: &AnimationDef) -> bool {
        !def.looping && self.counter >= def.frames as f32
    }

    /// Back to the load-time state: idle, counter zero.
    pub fn reset(&mut self) {
        self.state = AnimationState::Idle;
        self.counter = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with_walk() -> AnimationSet {
        let mut set = AnimationSet::uniform(AnimationDef::new(0, 4, 0.2));
        set.walk = Some(AnimationDef::new(1, 6, 0.3));
        set
    }

    #[test]
    fn counter_advances_fractionally() {
        let def = AnimationDef::new(0, 4, 0.25);
        let mut anim = AnimationCounter::default();
        anim.tick(&def, 1.0);
        assert!((anim.counter - 0.25).abs() < 1e-6);
        assert_eq!(anim.frame(&def), 0);
        anim.tick(&def, 3.0);
        assert_eq!(anim.frame(&def), 1);
    }

    #[test]
    fn looping_strip_wraps() {
        let def = AnimationDef::new(0, 3, 1.0);
        let mut anim = AnimationCounter::default();
        for _ in 0..4 {
            anim.tick(&def, 1.0);
        }
        assert_eq!(anim.frame(&def), 1);
        assert!(anim.counter < 3.0);
    }

    #[test]
    fn non_looping_strip_holds_last_frame() {
        let def = AnimationDef::once(2, 3, 1.0);
        let mut anim = AnimationCounter::default();
        for _ in 0..10 {
            anim.tick(&def, 1.0);
        }
        assert_eq!(anim.frame(&def), 2);
        assert!(anim.finished(&def));
    }

    #[test]
    fn play_if_different_keeps_progress_on_same_state() {
        let def = AnimationDef::new(0, 4, 1.0);
        let mut anim = AnimationCounter::default();
        anim.tick(&def, 2.0);
        anim.play_if_different(AnimationState::Idle);
        assert!((anim.counter - 2.0).abs() < 1e-6);

        anim.play_if_different(AnimationState::Walk);
        assert_eq!(anim.state, AnimationState::Walk);
        assert_eq!(anim.counter, 0.0);
    }

    #[test]
    fn missing_strips_fall_back() {
        let set = set_with_walk();
        assert_eq!(set.def(AnimationState::Walk).row, 1);
        // Run falls back to walk, fall to jump to idle.
        assert_eq!(set.def(AnimationState::Run).row, 1);
        assert_eq!(set.def(AnimationState::Fall).row, 0);
        assert_eq!(set.def(AnimationState::Attack).row, 0);
    }

    #[test]
    fn reset_restores_idle() {
        let mut anim = AnimationCounter::default();
        anim.play_if_different(AnimationState::Run);
        anim.counter = 3.5;
        anim.reset();
        assert_eq!(anim.state, AnimationState::Idle);
        assert_eq!(anim.counter, 0.0);
    }
}
