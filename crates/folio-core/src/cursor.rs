use crate::constants::*;
use glam::Vec2;

/// Who moves the smoothed cursor toward its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Smoothing {
    /// An external spring tween owns convergence; the frame only reads it back.
    Tween,
    /// Exponential smoothing by [`CURSOR_SMOOTHING`] per frame.
    Fallback,
}

/// Pointer state owned by the effects engine.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    /// Raw pointer position from the latest move event.
    pub target: Vec2,
    /// Target as seen by the previous frame, for speed measurement.
    pub prev_target: Vec2,
    /// Smoothed position the cursor and trail are drawn at.
    pub pos: Vec2,
    pub scale: f32,
    pub hover: bool,
}

impl PointerState {
    /// Start centred in the viewport.
    pub fn centered(viewport: Vec2) -> Self {
        let c = viewport * 0.5;
        Self {
            target: c,
            prev_target: c,
            pos: c,
            scale: CURSOR_IDLE_SCALE,
            hover: false,
        }
    }

    #[inline]
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    #[inline]
    pub fn target_scale(&self) -> f32 {
        hover_scale(self.hover)
    }

    /// Advance one frame. Returns the pointer speed in px/frame.
    pub fn frame(&mut self, smoothing: Smoothing) -> f32 {
        if smoothing == Smoothing::Fallback {
            self.pos += (self.target - self.pos) * CURSOR_SMOOTHING;
            self.scale += (self.target_scale() - self.scale) * CURSOR_SMOOTHING;
        }
        let speed = self.target.distance(self.prev_target);
        self.prev_target = self.target;
        speed
    }
}

#[inline]
pub fn hover_scale(hover: bool) -> f32 {
    if hover {
        CURSOR_HOVER_SCALE
    } else {
        CURSOR_IDLE_SCALE
    }
}

/// Pointer capability and motion preference read from media queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectsGate {
    pub reduced_motion: bool,
    pub fine_pointer: bool,
}

impl EffectsGate {
    /// The engine runs only for fine pointers without a reduced-motion request.
    #[inline]
    pub fn allows(&self) -> bool {
        !self.reduced_motion && self.fine_pointer
    }

    /// Run `setup` only when the engine may start. Nothing in `setup` runs
    /// under reduced motion, a coarse pointer or `cursor: false`.
    pub fn install_with<T>(&self, cursor: bool, setup: impl FnOnce() -> T) -> Option<T> {
        (cursor && self.allows()).then(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_converges_toward_target() {
        let mut s = PointerState::centered(Vec2::new(200.0, 100.0));
        s.on_move(200.0, 50.0);
        let speed = s.frame(Smoothing::Fallback);
        assert!((speed - 100.0).abs() < 1e-4);
        assert!((s.pos.x - (100.0 + 100.0 * 0.18)).abs() < 1e-4);
        for _ in 0..200 {
            s.frame(Smoothing::Fallback);
        }
        assert!(s.pos.distance(s.target) < 1e-3);
    }

    #[test]
    fn speed_is_zero_when_pointer_rests() {
        let mut s = PointerState::centered(Vec2::new(10.0, 10.0));
        s.on_move(3.0, 4.0);
        assert!((s.frame(Smoothing::Tween) - (2.0f32 * 2.0 + 1.0).sqrt()).abs() < 1e-5);
        assert_eq!(s.frame(Smoothing::Tween), 0.0);
    }

    #[test]
    fn gate_requires_fine_pointer_and_motion() {
        assert!(EffectsGate { reduced_motion: false, fine_pointer: true }.allows());
        assert!(!EffectsGate { reduced_motion: true, fine_pointer: true }.allows());
        assert!(!EffectsGate { reduced_motion: false, fine_pointer: false }.allows());
    }

    #[test]
    fn setup_never_runs_when_gated_off() {
        let mut calls = 0;
        let open = EffectsGate { reduced_motion: false, fine_pointer: true };
        let reduced = EffectsGate { reduced_motion: true, fine_pointer: true };
        let coarse = EffectsGate { reduced_motion: false, fine_pointer: false };

        assert_eq!(reduced.install_with(true, || calls += 1), None);
        assert_eq!(coarse.install_with(true, || calls += 1), None);
        assert_eq!(open.install_with(false, || calls += 1), None);
        assert_eq!(calls, 0);

        assert_eq!(open.install_with(true, || calls += 1), Some(()));
        assert_eq!(calls, 1);
    }
}
