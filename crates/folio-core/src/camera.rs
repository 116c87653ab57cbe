use crate::constants::*;
use glam::Vec2;

/// Scene camera that leans toward the pointer.
///
/// The raw normalized pointer is smoothed (by an external tween when one is
/// available, otherwise by a per-frame lerp) and mapped to a yaw/pitch pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraRig {
    pub raw: Vec2,
    pub smooth: Vec2,
}

/// Rotation written into the scene camera, radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraRotation {
    pub x: f32,
    pub y: f32,
}

impl CameraRig {
    #[inline]
    pub fn on_move(&mut self, normalized: Vec2) {
        self.raw = normalized;
    }

    /// Fallback smoothing step; skipped when a tween drives `smooth`.
    #[inline]
    pub fn smooth_step(&mut self) {
        self.smooth += (self.raw - self.smooth) * CAMERA_SMOOTHING;
    }

    #[inline]
    pub fn rotation(&self) -> CameraRotation {
        CameraRotation {
            x: -self.smooth.y * CAMERA_PITCH_GAIN,
            y: self.smooth.x * CAMERA_YAW_GAIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_right_and_up_yaws_right_and_pitches_up() {
        let mut rig = CameraRig::default();
        rig.on_move(Vec2::new(1.0, -1.0));
        for _ in 0..300 {
            rig.smooth_step();
        }
        let r = rig.rotation();
        assert!((r.y - CAMERA_YAW_GAIN).abs() < 1e-3);
        assert!((r.x - CAMERA_PITCH_GAIN).abs() < 1e-3);
    }
}
