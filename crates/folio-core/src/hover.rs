//! Pointer-proximity effects for buttons and cards.

use crate::constants::*;
use crate::transform::Transform;
use glam::DVec2;

/// Element box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Magnetic pull toward the pointer.
///
/// Returns `Some(shift)` while the pointer is within range of the element's
/// centre and `None` when it is out of range (the caller resets the element).
pub fn magnetic_shift(rect: &Rect, pointer: DVec2) -> Option<DVec2> {
    if rect.is_empty() {
        return None;
    }
    let d = pointer - rect.center();
    let dist = d.length();
    if dist >= MAGNETIC_RANGE {
        return None;
    }
    let strength = 1.0 - dist / MAGNETIC_RANGE;
    let shift = (d * MAGNETIC_GAIN * strength).clamp(
        DVec2::splat(-MAGNETIC_MAX_SHIFT),
        DVec2::splat(MAGNETIC_MAX_SHIFT),
    );
    Some(shift)
}

/// Card tilt and the matching highlight centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Shine gradient centre in percent of the card box.
    pub shine: DVec2,
}

impl Tilt {
    pub fn for_pointer(rect: &Rect, pointer: DVec2) -> Option<Self> {
        if rect.is_empty() {
            return None;
        }
        let x = pointer.x - rect.left;
        let y = pointer.y - rect.top;
        let px = (x / rect.width) * 2.0 - 1.0;
        let py = (y / rect.height) * 2.0 - 1.0;
        Some(Self {
            rotate_x: -py * TILT_MAX_DEG,
            rotate_y: px * TILT_MAX_DEG,
            shine: DVec2::new(100.0 - x / rect.width * 100.0, 100.0 - y / rect.height * 100.0),
        })
    }

    pub fn transform(&self) -> Transform {
        Transform::Tilt {
            rotate_x: self.rotate_x,
            rotate_y: self.rotate_y,
            perspective: TILT_PERSPECTIVE_PX,
        }
    }

    pub fn shine_background(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, rgba(255,255,255,0.22), \
             rgba(255,255,255,0.10), rgba(255,255,255,0) 60%)",
            self.shine.x, self.shine.y
        )
    }
}

#[inline]
pub fn card_lift(hovered: bool) -> Transform {
    if hovered {
        Transform::Lift {
            y: CARD_LIFT_PX,
            scale: CARD_LIFT_SCALE,
        }
    } else {
        Transform::Lift { y: 0.0, scale: 1.0 }
    }
}

#[inline]
pub fn focus_scale(focused: bool) -> Transform {
    Transform::Scale(if focused { FOCUS_SCALE } else { 1.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect {
        left: 100.0,
        top: 100.0,
        width: 40.0,
        height: 20.0,
    };

    #[test]
    fn magnetic_is_zero_at_centre_and_none_out_of_range() {
        assert_eq!(magnetic_shift(&BOX, DVec2::new(120.0, 110.0)), Some(DVec2::ZERO));
        assert_eq!(magnetic_shift(&BOX, DVec2::new(200.0, 110.0)), None);
    }

    #[test]
    fn magnetic_pull_points_toward_pointer_and_is_capped() {
        let s = magnetic_shift(&BOX, DVec2::new(140.0, 110.0)).unwrap();
        // d = 20, strength = 0.6, 20 * 0.22 * 0.6
        assert!((s.x - 2.64).abs() < 1e-9);
        assert_eq!(s.y, 0.0);
        assert!(s.x <= MAGNETIC_MAX_SHIFT);
    }

    #[test]
    fn tilt_at_corner_hits_max_angle() {
        let t = Tilt::for_pointer(&BOX, DVec2::new(140.0, 100.0)).unwrap();
        assert!((t.rotate_y - TILT_MAX_DEG).abs() < 1e-9);
        assert!((t.rotate_x - TILT_MAX_DEG).abs() < 1e-9);
        assert_eq!(t.shine, DVec2::new(0.0, 100.0));
    }
}
