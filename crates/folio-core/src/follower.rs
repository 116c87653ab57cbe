//! Spring-damped followers that drag scene objects after the pointer.
//!
//! Each follower accelerates toward its target with a small gain, loses a
//! fixed fraction of its velocity to friction every frame and bounces softly
//! off the edges of a symmetric range. Positions never leave the range.

use crate::constants::*;
use glam::Vec2;

/// Per-follower responsiveness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerParams {
    /// Acceleration gain toward the target, per frame.
    pub follow: f32,
    /// Velocity multiplier applied every frame (< 1).
    pub friction: f32,
    /// Scale applied when writing the position into the scene object.
    pub output_scale: f32,
}

impl FollowerParams {
    pub const STARS: Self = Self {
        follow: STARS_FOLLOW,
        friction: STARS_FRICTION,
        output_scale: STARS_OUTPUT_SCALE,
    };

    pub const TORNADO: Self = Self {
        follow: TORNADO_FOLLOW,
        friction: TORNADO_FRICTION,
        output_scale: TORNADO_OUTPUT_SCALE,
    };
}

/// Symmetric half-extents in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowRange {
    pub x: f32,
    pub y: f32,
}

impl FollowRange {
    /// Range derived from the viewport size, never smaller than the floor.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        Self {
            x: FOLLOW_RANGE_X_MIN.max(width / FOLLOW_RANGE_X_DIVISOR),
            y: FOLLOW_RANGE_Y_MIN.max(height / FOLLOW_RANGE_Y_DIVISOR),
        }
    }

    /// Map a normalized pointer (-1..1, y down) to a scene target (y up).
    #[inline]
    pub fn target_for(&self, normalized: Vec2) -> Vec2 {
        Vec2::new(normalized.x * self.x, -normalized.y * self.y)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x.abs() <= self.x && p.y.abs() <= self.y
    }
}

/// Normalize a viewport coordinate to -1..1 on each axis.
#[inline]
pub fn normalize_pointer(pos: Vec2, viewport: Vec2) -> Vec2 {
    let w = viewport.x.max(1.0);
    let h = viewport.y.max(1.0);
    Vec2::new(pos.x / w * 2.0 - 1.0, pos.y / h * 2.0 - 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Follower {
    /// Advance one frame toward `target`, keeping the result inside `range`.
    pub fn step(&mut self, target: Vec2, params: &FollowerParams, range: &FollowRange) {
        self.velocity += (target - self.position) * params.follow;
        self.velocity *= params.friction;
        self.position += self.velocity;

        let (x, vx) = reflect(self.position.x, self.velocity.x, range.x);
        let (y, vy) = reflect(self.position.y, self.velocity.y, range.y);
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::new(vx, vy);
    }

    /// Position to write into the scene object.
    #[inline]
    pub fn output(&self, params: &FollowerParams) -> Vec2 {
        self.position * params.output_scale
    }
}

// Clamp to the boundary and bounce back with a restitution plus a push
// proportional to the overshoot.
#[inline]
fn reflect(pos: f32, vel: f32, limit: f32) -> (f32, f32) {
    if pos > limit {
        let over = pos - limit;
        (limit, vel * FOLLOW_RESTITUTION - over * FOLLOW_EDGE_SOFTNESS)
    } else if pos < -limit {
        let over = -limit - pos;
        (-limit, vel * FOLLOW_RESTITUTION + over * FOLLOW_EDGE_SOFTNESS)
    } else {
        (pos, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_has_a_floor() {
        let r = FollowRange::from_viewport(100.0, 100.0);
        assert_eq!(r.x, FOLLOW_RANGE_X_MIN);
        assert_eq!(r.y, FOLLOW_RANGE_Y_MIN);
        let wide = FollowRange::from_viewport(2200.0, 1200.0);
        assert!((wide.x - 1000.0).abs() < 1e-3);
        assert!((wide.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn overshoot_bounces_back_inward() {
        let (p, v) = reflect(110.0, 20.0, 100.0);
        assert_eq!(p, 100.0);
        assert!(v < 0.0);
        assert!((v - (-10.0 - 0.5)).abs() < 1e-6);

        let (p, v) = reflect(-104.0, -8.0, 100.0);
        assert_eq!(p, -100.0);
        assert!((v - (4.0 + 0.2)).abs() < 1e-6);
    }
}
