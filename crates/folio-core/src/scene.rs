//! Optional 3D scene capability and named scene targets.

use std::fmt;

pub const DEFAULT_SCENE_URL: &str = "assets/spline/scene.splinecode";
pub const DEFAULT_RUNTIME_URL: &str =
    "https://unpkg.com/@splinetool/runtime@1.9.57/build/runtime.js";

/// Result of resolving an optional capability.
#[derive(Clone, Debug)]
pub enum Capability<T> {
    Available(T),
    Unavailable(UnavailableReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The runtime module could not be imported and no global was found.
    RuntimeMissing,
    /// The scene file failed to load or parse.
    LoadFailed(String),
    /// The scene anchor canvas is absent.
    NoCanvas,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::RuntimeMissing => {
                write!(f, "scene runtime is not available (module or global)")
            }
            UnavailableReason::LoadFailed(e) => write!(f, "scene failed to load: {e}"),
            UnavailableReason::NoCanvas => write!(f, "scene canvas missing"),
        }
    }
}

/// Scene objects the site drives, each with its candidate object names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneTarget {
    Camera,
    Stars,
    Tornado,
    Ship,
}

impl SceneTarget {
    /// Names tried in order; the first one the scene knows wins.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            SceneTarget::Camera => &["PERSPECTIVE"],
            SceneTarget::Stars => &["STARS EMITTER"],
            SceneTarget::Tornado => &["TORNADO", "VORTEX", "VORTEXT"],
            SceneTarget::Ship => &["SHIP & VORTEXT", "SHIP"],
        }
    }
}

/// Look up a target through its candidate names.
pub fn resolve_target<T>(
    target: SceneTarget,
    mut find: impl FnMut(&str) -> Option<T>,
) -> Option<T> {
    target.candidates().iter().find_map(|name| find(name))
}

/// How the scene reacts to the pointer for a given viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenePose {
    /// Followers and camera track the pointer.
    Interactive,
    /// Narrow screens: everything at rest, no per-frame work.
    Static,
}

impl ScenePose {
    #[inline]
    pub fn for_width(width: f64) -> Self {
        if width < crate::constants::SCENE_STATIC_BELOW_WIDTH {
            ScenePose::Static
        } else {
            ScenePose::Interactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_known_candidate_wins() {
        let known = ["VORTEX", "VORTEXT"];
        let found = resolve_target(SceneTarget::Tornado, |n| {
            known.iter().any(|k| *k == n).then(|| n.to_string())
        });
        assert_eq!(found.as_deref(), Some("VORTEX"));
        let none = resolve_target(SceneTarget::Ship, |n| {
            known.iter().any(|k| *k == n).then(|| n.to_string())
        });
        assert_eq!(none, None);
    }

    #[test]
    fn pose_switches_at_breakpoint() {
        assert_eq!(ScenePose::for_width(767.0), ScenePose::Static);
        assert_eq!(ScenePose::for_width(768.0), ScenePose::Interactive);
    }
}
