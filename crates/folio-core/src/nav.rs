//! Responsive navigation menu state.
//!
//! The menu is either closed or open. Opening picks a presentation mode from
//! the viewport width at the moment of the event: a compact slide-in panel
//! (cloned from the primary navigation) or the expanded header. The four DOM
//! markers are always derived from the single `open` flag.

use crate::constants::NAV_COMPACT_MAX_WIDTH;
use crate::selectors::{ICON_CLOSED_CLASS, ICON_OPEN_CLASS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    Compact,
    Expanded,
}

impl NavMode {
    /// Mirrors the `(max-width: 1199px)` media query.
    #[inline]
    pub fn for_width(width: f64) -> Self {
        if width <= NAV_COMPACT_MAX_WIDTH {
            NavMode::Compact
        } else {
            NavMode::Expanded
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Toggle,
    Backdrop,
    Escape,
    LinkClick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTransition {
    Open(NavMode),
    Close(NavMode),
}

/// Which presentations the page has markup for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSurfaces {
    /// A primary menu to clone into the compact panel (or the panel itself).
    pub compact: bool,
    /// `#header` together with its in-header toggle.
    pub expanded: bool,
}

impl NavSurfaces {
    #[inline]
    pub fn supports(&self, mode: NavMode) -> bool {
        match mode {
            NavMode::Compact => self.compact,
            NavMode::Expanded => self.expanded,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    opened_in: Option<NavMode>,
}

impl NavState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.opened_in.is_some()
    }

    /// Apply an event. `mode` is the presentation mode for the current
    /// viewport; a close always undoes the mode the menu was opened in.
    pub fn apply(&mut self, event: NavEvent, mode: NavMode) -> Option<NavTransition> {
        match (self.opened_in, event) {
            (None, NavEvent::Toggle) => {
                self.opened_in = Some(mode);
                Some(NavTransition::Open(mode))
            }
            (None, _) => None,
            (Some(opened), _) => {
                self.opened_in = None;
                Some(NavTransition::Close(opened))
            }
        }
    }

    /// [`NavState::apply`], except that opening into a mode the page has no
    /// markup for is ignored and the menu stays closed.
    pub fn apply_on(
        &mut self,
        event: NavEvent,
        mode: NavMode,
        surfaces: NavSurfaces,
    ) -> Option<NavTransition> {
        if !self.is_open() && event == NavEvent::Toggle && !surfaces.supports(mode) {
            return None;
        }
        self.apply(event, mode)
    }

    pub fn markers(&self) -> NavMarkers {
        NavMarkers::for_open(self.is_open())
    }
}

/// The redundant DOM representation of the open flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavMarkers {
    pub body_open: bool,
    pub icon_class: &'static str,
    pub backdrop_active: bool,
    pub panel_aria_hidden: bool,
}

impl NavMarkers {
    pub fn for_open(open: bool) -> Self {
        Self {
            body_open: open,
            icon_class: if open {
                ICON_OPEN_CLASS
            } else {
                ICON_CLOSED_CLASS
            },
            backdrop_active: open,
            panel_aria_hidden: !open,
        }
    }

    /// All four markers agree on one state.
    pub fn is_consistent(&self) -> bool {
        let icon_open = self.icon_class == ICON_OPEN_CLASS;
        self.body_open == icon_open
            && self.body_open == self.backdrop_active
            && self.body_open != self.panel_aria_hidden
    }

    #[inline]
    pub fn toggle_label(&self) -> &'static str {
        if self.body_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// Icon rotation used by the expanded header toggle.
    #[inline]
    pub fn icon_transform(&self) -> &'static str {
        if self.body_open {
            "rotate(90deg) scale(1.1)"
        } else {
            "rotate(0deg) scale(1)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(NavMode::for_width(1199.0), NavMode::Compact);
        assert_eq!(NavMode::for_width(1200.0), NavMode::Expanded);
        assert_eq!(NavMode::for_width(320.0), NavMode::Compact);
    }

    #[test]
    fn dismiss_events_ignored_while_closed() {
        let mut s = NavState::default();
        assert_eq!(s.apply(NavEvent::Escape, NavMode::Compact), None);
        assert_eq!(s.apply(NavEvent::Backdrop, NavMode::Compact), None);
        assert_eq!(s.apply(NavEvent::LinkClick, NavMode::Expanded), None);
        assert!(!s.is_open());
    }

    #[test]
    fn close_targets_the_mode_it_opened_in() {
        let mut s = NavState::default();
        assert_eq!(
            s.apply(NavEvent::Toggle, NavMode::Compact),
            Some(NavTransition::Open(NavMode::Compact))
        );
        // viewport grew past the breakpoint while open
        assert_eq!(
            s.apply(NavEvent::Escape, NavMode::Expanded),
            Some(NavTransition::Close(NavMode::Compact))
        );
        assert!(!s.is_open());
    }
}
