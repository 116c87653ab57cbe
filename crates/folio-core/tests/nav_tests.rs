// Navigation markers stay in agreement across any event sequence.

use folio_core::{NavEvent, NavMarkers, NavMode, NavState, NavSurfaces, NavTransition};
use proptest::prelude::*;

#[test]
fn toggle_opens_then_closes() {
    let mut s = NavState::default();
    assert!(!s.markers().body_open);
    assert_eq!(
        s.apply(NavEvent::Toggle, NavMode::Expanded),
        Some(NavTransition::Open(NavMode::Expanded))
    );
    let m = s.markers();
    assert!(m.body_open && m.backdrop_active && !m.panel_aria_hidden);
    assert_eq!(m.icon_class, "bi-x");
    assert_eq!(m.toggle_label(), "Close menu");
    assert_eq!(
        s.apply(NavEvent::Toggle, NavMode::Expanded),
        Some(NavTransition::Close(NavMode::Expanded))
    );
    assert_eq!(s.markers(), NavMarkers::for_open(false));
}

#[test]
fn link_click_auto_closes() {
    let mut s = NavState::default();
    s.apply(NavEvent::Toggle, NavMode::Compact);
    assert_eq!(
        s.apply(NavEvent::LinkClick, NavMode::Compact),
        Some(NavTransition::Close(NavMode::Compact))
    );
    assert!(!s.is_open());
}

#[test]
fn expanded_toggle_without_header_stays_closed() {
    let headless = NavSurfaces {
        compact: true,
        expanded: false,
    };
    let mut s = NavState::default();
    assert_eq!(s.apply_on(NavEvent::Toggle, NavMode::Expanded, headless), None);
    assert!(!s.is_open());
    assert_eq!(s.markers(), NavMarkers::for_open(false));

    // the compact panel still works on the same page
    assert_eq!(
        s.apply_on(NavEvent::Toggle, NavMode::Compact, headless),
        Some(NavTransition::Open(NavMode::Compact))
    );
}

#[test]
fn close_is_never_blocked_by_missing_markup() {
    let none = NavSurfaces {
        compact: false,
        expanded: false,
    };
    let mut s = NavState::default();
    s.apply(NavEvent::Toggle, NavMode::Expanded);
    assert_eq!(
        s.apply_on(NavEvent::Escape, NavMode::Expanded, none),
        Some(NavTransition::Close(NavMode::Expanded))
    );
    assert!(!s.is_open());
}

fn event() -> impl Strategy<Value = NavEvent> {
    prop_oneof![
        Just(NavEvent::Toggle),
        Just(NavEvent::Backdrop),
        Just(NavEvent::Escape),
        Just(NavEvent::LinkClick),
    ]
}

proptest! {
    #[test]
    fn markers_always_agree(
        steps in prop::collection::vec((event(), 200.0f64..2400.0), 0..64),
    ) {
        let mut s = NavState::default();
        for (ev, width) in steps {
            let was_open = s.is_open();
            let t = s.apply(ev, NavMode::for_width(width));
            prop_assert!(s.markers().is_consistent());
            match t {
                Some(NavTransition::Open(_)) => prop_assert!(!was_open && s.is_open()),
                Some(NavTransition::Close(_)) => prop_assert!(was_open && !s.is_open()),
                None => prop_assert_eq!(was_open, s.is_open()),
            }
        }
    }
}
