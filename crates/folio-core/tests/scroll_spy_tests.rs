// Exactly one link is active for a given scroll position.

use folio_core::scroll::{active_link, SectionSpan, SpyTargets};
use proptest::prelude::*;

fn page() -> Vec<Option<SectionSpan>> {
    vec![
        Some(SectionSpan { offset_top: 0.0, height: 600.0 }),
        None, // external link
        Some(SectionSpan { offset_top: 600.0, height: 800.0 }),
        Some(SectionSpan { offset_top: 1400.0, height: 500.0 }),
    ]
}

#[test]
fn spy_line_sits_below_the_scroll_position() {
    let spans = page();
    assert_eq!(active_link(&spans, 0.0), Some(0));
    assert_eq!(active_link(&spans, 399.0), Some(0));
    assert_eq!(active_link(&spans, 450.0), Some(2));
    assert_eq!(active_link(&spans, 1250.0), Some(3));
    assert_eq!(active_link(&spans, 1800.0), None);
}

#[test]
fn shared_boundary_goes_to_later_section() {
    // spy line at 600 is inside both [0, 600] and [600, 1400]
    assert_eq!(active_link(&page(), 400.0), Some(2));
}

#[test]
fn no_sections_means_no_active_link() {
    assert_eq!(active_link(&[], 100.0), None);
    assert_eq!(active_link(&[None, None], 100.0), None);
}

#[test]
fn header_and_panel_links_to_one_section_light_up_together() {
    // header menu followed by its compact clone
    let hashes = ["#hero", "#about", "#contact", "#hero", "#about", "#contact"];
    let spy = SpyTargets::group(&hashes);
    assert_eq!(spy.targets, vec!["#hero", "#about", "#contact"]);
    assert_eq!(spy.link_target, vec![0, 1, 2, 0, 1, 2]);

    let spans = [
        Some(SectionSpan { offset_top: 0.0, height: 600.0 }),
        Some(SectionSpan { offset_top: 600.0, height: 800.0 }),
        Some(SectionSpan { offset_top: 1400.0, height: 500.0 }),
    ];
    assert_eq!(
        spy.active_flags(&spans, 700.0),
        vec![false, true, false, false, true, false]
    );
    assert!(spy.active_flags(&spans, 5000.0).iter().all(|on| !on));
}

proptest! {
    #[test]
    fn active_link_contains_the_spy_line(
        raw in prop::collection::vec(prop::option::of((0.0f64..5000.0, 0.0f64..1500.0)), 0..12),
        scroll in 0.0f64..6000.0,
    ) {
        let spans: Vec<Option<SectionSpan>> = raw
            .into_iter()
            .map(|o| o.map(|(offset_top, height)| SectionSpan { offset_top, height }))
            .collect();
        let line = scroll + 200.0;
        match active_link(&spans, scroll) {
            Some(i) => {
                let s = spans[i].unwrap();
                prop_assert!(line >= s.offset_top && line <= s.offset_top + s.height);
                // no later link also matches
                prop_assert!(spans[i + 1..].iter().flatten().all(|s| !s.contains(line)));
            }
            None => prop_assert!(spans.iter().flatten().all(|s| !s.contains(line))),
        }
    }
}
