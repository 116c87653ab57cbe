//! Per-element transform registry. Effects write their own channel and the
//! composed string is written back to `style.transform`.

use crate::dom;
use fnv::FnvHashMap;
use folio_core::{Channel, Transform, TransformStack};
use std::cell::{Cell, RefCell};
use web_sys as web;

pub const FX_ID_ATTR: &str = "data-fx-id";

thread_local! {
    static STACKS: RefCell<FnvHashMap<u32, TransformStack>> = RefCell::new(FnvHashMap::default());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Stable per-element id, assigned on first use.
pub fn fx_id(el: &web::Element) -> u32 {
    if let Some(id) = el
        .get_attribute(FX_ID_ATTR)
        .and_then(|v| v.parse::<u32>().ok())
    {
        return id;
    }
    let id = NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id.wrapping_add(1));
        id
    });
    let _ = el.set_attribute(FX_ID_ATTR, &id.to_string());
    id
}

fn update(el: &web::Element, f: impl FnOnce(&mut TransformStack)) {
    let id = fx_id(el);
    let css = STACKS.with(|stacks| {
        let mut stacks = stacks.borrow_mut();
        let stack = stacks.entry(id).or_default();
        let before = stack.compose();
        f(stack);
        let after = stack.compose();
        (before != after).then_some(after)
    });
    if let Some(css) = css {
        dom::set_style(el, "transform", &css);
    }
}

/// Set one channel on `el`; other channels are left as they are.
pub fn set(el: &web::Element, channel: Channel, transform: Transform) {
    update(el, |s| s.set(channel, transform));
}

pub fn clear(el: &web::Element, channel: Channel) {
    update(el, |s| s.clear(channel));
}
