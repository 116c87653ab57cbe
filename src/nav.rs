use crate::scroll::ScrollProvider;
use crate::{dom, style, transforms};
use folio_core::scroll::anchor_target;
use folio_core::selectors::*;
use folio_core::{NavEvent, NavMarkers, NavMode, NavState, NavSurfaces, NavTransition};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles the controller writes the navigation markers to.
struct NavDom {
    document: web::Document,
    body: web::HtmlElement,
    header: Option<web::Element>,
    header_toggle: Option<web::Element>,
    mobile_toggle: web::Element,
    backdrop: web::Element,
    /// Lazily cloned compact panel.
    mobile_nav: Option<web::Element>,
}

struct Nav {
    state: NavState,
    dom: NavDom,
}

type SharedNav = Rc<RefCell<Nav>>;

pub fn install(document: &web::Document, scroll: &ScrollProvider) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let header = document.query_selector(HEADER).ok().flatten();
    let header_toggle = document.query_selector(HEADER_TOGGLE).ok().flatten();
    if header.is_none() && document.get_element_by_id(PRIMARY_NAV_ID).is_none() {
        return Ok(());
    }

    let mobile_toggle = ensure_mobile_toggle(document, &body)?;
    let (backdrop, created) = dom::ensure_by_id(document, "div", BACKDROP_ID)?;
    if created {
        let _ = backdrop.set_attribute("aria-hidden", "true");
        let _ = body.append_child(&backdrop);
    }
    let mobile_nav = document.get_element_by_id(MOBILE_NAV_ID);

    let nav: SharedNav = Rc::new(RefCell::new(Nav {
        state: NavState::default(),
        dom: NavDom {
            document: document.clone(),
            body,
            header,
            header_toggle: header_toggle.clone(),
            mobile_toggle: mobile_toggle.clone(),
            backdrop: backdrop.clone(),
            mobile_nav,
        },
    }));

    for toggle in [Some(mobile_toggle), header_toggle].into_iter().flatten() {
        let n = nav.clone();
        dom::add_click_listener(&toggle, move |_| dispatch(&n, NavEvent::Toggle, None));
    }
    {
        let n = nav.clone();
        dom::add_click_listener(&backdrop, move |_| dispatch(&n, NavEvent::Backdrop, None));
    }
    {
        let n = nav.clone();
        dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
            if ev.key() == "Escape" {
                dispatch(&n, NavEvent::Escape, None);
            }
        });
    }
    for link in dom::query_all_doc(document, PRIMARY_NAV_LINKS) {
        wire_link(&nav, &link, scroll);
    }
    wire_dropdowns(document);

    log::info!("[nav] controller ready");
    Ok(())
}

fn ensure_mobile_toggle(
    document: &web::Document,
    body: &web::HtmlElement,
) -> anyhow::Result<web::Element> {
    if let Some(el) = dom::query(document, MOBILE_TOGGLE) {
        return Ok(el);
    }
    let btn = dom::create_with_class(
        document,
        "button",
        &format!("{MOBILE_TOGGLE_CLASS} {ICON_CLASS} {ICON_CLOSED_CLASS}"),
    )?;
    let _ = btn.set_attribute("type", "button");
    let _ = btn.set_attribute("aria-label", NavMarkers::for_open(false).toggle_label());
    body.append_child(&btn).map_err(dom::js_err)?;
    Ok(btn)
}

fn wire_link(nav: &SharedNav, link: &web::Element, scroll: &ScrollProvider) {
    let n = nav.clone();
    let scroll = scroll.clone();
    let href = link.get_attribute("href").unwrap_or_default();
    dom::add_click_listener(link, move |ev| {
        let target = smooth_target(&scroll, &href);
        if target.is_some() {
            ev.prevent_default();
        }
        dispatch(&n, NavEvent::LinkClick, target);
    });
}

/// With smooth scrolling active, in-page links scroll through the provider.
fn smooth_target(scroll: &ScrollProvider, href: &str) -> Option<(ScrollProvider, f64)> {
    if !scroll.is_smooth() {
        return None;
    }
    let hash = style::link_hash(href)?;
    let document = dom::window_document()?;
    let section = dom::query(&document, hash)?.dyn_into::<web::HtmlElement>().ok()?;
    let margin = web::window()
        .and_then(|w| w.get_computed_style(&section).ok().flatten())
        .and_then(|s| s.get_property_value("scroll-margin-top").ok())
        .unwrap_or_default();
    Some((
        scroll.clone(),
        anchor_target(f64::from(section.offset_top()), &margin),
    ))
}

fn dispatch(nav: &SharedNav, event: NavEvent, scroll_to: Option<(ScrollProvider, f64)>) {
    let mode = NavMode::for_width(dom::viewport_width());
    {
        let mut n = nav.borrow_mut();
        let Nav { state, dom: nd } = &mut *n;
        let surfaces = NavSurfaces {
            compact: nd.mobile_nav.is_some()
                || nd.document.get_element_by_id(PRIMARY_NAV_ID).is_some(),
            expanded: nd.header.is_some() && nd.header_toggle.is_some(),
        };
        match state.apply_on(event, mode, surfaces) {
            Some(NavTransition::Open(NavMode::Compact)) => {
                if nd.ensure_mobile_nav(nav).is_none() {
                    // nothing to clone from; stay closed
                    *state = NavState::default();
                    return;
                }
                nd.render_compact(state.markers());
            }
            Some(NavTransition::Close(NavMode::Compact)) => nd.render_compact(state.markers()),
            Some(NavTransition::Open(NavMode::Expanded))
            | Some(NavTransition::Close(NavMode::Expanded)) => {
                nd.render_expanded(state.markers())
            }
            None => {}
        }
        debug_assert!(state.markers().is_consistent());
    }
    if let Some((scroll, y)) = scroll_to {
        scroll.scroll_to(y);
    }
}

impl NavDom {
    /// Clone `#navmenu` into the compact panel on first use.
    fn ensure_mobile_nav(&mut self, nav: &SharedNav) -> Option<web::Element> {
        if let Some(panel) = &self.mobile_nav {
            return Some(panel.clone());
        }
        let source = self.document.get_element_by_id(PRIMARY_NAV_ID)?;
        let panel = self.document.create_element("div").ok()?;
        panel.set_id(MOBILE_NAV_ID);
        let _ = panel.set_attribute("aria-hidden", "true");
        let inner = dom::create_with_class(&self.document, "div", MOBILE_NAV_INNER_CLASS).ok()?;
        let clone = source
            .clone_node_with_deep(true)
            .ok()?
            .dyn_into::<web::Element>()
            .ok()?;
        clone.set_id(MOBILE_NAV_MENU_ID);
        // the clone must not share transform state with the originals
        for el in dom::query_all(&clone, &format!("[{}]", transforms::FX_ID_ATTR)) {
            let _ = el.remove_attribute(transforms::FX_ID_ATTR);
            dom::set_style(&el, "transform", "none");
        }
        let _ = inner.append_child(&clone);
        let _ = panel.append_child(&inner);
        let _ = self.body.append_child(&panel);

        // links in the clone close the panel
        for link in dom::query_all(&panel, "a") {
            let n = nav.clone();
            dom::add_click_listener(&link, move |_| dispatch(&n, NavEvent::LinkClick, None));
        }
        self.mobile_nav = Some(panel.clone());
        Some(panel)
    }

    fn render_compact(&self, m: NavMarkers) {
        let body = self.body.class_list();
        let _ = body.toggle_with_force(NAV_OPEN_CLASS, m.body_open);
        let _ = body.toggle_with_force(MOBILE_NAV_ACTIVE_CLASS, m.body_open);
        dom::toggle_class(&self.backdrop, ACTIVE_CLASS, m.backdrop_active);
        if let Some(panel) = &self.mobile_nav {
            dom::toggle_class(panel, ACTIVE_CLASS, m.body_open);
            let _ = panel.set_attribute("aria-hidden", bool_attr(m.panel_aria_hidden));
        }
        set_icon(&self.mobile_toggle, m);
        let _ = self.mobile_toggle.set_attribute("aria-label", m.toggle_label());
    }

    fn render_expanded(&self, m: NavMarkers) {
        let _ = self.body.class_list().toggle_with_force(NAV_OPEN_CLASS, m.body_open);
        dom::toggle_class(&self.backdrop, ACTIVE_CLASS, m.backdrop_active);
        if let Some(header) = &self.header {
            dom::toggle_class(header, HEADER_SHOW_CLASS, m.body_open);
        }
        if let Some(toggle) = &self.header_toggle {
            set_icon(toggle, m);
            dom::set_style(toggle, "transform", m.icon_transform());
        }
    }
}

fn set_icon(el: &web::Element, m: NavMarkers) {
    let cl = el.class_list();
    let _ = cl.remove_2(ICON_OPEN_CLASS, ICON_CLOSED_CLASS);
    let _ = cl.add_1(m.icon_class);
}

#[inline]
fn bool_attr(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Sub-menu toggles flip their parent and the parent's sibling list.
fn wire_dropdowns(document: &web::Document) {
    for toggle in dom::query_all_doc(document, NAV_DROPDOWN_TOGGLES) {
        let el = toggle.clone();
        dom::add_click_listener(&toggle, move |ev| {
            ev.prevent_default();
            if let Some(parent) = el.parent_element() {
                let _ = parent.class_list().toggle(ACTIVE_CLASS);
                if let Some(next) = parent.next_element_sibling() {
                    let _ = next.class_list().toggle(DROPDOWN_ACTIVE_CLASS);
                }
            }
            ev.stop_immediate_propagation();
        });
    }
}
