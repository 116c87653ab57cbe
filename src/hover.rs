use crate::{dom, transforms};
use folio_core::hover::{card_lift, focus_scale, magnetic_shift, Rect, Tilt};
use folio_core::selectors::*;
use folio_core::{Channel, Transform};
use glam::DVec2;
use std::rc::Rc;
use web_sys as web;

const SHINE_STYLE: &str = "position:absolute;inset:0;border-radius:inherit;pointer-events:none;\
mix-blend-mode:screen;opacity:0;transition:opacity 0.25s ease;";
const FOCUS_TRANSITION: &str = "transform 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Pointer-driven hover effects. `motion` is false under reduced motion or a
/// coarse pointer, which leaves only the focus and lift feedback.
pub fn install(document: &web::Document, motion: bool) -> anyhow::Result<()> {
    if motion {
        install_magnetic(document);
        install_tilt(document)?;
    }
    install_lift(document);
    install_focus(document);
    Ok(())
}

fn install_magnetic(document: &web::Document) {
    let items: Rc<Vec<web::Element>> = Rc::new(dom::query_all_doc(document, MAGNETIC_TARGETS));
    if items.is_empty() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    {
        let items = items.clone();
        dom::listen_with(&window, "pointermove", true, false, move |ev: web::PointerEvent| {
            let p = client_pos(&ev);
            for el in items.iter() {
                match magnetic_shift(&rect_of(el), p) {
                    Some(s) => transforms::set(
                        el,
                        Channel::Magnetic,
                        Transform::Translate { x: s.x, y: s.y },
                    ),
                    None => transforms::clear(el, Channel::Magnetic),
                }
            }
        });
    }
    {
        let items = items.clone();
        dom::listen(&window, "blur", move |_: web::Event| {
            for el in items.iter() {
                transforms::clear(el, Channel::Magnetic);
            }
        });
    }
    for el in items.iter() {
        let target = el.clone();
        dom::listen(el, "pointerleave", move |_: web::Event| {
            transforms::clear(&target, Channel::Magnetic);
        });
    }
    log::info!("[hover] magnetic targets: {}", items.len());
}

fn ensure_shine(document: &web::Document, card: &web::Element) -> anyhow::Result<web::Element> {
    if let Some(shine) = dom::query_in(card, &format!(".{SHINE_CLASS}")) {
        return Ok(shine);
    }
    let shine = dom::create_with_class(document, "div", SHINE_CLASS)?;
    let _ = shine.set_attribute("aria-hidden", "true");
    let _ = shine.set_attribute("style", SHINE_STYLE);
    card.append_child(&shine).map_err(dom::js_err)?;
    Ok(shine)
}

fn install_tilt(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let cards = dom::query_all_doc(document, TILT_TARGETS);
    for card in &cards {
        let static_pos = window
            .get_computed_style(card)
            .ok()
            .flatten()
            .and_then(|cs| cs.get_property_value("position").ok())
            .is_some_and(|p| p == "static");
        if static_pos {
            dom::set_style(card, "position", "relative");
        }
        dom::set_style(card, "transform-style", "preserve-3d");
        dom::set_style(card, "will-change", "transform");
        let shine = ensure_shine(document, card)?;

        {
            let shine = shine.clone();
            dom::listen(card, "pointerenter", move |_: web::Event| {
                dom::set_style(&shine, "opacity", "1");
            });
        }
        {
            let (c, shine) = (card.clone(), shine.clone());
            dom::listen(card, "pointermove", move |ev: web::PointerEvent| {
                if let Some(t) = Tilt::for_pointer(&rect_of(&c), client_pos(&ev)) {
                    transforms::set(&c, Channel::Tilt, t.transform());
                    dom::set_style(&shine, "background", &t.shine_background());
                }
            });
        }
        {
            let c = card.clone();
            dom::listen(card, "pointerleave", move |_: web::Event| {
                transforms::clear(&c, Channel::Tilt);
                dom::set_style(&shine, "opacity", "0");
            });
        }
    }
    if !cards.is_empty() {
        log::info!("[hover] tilt cards: {}", cards.len());
    }
    Ok(())
}

fn install_lift(document: &web::Document) {
    for card in dom::query_all_doc(document, LIFT_TARGETS) {
        let c = card.clone();
        dom::listen(&card, "mouseenter", move |_: web::Event| {
            transforms::set(&c, Channel::Hover, card_lift(true));
        });
        let c = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::Event| {
            transforms::set(&c, Channel::Hover, card_lift(false));
        });
    }
}

fn install_focus(document: &web::Document) {
    for input in dom::query_all_doc(document, FORM_CONTROLS) {
        let Some(parent) = input.parent_element() else {
            continue;
        };
        let p = parent.clone();
        dom::listen(&input, "focus", move |_: web::FocusEvent| {
            dom::set_style(&p, "transition", FOCUS_TRANSITION);
            transforms::set(&p, Channel::Focus, focus_scale(true));
        });
        dom::listen(&input, "blur", move |_: web::FocusEvent| {
            transforms::set(&parent, Channel::Focus, focus_scale(false));
        });
    }
}
