use crate::scroll::{scroll_trigger, ScrollProvider};
use crate::{dom, js, style, transforms};
use folio_core::constants::*;
use folio_core::reveal::{split_glyphs, Glyph, RevealLatch};
use folio_core::scroll::{
    anchor_target, parallax_offset, scroll_top_visible, SectionSpan, SpyTargets,
};
use folio_core::selectors::*;
use folio_core::widgets::TweenVars;
use folio_core::{Channel, Transform};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fade/slide-in of content blocks, revealed once on first intersection.
pub fn install_reveal(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all_doc(document, REVEAL_TARGETS);
    if targets.is_empty() {
        return Ok(());
    }
    let latches: Rc<RefCell<fnv::FnvHashMap<u32, RevealLatch>>> = Rc::default();

    let on_entries = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let el = entry.target();
                let fire = latches
                    .borrow_mut()
                    .entry(transforms::fx_id(&el))
                    .or_default()
                    .observe(entry.is_intersecting());
                if fire {
                    dom::set_style(&el, "opacity", "1");
                    transforms::clear(&el, Channel::Reveal);
                    observer.unobserve(&el);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &opts)
            .map_err(dom::js_err)?;
    on_entries.forget();

    for el in &targets {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transition", REVEAL_TRANSITION);
        transforms::set(
            el,
            Channel::Reveal,
            Transform::Translate {
                x: 0.0,
                y: REVEAL_OFFSET_PX,
            },
        );
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}

/// Background circles drift at staggered speeds.
pub fn install_parallax(document: &web::Document, scroll: &ScrollProvider) {
    let circles = dom::query_all_doc(document, PARALLAX_TARGETS);
    if circles.is_empty() {
        return;
    }
    let provider = scroll.clone();
    let update = move || {
        let y = provider.position();
        for (i, el) in circles.iter().enumerate() {
            dom::set_style(el, "transform", &style::translate_y(parallax_offset(y, i)));
        }
    };
    update();
    scroll.on_scroll(update);
}

/// Menu links and their target sections. Rebuilt once the compact menu
/// clone exists so its links are highlighted too.
struct SpyLinks {
    links: Vec<web::Element>,
    hashes: Vec<String>,
    sections: Vec<Option<web::HtmlElement>>,
    with_mobile: bool,
}

impl SpyLinks {
    fn collect(document: &web::Document) -> Self {
        let mut links = Vec::new();
        let mut hashes = Vec::new();
        for link in dom::query_all_doc(document, NAV_LINKS) {
            let Some(hash) = link
                .get_attribute("href")
                .and_then(|href| style::link_hash(&href).map(str::to_string))
            else {
                continue;
            };
            links.push(link);
            hashes.push(hash);
        }
        let targets = SpyTargets::group(&hashes.iter().map(String::as_str).collect::<Vec<_>>())
            .targets
            .into_iter()
            .map(|hash| dom::query(document, hash).and_then(|s| s.dyn_into().ok()))
            .collect();
        Self {
            links,
            hashes,
            sections: targets,
            with_mobile: document.get_element_by_id(MOBILE_NAV_ID).is_some(),
        }
    }

    fn update(&self, scroll_pos: f64) {
        let spy = SpyTargets::group(&self.hashes.iter().map(String::as_str).collect::<Vec<_>>());
        let spans: Vec<Option<SectionSpan>> = self
            .sections
            .iter()
            .map(|s| {
                s.as_ref().map(|s| SectionSpan {
                    offset_top: f64::from(s.offset_top()),
                    height: f64::from(s.offset_height()),
                })
            })
            .collect();
        for (link, on) in self.links.iter().zip(spy.active_flags(&spans, scroll_pos)) {
            dom::toggle_class(link, ACTIVE_CLASS, on);
        }
    }
}

/// Highlight the nav links whose section sits under the spy line.
pub fn install_scroll_spy(document: &web::Document, scroll: &ScrollProvider) {
    let spy = SpyLinks::collect(document);
    if spy.links.is_empty() {
        return;
    }
    let spy = RefCell::new(spy);
    let document = document.clone();
    let provider = scroll.clone();
    let update = move || {
        let mobile = document.get_element_by_id(MOBILE_NAV_ID).is_some();
        if mobile != spy.borrow().with_mobile {
            *spy.borrow_mut() = SpyLinks::collect(&document);
        }
        spy.borrow().update(provider.position());
    };
    if scroll.is_smooth() {
        scroll.on_scroll(update);
    } else {
        let update = Rc::new(update);
        let on_load = update.clone();
        dom::on_window_load(move || on_load());
        scroll.on_scroll(move || update());
    }
}

pub fn install_scroll_top(document: &web::Document, scroll: &ScrollProvider) {
    let Some(button) = dom::query(document, SCROLL_TOP) else {
        return;
    };
    {
        let provider = scroll.clone();
        dom::add_click_listener(&button, move |ev| {
            ev.prevent_default();
            provider.scroll_to(0.0);
        });
    }
    let provider = scroll.clone();
    let toggle = move || {
        dom::toggle_class(&button, ACTIVE_CLASS, scroll_top_visible(provider.position()));
    };
    toggle();
    scroll.on_scroll(toggle);
}

/// Correct the landing position for a `#hash` URL once everything has loaded.
pub fn install_hash_scroll(scroll: &ScrollProvider) {
    let scroll = scroll.clone();
    dom::on_window_load(move || {
        let Some(window) = web::window() else {
            return;
        };
        let hash = window.location().hash().unwrap_or_default();
        if style::link_hash(&hash).is_none() {
            return;
        }
        let Some(document) = window.document() else {
            return;
        };
        if dom::query(&document, &hash).is_none() {
            return;
        }
        dom::set_timeout(HASH_SCROLL_DELAY_MS, move || {
            let Some(section) = dom::query(&document, &hash)
                .and_then(|s| s.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let margin = window
                .get_computed_style(&section)
                .ok()
                .flatten()
                .and_then(|cs| cs.get_property_value("scroll-margin-top").ok())
                .unwrap_or_default();
            let y = anchor_target(f64::from(section.offset_top()), &margin);
            scroll.scroll_to_with(y, 1.0);
        });
    });
}

/// Split a heading into per-character spans once. Returns the spans.
pub fn split_into_chars(
    document: &web::Document,
    el: &web::Element,
) -> anyhow::Result<Vec<web::Element>> {
    let selector = format!(".{SPLIT_CHAR_CLASS}");
    if el.get_attribute(SPLIT_DONE_ATTR).as_deref() == Some("true") {
        return Ok(dom::query_all(el, &selector));
    }
    let text = el.text_content().unwrap_or_default();
    let _ = el.set_attribute(SPLIT_DONE_ATTR, "true");
    let _ = el.set_attribute(SPLIT_ORIGINAL_ATTR, &text);
    el.set_text_content(None);

    let frag = document.create_document_fragment();
    let mut chars = Vec::new();
    for glyph in split_glyphs(&text) {
        match glyph {
            Glyph::Space => {
                frag.append_child(&document.create_text_node(" "))
                    .map_err(dom::js_err)?;
            }
            Glyph::Char(c) => {
                let span = dom::create_with_class(document, "span", SPLIT_CHAR_CLASS)?;
                span.set_text_content(Some(&c.to_string()));
                frag.append_child(&span).map_err(dom::js_err)?;
                chars.push(span);
            }
        }
    }
    el.append_child(&frag).map_err(dom::js_err)?;
    Ok(chars)
}

fn tween_from_to(
    gsap: &JsValue,
    targets: &JsValue,
    from: &TweenVars,
    to: &TweenVars,
    trigger: &web::Element,
) -> anyhow::Result<()> {
    let from = js::to_js(from)?;
    let to = js::to_js(to)?;
    if let Some(st) = js::get(&to, "scrollTrigger") {
        js::set(&st, "trigger", trigger.clone());
    }
    js::call(gsap, "fromTo", &[targets.clone(), from, to])?;
    Ok(())
}

/// Per-section heading reveal and image scrub, once the page has loaded.
pub fn install_section_tweens(document: &web::Document) {
    let document = document.clone();
    dom::on_window_load(move || {
        let Some((gsap, st)) = scroll_trigger() else {
            return;
        };
        if let Err(e) = section_tweens(&document, &gsap) {
            log::error!("[reveal] section tweens: {e:?}");
        }
        let _ = js::call(&st, "refresh", &[]);
    });
}

fn section_tweens(document: &web::Document, gsap: &JsValue) -> anyhow::Result<()> {
    let mut count = 0usize;
    for section in dom::query_all_doc(document, SECTIONS) {
        let Some(heading) = dom::query_in(&section, SECTION_HEADINGS) else {
            continue;
        };
        let chars = split_into_chars(document, &heading)?;
        if chars.is_empty() {
            continue;
        }
        let targets: js_sys::Array = chars.iter().collect();
        tween_from_to(
            gsap,
            &targets.into(),
            &TweenVars::heading_from(),
            &TweenVars::heading_to(),
            &section,
        )?;
        count += 1;

        for img in dom::query_all(&section, "img") {
            let excluded = img.closest(".header").ok().flatten().is_some()
                || img.closest(&format!("#{MOBILE_NAV_ID}")).ok().flatten().is_some();
            if excluded {
                continue;
            }
            tween_from_to(
                gsap,
                &img.into(),
                &TweenVars::image_from(),
                &TweenVars::image_to(),
                &section,
            )?;
        }
    }
    log::info!("[reveal] section tweens: {count}");
    Ok(())
}

pub fn install_gradient_text(document: &web::Document) {
    for el in dom::query_all_doc(document, GRADIENT_TEXT) {
        dom::set_style(&el, "background-size", "200% 200%");
        dom::set_style(&el, "animation", "gradientShift 3s ease infinite");
    }
}
