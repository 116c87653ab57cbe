//! Third-party widget bootstrapping. Each widget is skipped when its library
//! isn't on the page, and every element is initialised at most once.

use crate::{dom, js};
use folio_core::constants::*;
use folio_core::selectors::*;
use folio_core::widgets::{
    progress_width, AosConfig, GlightboxConfig, IsotopeArrange, IsotopeConfig, SwiperConfig,
    TypedConfig, WaypointOffset,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Record `key` in the element's init marker. False if it was already there.
fn claim(el: &web::Element, key: &str) -> bool {
    let current = el.get_attribute(INIT_MARKER_ATTR).unwrap_or_default();
    if current.split_whitespace().any(|k| k == key) {
        return false;
    }
    let next = if current.is_empty() {
        key.to_string()
    } else {
        format!("{current} {key}")
    };
    let _ = el.set_attribute(INIT_MARKER_ATTR, &next);
    true
}

/// Page-wide widgets are claimed on `<html>`.
fn claim_page(document: &web::Document, key: &str) -> bool {
    document
        .document_element()
        .is_some_and(|root| claim(&root, key))
}

pub fn install(document: &web::Document) {
    install_aos();
    if let Err(e) = install_typed(document) {
        log::warn!("[widgets] typed: {e:?}");
    }
    install_counters(document);
    install_skill_bars(document);
    if let Err(e) = install_lightbox(document) {
        log::warn!("[widgets] lightbox: {e:?}");
    }
    install_isotope(document);
    install_swipers();
}

fn aos_init() -> anyhow::Result<()> {
    let Some(aos) = js::global("AOS") else {
        return Ok(());
    };
    js::call(&aos, "init", &[js::to_js(&AosConfig::default())?])?;
    Ok(())
}

fn install_aos() {
    dom::on_window_load(|| {
        if let Err(e) = aos_init() {
            log::warn!("[widgets] aos: {e:?}");
        }
    });
}

fn install_typed(document: &web::Document) -> anyhow::Result<()> {
    let Some(ctor) = js::global("Typed") else {
        return Ok(());
    };
    let Some(el) = dom::query(document, TYPED) else {
        return Ok(());
    };
    if !claim(&el, "typed") {
        return Ok(());
    }
    let items = el.get_attribute(TYPED_ITEMS_ATTR).unwrap_or_default();
    let config = TypedConfig::from_items(&items)?;
    js::construct(&ctor, &[el.into(), js::to_js(&config)?])?;
    Ok(())
}

fn install_counters(document: &web::Document) {
    let Some(ctor) = js::global("PureCounter") else {
        return;
    };
    if !claim_page(document, "purecounter") {
        return;
    }
    if let Err(e) = js::construct(&ctor, &[]) {
        log::warn!("[widgets] purecounter: {e:?}");
    }
}

fn fill_bars(section: &web::Element) {
    for (i, bar) in dom::query_all(section, SKILL_PROGRESS_BARS).into_iter().enumerate() {
        let delay = SKILL_BAR_STAGGER_MS.saturating_mul(i as i32);
        dom::set_timeout(delay, move || {
            let width = progress_width(bar.get_attribute("aria-valuenow").as_deref());
            dom::set_style(&bar, "width", &width);
            dom::set_style(&bar, "transition", SKILL_BAR_TRANSITION);
        });
    }
}

/// Fill each skills block's progress bars when it scrolls into view.
fn install_skill_bars(document: &web::Document) {
    let Some(ctor) = js::global("Waypoint") else {
        return;
    };
    for section in dom::query_all_doc(document, SKILLS_ANIMATION) {
        if !claim(&section, "waypoint") {
            continue;
        }
        let opts = match js::to_js(&WaypointOffset::default()) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[widgets] waypoint: {e:?}");
                return;
            }
        };
        js::set(&opts, "element", section.clone());
        let target = section.clone();
        let handler = Closure::wrap(Box::new(move |_direction: JsValue| fill_bars(&target))
            as Box<dyn FnMut(JsValue)>);
        js::set(&opts, "handler", handler.as_ref().clone());
        handler.forget();
        if let Err(e) = js::construct(&ctor, &[opts]) {
            log::warn!("[widgets] waypoint: {e:?}");
        }
    }
}

fn install_lightbox(document: &web::Document) -> anyhow::Result<()> {
    let Some(glightbox) = js::global("GLightbox") else {
        return Ok(());
    };
    if !claim_page(document, "glightbox") {
        return Ok(());
    }
    let f = glightbox
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| anyhow::anyhow!("GLightbox is not a function"))?;
    f.call1(&JsValue::NULL, &js::to_js(&GlightboxConfig::default())?)
        .map_err(dom::js_err)?;
    Ok(())
}

/// Filterable grids. The layout is built once its images have loaded; filter
/// clicks before then only move the active marker.
fn install_isotope(document: &web::Document) {
    let (Some(images_loaded), Some(ctor)) = (js::global("imagesLoaded"), js::global("Isotope"))
    else {
        return;
    };
    let Some(images_loaded) = images_loaded.dyn_into::<js_sys::Function>().ok() else {
        return;
    };
    for layout in dom::query_all_doc(document, ISOTOPE_LAYOUTS) {
        if !claim(&layout, "isotope") {
            continue;
        }
        let Some(container) = dom::query_in(&layout, ISOTOPE_CONTAINER) else {
            continue;
        };
        let config = IsotopeConfig::from_attributes(
            layout.get_attribute("data-layout"),
            layout.get_attribute("data-default-filter"),
            layout.get_attribute("data-sort"),
        );
        let grid: Rc<RefCell<Option<JsValue>>> = Rc::default();
        {
            let (grid, ctor, target) = (grid.clone(), ctor.clone(), container.clone());
            let on_loaded = Closure::once_into_js(move || {
                let built = js::to_js(&config)
                    .and_then(|opts| js::construct(&ctor, &[target.into(), opts]));
                match built {
                    Ok(iso) => *grid.borrow_mut() = Some(iso),
                    Err(e) => log::warn!("[widgets] isotope: {e:?}"),
                }
            });
            let _ = images_loaded.call2(&JsValue::NULL, &container, &on_loaded);
        }

        for filter in dom::query_all(&layout, ISOTOPE_FILTERS) {
            let (grid, layout) = (grid.clone(), layout.clone());
            let this = filter.clone();
            dom::add_click_listener(&filter, move |_| {
                if let Some(active) = dom::query_in(&layout, ISOTOPE_ACTIVE_FILTER) {
                    let _ = active.class_list().remove_1(FILTER_ACTIVE_CLASS);
                }
                let _ = this.class_list().add_1(FILTER_ACTIVE_CLASS);
                let arrange = IsotopeArrange {
                    filter: this.get_attribute("data-filter").unwrap_or_else(|| "*".into()),
                };
                if let Some(iso) = grid.borrow().as_ref() {
                    if let Err(e) = js::to_js(&arrange).and_then(|a| js::call(iso, "arrange", &[a]))
                    {
                        log::warn!("[widgets] isotope arrange: {e:?}");
                    }
                }
                if let Err(e) = aos_init() {
                    log::warn!("[widgets] aos: {e:?}");
                }
            });
        }
    }
}

/// Sliders configured by an inline `.swiper-config` JSON block.
fn install_swipers() {
    dom::on_window_load(|| {
        let (Some(ctor), Some(document)) = (js::global("Swiper"), dom::window_document()) else {
            return;
        };
        for el in dom::query_all_doc(&document, SWIPERS) {
            // tabbed sliders are paginated by their own markup
            if el.class_list().contains(SWIPER_TAB_CLASS) || !claim(&el, "swiper") {
                continue;
            }
            let raw = dom::query_in(&el, SWIPER_CONFIG)
                .and_then(|c| c.text_content())
                .unwrap_or_default();
            let built = SwiperConfig::parse(&raw)
                .map_err(anyhow::Error::from)
                .and_then(|config| js::to_js(&config))
                .and_then(|opts| js::construct(&ctor, &[el.into(), opts]));
            if let Err(e) = built {
                log::warn!("[widgets] swiper: {e:?}");
            }
        }
    });
}
