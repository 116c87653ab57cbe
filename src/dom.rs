use folio_core::constants::MAX_DEVICE_PIXEL_RATIO;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window().map(|w| viewport_size(&w).0).unwrap_or(0.0)
}

/// Device pixel ratio capped to keep canvas fill cost bounded.
#[inline]
pub fn capped_dpr(window: &web::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| nodes_to_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_doc(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(|list| nodes_to_elements(&list))
        .unwrap_or_default()
}

fn nodes_to_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// Set one inline style property; ignored for non-HTML elements.
pub fn set_style(el: &web::Element, name: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        let _ = h.style().set_property(name, value);
    }
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Create an element with an id, or return the existing one.
pub fn ensure_by_id(
    document: &web::Document,
    tag: &str,
    id: &str,
) -> anyhow::Result<(web::Element, bool)> {
    if let Some(el) = document.get_element_by_id(id) {
        return Ok((el, false));
    }
    let el = document.create_element(tag).map_err(js_err)?;
    el.set_id(id);
    Ok((el, true))
}

pub fn create_with_class(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    el.set_class_name(class);
    Ok(el)
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Passive and/or once listener.
pub fn listen_with<E, F>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    once: bool,
    handler: F,
) where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    opts.set_once(once);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    listen(el, "click", move |ev: web::MouseEvent| handler(ev));
}

/// Run once after `ms` milliseconds.
pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::once_into_js(handler);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), ms);
    }
}

/// Run `handler` once the DOM is parsed.
pub fn run_when_ready(document: &web::Document, handler: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(handler);
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            closure.unchecked_ref(),
            &opts,
        );
    } else {
        handler();
    }
}

/// Run `handler` once every subresource has loaded (window `load`).
pub fn on_window_load(handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let complete = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        handler();
        return;
    }
    let closure = Closure::once_into_js(handler);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        closure.unchecked_ref(),
        &opts,
    );
}

/// Size a canvas backing store to the viewport at a capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = capped_dpr(&w);
    let (vw, vh) = viewport_size(&w);
    let w_px = ((vw * dpr).floor() as u32).max(1);
    let h_px = ((vh * dpr).floor() as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    dpr
}

/// Keep a canvas sized on every window resize.
pub fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    mut on_resize: impl FnMut(&web::HtmlCanvasElement, f64) + 'static,
) {
    let dpr = sync_canvas_backing_size(canvas);
    on_resize(canvas, dpr);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        listen(&window, "resize", move |_: web::Event| {
            let dpr = sync_canvas_backing_size(&canvas_resize);
            on_resize(&canvas_resize, dpr);
        });
    }
}
