use crate::frame::FrameLoop;
use crate::{dom, js};
use folio_core::scroll::{ease_out_quart, ScrollDriver};
use folio_core::widgets::LenisOptions;
use folio_core::SiteConfig;
use std::ops::ControlFlow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Smooth-scroll duration for programmatic jumps, seconds.
const SCROLL_TO_DURATION: f64 = 1.2;

/// Current vertical scroll offset, from Lenis when it's driving the page and
/// from the window otherwise.
#[derive(Clone, Default)]
pub struct ScrollProvider {
    lenis: Option<JsValue>,
    /// Owns the Lenis clock when no gsap ticker is available.
    frames: Option<FrameLoop>,
}

impl ScrollProvider {
    pub fn install(config: &SiteConfig) -> Self {
        let scroll_trigger = scroll_trigger();
        let ctor = js::global("Lenis");
        let driver =
            ScrollDriver::select(config.smooth_scroll, ctor.is_some(), scroll_trigger.is_some());

        let lenis = match (driver, ctor) {
            (ScrollDriver::Native, _) | (_, None) => None,
            (_, Some(ctor)) => match build_lenis(&ctor) {
                Ok(l) => Some(l),
                Err(e) => {
                    log::error!("[scroll] lenis init failed: {e:?}");
                    None
                }
            },
        };

        let mut frames = None;
        match (&lenis, scroll_trigger) {
            (Some(lenis), Some((gsap, st))) => {
                if let Err(e) = sync_with_scroll_trigger(lenis, &gsap, &st) {
                    log::warn!("[scroll] scroll-trigger sync failed: {e:?}");
                }
                if let Err(e) = drive_from_ticker(lenis, &gsap) {
                    log::warn!("[scroll] gsap ticker unusable, using frame loop: {e:?}");
                    frames = Some(drive_from_frames(lenis));
                }
            }
            (Some(lenis), None) => frames = Some(drive_from_frames(lenis)),
            (None, Some((gsap, st))) => {
                let _ = js::call(&gsap, "registerPlugin", &[st]);
            }
            (None, None) => {}
        }
        let provider = Self { lenis, frames };
        log::info!("[scroll] provider ready ({})", provider.clock());
        provider
    }

    fn clock(&self) -> &'static str {
        match (&self.lenis, &self.frames) {
            (None, _) => "native",
            (Some(_), Some(f)) if f.is_running() => "lenis on frame loop",
            (Some(_), Some(_)) => "lenis, frame loop stopped",
            (Some(_), None) => "lenis on gsap ticker",
        }
    }

    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.lenis.is_some()
    }

    pub fn position(&self) -> f64 {
        if let Some(l) = &self.lenis {
            return js::number(l, "scroll");
        }
        web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    /// Call `handler` on every scroll update.
    pub fn on_scroll(&self, mut handler: impl FnMut() + 'static) {
        match &self.lenis {
            Some(l) => {
                let cb = Closure::wrap(
                    Box::new(move |_: JsValue| handler()) as Box<dyn FnMut(JsValue)>
                );
                let _ = js::call(l, "on", &["scroll".into(), cb.into_js_value()]);
            }
            None => {
                if let Some(w) = web::window() {
                    dom::listen_with(&w, "scroll", true, false, move |_: web::Event| handler());
                }
            }
        }
    }

    /// Smoothly scroll to `y`.
    pub fn scroll_to(&self, y: f64) {
        self.scroll_to_with(y, SCROLL_TO_DURATION);
    }

    pub fn scroll_to_with(&self, y: f64, duration: f64) {
        match &self.lenis {
            Some(l) => {
                let opts = js::object();
                js::set(&opts, "duration", duration);
                let _ = js::call(l, "scrollTo", &[y.into(), opts]);
            }
            None => {
                if let Some(w) = web::window() {
                    let opts = web::ScrollToOptions::new();
                    opts.set_top(y);
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    w.scroll_to_with_scroll_to_options(&opts);
                }
            }
        }
    }
}

/// `(gsap, ScrollTrigger)` when both are loaded.
pub fn scroll_trigger() -> Option<(JsValue, JsValue)> {
    Some((js::global("gsap")?, js::global("ScrollTrigger")?))
}

fn build_lenis(ctor: &JsValue) -> anyhow::Result<JsValue> {
    let opts = js::to_js(&LenisOptions::default())?;
    let easing = Closure::wrap(Box::new(ease_out_quart) as Box<dyn Fn(f64) -> f64>);
    js::set(&opts, "easing", easing.into_js_value());
    js::construct(ctor, &[opts])
}

/// Advance Lenis from a dedicated animation frame loop.
fn drive_from_frames(lenis: &JsValue) -> FrameLoop {
    let lenis = lenis.clone();
    let frames = FrameLoop::new(move |ts| {
        let _ = js::call(&lenis, "raf", &[ts.into()]);
        ControlFlow::Continue(())
    });
    frames.start();
    frames
}

/// Advance Lenis from the gsap ticker, which reports seconds.
fn drive_from_ticker(lenis: &JsValue, gsap: &JsValue) -> anyhow::Result<()> {
    let ticker = js::get(gsap, "ticker").ok_or_else(|| anyhow::anyhow!("gsap.ticker missing"))?;
    let lenis_raf = lenis.clone();
    let on_tick = Closure::wrap(Box::new(move |time: f64| {
        let _ = js::call(&lenis_raf, "raf", &[(time * 1000.0).into()]);
    }) as Box<dyn FnMut(f64)>);
    js::call(&ticker, "add", &[on_tick.into_js_value()])?;
    let _ = js::call(&ticker, "lagSmoothing", &[JsValue::from(0.0)]);
    Ok(())
}

/// Route ScrollTrigger's scroll reads and writes through Lenis.
fn sync_with_scroll_trigger(lenis: &JsValue, gsap: &JsValue, st: &JsValue) -> anyhow::Result<()> {
    js::call(gsap, "registerPlugin", &[st.clone()])?;
    if let Some(update) = js::get(st, "update") {
        js::call(lenis, "on", &["scroll".into(), update])?;
    }

    let proxy = js::object();
    let lenis_proxy = lenis.clone();
    let scroll_top = Closure::wrap(Box::new(move |value: JsValue| -> JsValue {
        if let Some(v) = value.as_f64() {
            let opts = js::object();
            js::set(&opts, "immediate", true);
            let _ = js::call(&lenis_proxy, "scrollTo", &[v.into(), opts]);
        }
        js::number(&lenis_proxy, "scroll").into()
    }) as Box<dyn FnMut(JsValue) -> JsValue>);
    js::set(&proxy, "scrollTop", scroll_top.into_js_value());
    let rect = Closure::wrap(Box::new(|| -> JsValue {
        let r = js::object();
        let (w, h) = web::window()
            .map(|w| dom::viewport_size(&w))
            .unwrap_or_default();
        js::set(&r, "top", 0.0);
        js::set(&r, "left", 0.0);
        js::set(&r, "width", w);
        js::set(&r, "height", h);
        r
    }) as Box<dyn FnMut() -> JsValue>);
    js::set(&proxy, "getBoundingClientRect", rect.into_js_value());

    let root = dom::window_document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;
    js::call(st, "scrollerProxy", &[root.into(), proxy])?;
    js::call(st, "refresh", &[])?;
    Ok(())
}
