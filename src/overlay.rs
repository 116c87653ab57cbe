//! Background layers, the loading screen and the legacy `#preloader`.

use crate::frame::FrameLoop;
use crate::{dom, js, style};
use folio_core::constants::*;
use folio_core::selectors::*;
use folio_core::LoadingProgress;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    let _ = el.class_list().remove_1(HIDDEN_CLASS);
}

#[inline]
pub fn hide(el: &web::Element) {
    let _ = el.class_list().add_1(HIDDEN_CLASS);
}

/// Element handles for the layers created by [`ensure_layers`].
pub struct Layers {
    pub scene_canvas: web::HtmlCanvasElement,
    pub spinner: web::Element,
    pub screen: LoadingScreen,
}

fn decorative(el: &web::Element) {
    let _ = el.set_attribute("aria-hidden", "true");
}

/// Create any missing background layer. Existing layers are reused, so
/// running this twice never duplicates nodes.
pub fn ensure_layers(document: &web::Document) -> anyhow::Result<Layers> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;

    let (bg, created) = dom::ensure_by_id(document, "div", SCENE_BG_ID)?;
    if created {
        body.prepend_with_node_1(&bg).map_err(dom::js_err)?;
    }
    let (canvas, created) = dom::ensure_by_id(document, "canvas", SCENE_CANVAS_ID)?;
    if created {
        decorative(&canvas);
        bg.append_child(&canvas).map_err(dom::js_err)?;
    }
    let scene_canvas = canvas
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{SCENE_CANVAS_ID} is not a canvas"))?;

    let (spinner, created) = dom::ensure_by_id(document, "div", SCENE_SPINNER_ID)?;
    if created {
        decorative(&spinner);
        let inner = dom::create_with_class(document, "div", "spline-spinner")?;
        spinner.append_child(&inner).map_err(dom::js_err)?;
        body.append_child(&spinner).map_err(dom::js_err)?;
    }

    let screen = LoadingScreen::ensure(document, &body)?;

    for id in [NOISE_OVERLAY_ID, CONTRAST_OVERLAY_ID] {
        let (el, created) = dom::ensure_by_id(document, "div", id)?;
        if created {
            decorative(&el);
            body.append_child(&el).map_err(dom::js_err)?;
        }
    }

    Ok(Layers {
        scene_canvas,
        spinner,
        screen,
    })
}

/// `#loading-screen` with an eased percentage and bar.
#[derive(Clone)]
pub struct LoadingScreen {
    inner: Rc<ScreenInner>,
}

struct ScreenInner {
    root: web::Element,
    percent: Option<web::Element>,
    fill: Option<web::Element>,
    progress: RefCell<LoadingProgress>,
    ticker: RefCell<Option<FrameLoop>>,
}

impl LoadingScreen {
    fn ensure(document: &web::Document, body: &web::HtmlElement) -> anyhow::Result<Self> {
        let (root, created) = dom::ensure_by_id(document, "div", LOADING_SCREEN_ID)?;
        if created {
            let inner = dom::create_with_class(document, "div", "loading-inner")?;
            let label = dom::create_with_class(document, "div", "loading-label")?;
            label.set_text_content(Some("Loading"));
            let percent = dom::create_with_class(document, "div", "loading-percent")?;
            percent.set_text_content(Some("0%"));
            let bar = dom::create_with_class(document, "div", "loading-bar")?;
            let fill = dom::create_with_class(document, "div", "loading-bar-fill")?;
            bar.append_child(&fill).map_err(dom::js_err)?;
            for child in [&label, &percent, &bar] {
                inner.append_child(child).map_err(dom::js_err)?;
            }
            root.append_child(&inner).map_err(dom::js_err)?;
            body.append_child(&root).map_err(dom::js_err)?;
        }
        let percent = dom::query_in(&root, ".loading-percent");
        let fill = dom::query_in(&root, ".loading-bar-fill");
        let screen = Self {
            inner: Rc::new(ScreenInner {
                root,
                percent,
                fill,
                progress: RefCell::new(LoadingProgress::default()),
                ticker: RefCell::new(None),
            }),
        };
        screen.paint(0);
        Ok(screen)
    }

    fn paint(&self, p: u8) {
        let text = style::percent(p);
        if let Some(el) = &self.inner.percent {
            el.set_text_content(Some(&text));
        }
        if let Some(el) = &self.inner.fill {
            dom::set_style(el, "width", &text);
        }
    }

    /// Show the screen and start creeping toward the ceiling.
    pub fn start(&self) {
        if self.inner.progress.borrow().is_done() {
            return;
        }
        show(&self.inner.root);
        let mut ticker = self.inner.ticker.borrow_mut();
        if ticker.is_some() {
            return;
        }
        let screen = self.clone();
        let frames = FrameLoop::new(move |now| {
            let mut progress = screen.inner.progress.borrow_mut();
            if progress.is_done() {
                return ControlFlow::Break(());
            }
            if let Some(p) = progress.tick(now) {
                drop(progress);
                screen.paint(p);
            }
            ControlFlow::Continue(())
        });
        frames.start();
        *ticker = Some(frames);
    }

    /// Jump to 100%, fade out and hide. Only the first call has an effect.
    pub fn finish(&self) {
        if !self.inner.progress.borrow_mut().finish() {
            return;
        }
        if let Some(frames) = self.inner.ticker.borrow().as_ref() {
            frames.stop();
        }
        self.paint(100);
        let root = self.inner.root.clone();
        if let Some(gsap) = js::global("gsap") {
            let vars = js::object();
            js::set(&vars, "opacity", 0.0);
            js::set(&vars, "duration", f64::from(LOADER_FADE_MS) / 1000.0);
            js::set(&vars, "ease", "power3.out");
            let done = root.clone();
            let on_complete = wasm_bindgen::closure::Closure::once_into_js(move || hide(&done));
            js::set(&vars, "onComplete", on_complete);
            if js::call(&gsap, "to", &[root.clone().into(), vars]).is_ok() {
                return;
            }
        }
        hide(&root);
    }
}

/// Fade out and remove `#preloader` once the window has loaded.
pub fn install_preloader(document: &web::Document) {
    let Some(preloader) = dom::query(document, PRELOADER) else {
        return;
    };
    dom::on_window_load(move || {
        dom::set_style(&preloader, "opacity", "0");
        dom::set_style(
            &preloader,
            "transition",
            &format!("opacity {} ease", style::ms(PRELOADER_FADE_MS)),
        );
        dom::set_timeout(PRELOADER_FADE_MS, move || preloader.remove());
    });
}
