//! Optional 3D background scene. The runtime is imported lazily and the
//! resolved handle is published through a [`SceneSlot`] for the effects
//! engine.

use crate::overlay::{self, Layers};
use crate::{dom, js, style};
use folio_core::constants::*;
use folio_core::selectors::*;
use folio_core::{resolve_target, Capability, ScenePose, SceneTarget, SiteConfig, UnavailableReason};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Scene objects the page drives.
#[derive(Clone)]
pub struct SceneHandle {
    pub camera: Option<JsValue>,
    pub stars: Option<JsValue>,
    pub tornado: Option<JsValue>,
}

impl SceneHandle {
    pub fn set_position(obj: &JsValue, x: f64, y: f64) {
        if let Some(pos) = js::get(obj, "position") {
            js::set(&pos, "x", x);
            js::set(&pos, "y", y);
        }
    }

    pub fn set_camera_rotation(&self, x: f64, y: f64) {
        if let Some(rot) = self.camera.as_ref().and_then(|c| js::get(c, "rotation")) {
            js::set(&rot, "x", x);
            js::set(&rot, "y", y);
        }
    }

    /// Camera level, followers at the origin.
    pub fn rest(&self) {
        self.set_camera_rotation(0.0, 0.0);
        for obj in [&self.stars, &self.tornado].into_iter().flatten() {
            Self::set_position(obj, 0.0, 0.0);
        }
    }
}

pub type SceneCapability = Capability<SceneHandle>;

/// Resolved-once cell shared between the loader and its consumers.
#[derive(Clone, Default)]
pub struct SceneSlot {
    inner: Rc<RefCell<Option<SceneHandle>>>,
}

impl SceneSlot {
    /// Publish the handle. Later calls are ignored.
    pub fn resolve(&self, handle: SceneHandle) -> bool {
        let mut slot = self.inner.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(handle);
        true
    }

    #[inline]
    pub fn get(&self) -> Option<SceneHandle> {
        self.inner.borrow().clone()
    }
}

/// Create the background layers and arm the deferred scene load.
pub fn install(
    document: &web::Document,
    config: &SiteConfig,
    slot: &SceneSlot,
) -> anyhow::Result<()> {
    if document.body().is_none() {
        return Ok(());
    }
    let layers = Rc::new(overlay::ensure_layers(document)?);
    dom::wire_canvas_resize(&layers.scene_canvas, |_, _| {});

    let started = Rc::new(Cell::new(false));
    let kick = {
        let (layers, started) = (layers.clone(), started.clone());
        let (config, slot) = (config.clone(), slot.clone());
        Rc::new(move || {
            if started.replace(true) {
                return;
            }
            start_load(layers.clone(), config.clone(), slot.clone());
        })
    };

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let idle = js::method(&window, "requestIdleCallback");
    match idle {
        Some(request_idle) => {
            let k = kick.clone();
            let cb = Closure::once_into_js(move || k());
            let opts = js::object();
            js::set(&opts, "timeout", SCENE_IDLE_TIMEOUT_MS);
            let _ = request_idle.call2(&window, &cb, &opts);
        }
        None => {
            let k = kick.clone();
            dom::set_timeout(SCENE_FALLBACK_DELAY_MS, move || k());
        }
    }
    {
        let k = kick.clone();
        dom::listen_with(&window, "pointerdown", true, true, move |_: web::Event| k());
    }
    dom::listen_with(&window, "keydown", false, true, move |_: web::Event| kick());
    Ok(())
}

fn start_load(layers: Rc<Layers>, config: SiteConfig, slot: SceneSlot) {
    overlay::show(&layers.spinner);
    layers.screen.start();

    let on_file = web::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|p| style::is_file_protocol(&p));
    if on_file {
        log::error!("[scene] cannot load a scene from file://; serve the site over http");
    }

    {
        let layers = layers.clone();
        dom::set_timeout(LOADER_SAFETY_TIMEOUT_MS, move || mark_loaded(&layers));
    }

    spawn_local(async move {
        match resolve(&layers.scene_canvas, &config).await {
            Capability::Available(handle) => {
                if ScenePose::for_width(dom::viewport_width()) == ScenePose::Static {
                    log::info!("[scene] narrow viewport, static pose");
                    handle.rest();
                }
                slot.resolve(handle);
                log::info!("[scene] ready");
            }
            Capability::Unavailable(reason) => log::error!("[scene] {reason}"),
        }
        mark_loaded(&layers);
    });
}

/// Dismiss the spinner and the loading screen. Safe to call repeatedly.
fn mark_loaded(layers: &Layers) {
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        let _ = body.class_list().add_1(SCENE_LOADED_BODY_CLASS);
    }
    overlay::hide(&layers.spinner);
    layers.screen.finish();
}

async fn application_ctor(runtime_url: &str) -> Option<JsValue> {
    match js::import(runtime_url).await {
        Ok(module) => {
            if let Some(ctor) = js::get(&module, "Application") {
                return Some(ctor);
            }
        }
        Err(e) => log::debug!("[scene] runtime import failed: {:?}", e),
    }
    js::global("SplineRuntime")
        .and_then(|rt| js::get(&rt, "Application"))
        .or_else(|| js::global("Application"))
}

/// Import the runtime, load the scene and look up the named objects.
pub async fn resolve(canvas: &web::HtmlCanvasElement, config: &SiteConfig) -> SceneCapability {
    if !canvas.is_connected() {
        return Capability::Unavailable(UnavailableReason::NoCanvas);
    }
    let Some(ctor) = application_ctor(&config.runtime_url).await else {
        return Capability::Unavailable(UnavailableReason::RuntimeMissing);
    };
    let app = match js::construct(&ctor, &[canvas.clone().into()]) {
        Ok(app) => app,
        Err(e) => return Capability::Unavailable(UnavailableReason::LoadFailed(e.to_string())),
    };
    let loading = match js::call(&app, "load", &[config.scene_url.as_str().into()]) {
        Ok(p) => p,
        Err(e) => return Capability::Unavailable(UnavailableReason::LoadFailed(e.to_string())),
    };
    let promise = js_sys::Promise::resolve(&loading);
    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
        return Capability::Unavailable(UnavailableReason::LoadFailed(format!("{:?}", e)));
    }

    let find = |target: SceneTarget| {
        resolve_target(target, |name| {
            js::call(&app, "findObjectByName", &[name.into()])
                .ok()
                .filter(|o| !o.is_undefined() && !o.is_null())
        })
    };
    let handle = SceneHandle {
        camera: find(SceneTarget::Camera),
        stars: find(SceneTarget::Stars),
        tornado: find(SceneTarget::Tornado),
    };
    if handle.camera.is_none() {
        log::warn!("[scene] camera not found");
    }
    if handle.stars.is_none() {
        log::warn!("[scene] stars emitter missing, mouse follow disabled for it");
    }
    if handle.tornado.is_none() {
        log::warn!("[scene] tornado object not found");
    }
    if let Some(ship) = find(SceneTarget::Ship) {
        hide_object(&ship);
        log::info!("[scene] ship hidden");
    }
    Capability::Available(handle)
}

fn hide_object(obj: &JsValue) {
    if js::has(obj, "visible") {
        js::set(obj, "visible", false);
    } else if let Some(material) = js::get(obj, "material") {
        js::set(&material, "opacity", 0.0);
        js::set(&material, "transparent", true);
    }
}
