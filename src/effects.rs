//! Custom cursor, particle trail and the scene followers, all advanced from
//! one animation frame loop.

use crate::frame::FrameLoop;
use crate::scene::{SceneHandle, SceneSlot};
use crate::tween::QuickTween;
use crate::{dom, style};
use folio_core::constants::*;
use folio_core::selectors::*;
use folio_core::widgets::TweenOptions;
use folio_core::{
    normalize_pointer, CameraRig, EffectsGate, FollowRange, Follower, FollowerParams,
    ParticleTrail, PointerState, ScenePose, Smoothing,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read the motion and pointer media queries.
pub fn gate(window: &web::Window) -> EffectsGate {
    EffectsGate {
        reduced_motion: dom::media_matches(window, REDUCED_MOTION_QUERY),
        fine_pointer: dom::media_matches(window, FINE_POINTER_QUERY),
    }
}

struct Engine {
    pointer: PointerState,
    trail: ParticleTrail,
    rng: StdRng,
    stars: Follower,
    tornado: Follower,
    camera: CameraRig,
    viewport: Vec2,
    cursor_tween: Option<QuickTween>,
    camera_tween: Option<QuickTween>,
    cursor: web::Element,
    ctx: web::CanvasRenderingContext2d,
    slot: SceneSlot,
}

impl Engine {
    fn frame(&mut self) {
        let smoothing = match &self.cursor_tween {
            Some(t) => {
                self.pointer.pos = Vec2::new(t.value("x") as f32, t.value("y") as f32);
                self.pointer.scale = t.value("scale") as f32;
                Smoothing::Tween
            }
            None => Smoothing::Fallback,
        };
        let speed = self.pointer.frame(smoothing);
        let p = self.pointer;
        dom::set_style(
            &self.cursor,
            "transform",
            &style::cursor_transform(p.pos.x, p.pos.y, p.scale),
        );

        self.trail.emit(p.pos, speed, &mut self.rng);
        if let Some(scene) = self.slot.get() {
            self.drive_scene(&scene);
        }
        self.draw_trail();
    }

    fn drive_scene(&mut self, scene: &SceneHandle) {
        if ScenePose::for_width(f64::from(self.viewport.x)) == ScenePose::Static {
            return;
        }
        let range = FollowRange::from_viewport(self.viewport.x, self.viewport.y);
        let target = range.target_for(normalize_pointer(self.pointer.pos, self.viewport));

        for (obj, follower, params) in [
            (&scene.stars, &mut self.stars, &FollowerParams::STARS),
            (&scene.tornado, &mut self.tornado, &FollowerParams::TORNADO),
        ] {
            let Some(obj) = obj else {
                continue;
            };
            follower.step(target, params, &range);
            let out = follower.output(params);
            SceneHandle::set_position(obj, f64::from(out.x), f64::from(out.y));
        }

        if scene.camera.is_some() {
            match &self.camera_tween {
                Some(t) => {
                    self.camera.smooth = Vec2::new(t.value("nx") as f32, t.value("ny") as f32);
                }
                None => self.camera.smooth_step(),
            }
            let r = self.camera.rotation();
            scene.set_camera_rotation(f64::from(r.x), f64::from(r.y));
        }
    }

    fn draw_trail(&mut self) {
        self.trail.advance();
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.viewport.x),
            f64::from(self.viewport.y),
        );
        ctx.set_fill_style_str(PARTICLE_FILL);
        for s in self.trail.sprites() {
            ctx.set_global_alpha(f64::from(s.alpha));
            ctx.begin_path();
            let _ = ctx.arc(
                f64::from(s.center.x),
                f64::from(s.center.y),
                f64::from(s.radius),
                0.0,
                TAU,
            );
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    fn on_move(&mut self, x: f32, y: f32) {
        self.pointer.on_move(x, y);
        if let Some(t) = &self.cursor_tween {
            t.to("x", f64::from(x));
            t.to("y", f64::from(y));
        }
        let n = normalize_pointer(Vec2::new(x, y), self.viewport);
        self.camera.on_move(n);
        if let Some(t) = &self.camera_tween {
            t.to("nx", f64::from(n.x));
            t.to("ny", f64::from(n.y));
        }
    }

    fn set_hover(&mut self, active: bool) {
        self.pointer.hover = active;
        dom::toggle_class(&self.cursor, CURSOR_HOVER_CLASS, active);
        if let Some(t) = &self.cursor_tween {
            t.to("scale", f64::from(self.pointer.target_scale()));
        }
    }

    fn resize(&mut self, dpr: f64, viewport: Vec2) {
        self.viewport = viewport;
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
}

/// Start the cursor/trail engine. Under reduced motion, a coarse pointer or
/// `cursor: false` nothing is created and no listener is attached.
pub fn install(
    document: &web::Document,
    enabled: bool,
    slot: &SceneSlot,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    match gate(&window).install_with(enabled, || start(document, &window, slot)) {
        Some(started) => started,
        None => {
            log::info!("[effects] inert");
            Ok(())
        }
    }
}

fn start(document: &web::Document, window: &web::Window, slot: &SceneSlot) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;

    let canvas = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("canvas element"))?;
    canvas.set_id(TRAIL_CANVAS_ID);
    let _ = canvas.set_attribute("aria-hidden", "true");
    body.append_child(&canvas).map_err(dom::js_err)?;
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    {
        Some(ctx) => ctx,
        None => {
            log::warn!("[effects] no 2d context, cursor disabled");
            canvas.remove();
            return Ok(());
        }
    };

    let cursor = dom::create_with_class(document, "div", CURSOR_CLASS)?;
    body.append_child(&cursor).map_err(dom::js_err)?;
    let _ = body.class_list().add_1(CUSTOM_CURSOR_BODY_CLASS);

    let (vw, vh) = dom::viewport_size(window);
    let viewport = Vec2::new(vw as f32, vh as f32);
    let pointer = PointerState::centered(viewport);
    let cursor_tween = QuickTween::new(
        &[
            ("x", f64::from(pointer.pos.x)),
            ("y", f64::from(pointer.pos.y)),
            ("scale", f64::from(pointer.scale)),
        ],
        &TweenOptions::power3_out(CURSOR_TWEEN_SEC),
    );
    let camera_tween = QuickTween::new(
        &[("nx", 0.0), ("ny", 0.0)],
        &TweenOptions::power3_out(CAMERA_TWEEN_SEC),
    );
    log::info!(
        "[effects] cursor smoothing: {}",
        if cursor_tween.is_some() { "tween" } else { "fallback" }
    );

    let engine = Rc::new(RefCell::new(Engine {
        pointer,
        trail: ParticleTrail::default(),
        rng: StdRng::from_entropy(),
        stars: Follower::default(),
        tornado: Follower::default(),
        camera: CameraRig::default(),
        viewport,
        cursor_tween,
        camera_tween,
        cursor,
        ctx,
        slot: slot.clone(),
    }));

    {
        let e = engine.clone();
        dom::wire_canvas_resize(&canvas, move |canvas, dpr| {
            let Some(w) = web::window() else {
                return;
            };
            let (vw, vh) = dom::viewport_size(&w);
            dom::set_style(canvas, "width", &format!("{vw}px"));
            dom::set_style(canvas, "height", &format!("{vh}px"));
            e.borrow_mut().resize(dpr, Vec2::new(vw as f32, vh as f32));
        });
    }
    {
        let e = engine.clone();
        dom::listen_with(window, "mousemove", true, false, move |ev: web::MouseEvent| {
            e.borrow_mut()
                .on_move(ev.client_x() as f32, ev.client_y() as f32);
        });
    }
    for el in dom::query_all_doc(document, CURSOR_HOVER_TARGETS) {
        let e = engine.clone();
        dom::listen(&el, "mouseenter", move |_: web::Event| e.borrow_mut().set_hover(true));
        let e = engine.clone();
        dom::listen(&el, "mouseleave", move |_: web::Event| e.borrow_mut().set_hover(false));
    }

    let frames = {
        let e = engine.clone();
        FrameLoop::new(move |_| {
            e.borrow_mut().frame();
            ControlFlow::Continue(())
        })
    };
    frames.start();
    // the unload listener owns the loop for the lifetime of the page
    dom::listen(window, "beforeunload", move |_: web::Event| frames.stop());
    log::info!("[effects] engine running");
    Ok(())
}
