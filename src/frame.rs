use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` loop with an explicit stop flag.
///
/// `start` is idempotent; `stop` cancels the pending frame and no further
/// frames are scheduled until the next `start`. The callback may end the loop
/// itself by returning `ControlFlow::Break`.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(w) = web::window() else {
            self.running.set(false);
            return;
        };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> ControlFlow<()> + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            running: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            if on_frame(ts).is_break() {
                inner.running.set(false);
                return;
            }
            if inner.running.get() {
                inner.schedule();
            }
        }) as Box<dyn FnMut(f64)>));
        Self { inner }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.schedule();
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let (Some(id), Some(w)) = (self.inner.pending.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}
