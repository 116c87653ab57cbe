//! Spring tweens via `gsap.quickTo`, applied to a plain JS proxy object so the
//! frame loop can read the smoothed values back.

use crate::js;
use folio_core::widgets::TweenOptions;
use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};

pub struct QuickTween {
    proxy: JsValue,
    setters: Vec<(&'static str, Function)>,
}

impl QuickTween {
    /// Tween each of `props` on a fresh proxy seeded with `initial`.
    /// Returns `None` when gsap isn't loaded.
    pub fn new(props: &[(&'static str, f64)], options: &TweenOptions) -> Option<Self> {
        let gsap = js::global("gsap")?;
        let opts = js::to_js(options).ok()?;
        let proxy = js::object();
        let mut setters = Vec::with_capacity(props.len());
        for &(prop, initial) in props {
            js::set(&proxy, prop, initial);
            let setter = js::call(&gsap, "quickTo", &[proxy.clone(), prop.into(), opts.clone()])
                .ok()?
                .dyn_into::<Function>()
                .ok()?;
            setters.push((prop, setter));
        }
        Some(Self { proxy, setters })
    }

    /// Retarget one property.
    pub fn to(&self, prop: &str, value: f64) {
        if let Some((_, f)) = self.setters.iter().find(|(p, _)| *p == prop) {
            let _ = f.call1(&JsValue::NULL, &value.into());
        }
    }

    #[inline]
    pub fn value(&self, prop: &str) -> f64 {
        js::number(&self.proxy, prop)
    }
}
