//! Reflection helpers for the optional third-party globals (gsap, Lenis,
//! Swiper, ...). Every lookup returns `None` when the library isn't loaded so
//! callers can skip their component.

use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    /// Dynamic `import()` of an ES module by URL.
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> Result<js_sys::Promise, JsValue>;
}

pub async fn import(url: &str) -> Result<JsValue, JsValue> {
    let promise = import_module(url)?;
    wasm_bindgen_futures::JsFuture::from(promise).await
}

#[inline]
fn defined(v: JsValue) -> Option<JsValue> {
    if v.is_undefined() || v.is_null() {
        None
    } else {
        Some(v)
    }
}

/// `globalThis[name]`, if defined.
pub fn global(name: &str) -> Option<JsValue> {
    get(&js_sys::global(), name)
}

/// `target[key]`, if defined.
pub fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(defined)
}

/// `target[key]` as a function.
pub fn method(target: &JsValue, key: &str) -> Option<Function> {
    get(target, key).and_then(|f| f.dyn_into::<Function>().ok())
}

pub fn set(target: &JsValue, key: &str, value: impl Into<JsValue>) -> bool {
    Reflect::set(target, &JsValue::from_str(key), &value.into()).unwrap_or(false)
}

#[inline]
pub fn has(target: &JsValue, key: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(key)).unwrap_or(false)
}

/// Call `target[name](...args)` with `target` as `this`.
pub fn call(target: &JsValue, name: &str, args: &[JsValue]) -> anyhow::Result<JsValue> {
    let f = method(target, name).ok_or_else(|| anyhow::anyhow!("{name} is not a function"))?;
    let args: Array = args.iter().collect();
    f.apply(target, &args)
        .map_err(|e| anyhow::anyhow!("{name}: {:?}", e))
}

/// `new ctor(...args)`.
pub fn construct(ctor: &JsValue, args: &[JsValue]) -> anyhow::Result<JsValue> {
    let ctor: &Function = ctor
        .dyn_ref::<Function>()
        .ok_or_else(|| anyhow::anyhow!("not a constructor"))?;
    let args: Array = args.iter().collect();
    Reflect::construct(ctor, &args).map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Serialize a config struct into a plain JS object (maps become objects).
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<JsValue> {
    let ser = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&ser)
        .map_err(|e| anyhow::anyhow!("serialize: {e}"))
}

/// Empty `{}` to hang properties on.
#[inline]
pub fn object() -> JsValue {
    Object::new().into()
}

/// Read a numeric property, defaulting to zero.
#[inline]
pub fn number(target: &JsValue, key: &str) -> f64 {
    get(target, key).and_then(|v| v.as_f64()).unwrap_or(0.0)
}
