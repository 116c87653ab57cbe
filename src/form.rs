//! Contact form submission over `fetch`.

use crate::dom;
use folio_core::selectors::*;
use folio_core::{ContactForm, FormError, FormRequest, FormResponse, NetworkError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct FormDom {
    form: web::HtmlFormElement,
    loading: Option<web::Element>,
    error: Option<web::Element>,
    sent: Option<web::Element>,
    submit: Vec<web::Element>,
}

impl FormDom {
    fn render(&self, state: &ContactForm) {
        let shown = state.indicators();
        for (el, on) in [
            (&self.loading, shown.loading),
            (&self.error, shown.error),
            (&self.sent, shown.sent),
        ] {
            if let Some(el) = el {
                dom::toggle_class(el, VISIBLE_CLASS, on);
            }
        }
        if let (Some(el), Some(msg)) = (&self.error, state.error_message()) {
            el.set_text_content(Some(msg));
        }
        for button in &self.submit {
            if state.submit_enabled() {
                let _ = button.remove_attribute("disabled");
            } else {
                let _ = button.set_attribute("disabled", "");
            }
        }
    }

    /// String entries of the form; file inputs are skipped.
    fn fields(&self) -> anyhow::Result<Vec<(String, String)>> {
        let data = web::FormData::new_with_form(&self.form).map_err(dom::js_err)?;
        let mut fields = Vec::new();
        let Some(entries) = js_sys::try_iter(&data).map_err(dom::js_err)? else {
            return Ok(fields);
        };
        for entry in entries {
            let pair: js_sys::Array = entry.map_err(dom::js_err)?.unchecked_into();
            if let (Some(k), Some(v)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push((k, v));
            }
        }
        Ok(fields)
    }
}

pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = dom::query(document, CONTACT_FORM) else {
        return Ok(());
    };
    let form = form
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|_| anyhow::anyhow!("{CONTACT_FORM} is not a form"))?;
    let ui = Rc::new(FormDom {
        loading: dom::query_in(&form, FORM_LOADING),
        error: dom::query_in(&form, FORM_ERROR),
        sent: dom::query_in(&form, FORM_SENT),
        submit: dom::query_all(&form, FORM_SUBMIT),
        form: form.clone(),
    });
    let state = Rc::new(RefCell::new(ContactForm::default()));

    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let fields = match ui.fields() {
            Ok(f) => f,
            Err(e) => {
                log::error!("[form] reading fields: {e:?}");
                return;
            }
        };
        let action = ui.form.get_attribute("action");
        let request = match state.borrow_mut().begin(action.as_deref(), fields) {
            Ok(r) => r,
            Err(FormError::InFlight) => {
                log::debug!("[form] submit ignored, request pending");
                return;
            }
        };
        ui.render(&state.borrow());

        let (ui, state) = (ui.clone(), state.clone());
        spawn_local(async move {
            let result = post(&request).await;
            let outcome = state.borrow_mut().finish(result);
            ui.render(&state.borrow());
            if outcome.reset_fields {
                ui.form.reset();
            }
        });
    });
    log::info!("[form] contact form wired");
    Ok(())
}

async fn post(request: &FormRequest) -> Result<FormResponse, NetworkError> {
    let net = |e: JsValue| NetworkError(format!("{:?}", e));
    let window = web::window().ok_or_else(|| NetworkError("no window".into()))?;

    let headers = web::Headers::new().map_err(net)?;
    headers
        .set("Content-Type", request.content_type)
        .map_err(net)?;
    let init = web::RequestInit::new();
    init.set_method(request.method);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request.body));
    let req = web::Request::new_with_str_and_init(&request.action, &init).map_err(net)?;

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(net)?
        .unchecked_into();
    let body = match resp.text() {
        Ok(p) => JsFuture::from(p).await.ok().and_then(|t| t.as_string()),
        Err(_) => None,
    };
    Ok(FormResponse {
        status: resp.status(),
        status_text: resp.status_text(),
        body,
    })
}
