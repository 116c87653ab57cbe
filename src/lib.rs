#![cfg(target_arch = "wasm32")]
use folio_core::selectors::SITE_CONFIG_ID;
use folio_core::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod effects;
mod form;
mod frame;
mod hover;
mod js;
mod nav;
mod overlay;
mod reveal;
mod scene;
mod scroll;
mod style;
mod transforms;
mod tween;
mod widgets;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // the logger passes everything; the site config picks the max level
    console_log::init_with_level(log::Level::Trace).ok();
    log::set_max_level(log::LevelFilter::Info);
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let ready = document.clone();
    dom::run_when_ready(&ready, move || init(&document));
    Ok(())
}

/// Inline `<script type="application/json" id="folio-config">`, defaults when
/// absent or malformed.
fn site_config(document: &web::Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    let config = SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("[config] {e}; using defaults");
        SiteConfig::default()
    });
    match config.level_filter() {
        Ok(level) => log::set_max_level(level),
        Err(e) => log::warn!("[config] {e}"),
    }
    config
}

/// One failing component must not take the rest of the page down with it.
fn isolated(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{name}] init failed: {e:?}");
    }
}

fn init(document: &web::Document) {
    let config = site_config(document);
    let motion = web::window()
        .map(|w| effects::gate(&w).allows())
        .unwrap_or(false);

    let scroll = scroll::ScrollProvider::install(&config);
    isolated("nav", nav::install(document, &scroll));

    let slot = scene::SceneSlot::default();
    isolated("scene", scene::install(document, &config, &slot));
    isolated("effects", effects::install(document, config.cursor, &slot));
    isolated("hover", hover::install(document, motion));

    isolated("reveal", reveal::install_reveal(document));
    reveal::install_parallax(document, &scroll);
    reveal::install_scroll_spy(document, &scroll);
    reveal::install_scroll_top(document, &scroll);
    reveal::install_hash_scroll(&scroll);
    reveal::install_section_tweens(document);
    reveal::install_gradient_text(document);

    overlay::install_preloader(document);
    widgets::install(document);
    isolated("form", form::install(document));
    log::info!("folio-web ready");
}
