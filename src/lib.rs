#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod core;
mod cursor;
mod dom;
mod loader;
mod nav;
mod parallax;
mod reveal;

type Install = fn(&web::Document) -> anyhow::Result<()>;

// Each unit is independent; one failing to install leaves the others running.
const CONTROLLERS: &[(&str, Install)] = &[
    ("cursor", cursor::install),
    ("parallax", parallax::install),
    ("carousel", carousel::install),
    ("reveal", reveal::install),
    ("smooth-scroll", nav::install_smooth_scroll),
    ("card-keys", nav::install_card_keys),
];

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx starting");
    let loader_gate = loader::LoaderGate::arm();

    spawn_local(async move {
        if let Err(e) = init(loader_gate).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(loader_gate: loader::LoaderGate) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    if let Err(e) = loader::install(&document, &loader_gate) {
        log::error!("[loader] install failed: {:?}", e);
    }

    for (name, install) in CONTROLLERS {
        if let Err(e) = install(&document) {
            log::error!("[{}] install failed: {:?}", name, e);
        }
    }
    Ok(())
}
