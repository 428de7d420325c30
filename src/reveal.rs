use crate::constants::{REVEAL_BASE_CLASS, REVEAL_SELECTOR, REVEAL_VISIBLE_CLASS};
use crate::core::{RevealOptions, RevealState};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn on_entries(entries: js_sys::Array, observer: web::IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let cl = target.class_list();
        let mut state = RevealState::from_visible(cl.contains(REVEAL_VISIBLE_CLASS));
        if state.observe(entry.is_intersecting()) {
            _ = cl.add_1(REVEAL_VISIBLE_CLASS);
            observer.unobserve(&target);
        }
    }
}

pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let opts = RevealOptions::default();
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    init.set_root_margin(&opts.root_margin());

    let callback = Closure::wrap(Box::new(on_entries)
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    // No observer, no fade-in: elements keep their markup state.
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(dom::js_err)?;
    callback.forget();

    for el in &targets {
        _ = el.class_list().add_1(REVEAL_BASE_CLASS);
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
