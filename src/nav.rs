use crate::constants::{CARD_SELECTOR, NAV_ANCHOR_SELECTOR};
use crate::core::{hash_target, is_activation_key};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn scroll_to_hash(document: &web::Document, href: &str) {
    let Some(selector) = hash_target(href) else {
        return;
    };
    // An id that is not a valid selector throws; treat it as no target.
    if let Ok(Some(target)) = document.query_selector(selector) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        opts.set_block(web::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Smooth-scroll for in-page navigation links. The default jump is always
/// suppressed, even when the hash names nothing.
pub fn install_smooth_scroll(document: &web::Document) -> anyhow::Result<()> {
    let anchors = dom::query_all(document, NAV_ANCHOR_SELECTOR);
    for anchor in &anchors {
        let doc = document.clone();
        let a = anchor.clone();
        dom::add_listener(anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            if let Some(href) = a.get_attribute("href") {
                scroll_to_hash(&doc, &href);
            }
        });
    }
    log::info!("[nav] {} anchors", anchors.len());
    Ok(())
}

/// Enter/Space on a focused card acts like a click on it.
pub fn install_card_keys(document: &web::Document) -> anyhow::Result<()> {
    let cards: Vec<web::HtmlElement> = dom::query_all(document, CARD_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    for card in &cards {
        let c = card.clone();
        dom::add_listener(card, "keydown", move |ev: web::KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                c.click();
            }
        });
    }
    log::info!("[nav] {} keyboard-activatable cards", cards.len());
    Ok(())
}
