use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Look up an element by id; logs and returns `None` when the page lacks it.
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("missing #{}", id);
    }
    el.and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`. An invalid selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    add_listener(el, "click", move |_: web::MouseEvent| handler());
}

/// One-shot timer. Returns the timeout handle, or `None` if scheduling failed.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .map_err(|e| log::error!("setTimeout error: {:?}", e))
        .ok()
}

/// Resolve once the document has been parsed. Immediate when it already has.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != web::DocumentReadyState::Loading {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let once = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref());
    });
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}
