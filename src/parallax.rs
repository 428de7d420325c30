use crate::constants::{HERO_BACKGROUND_ID, HERO_FOREGROUND_ID};
use crate::core::layer_transforms;
use crate::dom;
use glam::Vec2;
use web_sys as web;

fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let (Some(foreground), Some(background)) = (
        dom::html_by_id(document, HERO_FOREGROUND_ID),
        dom::html_by_id(document, HERO_BACKGROUND_ID),
    ) else {
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let t = layer_transforms(pointer, viewport_size(&window));
        dom::set_style(&foreground, "transform", &t.foreground);
        dom::set_style(&background, "transform", &t.background);
    });
    log::info!("[parallax] installed");
    Ok(())
}
