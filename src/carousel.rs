use crate::constants::{
    CAROUSEL_NEXT_ID, CAROUSEL_PREV_ID, CAROUSEL_SLIDE_SELECTOR, CAROUSEL_TRACK_ID,
};
use crate::core::constants::AUTO_ROTATE_INTERVAL_MS;
use crate::core::{carousel_direction_for_key, AutoRotate, CarouselState, Direction, IntervalHost};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval` on the window, always firing the same callback.
pub struct WindowInterval {
    window: web::Window,
    tick: js_sys::Function,
}

impl IntervalHost for WindowInterval {
    type Handle = i32;

    fn set_interval(&mut self, period_ms: u32) -> Option<i32> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(&self.tick, period_ms as i32)
            .map_err(|e| log::error!("[carousel] setInterval error: {:?}", e))
            .ok()
    }

    fn clear_interval(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}

#[derive(Clone)]
struct Carousel {
    track: web::HtmlElement,
    state: Rc<RefCell<CarouselState>>,
    auto: Rc<RefCell<AutoRotate<WindowInterval>>>,
}

fn rotate_track(state: &RefCell<CarouselState>, track: &web::HtmlElement, direction: Direction) {
    let transform = {
        let mut st = state.borrow_mut();
        let deg = st.rotate(direction);
        log::debug!("[carousel] {:?} -> {}deg", direction, deg);
        st.transform()
    };
    dom::set_style(track, "transform", &transform);
}

impl Carousel {
    /// Button or key: rotate, then push the next auto step a full period out.
    fn manual(&self, direction: Direction) {
        rotate_track(&self.state, &self.track, direction);
        self.auto.borrow_mut().restart();
    }
}

pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let (Some(track), Some(prev), Some(next)) = (
        dom::html_by_id(document, CAROUSEL_TRACK_ID),
        dom::html_by_id(document, CAROUSEL_PREV_ID),
        dom::html_by_id(document, CAROUSEL_NEXT_ID),
    ) else {
        return Ok(());
    };
    let slide_count = dom::query_all(document, CAROUSEL_SLIDE_SELECTOR).len();
    let Some(state) = CarouselState::new(slide_count) else {
        log::warn!("[carousel] no slides; carousel disabled");
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let state = Rc::new(RefCell::new(state));
    let tick = {
        let state = state.clone();
        let track = track.clone();
        Closure::wrap(Box::new(move || {
            rotate_track(&state, &track, Direction::Next);
        }) as Box<dyn FnMut()>)
    };
    let host = WindowInterval {
        window,
        tick: tick.as_ref().unchecked_ref::<js_sys::Function>().clone(),
    };
    tick.forget();

    let carousel = Carousel {
        track,
        state,
        auto: Rc::new(RefCell::new(AutoRotate::new(host, AUTO_ROTATE_INTERVAL_MS))),
    };

    let c = carousel.clone();
    dom::add_click_listener(&next, move || c.manual(Direction::Next));
    let c = carousel.clone();
    dom::add_click_listener(&prev, move || c.manual(Direction::Prev));

    let c = carousel.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        if let Some(direction) = carousel_direction_for_key(&ev.key()) {
            c.manual(direction);
        }
    });

    carousel.auto.borrow_mut().start();
    log::info!(
        "[carousel] installed: {} slides, step {}deg",
        slide_count,
        carousel.state.borrow().step_deg()
    );
    Ok(())
}
