use crate::constants::{CURSOR_BODY_CLASS, CURSOR_DOT_ID, CURSOR_TOGGLE_ID, INTERACTIVE_SELECTOR};
use crate::core::{px, CursorState, CursorView, HoverStyle};
use crate::dom;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CursorController {
    state: RefCell<CursorState>,
    dot: web::HtmlElement,
    toggle: web::HtmlElement,
    body: Option<web::HtmlElement>,
    frame_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let (Some(dot), Some(toggle)) = (
        dom::html_by_id(document, CURSOR_DOT_ID),
        dom::html_by_id(document, CURSOR_TOGGLE_ID),
    ) else {
        return Ok(());
    };

    let ctl = Rc::new(CursorController {
        state: RefCell::new(CursorState::default()),
        dot,
        toggle: toggle.clone(),
        body: document.body(),
        frame_cb: RefCell::new(None),
    });

    let weak: Weak<CursorController> = Rc::downgrade(&ctl);
    *ctl.frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(c) = weak.upgrade() {
            c.on_frame();
        }
    }) as Box<dyn FnMut()>));

    let c = ctl.clone();
    dom::add_click_listener(&toggle, move || c.toggle());

    let c = ctl.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        c.state
            .borrow_mut()
            .record_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });

    wire_hover(document, &ctl);
    log::info!("[cursor] installed");
    Ok(())
}

impl CursorController {
    pub fn toggle(&self) {
        let view = self.state.borrow_mut().toggle();
        self.apply_view(view);
        let start = self.state.borrow_mut().request_frame();
        if start {
            self.request_frame();
        }
        log::info!("[cursor] enabled={}", view.enabled);
    }

    fn apply_view(&self, view: CursorView) {
        if let Some(body) = &self.body {
            let cl = body.class_list();
            _ = if view.enabled {
                cl.add_1(CURSOR_BODY_CLASS)
            } else {
                cl.remove_1(CURSOR_BODY_CLASS)
            };
        }
        dom::set_style(&self.dot, "display", view.display);
        self.toggle.set_text_content(Some(view.label));
    }

    fn on_frame(&self) {
        let step = self.state.borrow_mut().frame();
        if let Some(p) = step.paint {
            dom::set_style(&self.dot, "left", &px(p.x));
            dom::set_style(&self.dot, "top", &px(p.y));
        }
        if step.reschedule {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.frame_cb.borrow().as_ref() {
            if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("[cursor] requestAnimationFrame error: {:?}", e);
                self.state.borrow_mut().frame_request_failed();
            }
        }
    }

    fn apply_hover(&self, entering: bool) {
        let style: Option<HoverStyle> = self.state.borrow().hover(entering);
        if let Some(style) = style {
            dom::set_style(&self.dot, "transform", &style.transform());
            dom::set_style(&self.dot, "border-color", style.border_color);
        }
    }
}

fn interactive_ancestor(target: Option<web::EventTarget>) -> Option<web::Element> {
    target?
        .dyn_into::<web::Element>()
        .ok()?
        .closest(INTERACTIVE_SELECTOR)
        .ok()
        .flatten()
}

// Delegated on the document so elements inserted after startup get hover
// feedback too. mouseover/mouseout bubble; an enter or leave only counts when
// the pointer crosses the boundary of the nearest interactive ancestor.
// Leaving a nested interactive child for its interactive parent ends hovered.
fn wire_hover(document: &web::Document, ctl: &Rc<CursorController>) {
    let c = ctl.clone();
    dom::add_listener(document, "mouseover", move |ev: web::MouseEvent| {
        if let Some(el) = interactive_ancestor(ev.target()) {
            if interactive_ancestor(ev.related_target()).as_ref() != Some(&el) {
                c.apply_hover(true);
            }
        }
    });

    let c = ctl.clone();
    dom::add_listener(document, "mouseout", move |ev: web::MouseEvent| {
        if let Some(el) = interactive_ancestor(ev.target()) {
            if interactive_ancestor(ev.related_target()).as_ref() != Some(&el) {
                c.apply_hover(false);
            }
        }
    });
}
