use crate::constants::LOADER_ID;
use crate::core::constants::{LOADER_FADE_MS, LOADER_FALLBACK_DELAY_MS, LOADER_GRACE_DELAY_MS};
use crate::core::{HideTrigger, LoaderLatch};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared hide latch. Created at module start so the fallback timer counts
/// from script start; the overlay is looked up when a trigger fires.
#[derive(Clone)]
pub struct LoaderGate {
    latch: Rc<RefCell<LoaderLatch>>,
    started: Instant,
}

impl LoaderGate {
    /// Create the gate and arm the absolute fallback timer.
    pub fn arm() -> Self {
        let gate = Self {
            latch: Rc::new(RefCell::new(LoaderLatch::default())),
            started: Instant::now(),
        };
        let g = gate.clone();
        dom::set_timeout(LOADER_FALLBACK_DELAY_MS, move || g.hide(HideTrigger::Fallback));
        gate
    }

    /// Fade the overlay out, then remove it from layout. Runs once.
    pub fn hide(&self, by: HideTrigger) {
        let Some(overlay) = dom::window_document().and_then(|d| dom::html_by_id(&d, LOADER_ID))
        else {
            return;
        };
        if !self.latch.borrow_mut().trigger(by) {
            return;
        }
        log::info!(
            "[loader] hiding via {:?} after {} ms",
            by,
            self.started.elapsed().as_millis()
        );
        dom::set_style(&overlay, "opacity", "0");
        dom::set_timeout(LOADER_FADE_MS, move || {
            dom::set_style(&overlay, "display", "none");
        });
    }
}

/// Wire the load-driven path: window `load` plus the grace delay.
pub fn install(document: &web::Document, gate: &LoaderGate) -> anyhow::Result<()> {
    if dom::html_by_id(document, LOADER_ID).is_none() {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let schedule_grace = {
        let gate = gate.clone();
        move || {
            dom::set_timeout(LOADER_GRACE_DELAY_MS, move || gate.hide(HideTrigger::Load));
        }
    };
    // The module may start after `load` has already fired.
    if document.ready_state() == web::DocumentReadyState::Complete {
        schedule_grace();
    } else {
        let mut schedule = Some(schedule_grace);
        dom::add_listener(&window, "load", move |_: web::Event| {
            if let Some(f) = schedule.take() {
                f();
            }
        });
    }
    log::info!("[loader] installed");
    Ok(())
}
