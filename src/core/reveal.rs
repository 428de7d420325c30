// Scroll-reveal bookkeeping: observer options and the one-way
// hidden → visible transition.

use super::constants::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// The viewport's bottom edge is pulled up by this many pixels.
    pub bottom_margin_px: i32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealOptions {
    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", -self.bottom_margin_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }

    /// Feed one intersection observation. Returns true when the element
    /// should be revealed now (and unobserved); never true twice.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }
}
