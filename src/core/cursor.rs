// Custom cursor state, independent of the DOM. The web side feeds pointer
// positions and toggle clicks in and applies the returned views and styles.

use super::constants::{
    CURSOR_HOVER_COLOR, CURSOR_HOVER_SCALE, CURSOR_LABEL_OFF, CURSOR_LABEL_ON, CURSOR_REST_COLOR,
    CURSOR_REST_SCALE,
};
use glam::Vec2;

/// What the toggle control, body marker and indicator should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorView {
    pub enabled: bool,
    pub label: &'static str,
    pub display: &'static str,
}

impl CursorView {
    pub fn for_enabled(enabled: bool) -> Self {
        if enabled {
            Self {
                enabled,
                label: CURSOR_LABEL_ON,
                display: "block",
            }
        } else {
            Self {
                enabled,
                label: CURSOR_LABEL_OFF,
                display: "none",
            }
        }
    }
}

/// Outcome of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStep {
    /// Position to write into the indicator, if it moved since the last paint.
    pub paint: Option<Vec2>,
    /// Whether another frame must be requested.
    pub reschedule: bool,
}

/// Indicator style for hover enter/leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverStyle {
    pub scale: f32,
    pub border_color: &'static str,
}

impl HoverStyle {
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

#[derive(Default, Clone, Debug)]
pub struct CursorState {
    enabled: bool,
    pointer: Vec2,
    rendered: Option<Vec2>,
    frame_pending: bool,
}

impl CursorState {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn rendered(&self) -> Option<Vec2> {
        self.rendered
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn view(&self) -> CursorView {
        CursorView::for_enabled(self.enabled)
    }

    pub fn toggle(&mut self) -> CursorView {
        self.enabled = !self.enabled;
        self.view()
    }

    /// Record the latest raw pointer position. Painting happens per frame.
    pub fn record_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Claim the right to request a frame. Returns true when the caller must
    /// call `requestAnimationFrame`; at most one request is outstanding.
    pub fn request_frame(&mut self) -> bool {
        if self.enabled && !self.frame_pending {
            self.frame_pending = true;
            true
        } else {
            false
        }
    }

    /// The platform refused the frame request; release the claim so the next
    /// toggle can start the loop again.
    pub fn frame_request_failed(&mut self) {
        self.frame_pending = false;
    }

    /// Run one frame. A disabled cursor ends the loop without painting, which
    /// leaves the last written position and hover style in place.
    pub fn frame(&mut self) -> FrameStep {
        self.frame_pending = false;
        if !self.enabled {
            return FrameStep {
                paint: None,
                reschedule: false,
            };
        }
        let paint = if self.rendered == Some(self.pointer) {
            None
        } else {
            self.rendered = Some(self.pointer);
            Some(self.pointer)
        };
        self.frame_pending = true;
        FrameStep {
            paint,
            reschedule: true,
        }
    }

    /// Style to apply when the pointer enters or leaves an interactive element.
    /// `None` while the cursor is disabled.
    pub fn hover(&self, entering: bool) -> Option<HoverStyle> {
        if !self.enabled {
            return None;
        }
        Some(if entering {
            HoverStyle {
                scale: CURSOR_HOVER_SCALE,
                border_color: CURSOR_HOVER_COLOR,
            }
        } else {
            HoverStyle {
                scale: CURSOR_REST_SCALE,
                border_color: CURSOR_REST_COLOR,
            }
        })
    }
}

/// Format a pixel coordinate for an inline style (`12px`).
#[inline]
pub fn px(v: f32) -> String {
    // avoid "-0px"
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{}px", v)
}
