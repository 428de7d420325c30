// Host-side tests for the custom cursor state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}

use constants::*;
use cursor::*;
use glam::Vec2;

#[test]
fn cursor_starts_disabled_with_toggle_label() {
    let st = CursorState::default();
    assert!(!st.enabled());
    assert_eq!(st.view().label, "Toggle Cursor");
    assert_eq!(st.view().display, "none");
}

#[test]
fn toggle_flips_label_and_display() {
    let mut st = CursorState::default();
    let on = st.toggle();
    assert!(on.enabled);
    assert_eq!(on.label, CURSOR_LABEL_ON);
    assert_eq!(on.display, "block");

    let off = st.toggle();
    assert!(!off.enabled);
    assert_eq!(off.label, CURSOR_LABEL_OFF);
    assert_eq!(off.display, "none");
}

#[test]
fn even_number_of_toggles_restores_original_state() {
    let mut st = CursorState::default();
    let original = st.view();
    for n in [2, 4, 10] {
        for _ in 0..n {
            st.toggle();
        }
        assert_eq!(st.view(), original, "after {n} toggles");
    }
}

#[test]
fn pointer_moves_are_recorded_but_not_painted_until_a_frame() {
    let mut st = CursorState::default();
    st.toggle();
    st.record_pointer(10.0, 20.0);
    st.record_pointer(30.0, 40.0);
    assert_eq!(st.pointer(), Vec2::new(30.0, 40.0));
    assert_eq!(st.rendered(), None);

    let step = st.frame();
    assert_eq!(step.paint, Some(Vec2::new(30.0, 40.0)));
    assert!(step.reschedule);
    assert_eq!(st.rendered(), Some(Vec2::new(30.0, 40.0)));
}

#[test]
fn frame_skips_paint_when_pointer_is_still() {
    let mut st = CursorState::default();
    st.toggle();
    st.record_pointer(5.0, 5.0);
    assert!(st.frame().paint.is_some());
    let step = st.frame();
    assert_eq!(step.paint, None);
    assert!(step.reschedule);
}

#[test]
fn disabled_cursor_never_paints() {
    let mut st = CursorState::default();
    st.record_pointer(100.0, 100.0);
    let step = st.frame();
    assert_eq!(step.paint, None);
    assert!(!step.reschedule);
}

#[test]
fn frame_loop_starts_on_enable_and_stops_after_disable() {
    let mut st = CursorState::default();
    assert!(!st.request_frame(), "no loop while disabled");

    st.toggle();
    assert!(st.request_frame());
    assert!(st.frame_pending());
    assert!(!st.request_frame(), "only one outstanding frame");

    assert!(st.frame().reschedule);
    assert!(st.frame_pending());

    st.toggle();
    let step = st.frame();
    assert!(!step.reschedule);
    assert!(!st.frame_pending());
}

#[test]
fn quick_reenable_reuses_pending_frame() {
    let mut st = CursorState::default();
    st.toggle();
    assert!(st.request_frame());
    st.toggle(); // off, frame still queued
    st.toggle(); // on again before it runs
    assert!(!st.request_frame(), "queued frame keeps the loop alive");
    assert!(st.frame().reschedule);
}

#[test]
fn hover_is_inert_while_disabled() {
    let st = CursorState::default();
    assert_eq!(st.hover(true), None);
    assert_eq!(st.hover(false), None);
}

#[test]
fn hover_enter_and_leave_styles() {
    let mut st = CursorState::default();
    st.toggle();
    let enter = st.hover(true).unwrap();
    assert_eq!(enter.transform(), "scale(1.5)");
    assert_eq!(enter.border_color, "#ff00ff");
    let leave = st.hover(false).unwrap();
    assert_eq!(leave.transform(), "scale(1)");
    assert_eq!(leave.border_color, "#00ff88");
}

#[test]
fn px_formats_whole_and_fractional_values() {
    assert_eq!(px(12.0), "12px");
    assert_eq!(px(-3.5), "-3.5px");
    assert_eq!(px(-0.0), "0px");
}

#[test]
fn failed_frame_request_lets_the_loop_restart() {
    let mut st = CursorState::default();
    st.toggle();
    assert!(st.request_frame());
    st.frame_request_failed();
    assert!(!st.frame_pending());
    assert!(st.request_frame(), "next request may start a fresh loop");

    // failure while rescheduling from inside a frame
    assert!(st.frame().reschedule);
    st.frame_request_failed();
    st.toggle();
    st.toggle();
    assert!(st.request_frame());
}
