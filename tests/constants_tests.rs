// Host-side tests for constants and their relationships.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn loader_timings_are_ordered() {
    assert!(LOADER_FADE_MS > 0);
    assert!(LOADER_GRACE_DELAY_MS > 0);
    // the fallback only matters when `load` is late or missing
    assert!(LOADER_FALLBACK_DELAY_MS > LOADER_GRACE_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tunables_are_within_bounds() {
    assert!(AUTO_ROTATE_INTERVAL_MS > 0);
    assert!(PARALLAX_RANGE_PX > 0.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_BOTTOM_MARGIN_PX >= 0);
    assert!(CURSOR_HOVER_SCALE > CURSOR_REST_SCALE);
    assert_eq!(FULL_TURN_DEG, 360.0);
}

#[test]
fn labels_and_colors_differ_between_states() {
    assert_ne!(CURSOR_LABEL_ON, CURSOR_LABEL_OFF);
    assert_ne!(CURSOR_HOVER_COLOR, CURSOR_REST_COLOR);
}

#[test]
fn ids_are_bare_and_selectors_are_not_empty() {
    for id in [
        CURSOR_DOT_ID,
        CURSOR_TOGGLE_ID,
        LOADER_ID,
        HERO_FOREGROUND_ID,
        HERO_BACKGROUND_ID,
        CAROUSEL_TRACK_ID,
        CAROUSEL_PREV_ID,
        CAROUSEL_NEXT_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} should be a bare id");
    }
    for sel in [
        INTERACTIVE_SELECTOR,
        CAROUSEL_SLIDE_SELECTOR,
        REVEAL_SELECTOR,
        NAV_ANCHOR_SELECTOR,
        CARD_SELECTOR,
    ] {
        assert!(!sel.trim().is_empty());
    }
}

#[test]
fn cards_are_both_interactive_and_revealed() {
    assert!(INTERACTIVE_SELECTOR.contains(CARD_SELECTOR));
    assert!(REVEAL_SELECTOR.contains(CARD_SELECTOR));
}
