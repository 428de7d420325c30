// Host-side tests for key handling and anchor resolution.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod carousel {
    include!("../src/core/carousel.rs");
}
mod keys {
    include!("../src/core/keys.rs");
}

use carousel::Direction;
use keys::*;

#[test]
fn enter_and_space_activate_cards() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
}

#[test]
fn other_keys_do_not_activate_cards() {
    for key in ["Tab", "Escape", "Spacebar", "a", "", "ArrowDown", "enter"] {
        assert!(!is_activation_key(key), "{key:?}");
    }
}

#[test]
fn arrows_drive_the_carousel() {
    assert_eq!(carousel_direction_for_key("ArrowRight"), Some(Direction::Next));
    assert_eq!(carousel_direction_for_key("ArrowLeft"), Some(Direction::Prev));
    assert_eq!(carousel_direction_for_key("ArrowUp"), None);
    assert_eq!(carousel_direction_for_key("ArrowDown"), None);
    assert_eq!(carousel_direction_for_key("Enter"), None);
}

#[test]
fn hash_target_accepts_named_anchors() {
    assert_eq!(hash_target("#work"), Some("#work"));
    assert_eq!(hash_target("#contact-me"), Some("#contact-me"));
}

#[test]
fn hash_target_rejects_empty_and_external_links() {
    assert_eq!(hash_target("#"), None);
    assert_eq!(hash_target(""), None);
    assert_eq!(hash_target("/about#team"), None);
    assert_eq!(hash_target("https://example.com"), None);
}
