// DOM contract: element ids, selectors and class names the page markup
// provides. Behavior tunables live in `core/constants.rs`.

// Cursor
pub const CURSOR_DOT_ID: &str = "cursorDot";
pub const CURSOR_TOGGLE_ID: &str = "cursorToggle";
pub const CURSOR_BODY_CLASS: &str = "custom-cursor-enabled";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .bento-item, .carousel-btn, .nav-links a";

// Loader
pub const LOADER_ID: &str = "loader";

// Hero parallax
pub const HERO_FOREGROUND_ID: &str = "heroLeft";
pub const HERO_BACKGROUND_ID: &str = "heroRight";

// Carousel
pub const CAROUSEL_TRACK_ID: &str = "carouselTrack";
pub const CAROUSEL_PREV_ID: &str = "prevBtn";
pub const CAROUSEL_NEXT_ID: &str = "nextBtn";
pub const CAROUSEL_SLIDE_SELECTOR: &str = ".carousel-slide";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".bento-item, .floating-item";
pub const REVEAL_BASE_CLASS: &str = "fade-in";
pub const REVEAL_VISIBLE_CLASS: &str = "visible";

// Navigation / keyboard
pub const NAV_ANCHOR_SELECTOR: &str = "nav a[href^=\"#\"]";
pub const CARD_SELECTOR: &str = ".bento-item";
