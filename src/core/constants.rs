// Behavior tunables shared by the pure state modules.

// Loader
pub const LOADER_GRACE_DELAY_MS: i32 = 1200; // after window `load`
pub const LOADER_FALLBACK_DELAY_MS: i32 = 3000; // from install, regardless of `load`
pub const LOADER_FADE_MS: i32 = 500; // opacity transition before display:none

// Carousel
pub const AUTO_ROTATE_INTERVAL_MS: u32 = 5000;
pub const FULL_TURN_DEG: f64 = 360.0;

// Parallax: total travel per axis, split evenly around the viewport center
pub const PARALLAX_RANGE_PX: f32 = 20.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_BOTTOM_MARGIN_PX: i32 = 50;

// Cursor hover feedback
pub const CURSOR_HOVER_SCALE: f32 = 1.5;
pub const CURSOR_REST_SCALE: f32 = 1.0;
pub const CURSOR_HOVER_COLOR: &str = "#ff00ff";
pub const CURSOR_REST_COLOR: &str = "#00ff88";

// Cursor toggle control labels
pub const CURSOR_LABEL_OFF: &str = "Toggle Cursor";
pub const CURSOR_LABEL_ON: &str = "Disable Cursor";
