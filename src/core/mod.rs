pub mod carousel;
pub mod constants;
pub mod cursor;
pub mod keys;
pub mod loader;
pub mod parallax;
pub mod reveal;

pub use carousel::*;
pub use cursor::*;
pub use keys::*;
pub use loader::*;
pub use parallax::*;
pub use reveal::*;
