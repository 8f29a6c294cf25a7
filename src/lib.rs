mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Wrapping, font size fitting, and line placement
pub mod layout;

mod overlay;
pub use overlay::*;

pub mod render;

mod textbox;
pub use textbox::*;

/// Re-export of the font parser, for working with [Font::face] directly
pub use owned_ttf_parser;
