//! Fitting and positioning text inside a [`TextBox`](crate::TextBox).
//!
//! Laying out a block of text happens in three steps:
//!
//! - [`wrap_text`](crate::layout::wrap_text) - greedy word wrapping to a pixel width, never splitting words
//! - [`fit_font_size`](crate::layout::fit_font_size) - tries font sizes from a maximum downwards until the
//!   wrapped block is short enough for the box
//! - [`layout_lines`](crate::layout::layout_lines) - centres the block vertically and places each line
//!   according to an [`Alignment`](crate::layout::Alignment)
//!
//! None of these touch pixels; [`render`](crate::render) draws the result.
//!
//! # Example
//!
//! ```no_run
//! use text_overlay::{Font, TextBox};
//! use text_overlay::layout::{fit_font_size, layout_lines, Alignment, FitOutcome};
//!
//! let font = Font::load_from_disk("DejaVuSans.ttf").expect("can load font");
//! let text_box = TextBox::new(200, 200).with_padding(50);
//!
//! match fit_font_size("Hello world this is a test", &font, 30, &text_box).expect("can fit") {
//!     FitOutcome::Fit(fitted) => {
//!         let lines = layout_lines(&fitted.wrapped, &fitted.font, Alignment::Left, &text_box);
//!         for line in lines {
//!             println!("{} at ({}, {})", line.text, line.x, line.y);
//!         }
//!     }
//!     FitOutcome::NoFit(reason) => eprintln!("{reason:?}"),
//! }
//! ```

mod fit;
mod lines;
mod wrap;

pub use fit::*;
pub use lines::*;
pub use wrap::*;

#[cfg(test)]
pub(crate) mod test_font {
    use crate::error::{OverlayError, Result};
    use crate::font::{BBox, FontSource, MeasureText};

    /// Every character advances `ceil(0.6 * size)` pixels. Lines are
    /// `0.75 * size` tall (at least 1px), or `size` tall if they contain a descender.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub(crate) struct TestFont {
        pub size: u32,
    }

    impl TestFont {
        pub fn at(size: u32) -> TestFont {
            TestFont { size }
        }

        pub fn advance(&self) -> i32 {
            (self.size as i32 * 3 + 4) / 5
        }
    }

    impl MeasureText for TestFont {
        fn bbox(&self, text: &str) -> BBox {
            let size = self.size as i32;
            let descends = text.chars().any(|c| "gjpqy".contains(c));
            let bottom = if descends { size } else { (size * 3 / 4).max(1) };
            BBox {
                left: 0,
                top: 0,
                right: self.advance() * text.chars().count() as i32,
                bottom,
            }
        }
    }

    /// A family of [TestFont]s, optionally refusing to load one size
    #[derive(Debug, Default, Copy, Clone)]
    pub(crate) struct TestFamily {
        pub broken_size: Option<u32>,
    }

    impl FontSource for TestFamily {
        type Font = TestFont;

        fn at_size(&self, size: u32) -> Result<TestFont> {
            if self.broken_size == Some(size) {
                let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such size");
                return Err(OverlayError::FontLoad(err.into()));
            }
            Ok(TestFont::at(size))
        }
    }
}
