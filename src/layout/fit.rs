use super::wrap::{wrap_text, WrappedText};
use crate::error::{OverlayError, Result};
use crate::font::FontSource;
use crate::textbox::TextBox;

/// Text wrapped at the largest font size that fits a box
#[derive(Debug, Clone)]
pub struct FittedText<F> {
    /// The chosen font size, in pixels
    pub size: u32,
    /// The font at the chosen size
    pub font: F,
    pub wrapped: WrappedText,
}

/// Why [fit_font_size] could not find a size
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoFit {
    /// The padding leaves no positive area to put text in, so no size was tried
    DegenerateBox {
        effective_width: i32,
        effective_height: i32,
    },
    /// Every size from `max_font_size` down to 1 was too tall
    Exhausted { max_font_size: u32 },
}

impl From<NoFit> for OverlayError {
    fn from(reason: NoFit) -> Self {
        match reason {
            NoFit::DegenerateBox {
                effective_width,
                effective_height,
            } => OverlayError::DegenerateBox {
                effective_width,
                effective_height,
            },
            NoFit::Exhausted { max_font_size } => OverlayError::NoFittingSize { max_font_size },
        }
    }
}

/// The result of searching for a font size
#[derive(Debug, Clone)]
pub enum FitOutcome<F> {
    Fit(FittedText<F>),
    NoFit(NoFit),
}

impl<F> FitOutcome<F> {
    /// Turn a [FitOutcome::NoFit] into the matching [OverlayError]
    pub fn into_result(self) -> Result<FittedText<F>> {
        match self {
            FitOutcome::Fit(fitted) => Ok(fitted),
            FitOutcome::NoFit(reason) => Err(reason.into()),
        }
    }
}

/// Finds the largest font size, from `max_font_size` down to 1, at which `text`
/// wrapped to the box's effective width is no taller than its effective height.
///
/// Sizes are tried in strictly decreasing order and the first one that fits is
/// returned without trying any smaller ones. The height compared is the
/// wrapped block's [`total_height`](WrappedText::total_height).
///
/// A box whose padding leaves a non-positive width or height is reported as
/// [NoFit::DegenerateBox] up front. Errors from wrapping (empty text) or from
/// `source` (a size that cannot be loaded) are returned as-is.
pub fn fit_font_size<S: FontSource>(
    text: &str,
    source: S,
    max_font_size: u32,
    text_box: &TextBox,
) -> Result<FitOutcome<S::Font>> {
    if text.split_whitespace().next().is_none() {
        return Err(OverlayError::InvalidText);
    }

    let effective_width = text_box.effective_width();
    let effective_height = text_box.effective_height();
    if text_box.is_degenerate() {
        log::debug!(
            "padding {} leaves {effective_width}x{effective_height} in a {}x{} box",
            text_box.padding,
            text_box.width,
            text_box.height
        );
        return Ok(FitOutcome::NoFit(NoFit::DegenerateBox {
            effective_width,
            effective_height,
        }));
    }

    for size in (1..=max_font_size).rev() {
        let font = source.at_size(size)?;
        let wrapped = wrap_text(text, &font, effective_width)?;
        log::trace!(
            "size {size}: {} lines, {}px tall",
            wrapped.line_count(),
            wrapped.total_height
        );

        if wrapped.total_height <= effective_height {
            log::debug!(
                "fitted text at size {size} in {} lines",
                wrapped.line_count()
            );
            return Ok(FitOutcome::Fit(FittedText {
                size,
                font,
                wrapped,
            }));
        }
    }

    log::debug!("no font size up to {max_font_size} fits {effective_height}px");
    Ok(FitOutcome::NoFit(NoFit::Exhausted { max_font_size }))
}
