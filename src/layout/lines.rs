use super::wrap::WrappedText;
use crate::font::MeasureText;
use crate::textbox::TextBox;
use derive_more::Display;
use std::str::FromStr;

/// Horizontal placement of each line within the box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum Alignment {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[default]
    #[display("center")]
    Center,
}

/// Returned when parsing an unknown [Alignment]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alignment {0:?}, expected one of left, right, center")]
pub struct ParseAlignmentError(String);

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            "center" | "centre" => Ok(Alignment::Center),
            _ => Err(ParseAlignmentError(s.to_string())),
        }
    }
}

/// A line of text and the point to draw it from: the left end of the font's
/// ascender line, in image pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedLine {
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Positions every line of `wrapped` inside `text_box`.
///
/// The block is centred vertically in the padded area using the block's
/// [`total_height`](WrappedText::total_height); after the first line, each line
/// is moved down by the measured height of the line before it. Each line is
/// then placed horizontally according to `alignment`, using its own measured
/// width.
///
/// Nothing is clipped: lines that are too wide for the box, or a block that is
/// too tall, are positioned all the same. Coordinates that would leave the
/// `i32` range saturate at its ends.
pub fn layout_lines<F: MeasureText + ?Sized>(
    wrapped: &WrappedText,
    font: &F,
    alignment: Alignment,
    text_box: &TextBox,
) -> Vec<PositionedLine> {
    let TextBox {
        x: start_x,
        y: start_y,
        width,
        padding,
        ..
    } = *text_box;
    let effective_width = text_box.effective_width();

    let mut y = start_y
        .saturating_add(padding)
        .saturating_add(
            text_box
                .effective_height()
                .saturating_sub(wrapped.total_height)
                .div_euclid(2),
        );

    let mut lines = Vec::with_capacity(wrapped.lines.len());
    for line in wrapped.lines.iter() {
        let bbox = font.bbox(line);
        let line_width = bbox.width();

        let x = match alignment {
            Alignment::Left => start_x.saturating_add(padding),
            Alignment::Right => start_x
                .saturating_add(width)
                .saturating_sub(line_width)
                .saturating_sub(padding),
            Alignment::Center => start_x
                .saturating_add(padding)
                .saturating_add(effective_width.saturating_sub(line_width).div_euclid(2)),
        };

        lines.push(PositionedLine {
            x,
            y,
            text: line.clone(),
        });
        y = y.saturating_add(bbox.height());
    }

    lines
}
