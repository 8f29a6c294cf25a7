use crate::error::{OverlayError, Result};
use crate::font::MeasureText;

/// Text broken into lines by [wrap_text]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    /// Each line is a run of whole words joined by single spaces
    pub lines: Vec<String>,
    /// Height of the first line multiplied by the number of lines.
    ///
    /// Subsequent lines are not measured for this; a block whose later lines
    /// have descenders the first lacks will be taller when drawn than this
    /// value suggests. Fitting decisions are made against this figure.
    pub total_height: i32,
}

impl WrappedText {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over every word in order, across all lines
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flat_map(|line| line.split(' '))
    }
}

/// Greedily packs whitespace-separated words into lines no wider than `max_width`
/// pixels, as measured by `font`.
///
/// Each word is appended to the current line (with one space) for as long as the
/// result still measures within `max_width`; the first word that does not fit
/// starts a new line. No empty lines are produced and words are never dropped or
/// reordered.
///
/// # Keep-whole policy
///
/// Words are never split or hyphenated. A word that is wider than `max_width` on
/// its own is kept whole on a line of its own and overflows the width.
///
/// Any run of whitespace, including newlines, separates words and is
/// normalised to a single space.
///
/// Returns [OverlayError::InvalidText] if `text` contains no words.
pub fn wrap_text<F: MeasureText + ?Sized>(
    text: &str,
    font: &F,
    max_width: i32,
) -> Result<WrappedText> {
    let mut words = text.split_whitespace();
    let mut current = words.next().ok_or(OverlayError::InvalidText)?.to_string();
    let mut lines: Vec<String> = Vec::new();

    for word in words {
        // try adding the word to the line
        let candidate = format!("{current} {word}");
        if font.width_of(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);

    let line_height = font.height_of(&lines[0]);
    let line_count = i32::try_from(lines.len()).unwrap_or(i32::MAX);
    let total_height = line_height.saturating_mul(line_count);

    Ok(WrappedText {
        lines,
        total_height,
    })
}
