use crate::error::{FontLoadError, Result};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use std::path::Path;

/// The pixel extents of a string rendered as a single line.
///
/// Coordinates are relative to the point text is drawn from: the left end of
/// the font's ascender line, with `y` growing downwards. The horizontal span
/// covers both the inked area and the pen advance, so trailing whitespace still
/// takes up room; the vertical span covers ink only.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Anything that can report the [BBox] of a single line of text at a fixed size
pub trait MeasureText {
    fn bbox(&self, text: &str) -> BBox;

    fn width_of(&self, text: &str) -> i32 {
        self.bbox(text).width()
    }

    fn height_of(&self, text: &str) -> i32 {
        self.bbox(text).height()
    }
}

/// A font family that can produce a measurable font at any integer pixel size
pub trait FontSource {
    type Font: MeasureText;

    fn at_size(&self, size: u32) -> Result<Self::Font>;
}

/// A parsed TrueType or OpenType font face.
///
/// The face is parsed once on load; sized views are obtained with
/// [Font::scaled] and borrow the face, so trying many sizes in a row is cheap.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font> {
        let face = OwnedFace::from_vec(bytes, 0).map_err(FontLoadError::from)?;

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(FontLoadError::from)?;
        let font = Self::load(bytes)?;
        log::debug!(
            "loaded font {} from {}",
            font.name().as_deref().unwrap_or("<unnamed>"),
            path.display()
        );
        Ok(font)
    }

    pub(crate) fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// A view of this font at the given pixel size (the size of one em)
    pub fn scaled(&self, size: u32) -> ScaledFont<'_> {
        let scaling = size as f32 / self.face().units_per_em() as f32;
        ScaledFont {
            font: self,
            scaling,
        }
    }

    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.face().glyph_index(ch)
    }

    pub fn replacement_glyph_id(&self) -> Option<GlyphId> {
        self.face()
            .glyph_index('\u{FFFD}')
            .or_else(|| self.face().glyph_index('?'))
    }
}

impl<'f> FontSource for &'f Font {
    type Font = ScaledFont<'f>;

    fn at_size(&self, size: u32) -> Result<ScaledFont<'f>> {
        Ok(Font::scaled(*self, size))
    }
}

/// A [Font] bound to a concrete pixel size
#[derive(Copy, Clone)]
pub struct ScaledFont<'f> {
    font: &'f Font,
    scaling: f32,
}

impl<'f> ScaledFont<'f> {
    pub fn font(&self) -> &'f Font {
        self.font
    }

    /// Font units to pixels
    pub fn scaling(&self) -> f32 {
        self.scaling
    }

    /// Distance from the top of the line to the baseline, in pixels
    pub fn ascent(&self) -> f32 {
        self.scaling * self.font.face().ascender() as f32
    }

    /// The glyph used to draw `ch`, falling back to the replacement glyph
    pub fn glyph_for(&self, ch: char) -> Option<GlyphId> {
        self.font.glyph_id(ch).or_else(|| {
            let replacement = self.font.replacement_glyph_id();
            if replacement.is_some() {
                log::warn!("font has no glyph for {ch:?}, using the replacement glyph");
            }
            replacement
        })
    }

    /// Horizontal advance of a glyph in pixels
    pub fn advance(&self, gid: GlyphId) -> f32 {
        self.scaling * self.font.face().glyph_hor_advance(gid).unwrap_or_default() as f32
    }
}

impl MeasureText for ScaledFont<'_> {
    fn bbox(&self, text: &str) -> BBox {
        let face = self.font.face();
        let ascent = self.ascent();

        let mut pen = 0.0f32;
        let mut left = 0.0f32;
        let mut right = 0.0f32;
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;

        for ch in text.chars() {
            let Some(gid) = self.glyph_for(ch) else {
                log::trace!("no glyph for {ch:?} in font, skipping it");
                continue;
            };

            if let Some(rect) = face.glyph_bounding_box(gid) {
                left = left.min(pen + rect.x_min as f32 * self.scaling);
                right = right.max(pen + rect.x_max as f32 * self.scaling);
                top = top.min(ascent - rect.y_max as f32 * self.scaling);
                bottom = bottom.max(ascent - rect.y_min as f32 * self.scaling);
            }

            pen += self.advance(gid);
        }
        right = right.max(pen);

        // nothing inked, e.g. all spaces
        if top > bottom {
            top = 0.0;
            bottom = 0.0;
        }

        BBox {
            left: left.floor() as i32,
            top: top.floor() as i32,
            right: right.ceil() as i32,
            bottom: bottom.ceil() as i32,
        }
    }
}
