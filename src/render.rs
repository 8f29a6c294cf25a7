//! Rasterizing positioned lines of text onto an 8-bit RGB canvas.
//!
//! Glyph outlines are pulled from the font with [owned_ttf_parser], turned into
//! path data, and filled into coverage masks by [zeno]. Each mask is blended
//! over the canvas in a single flat colour. Anything falling outside the canvas
//! is dropped.

use crate::colour::Colour;
use crate::font::ScaledFont;
use crate::layout::PositionedLine;
use image::RgbImage;
use owned_ttf_parser::{GlyphId, OutlineBuilder};

/// Draw every line with its top-left anchor at its `(x, y)`
pub fn draw_lines(
    canvas: &mut RgbImage,
    font: &ScaledFont<'_>,
    lines: &[PositionedLine],
    colour: Colour,
) {
    for line in lines {
        draw_line(canvas, font, line, colour);
    }
}

/// Draw a single line of text. The baseline sits one ascent below `line.y`,
/// and the pen starts at `line.x`.
pub fn draw_line(
    canvas: &mut RgbImage,
    font: &ScaledFont<'_>,
    line: &PositionedLine,
    colour: Colour,
) {
    let baseline = line.y as f32 + font.ascent();
    let mut pen = line.x as f32;

    for ch in line.text.chars() {
        let Some(gid) = font.glyph_for(ch) else {
            log::warn!("font has no glyph for {ch:?} and no replacement glyph, skipping it");
            continue;
        };

        draw_glyph(canvas, font, gid, (pen, baseline), colour);
        pen += font.advance(gid);
    }
}

fn draw_glyph(
    canvas: &mut RgbImage,
    font: &ScaledFont<'_>,
    gid: GlyphId,
    origin: (f32, f32),
    colour: Colour,
) {
    let mut path = GlyphPath::new(origin, font.scaling());
    if font.font().face().outline_glyph(gid, &mut path).is_none() {
        // spaces and other blank glyphs
        return;
    }

    let Some(mask) = path.rasterize() else {
        return;
    };
    mask.blend_onto(canvas, colour);
}

/// A coverage mask positioned in canvas pixels
struct GlyphMask {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl GlyphMask {
    fn blend_onto(&self, canvas: &mut RgbImage, colour: Colour) {
        let (cw, ch) = (canvas.width() as i32, canvas.height() as i32);
        let fg = colour.to_pixel().0;

        for gy in 0..self.height {
            let py = self.top.saturating_add(gy as i32);
            if py < 0 || py >= ch {
                continue;
            }
            for gx in 0..self.width {
                let px = self.left.saturating_add(gx as i32);
                if px < 0 || px >= cw {
                    continue;
                }

                let alpha = self.coverage[(gy * self.width + gx) as usize] as u32;
                if alpha == 0 {
                    continue;
                }

                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                for (dst, src) in pixel.0.iter_mut().zip(fg) {
                    *dst = ((src as u32 * alpha + *dst as u32 * (255 - alpha)) / 255) as u8;
                }
            }
        }
    }
}

/// Collects a glyph outline as SVG path data in canvas coordinates, flipping
/// the font's y-up space into the canvas' y-down space
struct GlyphPath {
    commands: Vec<String>,
    origin: (f32, f32),
    scale: f32,
    min: (f32, f32),
    max: (f32, f32),
}

impl GlyphPath {
    fn new(origin: (f32, f32), scale: f32) -> Self {
        Self {
            commands: Vec::new(),
            origin,
            scale,
            min: (f32::INFINITY, f32::INFINITY),
            max: (f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    fn point(&mut self, x: f32, y: f32) -> (f32, f32) {
        let x = self.origin.0 + x * self.scale;
        let y = self.origin.1 - y * self.scale;
        self.min = (self.min.0.min(x), self.min.1.min(y));
        self.max = (self.max.0.max(x), self.max.1.max(y));
        (x, y)
    }

    fn rasterize(&self) -> Option<GlyphMask> {
        if self.commands.is_empty() || !self.min.0.is_finite() || !self.max.0.is_finite() {
            return None;
        }

        let left = self.min.0.floor() as i32;
        let top = self.min.1.floor() as i32;
        let width = ((self.max.0.ceil() as i32).saturating_sub(left) as u32).max(1);
        let height = ((self.max.1.ceil() as i32).saturating_sub(top) as u32).max(1);

        let data = self.commands.join(" ");
        let mut coverage = vec![0u8; (width * height) as usize];
        zeno::Mask::new(data.as_str())
            .size(width, height)
            .offset(zeno::Vector::new(-left as f32, -top as f32))
            .render_into(&mut coverage, None);

        Some(GlyphMask {
            left,
            top,
            width,
            height,
            coverage,
        })
    }
}

impl OutlineBuilder for GlyphPath {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.commands.push(format!("M {x:.2},{y:.2}"));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.commands.push(format!("L {x:.2},{y:.2}"));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.commands.push(format!("Q {x1:.2},{y1:.2} {x:.2},{y:.2}"));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.commands
            .push(format!("C {x1:.2},{y1:.2} {x2:.2},{y2:.2} {x:.2},{y:.2}"));
    }

    fn close(&mut self) {
        self.commands.push("Z".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    fn square(origin: (f32, f32), scale: f32) -> GlyphPath {
        let mut path = GlyphPath::new(origin, scale);
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path.line_to(10.0, 10.0);
        path.line_to(0.0, 10.0);
        path.close();
        path
    }

    #[test]
    fn outline_is_flipped_into_canvas_space() {
        let path = square((5.0, 20.0), 1.0);
        assert_eq!(path.min, (5.0, 10.0));
        assert_eq!(path.max, (15.0, 20.0));
        assert_eq!(path.commands[0], "M 5.00,20.00");
        assert_eq!(path.commands.last().map(String::as_str), Some("Z"));
    }

    #[test]
    fn square_rasterizes_to_full_coverage() {
        let mask = square((2.0, 12.0), 1.0).rasterize().unwrap();
        assert_eq!((mask.left, mask.top, mask.width, mask.height), (2, 2, 10, 10));
        // interior pixels are fully covered
        assert_eq!(mask.coverage[5 * 10 + 5], 255);
    }

    #[test]
    fn empty_path_has_no_mask() {
        assert!(GlyphPath::new((0.0, 0.0), 1.0).rasterize().is_none());
    }

    #[test]
    fn blending_is_clipped_to_the_canvas() {
        let mut canvas = RgbImage::from_pixel(8, 8, colours::WHITE.to_pixel());
        // half of the square hangs off the top-left corner
        let mask = square((-5.0, 5.0), 1.0).rasterize().unwrap();
        mask.blend_onto(&mut canvas, colours::RED);

        assert_eq!(canvas.get_pixel(2, 2).0, [255, 0, 0]);
        assert_eq!(canvas.get_pixel(7, 7).0, [255, 255, 255]);
    }

    #[test]
    fn partial_coverage_mixes_colours() {
        let mut canvas = RgbImage::from_pixel(1, 1, colours::WHITE.to_pixel());
        let mask = GlyphMask {
            left: 0,
            top: 0,
            width: 1,
            height: 1,
            coverage: vec![128],
        };
        mask.blend_onto(&mut canvas, colours::BLACK);
        assert_eq!(canvas.get_pixel(0, 0).0, [127, 127, 127]);
    }

    #[test]
    fn masks_at_the_coordinate_limit_are_skipped() {
        let mut canvas = RgbImage::from_pixel(4, 4, colours::WHITE.to_pixel());
        let mask = GlyphMask {
            left: i32::MAX - 1,
            top: i32::MAX - 1,
            width: 4,
            height: 4,
            coverage: vec![255; 16],
        };
        mask.blend_onto(&mut canvas, colours::BLACK);
        assert!(canvas.pixels().all(|p| *p == colours::WHITE.to_pixel()));
    }
}
