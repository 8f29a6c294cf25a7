use crate::colour::Colour;
use crate::error::{OverlayError, Result};
use crate::font::{Font, FontSource, ScaledFont};
use crate::layout::{fit_font_size, layout_lines, Alignment, PositionedLine};
use crate::render::draw_lines;
use crate::textbox::TextBox;
use image::{Rgb, Rgb32FImage, RgbImage};

/// The largest font size that may be requested
pub const MAX_FONT_SIZE: u32 = 256;

/// How text is placed and coloured within its box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Horizontal alignment of each line. Defaults to [Alignment::Center]
    pub alignment: Alignment,
    /// Text colour. Defaults to black
    pub colour: Colour,
    /// Inset from every edge of the box, in pixels. Defaults to 50
    pub padding: i32,
    /// Left edge of the box on the image
    pub start_x: i32,
    /// Top edge of the box on the image
    pub start_y: i32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        OverlayOptions {
            alignment: Alignment::Center,
            colour: Colour::default(),
            padding: 50,
            start_x: 0,
            start_y: 0,
        }
    }
}

impl OverlayOptions {
    /// Create a new set of options with all values set to their defaults
    pub fn new() -> OverlayOptions {
        OverlayOptions::default()
    }

    /// Set the alignment, modifying `self`
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    /// Set the text colour, modifying `self`
    pub fn colour<C: Into<Colour>>(&mut self, colour: C) -> &mut Self {
        self.colour = colour.into();
        self
    }

    /// Set the padding, modifying `self`
    pub fn padding(&mut self, padding: i32) -> &mut Self {
        self.padding = padding;
        self
    }

    /// Set the top-left corner of the box, modifying `self`
    pub fn start(&mut self, x: i32, y: i32) -> &mut Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    /// The box described by these options for a given size
    pub fn text_box(&self, width: i32, height: i32) -> TextBox {
        TextBox::new(width, height)
            .at(self.start_x, self.start_y)
            .with_padding(self.padding)
    }
}

/// Where every line of an overlay goes, and at what size
#[derive(Debug, Clone)]
pub struct OverlayPlan<F> {
    pub text_box: TextBox,
    pub font_size: u32,
    /// The font at `font_size`
    pub font: F,
    pub lines: Vec<PositionedLine>,
}

/// Fits `text` into a `textbox_width` by `textbox_height` box and positions its
/// lines, without drawing anything.
///
/// Fails with [OverlayError::DegenerateBox] or [OverlayError::NoFittingSize] when
/// the text cannot be placed, as well as on invalid arguments.
pub fn plan_text_overlay<S: FontSource>(
    text: &str,
    textbox_width: u32,
    textbox_height: u32,
    max_font_size: u32,
    source: S,
    options: &OverlayOptions,
) -> Result<OverlayPlan<S::Font>> {
    let invalid_box = || OverlayError::InvalidTextBox {
        width: textbox_width,
        height: textbox_height,
    };
    if textbox_width == 0 || textbox_height == 0 {
        return Err(invalid_box());
    }
    let width = i32::try_from(textbox_width).map_err(|_| invalid_box())?;
    let height = i32::try_from(textbox_height).map_err(|_| invalid_box())?;
    if !(1..=MAX_FONT_SIZE).contains(&max_font_size) {
        return Err(OverlayError::FontSizeOutOfRange(max_font_size));
    }

    let text_box = options.text_box(width, height);
    let fitted = fit_font_size(text, source, max_font_size, &text_box)?.into_result()?;
    let lines = layout_lines(&fitted.wrapped, &fitted.font, options.alignment, &text_box);

    Ok(OverlayPlan {
        text_box,
        font_size: fitted.size,
        font: fitted.font,
        lines,
    })
}

/// Fits, positions, and draws `text` onto an 8-bit canvas in place.
///
/// Nothing is drawn if the text cannot be placed. Returns the plan that was
/// drawn.
pub fn draw_text_overlay<'f>(
    canvas: &mut RgbImage,
    text: &str,
    textbox_width: u32,
    textbox_height: u32,
    max_font_size: u32,
    font: &'f Font,
    options: &OverlayOptions,
) -> Result<OverlayPlan<ScaledFont<'f>>> {
    let plan = plan_text_overlay(
        text,
        textbox_width,
        textbox_height,
        max_font_size,
        font,
        options,
    )?;
    log::debug!(
        "drawing {} lines at size {} in {}",
        plan.lines.len(),
        plan.font_size,
        options.colour
    );
    draw_lines(canvas, &plan.font, &plan.lines, options.colour);
    Ok(plan)
}

/// Draws `text` onto a normalized float RGB image, returning a new image of the
/// same size.
///
/// The image is converted to 8 bits per channel for drawing and back again
/// afterwards, see [to_rgb8] and [from_rgb8].
pub fn add_text_overlay(
    image: &Rgb32FImage,
    text: &str,
    textbox_width: u32,
    textbox_height: u32,
    max_font_size: u32,
    font: &Font,
    options: &OverlayOptions,
) -> Result<Rgb32FImage> {
    let mut canvas = to_rgb8(image);
    draw_text_overlay(
        &mut canvas,
        text,
        textbox_width,
        textbox_height,
        max_font_size,
        font,
        options,
    )?;
    Ok(from_rgb8(&canvas))
}

/// Scales `[0, 1]` channels to bytes, truncating. Out-of-range values saturate.
pub fn to_rgb8(image: &Rgb32FImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb(channels) = *image.get_pixel(x, y);
        Rgb(channels.map(|c| (c * 255.0) as u8))
    })
}

/// Scales bytes back to `[0, 1]` channels
pub fn from_rgb8(image: &RgbImage) -> Rgb32FImage {
    Rgb32FImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb(channels) = *image.get_pixel(x, y);
        Rgb(channels.map(|c| c as f32 / 255.0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_font::{TestFamily, TestFont};
    use crate::font::MeasureText;

    #[test]
    fn default_options() {
        let options = OverlayOptions::default();
        assert_eq!(options.alignment, Alignment::Center);
        assert_eq!(options.colour.to_string(), "#000000");
        assert_eq!(options.padding, 50);
        assert_eq!((options.start_x, options.start_y), (0, 0));
    }

    #[test]
    fn builder_sets_fields() {
        let options = OverlayOptions::new()
            .alignment(Alignment::Right)
            .colour((1u8, 2u8, 3u8))
            .padding(4)
            .start(5, 6)
            .clone();
        assert_eq!(options.text_box(100, 80), TextBox::new(100, 80).at(5, 6).with_padding(4));
        assert_eq!(options.colour, Colour::new_rgb_bytes(1, 2, 3));
        assert_eq!(options.alignment, Alignment::Right);
    }

    #[test]
    fn hello_world_scenario() {
        let options = OverlayOptions::new().alignment(Alignment::Left).clone();
        let plan = plan_text_overlay(
            "Hello world this is a test",
            200,
            200,
            30,
            TestFamily::default(),
            &options,
        )
        .unwrap();

        assert!(plan.font_size <= 30);
        assert_eq!(plan.font, TestFont::at(plan.font_size));
        assert!(plan.lines.iter().all(|line| line.x == 50));
        let words: Vec<&str> = plan.lines.iter().flat_map(|l| l.text.split(' ')).collect();
        assert_eq!(words, ["Hello", "world", "this", "is", "a", "test"]);
        for line in &plan.lines {
            assert!(plan.font.width_of(&line.text) <= 100 || !line.text.contains(' '));
        }
    }

    #[test]
    fn tiny_box_is_degenerate() {
        let result = plan_text_overlay(
            "Hello world",
            10,
            10,
            30,
            TestFamily::default(),
            &OverlayOptions::default(),
        );
        assert!(matches!(
            result,
            Err(OverlayError::DegenerateBox {
                effective_width: -90,
                effective_height: -90
            })
        ));
    }

    #[test]
    fn arguments_are_validated() {
        let options = OverlayOptions::default();
        let family = TestFamily::default();
        assert!(matches!(
            plan_text_overlay("a", 0, 10, 30, family, &options),
            Err(OverlayError::InvalidTextBox { width: 0, height: 10 })
        ));
        assert!(matches!(
            plan_text_overlay("a", 200, 200, 0, family, &options),
            Err(OverlayError::FontSizeOutOfRange(0))
        ));
        assert!(matches!(
            plan_text_overlay("a", 200, 200, 257, family, &options),
            Err(OverlayError::FontSizeOutOfRange(257))
        ));
        assert!(matches!(
            plan_text_overlay("  ", 200, 200, 30, family, &options),
            Err(OverlayError::InvalidText)
        ));
    }

    #[test]
    fn oversized_boxes_are_rejected() {
        let options = OverlayOptions::default();
        let family = TestFamily::default();
        assert!(matches!(
            plan_text_overlay("a", 3_000_000_000, 10, 30, family, &options),
            Err(OverlayError::InvalidTextBox {
                width: 3_000_000_000,
                height: 10
            })
        ));
        assert!(matches!(
            plan_text_overlay("a", 10, u32::MAX, 30, family, &options),
            Err(OverlayError::InvalidTextBox { .. })
        ));
    }

    #[test]
    fn huge_padding_is_degenerate() {
        let options = OverlayOptions::new().padding(i32::MAX / 2 + 10).clone();
        let result = plan_text_overlay("hello", 200, 200, 30, TestFamily::default(), &options);
        assert!(matches!(result, Err(OverlayError::DegenerateBox { .. })));
    }

    #[test]
    fn box_near_the_coordinate_limit_is_planned() {
        let options = OverlayOptions::new()
            .alignment(Alignment::Right)
            .start(i32::MAX - 10, 0)
            .clone();
        let plan =
            plan_text_overlay("hello", 200, 200, 30, TestFamily::default(), &options).unwrap();
        assert_eq!(plan.lines.len(), 1);
        assert!(plan.lines[0].x > 0);
    }

    #[test]
    fn float_conversion_truncates_and_saturates() {
        let image = Rgb32FImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([0.0, 0.5, 1.0])
            } else {
                Rgb([-0.5, 0.999, 2.0])
            }
        });
        let bytes = to_rgb8(&image);
        assert_eq!(bytes.get_pixel(0, 0).0, [0, 127, 255]);
        assert_eq!(bytes.get_pixel(1, 0).0, [0, 254, 255]);

        let back = from_rgb8(&bytes);
        assert_eq!(back.get_pixel(0, 0).0, [0.0, 127.0 / 255.0, 1.0]);
    }
}
