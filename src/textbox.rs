/// The region of an image that text is fitted into, in pixels.
///
/// Padding is an inset applied equally to all four sides. There is no control
/// preventing the padding from swallowing the whole box; the effective
/// dimensions are then zero or negative and no text will fit. The effective
/// dimensions saturate rather than overflow for extreme paddings.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TextBox {
    /// Left edge of the box
    pub x: i32,
    /// Top edge of the box
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub padding: i32,
}

impl TextBox {
    /// Create a box at the origin with no padding
    pub fn new(width: i32, height: i32) -> TextBox {
        TextBox {
            x: 0,
            y: 0,
            width,
            height,
            padding: 0,
        }
    }

    /// The same box, moved so its top-left corner is at `(x, y)`
    pub fn at(&self, x: i32, y: i32) -> TextBox {
        TextBox { x, y, ..*self }
    }

    /// The same box with a different padding
    pub fn with_padding(&self, padding: i32) -> TextBox {
        TextBox { padding, ..*self }
    }

    /// Width left for text once padding is removed from both sides
    pub fn effective_width(&self) -> i32 {
        self.width.saturating_sub(self.padding.saturating_mul(2))
    }

    /// Height left for text once padding is removed from top and bottom
    pub fn effective_height(&self) -> i32 {
        self.height.saturating_sub(self.padding.saturating_mul(2))
    }

    /// Whether the padding leaves no room at all
    pub fn is_degenerate(&self) -> bool {
        self.effective_width() <= 0 || self.effective_height() <= 0
    }
}
