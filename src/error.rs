use thiserror::Error;

/// Shorthand for results carrying an [OverlayError]
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Errors that can occur while loading a font face
#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error(transparent)]
    /// The font file could not be read
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    Parse(#[from] owned_ttf_parser::FaceParsingError),
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("text must contain at least one word")]
    /// The text was empty or contained only whitespace
    InvalidText,

    #[error("invalid colour {0:?}, expected `#RRGGBB`")]
    /// The colour string was not `#` followed by exactly 6 hex digits
    InvalidColour(String),

    #[error("failed to load font: {0}")]
    /// The font could not be read or parsed
    FontLoad(#[from] FontLoadError),

    #[error("text does not fit the box at any font size from {max_font_size} down to 1")]
    /// No font size in `[1, max_font_size]` fits the box height
    NoFittingSize { max_font_size: u32 },

    #[error(
        "padding leaves no room for text (effective size {effective_width}x{effective_height})"
    )]
    /// The padding consumes the whole text box
    DegenerateBox {
        effective_width: i32,
        effective_height: i32,
    },

    #[error("text box must be at least 1x1, got {width}x{height}")]
    /// The text box had a zero dimension
    InvalidTextBox { width: u32, height: u32 },

    #[error("maximum font size must be between 1 and 256, got {0}")]
    /// The maximum font size was out of range
    FontSizeOutOfRange(u32),

    #[error(transparent)]
    /// [image] failed to decode or encode an image
    Image(#[from] image::ImageError),
}

