//! Draw auto-fitted text onto an image file

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use text_overlay::layout::Alignment;
use text_overlay::{add_text_overlay, to_rgb8, Colour, Font, OverlayOptions};

const DEFAULT_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Fit a block of text into a box on an image, shrinking the font until it fits
#[derive(Parser, Debug)]
#[command(name = "text-overlay")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image to draw on
    input: PathBuf,

    /// Where to write the result; the format follows the extension
    output: PathBuf,

    /// Text to draw
    #[arg(short, long, default_value = "Hello")]
    text: String,

    /// Font file (.ttf, .otf)
    #[arg(short, long, default_value = DEFAULT_FONT)]
    font: PathBuf,

    /// Width of the text box in pixels
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Height of the text box in pixels
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Largest font size to try, in pixels
    #[arg(short = 's', long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=256))]
    max_font_size: u32,

    /// Line alignment: left, right, or center
    #[arg(short, long, default_value_t = Alignment::Center)]
    alignment: Alignment,

    /// Text colour as #RRGGBB
    #[arg(short, long, default_value_t = Colour::default())]
    colour: Colour,

    /// Left edge of the text box
    #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
    start_x: i32,

    /// Top edge of the text box
    #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
    start_y: i32,

    /// Inset from every edge of the text box
    #[arg(short, long, default_value_t = 50)]
    padding: i32,
}

fn run(args: Args) -> text_overlay::Result<()> {
    let font = Font::load_from_disk(&args.font)?;
    let image = image::open(&args.input)?.to_rgb32f();
    log::info!(
        "drawing onto {} ({}x{})",
        args.input.display(),
        image.width(),
        image.height()
    );

    let options = OverlayOptions::new()
        .alignment(args.alignment)
        .colour(args.colour)
        .padding(args.padding)
        .start(args.start_x, args.start_y)
        .clone();

    let result = add_text_overlay(
        &image,
        &args.text,
        args.width,
        args.height,
        args.max_font_size,
        &font,
        &options,
    )?;

    to_rgb8(&result).save(&args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
