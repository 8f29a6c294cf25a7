use text_overlay::layout::Alignment;
use text_overlay::{add_text_overlay, colours, from_rgb8, to_rgb8, Font, OverlayOptions};

fn main() {
    // load a font to draw with
    let font = Font::load_from_disk("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf")
        .expect("can load font");

    // a plain white 400x300 image, in normalized float form
    let image = from_rgb8(&image::RgbImage::from_pixel(400, 300, colours::WHITE.to_pixel()));

    let options = OverlayOptions::new()
        .alignment(Alignment::Center)
        .colour(colours::BLUE)
        .padding(20)
        .start(50, 25)
        .clone();

    let image = add_text_overlay(&image, &lipsum::lipsum(30), 300, 250, 48, &font, &options)
        .expect("text fits the box");

    to_rgb8(&image).save("caption.png").unwrap();
}
