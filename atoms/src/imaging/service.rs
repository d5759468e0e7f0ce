use super::model::{OutputFormat, TargetSize};
use image::imageops::FilterType;
use image::DynamicImage;
use std::io::Cursor;

/// Decode raw object bytes, guessing the format from the content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, String> {
    image::load_from_memory(bytes).map_err(|e| format!("cannot identify image file: {}", e))
}

/// Resize to exactly `target`, stretching when the aspect ratios differ.
pub fn resize_exact(image: &DynamicImage, target: TargetSize) -> DynamicImage {
    image.resize_exact(target.width, target.height, FilterType::Triangle)
}

/// Encode into a fresh buffer in `format`.
///
/// JPEG carries no alpha, so the image is flattened to RGB8 first.
pub fn encode_image(image: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, String> {
    let flattened = match format {
        OutputFormat::Jpeg { .. } => DynamicImage::ImageRgb8(image.to_rgb8()),
    };

    let mut buffer = Cursor::new(Vec::new());
    flattened
        .write_to(&mut buffer, format.encoder_format())
        .map_err(|e| format!("image encode error: {}", e))?;

    Ok(buffer.into_inner())
}
