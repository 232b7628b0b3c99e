// Decode, flatten to RGB and re-encode screenshots as JPEG
// Author: kelexine (https://github.com/kelexine)

use super::models::{validate_image_size, EncodedImage, ImageFormat, UploadedImage};
use crate::error::{AppError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::GenericImageView;
use tracing::debug;

/// Prepare one screenshot for upload.
///
/// The declared content type (or the file extension when none is sent) must
/// be PNG or JPEG. Alpha is dropped and the image is re-encoded as JPEG at
/// `quality`.
pub fn preprocess(image: &UploadedImage, quality: u8) -> Result<EncodedImage> {
    validate_image_size(image.bytes.len()).map_err(AppError::Image)?;

    let declared = image
        .content_type
        .as_deref()
        .and_then(ImageFormat::from_mime_type)
        .or_else(|| ImageFormat::from_file_name(&image.file_name));

    let format = match (declared, ImageFormat::sniff(&image.bytes)) {
        (_, Some(sniffed)) => sniffed,
        (Some(_), None) => {
            return Err(AppError::Image(format!(
                "{} does not contain PNG or JPEG data",
                image.file_name
            )))
        }
        (None, None) => {
            return Err(AppError::Image(format!(
                "Unsupported image format for {}",
                image.file_name
            )))
        }
    };

    let decoded = image::load_from_memory_with_format(&image.bytes, to_image_format(format))
        .map_err(|e| AppError::Image(format!("Failed to decode {}: {}", image.file_name, e)))?;

    let (width, height) = decoded.dimensions();
    let rgb = decoded.to_rgb8();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode_image(&rgb)
        .map_err(|e| AppError::Image(format!("Failed to encode {}: {}", image.file_name, e)))?;

    debug!(
        "Re-encoded {} ({}x{}): {} -> {} bytes",
        image.file_name,
        width,
        height,
        image.bytes.len(),
        bytes.len()
    );

    Ok(EncodedImage {
        file_name: image.file_name.clone(),
        bytes,
        width,
        height,
    })
}

fn to_image_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Png => image::ImageFormat::Png,
    }
}
