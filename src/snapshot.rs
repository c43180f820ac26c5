use std::io::Cursor;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::RgbImage;

/// Encode a captured frame as a JPEG data URL at its native resolution.
///
/// The string is what goes over the wire in the submission body; it is
/// dropped once the request completes.
pub fn encode_jpeg_data_url(frame: &RgbImage) -> Result<String> {
    let mut bytes = Vec::new();
    frame
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .context("Failed to encode frame as JPEG")?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn data_url_has_jpeg_prefix() {
        let frame = RgbImage::new(4, 4);
        let url = encode_jpeg_data_url(&frame).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn payload_decodes_to_a_jpeg_at_native_resolution() {
        let frame = RgbImage::from_pixel(6, 3, image::Rgb([200, 40, 40]));
        let url = encode_jpeg_data_url(&frame).unwrap();

        let payload = url.strip_prefix("data:image/jpeg;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        // JPEG start-of-image marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (6, 3));
    }
}
