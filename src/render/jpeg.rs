use crate::error::CbzGenError;
use image::RgbImage;
use std::io::Cursor;

/// Encode an RGB canvas to baseline JPEG bytes.
///
/// # Arguments
/// * `rgb`     - Finished page canvas
/// * `quality` - JPEG quality (1 = worst, 100 = best)
pub fn encode_rgb_to_jpeg(rgb: &RgbImage, quality: u8) -> crate::error::Result<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(CbzGenError::jpeg_encode(format!(
            "JPEG quality must be 1-100, got {}",
            quality
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)?;

    Ok(buf.into_inner())
}
