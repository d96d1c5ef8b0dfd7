use std::io::Cursor;

use crate::foundation::error::{DotsError, DotsResult};

/// MIME type of [`encode_png_premul`] output.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Encode premultiplied RGBA8 pixels as a straight-alpha PNG.
pub fn encode_png_premul(premul: &[u8], width: u32, height: u32) -> DotsResult<Vec<u8>> {
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if premul.len() != expected {
        return Err(DotsError::encode(format!(
            "pixel buffer is {} bytes, expected {expected} for {width}x{height}",
            premul.len()
        )));
    }

    let mut straight = premul.to_vec();
    unpremultiply_in_place(&mut straight);
    let img = image::RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| DotsError::encode("invalid rgba buffer size"))?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| DotsError::encode(format!("png encode failed: {e}")))?;
    Ok(buf)
}

pub(crate) fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
