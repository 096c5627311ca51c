use anyhow::Context;

use crate::{
    assets::hdr::HdrImage,
    foundation::core::ImageSize,
    foundation::error::FigureResult,
};

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Display-ready cell: 8-bit sRGB pixels compressed as JPEG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Pixel dimensions.
    pub size: ImageSize,
    /// JPEG bytes.
    pub jpeg: Vec<u8>,
}

/// Scale linear values by `2^exposure`.
pub fn apply_exposure(v: f32, exposure: f32) -> f32 {
    v * exposure.exp2()
}

/// sRGB transfer function, clamped to `[0, 1]`. NaN maps to 0, infinities clamp.
pub fn linear_to_srgb(v: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Exposure + sRGB encoding to 8 bit, without compression.
pub fn tonemap_rgb8(img: &HdrImage, exposure: f32) -> Vec<u8> {
    img.as_rgb()
        .iter()
        .map(|&v| to_u8(linear_to_srgb(apply_exposure(v, exposure))))
        .collect()
}

/// Tonemap `img` for display and encode it as JPEG with the given quality.
///
/// Pure: identical input yields identical bytes.
pub fn tonemap(img: &HdrImage, exposure: f32, quality: u8) -> FigureResult<EncodedImage> {
    let rgb8 = tonemap_rgb8(img, exposure);
    let mut jpeg = Vec::new();
    {
        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, quality.clamp(1, 100));
        encoder
            .encode(&rgb8, img.width(), img.height(), image::ExtendedColorType::Rgb8)
            .context("encode jpeg")?;
    }
    Ok(EncodedImage {
        size: img.size(),
        jpeg,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/figure/tonemap.rs"]
mod tests;
