use std::path::Path;

use crate::{
    foundation::core::{CropBox, ImageSize},
    foundation::error::{FigureError, FigureResult},
};

/// Linear-light RGB image with `f32` channels, row-major, 3 values per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct HdrImage {
    size: ImageSize,
    rgb: Vec<f32>,
}

impl HdrImage {
    pub fn from_rgb(width: u32, height: u32, rgb: Vec<f32>) -> FigureResult<Self> {
        let size = ImageSize::new(width, height);
        if rgb.len() != size.pixel_count() * 3 {
            return Err(FigureError::config(format!(
                "rgb buffer has {} values, expected {} for {width}x{height}",
                rgb.len(),
                size.pixel_count() * 3
            )));
        }
        Ok(Self { size, rgb })
    }

    pub fn size(&self) -> ImageSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn as_rgb(&self) -> &[f32] {
        &self.rgb
    }

    /// Copy the region covered by `b` at native resolution.
    pub fn crop(&self, b: &CropBox) -> FigureResult<HdrImage> {
        if !b.fits_within(self.size) {
            return Err(FigureError::CropOutOfBounds {
                index: 0,
                top: b.top(),
                left: b.left(),
                width: b.width(),
                height: b.height(),
                image_w: self.size.width,
                image_h: self.size.height,
            });
        }
        let stride = self.size.width as usize * 3;
        let row_len = b.width() as usize * 3;
        let mut rgb = Vec::with_capacity(b.size().pixel_count() * 3);
        for y in b.top()..b.top() + b.height() {
            let start = y as usize * stride + b.left() as usize * 3;
            rgb.extend_from_slice(&self.rgb[start..start + row_len]);
        }
        Ok(HdrImage { size: b.size(), rgb })
    }
}

/// Load an image file as linear RGB `f32`.
///
/// Floating-point formats (OpenEXR, Radiance HDR) keep their values; 8/16-bit formats are
/// normalized to `[0, 1]` without undoing any transfer curve.
pub fn load_hdr(path: &Path) -> FigureResult<HdrImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| FigureError::from_read(path, e, |path| FigureError::MissingImage { path }))?;
    decode_hdr(&bytes, path)
}

fn decode_hdr(bytes: &[u8], path: &Path) -> FigureResult<HdrImage> {
    let dyn_img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| unsupported(path, e.to_string()))?
        .decode()
        .map_err(|e| unsupported(path, e.to_string()))?;
    let rgb = dyn_img.to_rgb32f();
    let (width, height) = rgb.dimensions();
    HdrImage::from_rgb(width, height, rgb.into_raw())
}

fn unsupported(path: &Path, reason: String) -> FigureError {
    FigureError::UnsupportedFormat {
        path: path.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/hdr.rs"]
mod tests;
