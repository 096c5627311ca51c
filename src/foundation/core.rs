use crate::foundation::error::{FigureError, FigureResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn aspect(self) -> f64 {
        if self.width == 0 {
            return 1.0;
        }
        f64::from(self.height) / f64::from(self.width)
    }
}

/// Rectangular sub-region of an image shown as a magnified inset.
///
/// Offsets and extents are in source pixels. `scale` is the nominal
/// magnification of the inset relative to the full image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CropBoxRepr", into = "CropBoxRepr")]
pub struct CropBox {
    top: u32,
    left: u32,
    height: u32,
    width: u32,
    scale: f64,
}

impl CropBox {
    pub fn new(top: u32, left: u32, height: u32, width: u32, scale: f64) -> FigureResult<Self> {
        if height == 0 || width == 0 {
            return Err(FigureError::config("CropBox height and width must be > 0"));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(FigureError::config("CropBox scale must be finite and > 0"));
        }
        Ok(Self {
            top,
            left,
            height,
            width,
            scale,
        })
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    /// `left + width <= w` and `top + height <= h`, without overflow.
    pub fn fits_within(&self, size: ImageSize) -> bool {
        let right = u64::from(self.left) + u64::from(self.width);
        let bottom = u64::from(self.top) + u64::from(self.height);
        right <= u64::from(size.width) && bottom <= u64::from(size.height)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CropBoxRepr {
    top: u32,
    left: u32,
    height: u32,
    width: u32,
    #[serde(default = "default_scale")]
    scale: f64,
}

fn default_scale() -> f64 {
    5.0
}

impl TryFrom<CropBoxRepr> for CropBox {
    type Error = FigureError;

    fn try_from(r: CropBoxRepr) -> Result<Self, Self::Error> {
        CropBox::new(r.top, r.left, r.height, r.width, r.scale)
    }
}

impl From<CropBox> for CropBoxRepr {
    fn from(b: CropBox) -> Self {
        Self {
            top: b.top,
            left: b.left,
            height: b.height,
            width: b.width,
            scale: b.scale,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
