use crate::{
    assets::hdr::HdrImage,
    assets::scene::SceneInputs,
    figure::caption::{REFERENCE_CAPTION, caption},
    figure::tonemap::{EncodedImage, tonemap},
    foundation::core::{CropBox, ImageSize},
    foundation::error::{FigureError, FigureResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which part of the source image a cell shows.
pub enum CellView {
    /// The whole image.
    Full,
    /// The region of the scene's `n`-th crop box.
    Inset(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Image a cell was taken from.
pub enum CellSource {
    /// The reference image.
    Reference,
    /// The `n`-th configured method.
    Method(usize),
}

/// One display cell of a figure row.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureCell {
    /// Source image.
    pub source: CellSource,
    /// Full image or inset.
    pub view: CellView,
    /// Tonemapped, encoded pixels.
    pub image: EncodedImage,
    /// Caption shown under the cell (full images only).
    pub caption: Option<String>,
}

/// All cells of one scene.
///
/// Cell order: reference, methods in configured order, then for each crop box the inset
/// of the reference followed by the insets of every method.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureRow {
    /// Scene identifier.
    pub scene: String,
    /// Size of the scene's full images.
    pub image_size: ImageSize,
    /// Crop boxes, in inset order.
    pub crops: Vec<CropBox>,
    /// Number of images per group (reference + methods).
    pub images_per_group: usize,
    /// Cells in display order.
    pub cells: Vec<FigureCell>,
}

impl FigureRow {
    /// Full-image cells: reference then methods.
    pub fn full_cells(&self) -> &[FigureCell] {
        &self.cells[..self.images_per_group]
    }

    /// Inset cells for crop box `crop_idx`, same column order as [`Self::full_cells`].
    pub fn inset_cells(&self, crop_idx: usize) -> &[FigureCell] {
        let start = self.images_per_group * (1 + crop_idx);
        &self.cells[start..start + self.images_per_group]
    }
}

/// Build a scene's row.
///
/// Crops are extracted from the linear buffers and tonemapped on their own, so the
/// insets are quantized only once.
#[tracing::instrument(skip(inputs, crops), fields(scene = %inputs.scene, crops = crops.len()))]
pub fn compose_row(
    inputs: &SceneInputs,
    crops: &[CropBox],
    exposure: f32,
    jpeg_quality: u8,
) -> FigureResult<FigureRow> {
    let size = inputs.size();
    validate_crops(crops, size)?;

    let mut sources: Vec<(CellSource, &HdrImage, Option<String>)> =
        Vec::with_capacity(1 + inputs.results.len());
    sources.push((
        CellSource::Reference,
        &inputs.reference,
        Some(REFERENCE_CAPTION.to_string()),
    ));
    for (i, r) in inputs.results.iter().enumerate() {
        sources.push((CellSource::Method(i), &r.image, Some(caption(&r.method, &r.meta))));
    }

    let mut cells = Vec::with_capacity(sources.len() * (1 + crops.len()));
    for (source, img, cap) in &sources {
        cells.push(FigureCell {
            source: *source,
            view: CellView::Full,
            image: tonemap(img, exposure, jpeg_quality)?,
            caption: cap.clone(),
        });
    }
    for (crop_idx, b) in crops.iter().enumerate() {
        for (source, img, _) in &sources {
            let region = img.crop(b)?;
            cells.push(FigureCell {
                source: *source,
                view: CellView::Inset(crop_idx),
                image: tonemap(&region, exposure, jpeg_quality)?,
                caption: None,
            });
        }
    }

    tracing::debug!(cells = cells.len(), "composed row");
    Ok(FigureRow {
        scene: inputs.scene.clone(),
        image_size: size,
        crops: crops.to_vec(),
        images_per_group: sources.len(),
        cells,
    })
}

/// Fails on the first crop box that does not fit inside `size`.
pub fn validate_crops(crops: &[CropBox], size: ImageSize) -> FigureResult<()> {
    match crops.iter().position(|b| !b.fits_within(size)) {
        None => Ok(()),
        Some(index) => {
            let b = crops[index];
            Err(FigureError::CropOutOfBounds {
                index,
                top: b.top(),
                left: b.left(),
                width: b.width(),
                height: b.height(),
                image_w: size.width,
                image_h: size.height,
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/row.rs"]
mod tests;
