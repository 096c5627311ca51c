use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    export::document::Document,
    foundation::error::{FigureError, FigureResult},
};

/// Default width of the PNG preview in pixels.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 2400;

impl Document {
    /// Rasterize the SVG page to PNG bytes, `width_px` wide.
    pub fn to_png(&self, width_px: u32) -> FigureResult<Vec<u8>> {
        let svg = self.to_svg();
        let opts = usvg::Options {
            fontdb: system_fontdb(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse overview svg")?;

        let size = tree.size();
        let scale = width_px.max(1) as f32 / size.width();
        let height_px = (size.height() * scale).ceil().max(1.0) as u32;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width_px.max(1), height_px)
            .ok_or_else(|| FigureError::config(format!("cannot allocate {width_px}x{height_px} preview")))?;
        pixmap.fill(resvg::tiny_skia::Color::WHITE);
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap.encode_png().context("encode preview png")?)
    }

    /// Write a PNG preview of the page to `path`.
    pub fn write_png(&self, path: &Path, width_px: u32) -> FigureResult<()> {
        let png = self.to_png(width_px)?;
        std::fs::write(path, png).map_err(|source| FigureError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), width_px, "wrote preview");
        Ok(())
    }
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system fonts");
    Arc::new(db)
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
