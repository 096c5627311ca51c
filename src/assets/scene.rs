use std::path::{Path, PathBuf};

use crate::{
    assets::hdr::{HdrImage, load_hdr},
    assets::metadata::{RenderMeta, read_metadata},
    config::model::{FigureConfig, LayoutConfig},
    foundation::core::ImageSize,
    foundation::error::{FigureError, FigureResult},
};

/// One method's output for a scene.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Method name, as configured.
    pub method: String,
    /// Rendered image.
    pub image: HdrImage,
    /// Performance metadata.
    pub meta: RenderMeta,
}

/// Everything needed to compose one scene's row.
///
/// `results` is in configured method order, and every image shares the reference's size.
#[derive(Clone, Debug)]
pub struct SceneInputs {
    /// Scene identifier (directory name).
    pub scene: String,
    /// Ground-truth image.
    pub reference: HdrImage,
    /// One entry per configured method.
    pub results: Vec<RenderResult>,
}

impl SceneInputs {
    /// Shared image size.
    pub fn size(&self) -> ImageSize {
        self.reference.size()
    }

    /// Load reference, per-method metadata and per-method images for `scene` under `root`.
    #[tracing::instrument(skip(root, cfg), fields(root = %root.display()))]
    pub fn load(root: &Path, scene: &str, cfg: &FigureConfig) -> FigureResult<Self> {
        let paths = ScenePaths::new(root, scene, &cfg.layout);

        let reference = load_hdr(&paths.reference())?;
        let expected = reference.size();

        let mut results = Vec::with_capacity(cfg.methods.len());
        for method in &cfg.methods {
            let meta = read_metadata(&paths.metadata(method))?;
            let image_path = paths.render(method);
            let image = load_hdr(&image_path)?;
            check_size(&image_path, expected, image.size())?;
            tracing::debug!(
                method = %method,
                spp = ?meta.sample_count,
                render_time_ms = meta.render_time_ms,
                "loaded method result"
            );
            results.push(RenderResult {
                method: method.clone(),
                image,
                meta,
            });
        }

        Ok(Self {
            scene: scene.to_string(),
            reference,
            results,
        })
    }
}

fn check_size(path: &Path, expected: ImageSize, actual: ImageSize) -> FigureResult<()> {
    if expected == actual {
        return Ok(());
    }
    Err(FigureError::DimensionMismatch {
        path: path.to_path_buf(),
        expected_w: expected.width,
        expected_h: expected.height,
        actual_w: actual.width,
        actual_h: actual.height,
    })
}

/// File-naming convention of a results tree.
#[derive(Clone, Debug)]
pub struct ScenePaths<'a> {
    dir: PathBuf,
    layout: &'a LayoutConfig,
}

impl<'a> ScenePaths<'a> {
    pub fn new(root: &Path, scene: &str, layout: &'a LayoutConfig) -> Self {
        Self {
            dir: root.join(scene),
            layout,
        }
    }

    pub fn reference(&self) -> PathBuf {
        self.dir
            .join(&self.layout.reference_stem)
            .with_extension(&self.layout.image_ext)
    }

    pub fn render(&self, method: &str) -> PathBuf {
        self.dir
            .join(method)
            .join(&self.layout.render_stem)
            .with_extension(&self.layout.image_ext)
    }

    pub fn metadata(&self, method: &str) -> PathBuf {
        self.dir
            .join(method)
            .join(&self.layout.render_stem)
            .with_extension(&self.layout.meta_ext)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/scene.rs"]
mod tests;
