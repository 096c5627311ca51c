use std::path::{Path, PathBuf};

use crate::{
    assets::discover::select_scenes,
    assets::scene::SceneInputs,
    config::model::FigureConfig,
    export::document::Document,
    export::raster::DEFAULT_PREVIEW_WIDTH,
    figure::crops::CropSelector,
    figure::row::{FigureRow, compose_row},
    foundation::error::FigureResult,
};

/// Options for [`run`].
#[derive(Clone, Debug, Default)]
pub struct RunOpts {
    /// Output path; defaults to `<root>/<layout.output_name>`.
    pub out: Option<PathBuf>,
    /// Also write a PNG preview next to the SVG.
    pub png_preview: bool,
}

/// Compose one scene's row: load inputs, resolve crops and exposure, tonemap.
#[tracing::instrument(skip(root, cfg))]
pub fn compose_scene(root: &Path, scene: &str, cfg: &FigureConfig) -> FigureResult<FigureRow> {
    let crops = CropSelector::new(&cfg.crops).resolve(scene)?;
    let exposure = cfg.exposure_for(scene);
    tracing::debug!(exposure, crops = crops.len(), "resolved scene settings");

    let inputs = SceneInputs::load(root, scene, cfg)?;
    compose_row(&inputs, crops, exposure, cfg.layout.jpeg_quality)
}

/// Build the overview document for every selected scene under `root`.
///
/// Scenes are processed one at a time in name order; the first failure aborts.
pub fn build_overview(root: &Path, cfg: &FigureConfig) -> FigureResult<Document> {
    cfg.validate()?;
    let scenes = select_scenes(root, cfg.scene_filter.as_deref())?;
    if scenes.is_empty() {
        tracing::warn!(root = %root.display(), "no scenes selected");
    }

    let mut rows = Vec::with_capacity(scenes.len());
    for scene in &scenes {
        tracing::info!(scene = %scene, "composing scene");
        let row = compose_scene(root, scene, cfg).map_err(|e| e.in_scene(scene))?;
        rows.push(row);
    }
    Ok(Document::new(rows, cfg.layout.column_width_cm))
}

/// Default output location for `root`.
pub fn default_output_path(root: &Path, cfg: &FigureConfig) -> PathBuf {
    root.join(&cfg.layout.output_name)
}

/// Build the overview and write it (plus the optional PNG preview).
pub fn run(root: &Path, cfg: &FigureConfig, opts: &RunOpts) -> FigureResult<Document> {
    let doc = build_overview(root, cfg)?;
    let out = opts
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(root, cfg));
    doc.write(&out)?;
    if opts.png_preview {
        doc.write_png(&out.with_extension("png"), DEFAULT_PREVIEW_WIDTH)?;
    }
    Ok(doc)
}
