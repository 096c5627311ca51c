//! Renderfig builds side-by-side comparison figures from rendered HDR results.
//!
//! A results tree holds one directory per scene with a reference image and one
//! subdirectory per compared method (image plus JSON metadata). Renderfig turns it into a
//! single SVG page with one row-group per scene.
//!
//! # Pipeline overview
//!
//! 1. **Select**: `results root -> [scene]` (directories passing the allow-list, sorted)
//! 2. **Load**: `scene -> SceneInputs` (reference, per-method image and metadata)
//! 3. **Compose**: `SceneInputs + crops + exposure -> FigureRow` (tonemapped, captioned cells)
//! 4. **Export**: `[FigureRow] -> Document` (SVG page, optional PNG preview)
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: tonemapping, layout and SVG output are pure functions of their input.
//! - **Fail fast**: any error in any scene aborts the run before anything is written.
//! - **Crop before tonemap**: insets are cut from the linear buffers, then tonemapped.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod export;
mod figure;
mod foundation;
mod pipeline;

pub use assets::discover::select_scenes;
pub use assets::hdr::{HdrImage, load_hdr};
pub use assets::metadata::{RenderMeta, read_metadata};
pub use assets::scene::{RenderResult, SceneInputs, ScenePaths};
pub use config::model::{FigureConfig, LayoutConfig};
pub use config::table::SceneTable;
pub use export::document::{Document, MARKER_COLORS, export};
pub use export::layout::{
    CaptionPlacement, CellPlacement, CropMarker, GroupLayout, UNITS_PER_CM, layout_group,
};
pub use export::raster::DEFAULT_PREVIEW_WIDTH;
pub use figure::caption::{REFERENCE_CAPTION, caption};
pub use figure::crops::CropSelector;
pub use figure::row::{CellSource, CellView, FigureCell, FigureRow, compose_row, validate_crops};
pub use figure::tonemap::{
    DEFAULT_JPEG_QUALITY, EncodedImage, apply_exposure, linear_to_srgb, tonemap, tonemap_rgb8,
};
pub use foundation::core::{CropBox, ImageSize};
pub use foundation::error::{ErrorKind, FigureError, FigureResult};
pub use pipeline::overview::{
    RunOpts, build_overview, compose_scene, default_output_path, run,
};
