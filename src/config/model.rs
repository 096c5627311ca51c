use std::{collections::BTreeSet, path::Path};

use anyhow::Context;

use crate::{
    config::table::{SceneTable, SceneTablePatch},
    figure::tonemap::DEFAULT_JPEG_QUALITY,
    foundation::core::CropBox,
    foundation::error::{FigureError, FigureResult},
};

/// Full figure configuration.
///
/// Built-in defaults reproduce the comparison report this tool was written for; a JSON
/// file may override any subset of fields (see [`FigureConfig::from_path`]). A per-scene
/// table may give only `default` or only `scenes`; the other part stays built-in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "FigureConfigRepr")]
pub struct FigureConfig {
    /// Compared methods, in display order. Each is a subdirectory of every scene.
    pub methods: Vec<String>,
    /// When set, only scenes named here are processed.
    pub scene_filter: Option<Vec<String>>,
    /// Per-scene exposure adjustment in stops.
    pub exposures: SceneTable<f32>,
    /// Per-scene crop boxes. An empty default means "no default configured".
    pub crops: SceneTable<Vec<CropBox>>,
    /// Output layout and file naming.
    pub layout: LayoutConfig,
}

/// On-disk form of [`FigureConfig`]: every field optional, merged over the defaults.
#[derive(serde::Deserialize)]
struct FigureConfigRepr {
    methods: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    scene_filter: Option<Option<Vec<String>>>,
    #[serde(default)]
    exposures: SceneTablePatch<f32>,
    #[serde(default)]
    crops: SceneTablePatch<Vec<CropBox>>,
    #[serde(default)]
    layout: LayoutConfig,
}

/// Tells an explicit `null` apart from an absent field.
fn present<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(d).map(Some)
}

impl From<FigureConfigRepr> for FigureConfig {
    fn from(r: FigureConfigRepr) -> Self {
        let base = Self::default();
        Self {
            methods: r.methods.unwrap_or(base.methods),
            scene_filter: r.scene_filter.unwrap_or(base.scene_filter),
            exposures: r.exposures.apply(base.exposures),
            crops: r.crops.apply(base.crops),
            layout: r.layout,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Layout, encoding and file naming options.
pub struct LayoutConfig {
    /// Total page width in centimetres.
    pub column_width_cm: f64,
    /// JPEG quality of embedded cells (1..=100).
    pub jpeg_quality: u8,
    /// File stem of the reference image inside a scene directory.
    pub reference_stem: String,
    /// File stem of a method's image and metadata inside its directory.
    pub render_stem: String,
    /// Image file extension.
    pub image_ext: String,
    /// Metadata file extension.
    pub meta_ext: String,
    /// Output document file name, relative to the results root.
    pub output_name: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width_cm: 18.0,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            reference_stem: "Reference".to_string(),
            render_stem: "Render".to_string(),
            image_ext: "exr".to_string(),
            meta_ext: "json".to_string(),
            output_name: "Overview.svg".to_string(),
        }
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        let default_crops = [(100, 115), (100, 215)]
            .into_iter()
            .map(|(top, left)| CropBox::new(top, left, 80, 110, 5.0))
            .collect::<FigureResult<Vec<_>>>()
            .unwrap_or_default();

        Self {
            methods: vec!["PathTracer".to_string(), "Guided".to_string()],
            scene_filter: Some(
                ["HomeOffice", "ModernLivingRoom", "Pool"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            exposures: SceneTable::new(0.0)
                .with("Pool", -3.0)
                .with("RoughGlassesIndirect", 2.0)
                .with("HomeOffice", 1.0)
                .with("LampCaustic", 0.0)
                .with("LampCausticNoShade", 0.0),
            crops: SceneTable::new(default_crops),
            layout: LayoutConfig::default(),
        }
    }
}

impl FigureConfig {
    /// Load a JSON configuration file. Absent fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> FigureResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text).map_err(|e| match e {
            FigureError::Config(msg) => FigureError::config(format!("'{}': {msg}", path.display())),
            other => other,
        })
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> FigureResult<Self> {
        let cfg: Self = serde_json::from_str(text).map_err(|e| FigureError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> FigureResult<()> {
        if self.methods.is_empty() {
            return Err(FigureError::config("method list must not be empty"));
        }
        let mut seen = BTreeSet::new();
        for m in &self.methods {
            if m.is_empty() || m.contains(['/', '\\']) {
                return Err(FigureError::config(format!("invalid method name '{m}'")));
            }
            if !seen.insert(m.as_str()) {
                return Err(FigureError::config(format!("duplicate method '{m}'")));
            }
        }
        if let Some(exp) = self.exposures.values().find(|e| !e.is_finite()) {
            return Err(FigureError::config(format!("exposure must be finite, got {exp}")));
        }
        let l = &self.layout;
        if !(1..=100).contains(&l.jpeg_quality) {
            return Err(FigureError::config("jpeg_quality must be in 1..=100"));
        }
        if !(l.column_width_cm.is_finite() && l.column_width_cm > 0.0) {
            return Err(FigureError::config("column_width_cm must be > 0"));
        }
        Ok(())
    }

    /// Exposure (in stops) used for `scene`.
    pub fn exposure_for(&self, scene: &str) -> f32 {
        *self.exposures.resolve(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
