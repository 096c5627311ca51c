use std::path::Path;

use crate::foundation::error::{FigureError, FigureResult};

/// Performance record written by the renderer next to each method's image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderMeta {
    /// Samples per pixel (`NumIterations`), when the renderer tracked it.
    pub sample_count: Option<u64>,
    /// Wall-clock render time in milliseconds (`RenderTime`).
    pub render_time_ms: f64,
}

impl RenderMeta {
    pub fn render_time_secs(&self) -> f64 {
        self.render_time_ms / 1000.0
    }
}

/// Read and interpret a metadata sidecar file.
pub fn read_metadata(path: &Path) -> FigureResult<RenderMeta> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        FigureError::from_read(path, e, |path| FigureError::MissingMetadata { path })
    })?;
    parse_metadata(&text).map_err(|reason| FigureError::malformed(path, reason))
}

fn parse_metadata(text: &str) -> Result<RenderMeta, String> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let obj = value
        .as_object()
        .ok_or_else(|| "expected a JSON object".to_string())?;

    let render_time_ms = match obj.get("RenderTime") {
        None => return Err("missing field 'RenderTime'".to_string()),
        Some(v) => v
            .as_f64()
            .filter(|t| t.is_finite() && *t >= 0.0)
            .ok_or_else(|| format!("'RenderTime' must be a non-negative number, got {v}"))?,
    };

    let sample_count = match obj.get("NumIterations") {
        None | Some(serde_json::Value::Null) => None,
        Some(v) => Some(
            v.as_u64()
                .ok_or_else(|| format!("'NumIterations' must be a non-negative integer, got {v}"))?,
        ),
    };

    Ok(RenderMeta {
        sample_count,
        render_time_ms,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/metadata.rs"]
mod tests;
