use crate::assets::metadata::RenderMeta;

/// Caption of the reference cell.
pub const REFERENCE_CAPTION: &str = "Reference";

/// `"<method> (<spp>spp after <secs>s)"`, or `"<method> (<secs>s)"` when the sample
/// count was not recorded. Seconds are printed with one decimal.
pub fn caption(method: &str, meta: &RenderMeta) -> String {
    let secs = meta.render_time_secs();
    match meta.sample_count {
        Some(spp) => format!("{method} ({spp}spp after {secs:.1}s)"),
        None => format!("{method} ({secs:.1}s)"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/caption.rs"]
mod tests;
