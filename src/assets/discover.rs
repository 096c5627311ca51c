use std::path::Path;

use anyhow::Context;

use crate::foundation::error::FigureResult;

/// Scene directories under `root` that pass the optional allow-list, sorted by name.
///
/// Only names are inspected; nothing inside a scene directory is read.
pub fn select_scenes(root: &Path, allow: Option<&[String]>) -> FigureResult<Vec<String>> {
    let entries =
        std::fs::read_dir(root).with_context(|| format!("list results root '{}'", root.display()))?;

    let mut scenes = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list results root '{}'", root.display()))?;
        // Follows symlinks.
        if !entry.path().is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 directory name");
            continue;
        };
        if let Some(allowed) = allow
            && !allowed.iter().any(|a| *a == name)
        {
            tracing::debug!(scene = %name, "scene not in allow-list");
            continue;
        }
        scenes.push(name);
    }
    scenes.sort();
    Ok(scenes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/discover.rs"]
mod tests;
