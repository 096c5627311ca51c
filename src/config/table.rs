use std::collections::BTreeMap;

/// Per-scene setting: a total function `scene -> &T` backed by explicit
/// overrides plus one default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneTable<T> {
    /// Value used for scenes without an override.
    pub default: T,
    /// Overrides keyed by exact scene identifier.
    #[serde(default = "BTreeMap::new")]
    pub scenes: BTreeMap<String, T>,
}

impl<T> SceneTable<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            scenes: BTreeMap::new(),
        }
    }

    pub fn with(mut self, scene: impl Into<String>, value: T) -> Self {
        self.scenes.insert(scene.into(), value);
        self
    }

    pub fn resolve(&self, scene: &str) -> &T {
        self.override_for(scene).unwrap_or(&self.default)
    }

    pub fn override_for(&self, scene: &str) -> Option<&T> {
        self.scenes.get(scene)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.default).chain(self.scenes.values())
    }
}

/// A [`SceneTable`] as written in a config file. Parts left out keep the base table's.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct SceneTablePatch<T> {
    default: Option<T>,
    scenes: Option<BTreeMap<String, T>>,
}

impl<T> Default for SceneTablePatch<T> {
    fn default() -> Self {
        Self {
            default: None,
            scenes: None,
        }
    }
}

impl<T> SceneTablePatch<T> {
    pub(crate) fn apply(self, base: SceneTable<T>) -> SceneTable<T> {
        SceneTable {
            default: self.default.unwrap_or(base.default),
            scenes: self.scenes.unwrap_or(base.scenes),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/table.rs"]
mod tests;
