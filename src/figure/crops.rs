use crate::{
    config::table::SceneTable,
    foundation::core::CropBox,
    foundation::error::{FigureError, FigureResult},
};

/// Resolves the ordered crop boxes of a scene.
///
/// An exact override wins; otherwise the default list is used. Bounds are not checked
/// here, see [`crate::compose_row`].
#[derive(Clone, Copy, Debug)]
pub struct CropSelector<'a> {
    table: &'a SceneTable<Vec<CropBox>>,
}

impl<'a> CropSelector<'a> {
    pub fn new(table: &'a SceneTable<Vec<CropBox>>) -> Self {
        Self { table }
    }

    pub fn resolve(&self, scene: &str) -> FigureResult<&'a [CropBox]> {
        if let Some(boxes) = self.table.override_for(scene) {
            return Ok(boxes.as_slice());
        }
        if self.table.default.is_empty() {
            return Err(FigureError::NoCropConfiguration {
                scene: scene.to_string(),
            });
        }
        Ok(self.table.default.as_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/crops.rs"]
mod tests;
