use kurbo::{Point, Rect};

use crate::figure::row::FigureRow;

/// SVG user units per centimetre of page width.
pub const UNITS_PER_CM: f64 = 100.0;
/// Horizontal and vertical spacing between cells.
pub const CELL_GAP: f64 = 8.0;
/// Spacing between two scenes.
pub const GROUP_GAP: f64 = 40.0;
/// Caption font size.
pub const CAPTION_SIZE: f64 = 26.0;
/// Height reserved for a caption line under the full images.
pub const CAPTION_LINE: f64 = CAPTION_SIZE * 1.5;

/// Placement of one cell on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct CellPlacement {
    /// Index into [`FigureRow::cells`].
    pub cell: usize,
    /// Page rectangle.
    pub rect: Rect,
    /// Crop marker colour index, for inset frames.
    pub frame: Option<usize>,
}

/// Crop region outline drawn on top of a full image.
#[derive(Clone, Debug, PartialEq)]
pub struct CropMarker {
    /// Page rectangle of the outlined region.
    pub rect: Rect,
    /// Crop box index (colour).
    pub crop: usize,
}

/// Caption anchor (horizontally centred).
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionPlacement {
    /// Index into [`FigureRow::cells`].
    pub cell: usize,
    /// Baseline centre.
    pub anchor: Point,
    /// Available width, used to shrink long captions.
    pub max_width: f64,
}

/// Geometry of one scene's row-group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupLayout {
    /// Bounding box of the group.
    pub bounds: Rect,
    pub cells: Vec<CellPlacement>,
    pub markers: Vec<CropMarker>,
    pub captions: Vec<CaptionPlacement>,
}

/// Lay out `row` at vertical offset `y0` across `page_width` units.
///
/// Full images share one line with their captions below; every crop box then gets a
/// line of insets in the same column order, enlarged to the column width.
pub fn layout_group(row: &FigureRow, page_width: f64, y0: f64) -> GroupLayout {
    let cols = row.images_per_group.max(1);
    let cell_w = ((page_width - CELL_GAP * (cols - 1) as f64) / cols as f64).max(1.0);
    let col_x = |c: usize| c as f64 * (cell_w + CELL_GAP);

    let mut cells = Vec::with_capacity(row.cells.len());
    let mut markers = Vec::new();
    let mut captions = Vec::new();

    let full_h = cell_w * row.image_size.aspect();
    let to_page = cell_w / f64::from(row.image_size.width.max(1));
    for c in 0..cols.min(row.cells.len()) {
        let rect = Rect::new(col_x(c), y0, col_x(c) + cell_w, y0 + full_h);
        cells.push(CellPlacement {
            cell: c,
            rect,
            frame: None,
        });
        if row.cells[c].caption.is_some() {
            captions.push(CaptionPlacement {
                cell: c,
                anchor: Point::new(rect.center().x, rect.y1 + CAPTION_SIZE * 1.1),
                max_width: cell_w,
            });
        }
        if c == 0 {
            for (k, b) in row.crops.iter().enumerate() {
                let x = rect.x0 + f64::from(b.left()) * to_page;
                let y = rect.y0 + f64::from(b.top()) * to_page;
                markers.push(CropMarker {
                    rect: Rect::new(
                        x,
                        y,
                        x + f64::from(b.width()) * to_page,
                        y + f64::from(b.height()) * to_page,
                    ),
                    crop: k,
                });
            }
        }
    }

    let mut y = y0 + full_h + CAPTION_LINE;
    for (k, b) in row.crops.iter().enumerate() {
        let inset_h = cell_w * b.size().aspect();
        for c in 0..cols {
            let cell = cols * (1 + k) + c;
            if cell >= row.cells.len() {
                break;
            }
            cells.push(CellPlacement {
                cell,
                rect: Rect::new(col_x(c), y, col_x(c) + cell_w, y + inset_h),
                frame: Some(k),
            });
        }
        y += inset_h + CELL_GAP;
    }

    GroupLayout {
        bounds: Rect::new(0.0, y0, page_width, y),
        cells,
        markers,
        captions,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/layout.rs"]
mod tests;
