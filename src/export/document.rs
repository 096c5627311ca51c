use std::{fmt, path::Path};

use base64::Engine as _;

use crate::{
    export::layout::{CAPTION_SIZE, GROUP_GAP, GroupLayout, UNITS_PER_CM, layout_group},
    figure::row::{CellView, FigureRow},
    foundation::error::{FigureError, FigureResult},
};

/// Frame colours for crop markers and insets, cycled by crop index.
pub const MARKER_COLORS: [&str; 6] = [
    "#f5a623", "#4a90e2", "#d0021b", "#7ed321", "#9013fe", "#50e3c2",
];

const MARKER_STROKE: f64 = 3.0;

/// Ordered row-groups plus page width, rendered as a single SVG page.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// One row per scene, in processed order.
    pub rows: Vec<FigureRow>,
    /// Page width in centimetres.
    pub column_width_cm: f64,
}

impl Document {
    pub fn new(rows: Vec<FigureRow>, column_width_cm: f64) -> Self {
        Self {
            rows,
            column_width_cm,
        }
    }

    pub fn page_width(&self) -> f64 {
        self.column_width_cm * UNITS_PER_CM
    }

    /// Row-group geometry, stacked top to bottom. Returns the layouts and page height.
    pub fn layout(&self) -> (Vec<GroupLayout>, f64) {
        let mut y = 0.0;
        let mut groups = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let g = layout_group(row, self.page_width(), y);
            y = g.bounds.y1 + GROUP_GAP;
            groups.push(g);
        }
        let height = if groups.is_empty() {
            0.0
        } else {
            y - GROUP_GAP
        };
        (groups, height.max(1.0))
    }

    /// Render the page as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        Svg(self).to_string()
    }

    /// Write the SVG page to `path`. The parent directory must already exist.
    #[tracing::instrument(skip(self), fields(rows = self.rows.len()))]
    pub fn write(&self, path: &Path) -> FigureResult<()> {
        std::fs::write(path, self.to_svg()).map_err(|source| FigureError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote overview");
        Ok(())
    }
}

/// Lay out `rows` on one page of `column_width_cm` and write it to `out`.
pub fn export(rows: Vec<FigureRow>, column_width_cm: f64, out: &Path) -> FigureResult<Document> {
    let doc = Document::new(rows, column_width_cm);
    doc.write(out)?;
    Ok(doc)
}

/// SVG serialization of a [`Document`].
struct Svg<'a>(&'a Document);

impl fmt::Display for Svg<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        let (groups, height) = doc.layout();
        let width = doc.page_width();
        let b64 = base64::engine::general_purpose::STANDARD;

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}cm" height="{}cm" viewBox="0 0 {} {}">"#,
            num(doc.column_width_cm),
            num(height / UNITS_PER_CM),
            num(width),
            num(height)
        )?;
        writeln!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            num(width),
            num(height)
        )?;

        for (row, g) in doc.rows.iter().zip(&groups) {
            writeln!(
                out,
                r#"<g class="row-group" data-scene="{}">"#,
                escape_xml(&row.scene)
            )?;
            for p in &g.cells {
                let cell = &row.cells[p.cell];
                let rendering = match cell.view {
                    CellView::Full => "optimizeQuality",
                    CellView::Inset(_) => "optimizeSpeed",
                };
                writeln!(
                    out,
                    r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none" image-rendering="{rendering}" xlink:href="data:image/jpeg;base64,{}"/>"#,
                    num(p.rect.x0),
                    num(p.rect.y0),
                    num(p.rect.width()),
                    num(p.rect.height()),
                    b64.encode(&cell.image.jpeg)
                )?;
                if let Some(k) = p.frame {
                    frame(out, p.rect, k)?;
                }
            }
            for m in &g.markers {
                frame(out, m.rect, m.crop)?;
            }
            for c in &g.captions {
                let Some(text) = row.cells[c.cell].caption.as_deref() else {
                    continue;
                };
                writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle">{}</text>"#,
                    num(c.anchor.x),
                    num(c.anchor.y),
                    num(caption_font_size(text, c.max_width)),
                    escape_xml(text)
                )?;
            }
            writeln!(out, "</g>")?;
        }
        writeln!(out, "</svg>")
    }
}

fn frame(out: &mut impl fmt::Write, r: kurbo::Rect, crop: usize) -> fmt::Result {
    writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
        num(r.x0),
        num(r.y0),
        num(r.width()),
        num(r.height()),
        MARKER_COLORS[crop % MARKER_COLORS.len()],
        num(MARKER_STROKE)
    )
}

/// Shrink long captions so they stay within their column.
fn caption_font_size(text: &str, max_width: f64) -> f64 {
    let estimated = text.chars().count() as f64 * CAPTION_SIZE * 0.55;
    if estimated <= max_width {
        CAPTION_SIZE
    } else {
        CAPTION_SIZE * max_width / estimated
    }
}

fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/document.rs"]
mod tests;
