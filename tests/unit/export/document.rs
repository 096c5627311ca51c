use super::*;
use crate::{CropBox, ErrorKind, HdrImage, RenderMeta, RenderResult, SceneInputs, compose_row};

fn scene_row(scene: &str) -> FigureRow {
    let img = |v: f32| HdrImage::from_rgb(40, 30, vec![v; 40 * 30 * 3]).unwrap();
    let inputs = SceneInputs {
        scene: scene.to_string(),
        reference: img(0.5),
        results: vec![RenderResult {
            method: "Guided".to_string(),
            image: img(0.25),
            meta: RenderMeta {
                sample_count: Some(128),
                render_time_ms: 4567.0,
            },
        }],
    };
    let crops = [CropBox::new(5, 5, 10, 10, 5.0).unwrap()];
    compose_row(&inputs, &crops, 0.0, 80).unwrap()
}

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "renderfig_doc_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn svg_contains_one_group_per_row_in_order() {
    let doc = Document::new(vec![scene_row("Pool"), scene_row("HomeOffice")], 18.0);
    let svg = doc.to_svg();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="18cm""#));
    assert_eq!(svg.matches(r#"class="row-group""#).count(), 2);
    let pool = svg.find(r#"data-scene="Pool""#).unwrap();
    let office = svg.find(r#"data-scene="HomeOffice""#).unwrap();
    assert!(pool < office);

    // (1 + 1 method) * (1 + 1 crop) cells per group.
    assert_eq!(svg.matches("<image ").count(), 8);
    assert!(svg.contains(">Guided (128spp after 4.6s)</text>"));
    assert!(svg.contains(">Reference</text>"));
    assert!(svg.ends_with("</g>\n</svg>\n"));
}

#[test]
fn empty_document_is_a_blank_page() {
    let svg = Document::new(Vec::new(), 18.0).to_svg();
    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="18cm" height="0.01cm" viewBox="0 0 1800 1">"#,
            "\n",
            r#"<rect x="0" y="0" width="1800" height="1" fill="white"/>"#,
            "\n</svg>\n"
        )
    );
}

#[test]
fn groups_are_stacked_without_overlap() {
    let doc = Document::new(vec![scene_row("A"), scene_row("B")], 10.0);
    let (groups, height) = doc.layout();
    assert_eq!(groups.len(), 2);
    assert!(groups[1].bounds.y0 >= groups[0].bounds.y1 + GROUP_GAP - 1e-9);
    assert!((height - groups[1].bounds.y1).abs() < 1e-9);
}

#[test]
fn captions_are_escaped() {
    let mut row = scene_row("A&B");
    row.cells[1].caption = Some("<Guided> & co".to_string());
    let svg = Document::new(vec![row], 18.0).to_svg();
    assert!(svg.contains(r#"data-scene="A&amp;B""#));
    assert!(svg.contains("&lt;Guided&gt; &amp; co"));
}

#[test]
fn number_formatting_is_compact() {
    assert_eq!(num(100.0), "100");
    assert_eq!(num(10.5), "10.5");
    assert_eq!(num(0.0), "0");
    assert_eq!(num(-0.001), "0");
    assert_eq!(num(1.239), "1.24");
}

#[test]
fn export_writes_file_and_reports_missing_parent() {
    let dir = temp_dir("export");
    let out = dir.join("Overview.svg");
    let doc = export(vec![scene_row("Pool")], 18.0, &out).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, doc.to_svg());

    let err = export(vec![scene_row("Pool")], 18.0, &dir.join("missing/Overview.svg")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);

    std::fs::remove_dir_all(&dir).ok();
}
