use super::*;
use crate::{CropBox, HdrImage, RenderMeta, RenderResult, SceneInputs, compose_row};

#[test]
fn preview_has_requested_width() {
    let img = |v: f32| HdrImage::from_rgb(16, 8, vec![v; 16 * 8 * 3]).unwrap();
    let inputs = SceneInputs {
        scene: "Pool".to_string(),
        reference: img(1.0),
        results: vec![RenderResult {
            method: "Guided".to_string(),
            image: img(0.2),
            meta: RenderMeta {
                sample_count: None,
                render_time_ms: 10.0,
            },
        }],
    };
    let row = compose_row(&inputs, &[CropBox::new(0, 0, 4, 4, 5.0).unwrap()], 0.0, 80).unwrap();
    let doc = Document::new(vec![row], 18.0);

    let png = doc.to_png(300).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), 300);
    assert!(decoded.height() > 0);
}
