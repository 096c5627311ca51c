use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FigureError::MissingMetadata {
            path: PathBuf::from("Pool/Guided/Render.json")
        }
        .to_string()
        .starts_with("missing metadata:")
    );
    assert!(
        FigureError::malformed("m.json", "x")
            .to_string()
            .starts_with("malformed metadata:")
    );
    assert!(
        FigureError::config("x")
            .to_string()
            .starts_with("config error:")
    );
    assert!(
        FigureError::NoCropConfiguration {
            scene: "Pool".to_string()
        }
        .to_string()
        .contains("'Pool'")
    );
}

#[test]
fn scene_wrapping_names_scene_and_keeps_kind() {
    let err = FigureError::MissingImage {
        path: PathBuf::from("Results/Pool/Guided/Render.exr"),
    }
    .in_scene("Pool");
    let msg = err.to_string();
    assert!(msg.contains("scene 'Pool'"));
    assert!(msg.contains("Guided/Render.exr"));
    assert_eq!(err.kind(), ErrorKind::MissingImage);

    // Wrapping twice keeps the innermost scene.
    let twice = err.in_scene("Other");
    assert!(twice.to_string().contains("scene 'Pool'"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FigureError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn read_failures_split_missing_from_unreadable() {
    let path = Path::new("Pool/Guided/Render.exr");
    let missing = FigureError::from_read(
        path,
        std::io::Error::from(std::io::ErrorKind::NotFound),
        |path| FigureError::MissingImage { path },
    );
    assert_eq!(missing.kind(), ErrorKind::MissingImage);

    let denied = FigureError::from_read(
        path,
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        |path| FigureError::MissingImage { path },
    );
    assert_eq!(denied.kind(), ErrorKind::Read);
    assert!(denied.to_string().starts_with("read error: 'Pool/Guided/Render.exr'"));
}
