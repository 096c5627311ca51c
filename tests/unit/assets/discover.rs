use super::*;

fn temp_root(name: &str) -> std::path::PathBuf {
    let root = std::env::temp_dir().join(format!(
        "renderfig_discover_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&root).unwrap();
    root
}

#[test]
fn allow_list_filters_and_output_is_sorted() {
    let root = temp_root("allow");
    for d in ["D", "C", "B", "A"] {
        std::fs::create_dir_all(root.join(d)).unwrap();
    }
    std::fs::write(root.join("Overview.svg"), b"<svg/>").unwrap();

    let allow = vec!["C".to_string(), "A".to_string(), "Z".to_string()];
    assert_eq!(select_scenes(&root, Some(&allow)).unwrap(), vec!["A", "C"]);
    assert_eq!(select_scenes(&root, None).unwrap(), vec!["A", "B", "C", "D"]);
    assert!(select_scenes(&root, Some(&[])).unwrap().is_empty());

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn files_are_not_scenes() {
    let root = temp_root("files");
    std::fs::write(root.join("Pool"), b"not a dir").unwrap();
    let allow = vec!["Pool".to_string()];
    assert!(select_scenes(&root, Some(&allow)).unwrap().is_empty());
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_root_is_an_error() {
    let root = std::env::temp_dir().join("renderfig_discover_no_such_root");
    assert!(select_scenes(&root, None).is_err());
}
