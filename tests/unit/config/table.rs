use super::*;

#[test]
fn resolve_prefers_exact_override() {
    let t = SceneTable::new(0.0f32).with("Pool", -3.0).with("HomeOffice", 1.0);
    assert_eq!(*t.resolve("Pool"), -3.0);
    assert_eq!(*t.resolve("HomeOffice"), 1.0);
    assert_eq!(*t.resolve("pool"), 0.0);
    assert_eq!(*t.resolve("Unknown"), 0.0);
}

#[test]
fn json_overrides_are_optional() {
    let t: SceneTable<f32> = serde_json::from_str(r#"{"default": 2.5}"#).unwrap();
    assert_eq!(*t.resolve("Anything"), 2.5);
    assert!(t.override_for("Anything").is_none());
    assert_eq!(t.values().count(), 1);
}

#[test]
fn patch_keeps_parts_it_does_not_name() {
    let base = SceneTable::new(0.0f32).with("Pool", -3.0);

    let p: SceneTablePatch<f32> = serde_json::from_str(r#"{"scenes": {"Pool": 1}}"#).unwrap();
    let t = p.apply(base.clone());
    assert_eq!(t.default, 0.0);
    assert_eq!(*t.resolve("Pool"), 1.0);

    let p: SceneTablePatch<f32> = serde_json::from_str(r#"{"default": 2}"#).unwrap();
    let t = p.apply(base.clone());
    assert_eq!(*t.resolve("Other"), 2.0);
    assert_eq!(*t.resolve("Pool"), -3.0);

    assert_eq!(SceneTablePatch::default().apply(base.clone()), base);
}
