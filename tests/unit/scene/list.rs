use super::*;
use crate::scene::model::ShapeKind;

#[test]
fn with_object_returns_new_scene_and_leaves_original() {
    let empty = Scene::new();
    let one = empty
        .with_object(AnimationObject::new(ShapeKind::Sphere))
        .unwrap();
    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
}

#[test]
fn duplicate_ids_are_rejected() {
    let obj = AnimationObject::new(ShapeKind::Cube);
    let scene = Scene::new().with_object(obj.clone()).unwrap();
    let err = scene.with_object(obj).unwrap_err();
    assert!(err.to_string().contains("already contains"));
}

#[test]
fn invalid_objects_are_rejected() {
    let obj = AnimationObject::new(ShapeKind::Cube).with_scale(0.0);
    assert!(Scene::new().with_object(obj).is_err());
}

#[test]
fn without_and_clear_do_not_touch_the_source() {
    let a = AnimationObject::new(ShapeKind::Atom);
    let b = AnimationObject::new(ShapeKind::Torus);
    let scene = Scene::from_objects(vec![a.clone(), b.clone()]).unwrap();

    let only_b = scene.without(&a.id);
    assert_eq!(only_b.objects(), std::slice::from_ref(&b));
    assert_eq!(scene.len(), 2);
    assert!(scene.clear().is_empty());
    assert_eq!(scene.len(), 2);
}

#[test]
fn serde_is_a_plain_array() {
    let a = AnimationObject::new(ShapeKind::Pyramid);
    let scene = Scene::from_objects(vec![a]).unwrap();
    let json = serde_json::to_value(&scene).unwrap();
    assert!(json.is_array());

    let back: Scene = serde_json::from_value(json).unwrap();
    assert_eq!(back, scene);

    let dup = r#"[{"id":"x","type":"cube"},{"id":"x","type":"cone"}]"#;
    assert!(serde_json::from_str::<Scene>(dup).is_err());
}
