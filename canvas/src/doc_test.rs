#![allow(clippy::float_cmp)]

use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Object {
    Object::new(Shape::Line { a: p(ax, ay), b: p(bx, by) }, Rgb::BLACK, 1.0)
}

fn dummy_point(x: f64) -> Object {
    Object::new(Shape::Point { at: p(x, 0.0) }, Rgb::BLACK, 1.0)
}

// =============================================================
// Shape::from_vertices
// =============================================================

#[test]
fn from_vertices_accepts_matching_counts() {
    assert_eq!(Shape::from_vertices(ShapeKind::Point, &[p(1.0, 2.0)]), Ok(Shape::Point { at: p(1.0, 2.0) }));
    assert_eq!(
        Shape::from_vertices(ShapeKind::Rectangle, &[p(0.0, 0.0), p(3.0, 4.0)]),
        Ok(Shape::Rectangle { a: p(0.0, 0.0), b: p(3.0, 4.0) })
    );
    let samples = [p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)];
    assert_eq!(
        Shape::from_vertices(ShapeKind::Freehand, &samples),
        Ok(Shape::Freehand { samples: samples.to_vec() })
    );
}

#[test]
fn from_vertices_single_sample_freehand_is_valid() {
    let shape = Shape::from_vertices(ShapeKind::Freehand, &[p(5.0, 5.0)]).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Freehand);
    assert_eq!(shape.vertices().len(), 1);
}

#[test]
fn from_vertices_rejects_wrong_counts() {
    let err = Shape::from_vertices(ShapeKind::Line, &[p(0.0, 0.0)]).unwrap_err();
    assert_eq!(err, ShapeError::VertexCount { kind: ShapeKind::Line, expected: "exactly 2", got: 1 });

    let err = Shape::from_vertices(ShapeKind::Point, &[p(0.0, 0.0), p(1.0, 1.0)]).unwrap_err();
    assert_eq!(err, ShapeError::VertexCount { kind: ShapeKind::Point, expected: "exactly 1", got: 2 });

    let err = Shape::from_vertices(ShapeKind::Freehand, &[]).unwrap_err();
    assert_eq!(err, ShapeError::VertexCount { kind: ShapeKind::Freehand, expected: "at least 1", got: 0 });
}

#[test]
fn shape_error_message_names_kind() {
    let err = Shape::from_vertices(ShapeKind::Ellipse, &[]).unwrap_err();
    assert_eq!(err.to_string(), "ellipse needs exactly 2 vertices, got 0");
}

// =============================================================
// Shape geometry
// =============================================================

#[test]
fn center_of_line_and_rectangle_is_mean() {
    assert_eq!(Shape::Line { a: p(0.0, 0.0), b: p(10.0, 4.0) }.center(), p(5.0, 2.0));
    assert_eq!(Shape::Rectangle { a: p(-2.0, -2.0), b: p(2.0, 6.0) }.center(), p(0.0, 2.0));
}

#[test]
fn center_of_point_ellipse_freehand_is_first_vertex() {
    assert_eq!(Shape::Point { at: p(3.0, 3.0) }.center(), p(3.0, 3.0));
    assert_eq!(Shape::Ellipse { center: p(1.0, 1.0), extent: p(9.0, 9.0) }.center(), p(1.0, 1.0));
    assert_eq!(Shape::Freehand { samples: vec![p(7.0, 8.0), p(0.0, 0.0)] }.center(), p(7.0, 8.0));
}

#[test]
fn radii_are_absolute() {
    let e = Shape::Ellipse { center: p(10.0, 10.0), extent: p(4.0, 13.0) };
    assert_eq!(e.radii(), Some((6.0, 3.0)));
    assert_eq!(Shape::Point { at: p(0.0, 0.0) }.radii(), None);
}

#[test]
fn shape_serializes_with_kind_tag() {
    let json = serde_json::to_value(Shape::Line { a: p(0.0, 0.0), b: p(1.0, 1.0) }).unwrap();
    assert_eq!(json["kind"], "line");
    assert_eq!(json["b"]["x"], 1.0);
}

// =============================================================
// Object
// =============================================================

#[test]
fn object_new_floors_thickness() {
    let obj = Object::new(Shape::Point { at: p(0.0, 0.0) }, Rgb::RED, 0.25);
    assert_eq!(obj.thickness, MIN_THICKNESS);
    assert_eq!(obj.transform, Transform::default());
}

#[test]
fn object_ids_are_unique() {
    assert_ne!(dummy_point(0.0).id, dummy_point(0.0).id);
}

#[test]
fn object_aabb_with_identity_matches_vertices() {
    let obj = line(10.0, 20.0, 30.0, 5.0);
    assert_eq!(obj.aabb(), Some(Aabb::new(10.0, 5.0, 30.0, 20.0)));
}

#[test]
fn object_aabb_ellipse_uses_radii_not_stored_vertices() {
    let obj = Object::new(Shape::Ellipse { center: p(0.0, 0.0), extent: p(4.0, 2.0) }, Rgb::BLACK, 1.0);
    assert_eq!(obj.aabb(), Some(Aabb::new(-4.0, -2.0, 4.0, 2.0)));
}

#[test]
fn object_aabb_rotated_scaled_ellipse_uses_extremal_points() {
    let mut obj = Object::new(Shape::Ellipse { center: p(0.0, 0.0), extent: p(10.0, 2.0) }, Rgb::BLACK, 1.0);
    obj.transform.rotate = 90.0;
    obj.transform.scale = p(2.0, 1.0);
    let b = obj.aabb().unwrap();
    assert!((b.min_x + 2.0).abs() < 1e-9);
    assert!((b.max_x - 2.0).abs() < 1e-9);
    assert!((b.min_y + 20.0).abs() < 1e-9);
    assert!((b.max_y - 20.0).abs() < 1e-9);
}

#[test]
fn object_aabb_follows_transform() {
    let mut obj = line(0.0, 0.0, 10.0, 0.0);
    obj.transform.rotate = 90.0;
    obj.transform.translate = p(100.0, 0.0);
    let b = obj.aabb().unwrap();
    assert!((b.min_x - 105.0).abs() < 1e-9);
    assert!((b.max_x - 105.0).abs() < 1e-9);
    assert!((b.min_y + 5.0).abs() < 1e-9);
    assert!((b.max_y - 5.0).abs() < 1e-9);
}

#[test]
fn object_aabb_rotated_rectangle_uses_all_corners() {
    let mut obj = Object::new(Shape::Rectangle { a: p(-10.0, -10.0), b: p(10.0, 10.0) }, Rgb::BLACK, 1.0);
    obj.transform.rotate = 45.0;
    let b = obj.aabb().unwrap();
    let half_diagonal = 200.0_f64.sqrt();
    assert!((b.max_x - half_diagonal).abs() < 1e-9);
    assert!((b.min_y + half_diagonal).abs() < 1e-9);
}

#[test]
fn world_local_round_trip() {
    let mut obj = line(0.0, 0.0, 10.0, 10.0);
    obj.transform = Transform { translate: p(3.0, -4.0), rotate: 45.0, scale: p(2.0, 0.5) };
    let local = p(7.0, 2.0);
    let back = obj.to_local(obj.to_world(local));
    assert!((back.x - local.x).abs() < 1e-9);
    assert!((back.y - local.y).abs() < 1e-9);
}

#[test]
fn duplicate_is_deep_with_fresh_id() {
    let mut original = line(0.0, 0.0, 1.0, 1.0);
    original.transform.translate = p(5.0, 5.0);
    let mut copy = original.duplicate();
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.shape, original.shape);
    copy.transform.translate = p(0.0, 0.0);
    assert_eq!(original.transform.translate, p(5.0, 5.0));
}

// =============================================================
// DocStore
// =============================================================

#[test]
fn append_keeps_scene_order() {
    let mut doc = DocStore::new();
    let a = doc.append(dummy_point(0.0));
    let b = doc.append(dummy_point(1.0));
    let c = doc.append(dummy_point(2.0));
    assert_eq!(doc.ids(), vec![a, b, c]);
    assert_eq!(doc.iter_rev().map(|o| o.id).collect::<Vec<_>>(), vec![c, b, a]);
    assert_eq!(doc.len(), 3);
}

#[test]
fn append_existing_id_replaces_in_place() {
    let mut doc = DocStore::new();
    let mut obj = dummy_point(0.0);
    let id = doc.append(obj.clone());
    doc.append(dummy_point(1.0));
    obj.color = Rgb::GREEN;
    doc.append(obj);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.ids()[0], id);
    assert_eq!(doc.get(&id).unwrap().color, Rgb::GREEN);
}

#[test]
fn remove_keeps_other_ids_resolving() {
    let mut doc = DocStore::new();
    let a = doc.append(dummy_point(0.0));
    let b = doc.append(dummy_point(1.0));
    let c = doc.append(dummy_point(2.0));
    let removed = doc.remove(&[a]);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].id, a);
    assert!(doc.get(&a).is_none());
    assert_eq!(doc.get(&b).unwrap().shape, Shape::Point { at: p(1.0, 0.0) });
    assert_eq!(doc.get(&c).unwrap().shape, Shape::Point { at: p(2.0, 0.0) });
}

#[test]
fn remove_returns_scene_order_and_skips_unknown() {
    let mut doc = DocStore::new();
    let a = doc.append(dummy_point(0.0));
    let b = doc.append(dummy_point(1.0));
    let c = doc.append(dummy_point(2.0));
    let removed: Vec<ObjectId> = doc.remove(&[c, Uuid::new_v4(), a]).iter().map(|o| o.id).collect();
    assert_eq!(removed, vec![a, c]);
    assert_eq!(doc.ids(), vec![b]);
}

#[test]
fn remove_unknown_only_is_noop() {
    let mut doc = DocStore::new();
    doc.append(dummy_point(0.0));
    assert!(doc.remove(&[Uuid::new_v4()]).is_empty());
    assert_eq!(doc.len(), 1);
}

#[test]
fn get_mut_edits_in_place() {
    let mut doc = DocStore::new();
    let id = doc.append(dummy_point(0.0));
    doc.get_mut(&id).unwrap().thickness = 4.0;
    assert_eq!(doc.get(&id).unwrap().thickness, 4.0);
}

#[test]
fn snapshot_is_independent_and_keeps_ids() {
    let mut doc = DocStore::new();
    let a = doc.append(dummy_point(0.0));
    let b = doc.append(dummy_point(1.0));
    let snap = doc.snapshot(&[b, a]);
    assert_eq!(snap.iter().map(|o| o.id).collect::<Vec<_>>(), vec![a, b]);
    doc.get_mut(&a).unwrap().transform.translate = p(50.0, 50.0);
    assert_eq!(snap[0].transform.translate, p(0.0, 0.0));
}

#[test]
fn insert_assigns_fresh_ids_on_top() {
    let mut doc = DocStore::new();
    let a = doc.append(dummy_point(0.0));
    let snap = doc.snapshot(&[a]);
    let new_ids = doc.insert(&snap);
    assert_eq!(new_ids.len(), 1);
    assert_ne!(new_ids[0], a);
    assert_eq!(doc.ids(), vec![a, new_ids[0]]);
}

#[test]
fn clear_empties_store() {
    let mut doc = DocStore::new();
    let a = doc.append(dummy_point(0.0));
    doc.clear();
    assert!(doc.is_empty());
    assert!(!doc.contains(&a));
}
