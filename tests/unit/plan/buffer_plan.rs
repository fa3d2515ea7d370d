use super::*;
use crate::{
    AffineTransform, Point, Rect, RectLayout, Size, SizeLayout, Transform3D, Transform3DLayout,
};

fn node_plan() -> BufferPlan {
    BufferPlan::from_json_str(
        r#"{ "records": 4, "slots": [
            { "key": "transform", "kind": "affine_transform" },
            { "key": "frame", "kind": "rect" },
            { "key": "anchor", "kind": "point" } ] }"#,
    )
    .unwrap()
}

#[test]
fn stride_and_offsets_pack_slots_in_order() {
    let plan = node_plan();
    assert_eq!(plan.stride(), 12);
    assert_eq!(plan.float_count().unwrap(), 48);
    assert_eq!(plan.offset_of(0, "transform").unwrap(), 0);
    assert_eq!(plan.offset_of(0, "frame").unwrap(), 6);
    assert_eq!(plan.offset_of(2, "anchor").unwrap(), 34);
    assert_eq!(plan.slot("frame"), Some((6, ShapeKind::Rect)));
    assert!(plan.offset_of(4, "anchor").is_err());
    assert!(plan.offset_of(0, "missing").is_err());
}

#[test]
fn views_alias_the_planned_buffer() {
    let plan = node_plan();
    let buf = plan.allocate().unwrap();
    assert_eq!(buf.len(), 48);

    let mut frame = plan.view::<RectLayout>(&buf, 1, "frame").unwrap();
    frame.set_width(7.0);
    assert_eq!(buf.get(12 + 6 + 2), 7.0);

    let again: Rect = plan.view(&buf, 1, "frame").unwrap();
    assert_eq!(again.width(), 7.0);

    let t: AffineTransform = plan.view(&buf, 3, "transform").unwrap();
    assert_eq!(t.view().offset(), 36);
    let p: Point = plan.view(&buf, 3, "anchor").unwrap();
    assert_eq!(p.view().offset(), 46);
}

#[test]
fn slot_kind_must_match_requested_shape() {
    let plan = node_plan();
    let buf = plan.allocate().unwrap();
    assert!(matches!(
        plan.view::<SizeLayout>(&buf, 0, "frame"),
        Err(GeomError::ShapeMismatch { expected: 2, actual: 4, .. })
    ));
    assert!(plan.view::<SizeLayout>(&buf, 0, "anchor").is_err());
    let _: GeomResult<Size> = plan.view(&buf, 0, "anchor");
}

#[test]
fn validation_rejects_bad_plans() {
    for json in [
        r#"{ "records": 0, "slots": [ { "key": "a", "kind": "point" } ] }"#,
        r#"{ "records": 1, "slots": [] }"#,
        r#"{ "records": 1, "slots": [ { "key": " ", "kind": "point" } ] }"#,
        r#"{ "records": 1, "slots": [
            { "key": "a", "kind": "point" }, { "key": "a", "kind": "size" } ] }"#,
    ] {
        let result = BufferPlan::from_json_str(json);
        assert!(matches!(result, Err(GeomError::Validation(_))), "{json}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        BufferPlan::from_json_str(
            r#"{ "records": 1, "slots": [ { "key": "a", "kind": "circle" } ] }"#
        ),
        Err(GeomError::Serde(_))
    ));
}

#[test]
fn oversized_plan_fails_validation() {
    let plan = BufferPlan {
        records: usize::MAX,
        slots: vec![SlotSpec {
            key: "t".to_string(),
            kind: ShapeKind::Transform3D,
        }],
    };
    assert!(plan.validate().is_err());
    assert!(plan.allocate().is_err());
}

#[test]
fn oversized_plan_lookups_return_errors() {
    let plan = BufferPlan {
        records: usize::MAX,
        slots: vec![SlotSpec {
            key: "t".to_string(),
            kind: ShapeKind::Transform3D,
        }],
    };
    let err = plan.offset_of(usize::MAX / 2, "t").unwrap_err();
    assert!(matches!(err, GeomError::Validation(_)));

    let buf = FloatBuffer::allocate(16);
    let far: GeomResult<Transform3D> = plan.view(&buf, usize::MAX / 4, "t");
    assert!(far.is_err());
}

#[test]
fn load_wraps_io_errors() {
    let missing = Path::new("definitely/not/here.json");
    let err = BufferPlan::load(missing).unwrap_err();
    assert!(matches!(err, GeomError::Other(_)));
    assert!(err.to_string().contains("failed to read buffer plan"));
}
