use super::*;

#[test]
fn shared_view_writes_land_at_float_offset() {
    let buf = FloatBuffer::allocate(8);
    let v = FloatView::shared(&buf, 3, 2).unwrap();
    v.set(0, 7.0);
    v.set(1, 9.0);
    assert_eq!(buf.snapshot(), vec![0.0, 0.0, 0.0, 7.0, 9.0, 0.0, 0.0, 0.0]);
    assert_eq!(v.byte_offset(), 12);
    assert_eq!(buf.read_at_byte(16).unwrap(), 9.0);
    assert_eq!(v.kind(), StorageKind::Shared);
}

#[test]
fn shared_view_out_of_bounds_is_invalid() {
    let buf = FloatBuffer::allocate(4);
    assert!(matches!(
        FloatView::shared(&buf, 3, 2),
        Err(GeomError::InvalidView { offset: 3, length: 2, .. })
    ));
}

#[test]
fn private_views_are_independent() {
    let a = FloatView::private(2);
    let b = FloatView::private(2);
    a.set(0, 1.0);
    assert_eq!(b.get(0), 0.0);
    assert!(!a.overlaps(&b));
    assert_eq!(a.kind(), StorageKind::Private);
}

#[test]
fn overlap_is_slot_precise() {
    let buf = FloatBuffer::allocate(10);
    let a = FloatView::shared(&buf, 0, 4).unwrap();
    let b = FloatView::shared(&buf, 4, 2).unwrap();
    let c = FloatView::shared(&buf, 3, 2).unwrap();
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
    assert!(b.overlaps(&c));
    assert!(a.overlaps(&a.clone()));
}

#[test]
fn copy_from_slice_checks_length() {
    let v = FloatView::private(3);
    assert!(v.copy_from_slice(&[1.0, 2.0]).is_err());
    v.copy_from_slice(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);
}

#[test]
#[should_panic(expected = "out of range")]
fn raw_index_past_end_panics() {
    let buf = FloatBuffer::allocate(8);
    let v = FloatView::shared(&buf, 0, 2).unwrap();
    v.get(2);
}

#[test]
fn ensure_disjoint_flags_any_overlapping_input() {
    let buf = FloatBuffer::allocate(12);
    let left = FloatView::shared(&buf, 0, 6).unwrap();
    let right = FloatView::shared(&buf, 6, 6).unwrap();
    let dest = FloatView::private(6);
    assert!(ensure_disjoint("concat_to", &dest, &[&left]).is_ok());
    assert!(ensure_disjoint("concat_to", &dest, &[&right]).is_ok());
    assert!(matches!(
        ensure_disjoint("concat_to", &right, &[&left, &right]),
        Err(GeomError::Aliasing { op: "concat_to" })
    ));
}
