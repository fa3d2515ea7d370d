use super::*;
use crate::{AffineTransform, Point, Rect, Size, Transform3D};

#[test]
fn copies_are_value_equal_and_storage_independent() {
    let a = Rect::new(1.0, 2.0, 3.0, 4.0);
    let mut b = a.duplicate();
    assert_eq!(a, b);
    b.set(0, 99.0);
    assert_eq!(a.get(0), 1.0);
    assert_ne!(a, b);
}

#[test]
fn from_view_requires_exact_length() {
    let four = FloatView::private(4);
    assert!(matches!(
        Point::from_view(&four),
        Err(GeomError::ShapeMismatch {
            shape: "Point",
            expected: 2,
            actual: 4
        })
    ));
    let copy = Rect::from_view(&four).unwrap();
    assert_eq!(copy.storage_kind(), StorageKind::Private);
}

#[test]
fn from_slice_rejects_wrong_arity() {
    assert!(AffineTransform::from_slice(&[1.0; 5]).is_err());
    assert!(Transform3D::from_slice(&[0.0; 16]).is_ok());
}

#[test]
fn shared_constructors_validate_before_writing() {
    let buf = FloatBuffer::from_floats(&[7.0; 5]);
    assert!(matches!(
        AffineTransform::zeroed_in(&buf, 0),
        Err(GeomError::InvalidView { .. })
    ));
    assert!(matches!(
        Size::from_slice_in(&buf, 0, &[1.0, 2.0, 3.0]),
        Err(GeomError::ShapeMismatch { .. })
    ));
    assert_eq!(buf.snapshot(), vec![7.0; 5]);
}

#[test]
fn zeroed_in_overwrites_and_view_in_preserves() {
    let buf = FloatBuffer::from_floats(&[5.0; 6]);
    let kept = Point::view_in(&buf, 0).unwrap();
    assert_eq!(kept.to_array(), [5.0, 5.0]);
    let zeroed = Point::zeroed_in(&buf, 2).unwrap();
    assert_eq!(zeroed.to_array(), [0.0, 0.0]);
    assert_eq!(buf.snapshot(), vec![5.0, 5.0, 0.0, 0.0, 5.0, 5.0]);
}

#[test]
fn copy_in_handles_overlapping_source() {
    let buf = FloatBuffer::from_floats(&[1.0, 2.0, 3.0, 4.0, 0.0]);
    let src = Rect::view_in(&buf, 0).unwrap();
    let shifted = Rect::copy_in(&buf, 1, src.view()).unwrap();
    assert_eq!(shifted.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(buf.snapshot(), vec![1.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn named_access_resolves_per_shape() {
    let mut r = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.get_named(Field::Width).unwrap(), 3.0);
    r.set_named(Field::H, 9.0).unwrap();
    assert_eq!(r.get(3), 9.0);

    let s = Size::new(3.0, 4.0);
    assert_eq!(s.get_named(Field::Width).unwrap(), 3.0);

    let p = Point::new(1.0, 2.0);
    assert!(matches!(
        p.get_named(Field::Width),
        Err(GeomError::UnknownField { shape: "Point", .. })
    ));
    let t = AffineTransform::identity();
    assert!(t.get_named(Field::M13).is_err());
}

#[test]
fn debug_names_the_shape() {
    let s = format!("{:?}", Size::new(1.0, 2.0));
    assert!(s.starts_with("Size"));
    assert!(s.contains("Private"));
}

#[test]
fn default_is_zero() {
    assert_eq!(Transform3D::default().to_array(), [0.0; 16]);
}

#[test]
fn raw_and_bulk_writes_reach_aliasing_views() {
    let buf = FloatBuffer::allocate(6);
    let mut a = AffineTransform::view_in(&buf, 0).unwrap();
    let alias = AffineTransform::view_in(&buf, 0).unwrap();

    a.set(4, 9.0);
    assert_eq!(alias.tx(), 9.0);

    a.set_identity();
    assert!(alias.is_identity());
    assert_eq!(buf.get(4), 0.0);
}
