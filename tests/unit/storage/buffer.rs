use super::*;

#[test]
fn allocate_is_zeroed_and_sized_in_bytes() {
    let buf = FloatBuffer::allocate(6);
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.byte_len(), 24);
    assert!(buf.snapshot().iter().all(|v| *v == 0.0));
    assert!(FloatBuffer::allocate(0).is_empty());
}

#[test]
fn validate_accepts_exact_fit_and_rejects_overrun() {
    let buf = FloatBuffer::allocate(8);
    assert!(buf.validate(0, 8).is_ok());
    assert!(buf.validate(6, 2).is_ok());
    assert!(buf.validate(8, 0).is_ok());
    for (offset, length) in [(7, 2), (0, 9), (8, 1), (100, 0)] {
        let err = buf.validate(offset, length).unwrap_err();
        assert!(
            matches!(err, GeomError::InvalidView { byte_len: 32, .. }),
            "({offset}, {length}) -> {err}"
        );
    }
}

#[test]
fn validate_reports_overflow_as_invalid_view() {
    let buf = FloatBuffer::allocate(4);
    assert!(matches!(
        buf.validate(usize::MAX, 2),
        Err(GeomError::InvalidView { .. })
    ));
    assert!(matches!(
        buf.validate(usize::MAX / 2, 2),
        Err(GeomError::InvalidView { .. })
    ));
}

#[test]
fn clones_alias_the_same_slots() {
    let a = FloatBuffer::allocate(3);
    let b = a.clone();
    b.set(1, 4.5);
    assert_eq!(a.get(1), 4.5);
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&FloatBuffer::allocate(3)));
}

#[test]
fn byte_reads_require_alignment() {
    let buf = FloatBuffer::from_floats(&[1.0, 2.0, 3.0]);
    assert_eq!(buf.read_at_byte(8).unwrap(), 3.0);
    assert!(buf.read_at_byte(2).is_err());
    assert!(buf.read_at_byte(12).is_err());
}

#[test]
fn bytes_match_float_layout() {
    let buf = FloatBuffer::from_floats(&[1.0, -2.0]);
    let bytes = buf.to_bytes();
    assert_eq!(bytes.len(), buf.byte_len());
    assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
    assert_eq!(&bytes[4..8], &(-2.0f32).to_ne_bytes());
}

#[test]
fn bytes_track_later_writes() {
    let buf = FloatBuffer::allocate(2);
    buf.set(1, 0.5);
    assert_eq!(&buf.to_bytes()[4..8], &0.5f32.to_ne_bytes());
}
