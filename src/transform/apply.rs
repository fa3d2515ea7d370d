//! Applying an affine transform to points, sizes and rects.
//!
//! Products accumulate in `f64` and are rounded to `f32` once, on store.

use crate::{
    foundation::error::GeomResult,
    primitives::shapes::{AffineTransform, Point, Rect, Size},
    storage::view::ensure_disjoint,
    transform::affine::widen,
};

/// `dest = transform(point)`, translation included.
///
/// Fails with [`crate::GeomError::Aliasing`] if `dest` overlaps `point` or `transform`.
pub fn apply_to_point(
    point: &Point,
    transform: &AffineTransform,
    dest: &mut Point,
) -> GeomResult<()> {
    ensure_disjoint(
        "apply_to_point",
        dest.view(),
        &[point.view(), transform.view()],
    )?;
    let [x, y] = widen(point.to_array());
    let [m11, m12, m21, m22, tx, ty] = widen(transform.to_array());
    dest.store([
        (x * m11 + y * m21 + tx) as f32,
        (x * m12 + y * m22 + ty) as f32,
    ]);
    Ok(())
}

/// `dest = transform(size)` using only the linear part; sizes are not translated.
///
/// Fails with [`crate::GeomError::Aliasing`] if `dest` overlaps `size` or `transform`.
pub fn apply_to_size(size: &Size, transform: &AffineTransform, dest: &mut Size) -> GeomResult<()> {
    ensure_disjoint(
        "apply_to_size",
        dest.view(),
        &[size.view(), transform.view()],
    )?;
    let [w, h] = widen(size.to_array());
    let [m11, m12, m21, m22, _, _] = widen(transform.to_array());
    dest.store([(w * m11 + h * m21) as f32, (w * m12 + h * m22) as f32]);
    Ok(())
}

/// `dest = transform(rect)`: origin mapped as a point, extent as a size.
///
/// The result is not a bounding box; under rotation the extent may go negative.
/// Fails with [`crate::GeomError::Aliasing`] if `dest` overlaps `rect` or `transform`.
pub fn apply_to_rect(rect: &Rect, transform: &AffineTransform, dest: &mut Rect) -> GeomResult<()> {
    ensure_disjoint(
        "apply_to_rect",
        dest.view(),
        &[rect.view(), transform.view()],
    )?;
    let [x, y, w, h] = widen(rect.to_array());
    let [m11, m12, m21, m22, tx, ty] = widen(transform.to_array());
    dest.store([
        (x * m11 + y * m21 + tx) as f32,
        (x * m12 + y * m22 + ty) as f32,
        (w * m11 + h * m21) as f32,
        (w * m12 + h * m22) as f32,
    ]);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/apply.rs"]
mod tests;
