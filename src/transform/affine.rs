//! Affine transform composition, inversion and identity helpers.

use crate::{
    foundation::{constants::AFFINE_TRANSFORM_IDENTITY, error::GeomResult},
    primitives::shapes::AffineTransform,
    storage::view::ensure_disjoint,
};

#[inline]
pub(crate) fn widen<const N: usize>(values: [f32; N]) -> [f64; N] {
    values.map(f64::from)
}

/// `dest = left` followed by `right`.
///
/// Applying `dest` to a point gives the same result as applying `left` and then `right`.
/// Fails with [`crate::GeomError::Aliasing`] if `dest` overlaps either operand; the operands
/// may alias each other.
pub fn concat_to(
    left: &AffineTransform,
    right: &AffineTransform,
    dest: &mut AffineTransform,
) -> GeomResult<()> {
    ensure_disjoint("concat_to", dest.view(), &[left.view(), right.view()])?;
    let [l11, l12, l21, l22, ltx, lty] = widen(left.to_array());
    let [r11, r12, r21, r22, rtx, rty] = widen(right.to_array());
    dest.store([
        (l11 * r11 + l12 * r21) as f32,
        (l11 * r12 + l12 * r22) as f32,
        (l21 * r11 + l22 * r21) as f32,
        (l21 * r12 + l22 * r22) as f32,
        (ltx * r11 + lty * r21 + rtx) as f32,
        (ltx * r12 + lty * r22 + rty) as f32,
    ]);
    Ok(())
}

/// `dest = src⁻¹`.
///
/// There is no singularity guard: a zero determinant stores infinities and NaNs into `dest`.
/// Check [`determinant`] first if that matters to the caller.
/// Fails with [`crate::GeomError::Aliasing`] if `dest` overlaps `src`.
pub fn invert_to(src: &AffineTransform, dest: &mut AffineTransform) -> GeomResult<()> {
    ensure_disjoint("invert_to", dest.view(), &[src.view()])?;
    let [m11, m12, m21, m22, tx, ty] = widen(src.to_array());
    let d = 1.0 / (m11 * m22 - m12 * m21);
    if !d.is_finite() {
        tracing::debug!(reciprocal = d, "inverting a singular affine transform");
    }
    dest.store([
        (d * m22) as f32,
        (-d * m12) as f32,
        (-d * m21) as f32,
        (d * m11) as f32,
        (d * (m21 * ty - m22 * tx)) as f32,
        (d * (m12 * tx - m11 * ty)) as f32,
    ]);
    Ok(())
}

/// Determinant of the linear part, `m11*m22 - m12*m21`.
pub fn determinant(transform: &AffineTransform) -> f64 {
    let [m11, m12, m21, m22, _, _] = widen(transform.to_array());
    m11 * m22 - m12 * m21
}

/// Exact (no epsilon) comparison against `[1, 0, 0, 1, 0, 0]`.
pub fn is_identity(transform: &AffineTransform) -> bool {
    transform.to_array() == AFFINE_TRANSFORM_IDENTITY
}

/// New private identity transform.
#[inline]
pub fn identity() -> AffineTransform {
    AffineTransform::identity()
}

/// Overwrite `transform` with the identity in one step.
#[inline]
pub fn set_identity(transform: &mut AffineTransform) {
    transform.set_identity();
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
