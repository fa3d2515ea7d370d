//! `kurbo` works in `f64`; conversions widen on the way out and narrow on the way in.
//!
//! `kurbo::Affine` stores `[a, b, c, d, e, f]` and maps `(x, y)` to
//! `(a*x + c*y + e, b*x + d*y + f)`, which is exactly `[m11, m12, m21, m22, tx, ty]`.

use crate::{
    primitives::shapes::{AffineTransform, Point, Rect, Size},
    transform::affine::widen,
};

impl From<&Point> for kurbo::Point {
    fn from(p: &Point) -> Self {
        let [x, y] = widen(p.to_array());
        kurbo::Point::new(x, y)
    }
}

impl From<&Size> for kurbo::Size {
    fn from(s: &Size) -> Self {
        let [w, h] = widen(s.to_array());
        kurbo::Size::new(w, h)
    }
}

impl From<&Rect> for kurbo::Rect {
    fn from(r: &Rect) -> Self {
        let [x, y, w, h] = widen(r.to_array());
        kurbo::Rect::new(x, y, x + w, y + h)
    }
}

impl From<&AffineTransform> for kurbo::Affine {
    fn from(t: &AffineTransform) -> Self {
        kurbo::Affine::new(widen(t.to_array()))
    }
}

impl Point {
    /// New private point from a `kurbo` point.
    pub fn from_kurbo(p: kurbo::Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl Size {
    /// New private size from a `kurbo` size.
    pub fn from_kurbo(s: kurbo::Size) -> Self {
        Self::new(s.width as f32, s.height as f32)
    }
}

impl Rect {
    /// New private rect from a `kurbo` rect, origin at `(x0, y0)`.
    pub fn from_kurbo(r: kurbo::Rect) -> Self {
        Self::new(
            r.x0 as f32,
            r.y0 as f32,
            r.width() as f32,
            r.height() as f32,
        )
    }
}

impl AffineTransform {
    /// New private transform from a `kurbo` affine.
    pub fn from_kurbo(a: kurbo::Affine) -> Self {
        Self::from_array(a.as_coeffs().map(|c| c as f32))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interop/kurbo_compat.rs"]
mod tests;
