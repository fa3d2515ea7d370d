//! Shape aliases and their value constructors.

use crate::{
    foundation::{
        constants::{AFFINE_TRANSFORM_IDENTITY, TRANSFORM3D_IDENTITY},
        error::GeomResult,
    },
    primitives::{
        layout::{AffineLayout, PointLayout, RectLayout, SizeLayout, Transform3DLayout},
        primitive::Primitive,
    },
    storage::buffer::FloatBuffer,
};

/// `[x, y]`
pub type Point = Primitive<PointLayout>;
/// `[width, height]`
pub type Size = Primitive<SizeLayout>;
/// `[x, y, width, height]`
pub type Rect = Primitive<RectLayout>;
/// `[m11, m12, m21, m22, tx, ty]`, mapping `(x, y)` to
/// `(x*m11 + y*m21 + tx, x*m12 + y*m22 + ty)`.
pub type AffineTransform = Primitive<AffineLayout>;
/// Row-major 4x4 transform, `m11..m44`.
pub type Transform3D = Primitive<Transform3DLayout>;

impl Point {
    /// New private point.
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_array([x, y])
    }

    /// Point aliasing `buffer` at float `offset`, initialized to `(x, y)`.
    pub fn new_in(buffer: &FloatBuffer, offset: usize, x: f32, y: f32) -> GeomResult<Self> {
        Self::from_array_in(buffer, offset, [x, y])
    }
}

impl Size {
    /// New private size.
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_array([width, height])
    }

    /// Size aliasing `buffer` at float `offset`, initialized to `(width, height)`.
    pub fn new_in(
        buffer: &FloatBuffer,
        offset: usize,
        width: f32,
        height: f32,
    ) -> GeomResult<Self> {
        Self::from_array_in(buffer, offset, [width, height])
    }
}

impl Rect {
    /// New private rect.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_array([x, y, width, height])
    }

    /// Rect aliasing `buffer` at float `offset`.
    pub fn new_in(
        buffer: &FloatBuffer,
        offset: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> GeomResult<Self> {
        Self::from_array_in(buffer, offset, [x, y, width, height])
    }

    /// Copy of the origin.
    pub fn origin(&self) -> Point {
        Point::new(self.get(0), self.get(1))
    }

    /// Copy of the size.
    pub fn size(&self) -> Size {
        Size::new(self.get(2), self.get(3))
    }
}

impl AffineTransform {
    /// New private transform from its six components.
    pub fn new(m11: f32, m12: f32, m21: f32, m22: f32, tx: f32, ty: f32) -> Self {
        Self::from_array([m11, m12, m21, m22, tx, ty])
    }

    /// New private identity transform.
    pub fn identity() -> Self {
        Self::from_array(AFFINE_TRANSFORM_IDENTITY)
    }

    /// Identity transform aliasing `buffer` at float `offset`.
    pub fn identity_in(buffer: &FloatBuffer, offset: usize) -> GeomResult<Self> {
        Self::from_array_in(buffer, offset, AFFINE_TRANSFORM_IDENTITY)
    }

    /// Overwrite all six components with the identity. Does not notify the owner.
    pub fn set_identity(&mut self) {
        self.store(AFFINE_TRANSFORM_IDENTITY);
    }

    /// Exact comparison against the identity. See [`crate::transform::affine::is_identity`].
    pub fn is_identity(&self) -> bool {
        crate::transform::affine::is_identity(self)
    }
}

impl Transform3D {
    /// New private transform from four rows.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self::from_array(flatten(rows))
    }

    /// Transform aliasing `buffer` at float `offset`, initialized from four rows.
    pub fn from_rows_in(
        buffer: &FloatBuffer,
        offset: usize,
        rows: [[f32; 4]; 4],
    ) -> GeomResult<Self> {
        Self::from_array_in(buffer, offset, flatten(rows))
    }

    /// Components as four rows.
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        let flat = self.to_array();
        std::array::from_fn(|r| std::array::from_fn(|c| flat[r * 4 + c]))
    }

    /// New private identity transform.
    pub fn identity() -> Self {
        Self::from_array(TRANSFORM3D_IDENTITY)
    }

    /// Identity transform aliasing `buffer` at float `offset`.
    pub fn identity_in(buffer: &FloatBuffer, offset: usize) -> GeomResult<Self> {
        Self::from_array_in(buffer, offset, TRANSFORM3D_IDENTITY)
    }

    /// Overwrite all sixteen components with the identity. Does not notify the owner.
    pub fn set_identity(&mut self) {
        self.store(TRANSFORM3D_IDENTITY);
    }
}

fn flatten(rows: [[f32; 4]; 4]) -> [f32; 16] {
    std::array::from_fn(|i| rows[i / 4][i % 4])
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/shapes.rs"]
mod tests;
