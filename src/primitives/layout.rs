use std::fmt;

use crate::{
    foundation::constants::{
        AFFINE_TRANSFORM_ZERO, TRANSFORM3D_ZERO, ZERO_POINT, ZERO_RECT, ZERO_SIZE,
    },
    observe::field::{
        AFFINE_FIELDS, Field, POINT_FIELDS, RECT_FIELDS, SIZE_FIELDS, TRANSFORM3D_FIELDS,
    },
};

/// The five primitive shapes, identified independently of any storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// `[x, y]`
    Point,
    /// `[width, height]`
    Size,
    /// `[x, y, width, height]`
    Rect,
    /// `[m11, m12, m21, m22, tx, ty]`
    AffineTransform,
    /// Row-major 4x4, `m11..m44`.
    #[serde(rename = "transform3d")]
    Transform3D,
}

impl ShapeKind {
    /// Fixed float count of the shape.
    pub const fn float_len(self) -> usize {
        match self {
            Self::Point | Self::Size => 2,
            Self::Rect => 4,
            Self::AffineTransform => 6,
            Self::Transform3D => 16,
        }
    }

    /// Human-readable shape name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Size => "Size",
            Self::Rect => "Rect",
            Self::AffineTransform => "AffineTransform",
            Self::Transform3D => "Transform3D",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Compile-time description of a shape: its length, zero value and field names.
///
/// Implemented only by the marker types in this module.
pub trait Layout: sealed::Sealed + 'static {
    /// Shape identity.
    const KIND: ShapeKind;
    /// Fixed float count.
    const LEN: usize;
    /// Fixed-size array holding one value of the shape.
    type Array: Copy + Default + PartialEq + fmt::Debug + AsRef<[f32]> + AsMut<[f32]>;
    /// Canonical zero value.
    const ZERO: Self::Array;
    /// Named fields and the float index each resolves to.
    const FIELDS: &'static [(Field, usize)];
}

/// Marker for [`crate::Point`].
#[derive(Debug)]
pub enum PointLayout {}
/// Marker for [`crate::Size`].
#[derive(Debug)]
pub enum SizeLayout {}
/// Marker for [`crate::Rect`].
#[derive(Debug)]
pub enum RectLayout {}
/// Marker for [`crate::AffineTransform`].
#[derive(Debug)]
pub enum AffineLayout {}
/// Marker for [`crate::Transform3D`].
#[derive(Debug)]
pub enum Transform3DLayout {}

impl sealed::Sealed for PointLayout {}
impl sealed::Sealed for SizeLayout {}
impl sealed::Sealed for RectLayout {}
impl sealed::Sealed for AffineLayout {}
impl sealed::Sealed for Transform3DLayout {}

impl Layout for PointLayout {
    const KIND: ShapeKind = ShapeKind::Point;
    const LEN: usize = 2;
    type Array = [f32; 2];
    const ZERO: [f32; 2] = ZERO_POINT;
    const FIELDS: &'static [(Field, usize)] = POINT_FIELDS;
}

impl Layout for SizeLayout {
    const KIND: ShapeKind = ShapeKind::Size;
    const LEN: usize = 2;
    type Array = [f32; 2];
    const ZERO: [f32; 2] = ZERO_SIZE;
    const FIELDS: &'static [(Field, usize)] = SIZE_FIELDS;
}

impl Layout for RectLayout {
    const KIND: ShapeKind = ShapeKind::Rect;
    const LEN: usize = 4;
    type Array = [f32; 4];
    const ZERO: [f32; 4] = ZERO_RECT;
    const FIELDS: &'static [(Field, usize)] = RECT_FIELDS;
}

impl Layout for AffineLayout {
    const KIND: ShapeKind = ShapeKind::AffineTransform;
    const LEN: usize = 6;
    type Array = [f32; 6];
    const ZERO: [f32; 6] = AFFINE_TRANSFORM_ZERO;
    const FIELDS: &'static [(Field, usize)] = AFFINE_FIELDS;
}

impl Layout for Transform3DLayout {
    const KIND: ShapeKind = ShapeKind::Transform3D;
    const LEN: usize = 16;
    type Array = [f32; 16];
    const ZERO: [f32; 16] = TRANSFORM3D_ZERO;
    const FIELDS: &'static [(Field, usize)] = TRANSFORM3D_FIELDS;
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/layout.rs"]
mod tests;
