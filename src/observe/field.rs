use std::{fmt, str::FromStr};

use crate::foundation::error::GeomError;

/// Semantic field names accepted by the named accessor layer.
///
/// `W`/`Width` and `H`/`Height` resolve to the same slots; they are kept apart so an observer
/// sees the name that was actually written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Field {
    X,
    Y,
    W,
    Width,
    H,
    Height,
    M11,
    M12,
    M13,
    M14,
    M21,
    M22,
    M23,
    M24,
    M31,
    M32,
    M33,
    M34,
    M41,
    M42,
    M43,
    M44,
    Tx,
    Ty,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 24] = [
        Field::X,
        Field::Y,
        Field::W,
        Field::Width,
        Field::H,
        Field::Height,
        Field::M11,
        Field::M12,
        Field::M13,
        Field::M14,
        Field::M21,
        Field::M22,
        Field::M23,
        Field::M24,
        Field::M31,
        Field::M32,
        Field::M33,
        Field::M34,
        Field::M41,
        Field::M42,
        Field::M43,
        Field::M44,
        Field::Tx,
        Field::Ty,
    ];

    /// Accessor name as delivered to observers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::X => "x",
            Field::Y => "y",
            Field::W => "w",
            Field::Width => "width",
            Field::H => "h",
            Field::Height => "height",
            Field::M11 => "m11",
            Field::M12 => "m12",
            Field::M13 => "m13",
            Field::M14 => "m14",
            Field::M21 => "m21",
            Field::M22 => "m22",
            Field::M23 => "m23",
            Field::M24 => "m24",
            Field::M31 => "m31",
            Field::M32 => "m32",
            Field::M33 => "m33",
            Field::M34 => "m34",
            Field::M41 => "m41",
            Field::M42 => "m42",
            Field::M43 => "m43",
            Field::M44 => "m44",
            Field::Tx => "tx",
            Field::Ty => "ty",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| GeomError::UnknownField {
                shape: "any shape",
                field: s.to_string(),
            })
    }
}

pub(crate) const POINT_FIELDS: &[(Field, usize)] = &[(Field::X, 0), (Field::Y, 1)];

pub(crate) const SIZE_FIELDS: &[(Field, usize)] = &[
    (Field::W, 0),
    (Field::Width, 0),
    (Field::H, 1),
    (Field::Height, 1),
];

pub(crate) const RECT_FIELDS: &[(Field, usize)] = &[
    (Field::X, 0),
    (Field::Y, 1),
    (Field::W, 2),
    (Field::Width, 2),
    (Field::H, 3),
    (Field::Height, 3),
];

pub(crate) const AFFINE_FIELDS: &[(Field, usize)] = &[
    (Field::M11, 0),
    (Field::M12, 1),
    (Field::M21, 2),
    (Field::M22, 3),
    (Field::Tx, 4),
    (Field::Ty, 5),
];

// Row-major: m{r}{c} lives at (r - 1) * 4 + (c - 1).
pub(crate) const TRANSFORM3D_FIELDS: &[(Field, usize)] = &[
    (Field::M11, 0),
    (Field::M12, 1),
    (Field::M13, 2),
    (Field::M14, 3),
    (Field::M21, 4),
    (Field::M22, 5),
    (Field::M23, 6),
    (Field::M24, 7),
    (Field::M31, 8),
    (Field::M32, 9),
    (Field::M33, 10),
    (Field::M34, 11),
    (Field::M41, 12),
    (Field::M42, 13),
    (Field::M43, 14),
    (Field::M44, 15),
];

#[cfg(test)]
#[path = "../../tests/unit/observe/field.rs"]
mod tests;
