//! Typed getters and notifying setters for each shape.
//!
//! Each shape exposes only its own names, with indices fixed at compile time. Algebra code in
//! [`crate::transform`] reads and writes raw indices instead, and so never notifies.

use crate::{
    observe::field::Field,
    primitives::{
        layout::{AffineLayout, PointLayout, RectLayout, SizeLayout, Transform3DLayout},
        primitive::Primitive,
    },
};

macro_rules! named_fields {
    ($layout:ty { $($get:ident / $set:ident => $field:ident @ $idx:literal;)* }) => {
        impl Primitive<$layout> {
            $(
                #[doc = concat!("Read `", stringify!($get), "`.")]
                #[inline]
                pub fn $get(&self) -> f32 {
                    self.get($idx)
                }

                #[doc = concat!("Write `", stringify!($get), "` and notify the owner, if any.")]
                pub fn $set(&mut self, value: f32) {
                    self.write_field(Field::$field, $idx, value);
                }
            )*
        }
    };
}

named_fields!(PointLayout {
    x / set_x => X @ 0;
    y / set_y => Y @ 1;
});

named_fields!(SizeLayout {
    width / set_width => Width @ 0;
    w / set_w => W @ 0;
    height / set_height => Height @ 1;
    h / set_h => H @ 1;
});

named_fields!(RectLayout {
    x / set_x => X @ 0;
    y / set_y => Y @ 1;
    width / set_width => Width @ 2;
    w / set_w => W @ 2;
    height / set_height => Height @ 3;
    h / set_h => H @ 3;
});

named_fields!(AffineLayout {
    m11 / set_m11 => M11 @ 0;
    m12 / set_m12 => M12 @ 1;
    m21 / set_m21 => M21 @ 2;
    m22 / set_m22 => M22 @ 3;
    tx / set_tx => Tx @ 4;
    ty / set_ty => Ty @ 5;
});

named_fields!(Transform3DLayout {
    m11 / set_m11 => M11 @ 0;
    m12 / set_m12 => M12 @ 1;
    m13 / set_m13 => M13 @ 2;
    m14 / set_m14 => M14 @ 3;
    m21 / set_m21 => M21 @ 4;
    m22 / set_m22 => M22 @ 5;
    m23 / set_m23 => M23 @ 6;
    m24 / set_m24 => M24 @ 7;
    m31 / set_m31 => M31 @ 8;
    m32 / set_m32 => M32 @ 9;
    m33 / set_m33 => M33 @ 10;
    m34 / set_m34 => M34 @ 11;
    m41 / set_m41 => M41 @ 12;
    m42 / set_m42 => M42 @ 13;
    m43 / set_m43 => M43 @ 14;
    m44 / set_m44 => M44 @ 15;
});

#[cfg(test)]
#[path = "../../tests/unit/observe/accessors.rs"]
mod tests;
