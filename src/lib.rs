//! Buffer-backed `f32` geometry primitives.
//!
//! Points, sizes, rects, 2-D affine transforms and 4x4 transforms are fixed-length runs of
//! floats. Each value either owns private storage or is a zero-copy view into a shared
//! [`FloatBuffer`] at a caller-chosen float offset, so a rendering layer can pack one record per
//! scene node into a single buffer and still edit fields through typed views.
//!
//! # Layers
//!
//! 1. **Storage**: [`FloatBuffer`] allocation and bounds validation, [`FloatView`] windows.
//! 2. **Constructors**: [`Point`], [`Size`], [`Rect`], [`AffineTransform`], [`Transform3D`],
//!    from values, from another view (deep copy), zeroed/identity, or in shared storage.
//! 3. **Algebra**: [`transform`] maps points/sizes/rects and concatenates, inverts and tests
//!    affine transforms. Destinations may not overlap their inputs.
//! 4. **Named access**: typed getters/setters (`x`, `width`, `m11`, `tx`, ...) that report each
//!    write to an attached [`StructureObserver`].
//!
//! [`BufferPlan`] adds a JSON-configurable record layout on top.
//!
//! # Conventions
//!
//! - Affine transforms are `[m11, m12, m21, m22, tx, ty]` and map `(x, y)` to
//!   `(x*m11 + y*m21 + tx, x*m12 + y*m22 + ty)`, the same coefficient order as
//!   [`kurbo::Affine`].
//! - Everything is single-threaded: storage is `Rc`-shared and views are `!Send`.
//! - Raw index writes and algebra never notify; only named setters do.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod interop;
mod observe;
mod plan;
mod primitives;
mod storage;

/// Affine algebra over primitive views.
pub mod transform;

pub use foundation::constants::{
    AFFINE_TRANSFORM_IDENTITY, AFFINE_TRANSFORM_ZERO, FLOAT_BYTES, TRANSFORM3D_IDENTITY,
    TRANSFORM3D_ZERO, ZERO_POINT, ZERO_RECT, ZERO_SIZE,
};
pub use foundation::error::{GeomError, GeomResult};
pub use observe::field::Field;
pub use observe::observer::StructureObserver;
pub use plan::buffer_plan::{BufferPlan, SlotSpec};
pub use primitives::layout::{
    AffineLayout, Layout, PointLayout, RectLayout, ShapeKind, SizeLayout, Transform3DLayout,
};
pub use primitives::primitive::Primitive;
pub use primitives::shapes::{AffineTransform, Point, Rect, Size, Transform3D};
pub use storage::buffer::FloatBuffer;
pub use storage::view::{FloatView, StorageKind};
pub use transform::affine::{concat_to, determinant, invert_to, is_identity};
pub use transform::apply::{apply_to_point, apply_to_rect, apply_to_size};
