//! Canonical zero and identity values.
//!
//! These are plain `const` arrays: they can be copied into a view but never mutated in place.

/// Size of one float slot in bytes.
pub const FLOAT_BYTES: usize = std::mem::size_of::<f32>();

/// Zero point `[x, y]`.
pub const ZERO_POINT: [f32; 2] = [0.0; 2];

/// Zero size `[width, height]`.
pub const ZERO_SIZE: [f32; 2] = [0.0; 2];

/// Zero rect `[x, y, width, height]`.
pub const ZERO_RECT: [f32; 4] = [0.0; 4];

/// All-zero affine transform `[m11, m12, m21, m22, tx, ty]`.
pub const AFFINE_TRANSFORM_ZERO: [f32; 6] = [0.0; 6];

/// Identity affine transform.
pub const AFFINE_TRANSFORM_IDENTITY: [f32; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// All-zero row-major 4x4 transform.
pub const TRANSFORM3D_ZERO: [f32; 16] = [0.0; 16];

/// Identity row-major 4x4 transform.
pub const TRANSFORM3D_IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];
