//! Affine algebra over primitive views.
//!
//! Every operation writes a caller-supplied destination through raw indices, so owners of the
//! destination are not notified.

/// Composition, inversion and identity.
pub mod affine;
/// Point, size and rect mapping.
pub mod apply;
