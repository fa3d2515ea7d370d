//! Flat `f32` storage and untyped windows over it.

pub mod buffer;
pub mod view;
