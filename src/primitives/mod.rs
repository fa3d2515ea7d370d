//! Typed primitives and their constructors.

pub mod layout;
pub mod primitive;
pub mod shapes;
