//! Conversions to `kurbo` geometry and serde support for primitive values.

mod kurbo_compat;
mod serde_impls;
