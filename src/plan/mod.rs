//! JSON-configurable record layouts for packing many shapes into one shared buffer.

pub mod buffer_plan;
