//! Named field access and owner change notification.

pub mod accessors;
pub mod field;
pub mod observer;
