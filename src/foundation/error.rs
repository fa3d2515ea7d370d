/// Convenience result type used across the crate.
pub type GeomResult<T> = Result<T, GeomError>;

/// Error taxonomy for view construction, algebra preconditions and buffer plans.
///
/// The first four variants are programmer-error preconditions: they are detected before any
/// float is written and the failed call has no effect.
#[derive(thiserror::Error, Debug)]
pub enum GeomError {
    /// A source value of the wrong length (or a plan slot of the wrong kind) was supplied
    /// where a specific shape was expected.
    #[error("shape mismatch: {shape} needs {expected} floats, got {actual}")]
    ShapeMismatch {
        /// Expected shape name.
        shape: &'static str,
        /// Float count of the expected shape.
        expected: usize,
        /// Float count actually supplied.
        actual: usize,
    },

    /// The requested view does not fit inside the storage it would alias.
    #[error(
        "invalid view: {length} floats at float offset {offset} exceed storage of {byte_len} bytes"
    )]
    InvalidView {
        /// Offset in floats.
        offset: usize,
        /// Length in floats.
        length: usize,
        /// Byte extent of the storage.
        byte_len: usize,
    },

    /// The destination of an in-place operation overlaps one of its inputs.
    #[error("aliasing error: destination of {op} overlaps an input")]
    Aliasing {
        /// Operation that rejected the arguments.
        op: &'static str,
    },

    /// A named field was requested on a shape that does not define it.
    #[error("field '{field}' is not defined on {shape}")]
    UnknownField {
        /// Shape name.
        shape: &'static str,
        /// Requested field name.
        field: String,
    },

    /// Invalid buffer plan or plan lookup.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GeomError {
    /// Build a [`GeomError::ShapeMismatch`] value.
    pub fn shape_mismatch(shape: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            shape,
            expected,
            actual,
        }
    }

    /// Build a [`GeomError::Aliasing`] value.
    pub fn aliasing(op: &'static str) -> Self {
        Self::Aliasing { op }
    }

    /// Build a [`GeomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GeomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
