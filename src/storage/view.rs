use std::{fmt, ops::Range};

use crate::{
    foundation::{
        constants::FLOAT_BYTES,
        error::{GeomError, GeomResult},
    },
    storage::buffer::FloatBuffer,
};

/// Whether a view owns its floats or borrows a window of someone else's buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    /// The view was given a buffer of exactly its own length.
    Private,
    /// The view aliases a caller-supplied buffer.
    Shared,
}

/// Untyped fixed-length window over a [`FloatBuffer`].
///
/// All offsets and indices are in floats. Cloning a view clones the buffer handle, so the
/// clone aliases the same floats.
#[derive(Clone)]
pub struct FloatView {
    buffer: FloatBuffer,
    offset: usize,
    len: usize,
    kind: StorageKind,
}

impl FloatView {
    /// Allocate a private, zeroed view of `len` floats.
    pub fn private(len: usize) -> Self {
        Self {
            buffer: FloatBuffer::allocate(len),
            offset: 0,
            len,
            kind: StorageKind::Private,
        }
    }

    /// Alias `len` floats of `buffer` starting at float `offset`.
    pub fn shared(buffer: &FloatBuffer, offset: usize, len: usize) -> GeomResult<Self> {
        buffer.validate(offset, len)?;
        Ok(Self {
            buffer: buffer.clone(),
            offset,
            len,
            kind: StorageKind::Shared,
        })
    }

    /// Number of floats in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for a zero-length view.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the first float within the backing buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset of the first float within the backing buffer, in bytes.
    pub fn byte_offset(&self) -> usize {
        self.offset * FLOAT_BYTES
    }

    /// Storage kind of this view.
    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Backing buffer handle.
    pub fn buffer(&self) -> &FloatBuffer {
        &self.buffer
    }

    /// Read the float at `index` within the view.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        assert!(index < self.len, "view index {index} out of range");
        self.buffer.get(self.offset + index)
    }

    /// Write the float at `index` within the view.
    ///
    /// Raw writes never notify an owner.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&self, index: usize, value: f32) {
        assert!(index < self.len, "view index {index} out of range");
        self.buffer.set(self.offset + index, value);
    }

    /// Copy the view's floats out.
    pub fn to_vec(&self) -> Vec<f32> {
        (0..self.len).map(|i| self.get(i)).collect()
    }

    /// Overwrite the view from `values`, which must have exactly `self.len()` floats.
    pub fn copy_from_slice(&self, values: &[f32]) -> GeomResult<()> {
        let actual = values.len();
        if actual != self.len {
            return Err(GeomError::shape_mismatch("FloatView", self.len, actual));
        }
        for (i, v) in values.iter().enumerate() {
            self.set(i, *v);
        }
        Ok(())
    }

    /// Returns `true` when both views share a buffer and at least one float.
    pub fn overlaps(&self, other: &FloatView) -> bool {
        self.buffer.ptr_eq(&other.buffer) && ranges_intersect(self.range(), other.range())
    }

    fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

fn ranges_intersect(a: Range<usize>, b: Range<usize>) -> bool {
    !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
}

/// Reject `dest` when it overlaps any of `inputs`.
pub(crate) fn ensure_disjoint(
    op: &'static str,
    dest: &FloatView,
    inputs: &[&FloatView],
) -> GeomResult<()> {
    if inputs.iter().any(|input| input.overlaps(dest)) {
        return Err(GeomError::aliasing(op));
    }
    Ok(())
}

impl fmt::Debug for FloatView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatView")
            .field("kind", &self.kind)
            .field("offset", &self.offset)
            .field("values", &self.to_vec())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storage/view.rs"]
mod tests;
