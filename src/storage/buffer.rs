use std::{cell::Cell, fmt, rc::Rc};

use crate::foundation::{
    constants::FLOAT_BYTES,
    error::{GeomError, GeomResult},
};

/// Reference-counted block of f32 slots that views alias.
///
/// Cloning the handle does not copy the floats: every clone addresses the same slots. The
/// block never grows or shrinks after allocation, so a view validated once stays in bounds
/// for as long as it exists.
#[derive(Clone)]
pub struct FloatBuffer {
    cells: Rc<[Cell<f32>]>,
}

impl FloatBuffer {
    /// Allocate zero-initialized storage for `count` floats.
    pub fn allocate(count: usize) -> Self {
        tracing::trace!(floats = count, "allocating float buffer");
        Self {
            cells: (0..count).map(|_| Cell::new(0.0)).collect(),
        }
    }

    /// Allocate storage initialized from `values`.
    pub fn from_floats(values: &[f32]) -> Self {
        Self {
            cells: values.iter().copied().map(Cell::new).collect(),
        }
    }

    /// Number of float slots.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the buffer holds no floats.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Extent in bytes.
    pub fn byte_len(&self) -> usize {
        self.cells.len() * FLOAT_BYTES
    }

    /// Check that `length` floats starting at float `offset` fit inside this buffer.
    pub fn validate(&self, offset: usize, length: usize) -> GeomResult<()> {
        let byte_len = self.byte_len();
        let end = offset
            .checked_add(length)
            .and_then(|floats| floats.checked_mul(FLOAT_BYTES));
        match end {
            Some(end) if end <= byte_len => Ok(()),
            _ => Err(GeomError::InvalidView {
                offset,
                length,
                byte_len,
            }),
        }
    }

    /// Read the float at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.cells[index].get()
    }

    /// Write the float at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn set(&self, index: usize, value: f32) {
        self.cells[index].set(value);
    }

    /// Read the float that starts at `byte_offset`.
    ///
    /// The offset must be a multiple of four and address a whole slot.
    pub fn read_at_byte(&self, byte_offset: usize) -> GeomResult<f32> {
        if byte_offset % FLOAT_BYTES != 0 {
            return Err(GeomError::InvalidView {
                offset: byte_offset / FLOAT_BYTES,
                length: 1,
                byte_len: self.byte_len(),
            });
        }
        let index = byte_offset / FLOAT_BYTES;
        self.validate(index, 1)?;
        Ok(self.get(index))
    }

    /// Copy all floats out.
    pub fn snapshot(&self) -> Vec<f32> {
        self.cells.iter().map(Cell::get).collect()
    }

    /// Copy all floats out as bytes in native order, e.g. for a GPU upload.
    pub fn to_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice::<f32, u8>(&self.snapshot()).to_vec()
    }

    /// Returns `true` if both handles address the same slots.
    pub fn ptr_eq(&self, other: &FloatBuffer) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }
}

impl fmt::Debug for FloatBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatBuffer")
            .field("floats", &self.len())
            .field("handles", &Rc::strong_count(&self.cells))
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storage/buffer.rs"]
mod tests;
