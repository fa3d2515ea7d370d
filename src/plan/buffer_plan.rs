use std::{collections::BTreeSet, path::Path};

use anyhow::Context;

use crate::{
    foundation::error::{GeomError, GeomResult},
    primitives::{
        layout::{Layout, ShapeKind},
        primitive::Primitive,
    },
    storage::buffer::FloatBuffer,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Layout of a shared buffer holding `records` identical records of named shape slots.
///
/// Slots are packed contiguously in declaration order; records follow one another with a
/// stride of the summed slot lengths.
///
/// ```json
/// { "records": 128,
///   "slots": [ { "key": "transform", "kind": "affine_transform" },
///              { "key": "frame", "kind": "rect" } ] }
/// ```
pub struct BufferPlan {
    /// Number of records.
    pub records: usize,
    /// Slots of a single record, in storage order.
    pub slots: Vec<SlotSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One named shape within a record.
pub struct SlotSpec {
    /// Key name; also the natural owner key for views of this slot.
    pub key: String,
    /// Shape stored in the slot.
    pub kind: ShapeKind,
}

impl BufferPlan {
    /// Parse and validate a plan from JSON text.
    pub fn from_json_str(json: &str) -> GeomResult<Self> {
        let plan: Self = serde_json::from_str(json)
            .map_err(|e| GeomError::serde(e.to_string()))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Read, parse and validate a plan file.
    #[tracing::instrument]
    pub fn load(path: &Path) -> GeomResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read buffer plan {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Check structural rules: at least one record and slot, unique non-empty keys.
    pub fn validate(&self) -> GeomResult<()> {
        if self.records == 0 {
            return Err(GeomError::validation("buffer plan records must be > 0"));
        }
        if self.slots.is_empty() {
            return Err(GeomError::validation("buffer plan declares no slots"));
        }
        let mut seen = BTreeSet::new();
        for slot in &self.slots {
            if slot.key.trim().is_empty() {
                return Err(GeomError::validation("slot key must be non-empty"));
            }
            if !seen.insert(slot.key.as_str()) {
                return Err(GeomError::validation(format!(
                    "duplicate slot key '{}'",
                    slot.key
                )));
            }
        }
        self.float_count().map(|_| ())
    }

    /// Floats per record.
    pub fn stride(&self) -> usize {
        self.slots.iter().map(|s| s.kind.float_len()).sum()
    }

    /// Floats needed for every record.
    pub fn float_count(&self) -> GeomResult<usize> {
        self.records
            .checked_mul(self.stride())
            .ok_or_else(|| GeomError::validation("buffer plan size overflows usize"))
    }

    /// Offset of `key` within a record, with the slot's kind.
    pub fn slot(&self, key: &str) -> Option<(usize, ShapeKind)> {
        let mut offset = 0;
        for slot in &self.slots {
            if slot.key == key {
                return Some((offset, slot.kind));
            }
            offset += slot.kind.float_len();
        }
        None
    }

    /// Absolute float offset of `key` in `record`.
    pub fn offset_of(&self, record: usize, key: &str) -> GeomResult<usize> {
        if record >= self.records {
            return Err(GeomError::validation(format!(
                "record {record} out of range for {} records",
                self.records
            )));
        }
        let (offset, _) = self
            .slot(key)
            .ok_or_else(|| GeomError::validation(format!("unknown slot key '{key}'")))?;
        record
            .checked_mul(self.stride())
            .and_then(|start| start.checked_add(offset))
            .ok_or_else(|| GeomError::validation(format!("record {record} offset overflows usize")))
    }

    /// Validate the plan and allocate a zeroed buffer sized for it.
    pub fn allocate(&self) -> GeomResult<FloatBuffer> {
        self.validate()?;
        let floats = self.float_count()?;
        tracing::debug!(
            records = self.records,
            stride = self.stride(),
            floats,
            "allocating planned buffer"
        );
        Ok(FloatBuffer::allocate(floats))
    }

    /// Aliasing view of slot `key` in `record`, leaving the stored floats untouched.
    ///
    /// Fails with [`GeomError::ShapeMismatch`] if the slot holds a different shape than `L`.
    pub fn view<L: Layout>(
        &self,
        buffer: &FloatBuffer,
        record: usize,
        key: &str,
    ) -> GeomResult<Primitive<L>> {
        let offset = self.offset_of(record, key)?;
        let kind = self.slot(key).map(|(_, kind)| kind);
        if kind != Some(L::KIND) {
            let actual = kind.map_or(0, ShapeKind::float_len);
            return Err(GeomError::shape_mismatch(L::KIND.name(), L::LEN, actual));
        }
        Primitive::view_in(buffer, offset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/buffer_plan.rs"]
mod tests;
