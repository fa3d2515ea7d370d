use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::primitives::{layout::Layout, primitive::Primitive};

// Serialized as a flat float sequence in layout order, regardless of storage kind.
impl<L: Layout> Serialize for Primitive<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values = self.to_array();
        let values: &[f32] = values.as_ref();
        values.serialize(serializer)
    }
}

// Always deserializes into private storage.
impl<'de, L: Layout> Deserialize<'de> for Primitive<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f32>::deserialize(deserializer)?;
        Primitive::from_slice(&values).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interop/serde_impls.rs"]
mod tests;
