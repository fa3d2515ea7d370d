use std::{fmt, marker::PhantomData, rc::Rc, rc::Weak};

use crate::{
    foundation::error::{GeomError, GeomResult},
    observe::{
        field::Field,
        observer::{Owner, StructureObserver, downgrade},
    },
    primitives::layout::Layout,
    storage::{
        buffer::FloatBuffer,
        view::{FloatView, StorageKind},
    },
};

/// Typed, fixed-length view over float storage.
///
/// Use the aliases [`crate::Point`], [`crate::Size`], [`crate::Rect`],
/// [`crate::AffineTransform`] and [`crate::Transform3D`] rather than naming this type directly.
///
/// A primitive either owns private storage or aliases a window of a shared [`FloatBuffer`]. It
/// is deliberately not `Clone`: use [`Primitive::duplicate`] for a value copy, or
/// [`Primitive::view_in`] to build a second alias of shared storage.
pub struct Primitive<L: Layout> {
    view: FloatView,
    owner: Option<Owner>,
    _layout: PhantomData<L>,
}

impl<L: Layout> Primitive<L> {
    fn wrap(view: FloatView) -> Self {
        debug_assert_eq!(view.len(), L::LEN);
        Self {
            view,
            owner: None,
            _layout: PhantomData,
        }
    }

    /// New private value with every component zero.
    pub fn zeroed() -> Self {
        Self::wrap(FloatView::private(L::LEN))
    }

    /// New private value from components in layout order.
    pub fn from_array(values: L::Array) -> Self {
        let mut out = Self::zeroed();
        out.store(values);
        out
    }

    /// New private value from a slice of exactly the shape's length.
    pub fn from_slice(values: &[f32]) -> GeomResult<Self> {
        check_len::<L>(values.len())?;
        let mut out = Self::zeroed();
        out.store_slice(values);
        Ok(out)
    }

    /// Deep copy of an untyped view of exactly the shape's length.
    pub fn from_view(src: &FloatView) -> GeomResult<Self> {
        check_len::<L>(src.len())?;
        Self::from_slice(&src.to_vec())
    }

    /// Deep copy into new private storage. The copy has no owner.
    pub fn duplicate(&self) -> Self {
        Self::from_array(self.to_array())
    }

    /// Alias `buffer` at float `offset` and write the shape's zero value there.
    pub fn zeroed_in(buffer: &FloatBuffer, offset: usize) -> GeomResult<Self> {
        Self::from_array_in(buffer, offset, L::ZERO)
    }

    /// Alias `buffer` at float `offset` and write `values` there.
    pub fn from_array_in(
        buffer: &FloatBuffer,
        offset: usize,
        values: L::Array,
    ) -> GeomResult<Self> {
        let mut out = Self::view_in(buffer, offset)?;
        out.store(values);
        Ok(out)
    }

    /// Alias `buffer` at float `offset` and write `values` there.
    ///
    /// Fails before writing anything if the region is out of range or `values` has the wrong
    /// length.
    pub fn from_slice_in(buffer: &FloatBuffer, offset: usize, values: &[f32]) -> GeomResult<Self> {
        let mut out = Self::view_in(buffer, offset)?;
        check_len::<L>(values.len())?;
        out.store_slice(values);
        Ok(out)
    }

    /// Alias `buffer` at float `offset` and copy `src` there.
    ///
    /// `src` may itself overlap the destination region.
    pub fn copy_in(buffer: &FloatBuffer, offset: usize, src: &FloatView) -> GeomResult<Self> {
        Self::from_slice_in(buffer, offset, &src.to_vec())
    }

    /// Alias `buffer` at float `offset` without touching the floats already there.
    pub fn view_in(buffer: &FloatBuffer, offset: usize) -> GeomResult<Self> {
        FloatView::shared(buffer, offset, L::LEN).map(Self::wrap)
    }

    /// Underlying untyped view.
    pub fn view(&self) -> &FloatView {
        &self.view
    }

    /// Whether the floats are private or shared.
    pub fn storage_kind(&self) -> StorageKind {
        self.view.kind()
    }

    /// Components in layout order.
    pub fn to_array(&self) -> L::Array {
        let mut out = L::Array::default();
        for (i, slot) in out.as_mut().iter_mut().enumerate() {
            *slot = self.view.get(i);
        }
        out
    }

    /// Read a component by raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the shape's length.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.view.get(index)
    }

    /// Write a component by raw index. Never notifies the owner.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the shape's length.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) {
        self.view.set(index, value);
    }

    /// Read a component by name.
    pub fn get_named(&self, field: Field) -> GeomResult<f32> {
        Ok(self.view.get(field_index::<L>(field)?))
    }

    /// Write a component by name, notifying the owner exactly like the typed setters.
    pub fn set_named(&mut self, field: Field, value: f32) -> GeomResult<()> {
        let index = field_index::<L>(field)?;
        self.write_field(field, index, value);
        Ok(())
    }

    /// Attach `owner` as the observer of named-field writes, under `key_name`.
    ///
    /// Only a weak reference is kept. Replaces any previous owner.
    pub fn attach_owner<O: StructureObserver + 'static>(
        &mut self,
        owner: &Rc<O>,
        key_name: impl Into<String>,
    ) {
        self.attach_weak_owner(downgrade(owner), key_name);
    }

    /// Like [`Primitive::attach_owner`], for callers already holding a weak trait object.
    pub fn attach_weak_owner(
        &mut self,
        owner: Weak<dyn StructureObserver>,
        key_name: impl Into<String>,
    ) {
        self.owner = Some(Owner::new(owner, key_name.into()));
    }

    /// Builder form of [`Primitive::attach_owner`].
    pub fn with_owner<O: StructureObserver + 'static>(
        mut self,
        owner: &Rc<O>,
        key_name: impl Into<String>,
    ) -> Self {
        self.attach_owner(owner, key_name);
        self
    }

    /// Remove the owner; later writes are silent.
    pub fn detach_owner(&mut self) {
        self.owner = None;
    }

    /// Key name of the attached owner, if any.
    pub fn owner_key(&self) -> Option<&str> {
        self.owner.as_ref().map(Owner::key_name)
    }

    /// Returns `true` if an owner is attached and still alive.
    pub fn has_live_owner(&self) -> bool {
        self.owner.as_ref().is_some_and(Owner::is_alive)
    }

    pub(crate) fn write_field(&mut self, field: Field, index: usize, value: f32) {
        let old = self.view.get(index);
        self.view.set(index, value);
        if let Some(owner) = &self.owner {
            owner.notify(&self.view, field, old, value);
        }
    }

    pub(crate) fn store(&mut self, values: L::Array) {
        self.store_slice(values.as_ref());
    }

    fn store_slice(&mut self, values: &[f32]) {
        for (i, v) in values.iter().enumerate() {
            self.view.set(i, *v);
        }
    }
}

fn check_len<L: Layout>(actual: usize) -> GeomResult<()> {
    if actual != L::LEN {
        return Err(GeomError::shape_mismatch(L::KIND.name(), L::LEN, actual));
    }
    Ok(())
}

fn field_index<L: Layout>(field: Field) -> GeomResult<usize> {
    L::FIELDS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, idx)| *idx)
        .ok_or_else(|| GeomError::UnknownField {
            shape: L::KIND.name(),
            field: field.as_str().to_string(),
        })
}

impl<L: Layout> Default for Primitive<L> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<L: Layout> PartialEq for Primitive<L> {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl<L: Layout> fmt::Debug for Primitive<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(L::KIND.name())
            .field("values", &self.to_array())
            .field("storage", &self.view.kind())
            .field("offset", &self.view.offset())
            .field("owner", &self.owner)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/primitive.rs"]
mod tests;
