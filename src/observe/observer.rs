use std::{
    fmt,
    rc::{Rc, Weak},
};

use crate::{observe::field::Field, storage::view::FloatView};

/// Receives in-place edits made through the named accessors of an owned view.
///
/// Calls are synchronous and happen after the new value is stored. Raw index writes and the
/// algebra in [`crate::transform`] never reach an observer.
pub trait StructureObserver {
    /// `view` was edited: `field` of the property `key_name` changed from `old` to `new`.
    fn on_structure_change(
        &self,
        view: &FloatView,
        key_name: &str,
        field: Field,
        old: f32,
        new: f32,
    );
}

/// Non-owning link from a view back to the object that embeds it.
#[derive(Clone)]
pub(crate) struct Owner {
    observer: Weak<dyn StructureObserver>,
    key_name: String,
}

impl Owner {
    pub(crate) fn new(observer: Weak<dyn StructureObserver>, key_name: String) -> Self {
        Self { observer, key_name }
    }

    pub(crate) fn key_name(&self) -> &str {
        &self.key_name
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.observer.strong_count() > 0
    }

    pub(crate) fn notify(&self, view: &FloatView, field: Field, old: f32, new: f32) {
        let Some(observer) = self.observer.upgrade() else {
            tracing::trace!(key = %self.key_name, %field, "owner dropped; change not delivered");
            return;
        };
        observer.on_structure_change(view, &self.key_name, field, old, new);
    }
}

impl fmt::Debug for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owner")
            .field("key_name", &self.key_name)
            .field("alive", &self.is_alive())
            .finish()
    }
}

pub(crate) fn downgrade<O: StructureObserver + 'static>(
    owner: &Rc<O>,
) -> Weak<dyn StructureObserver> {
    let weak: Weak<O> = Rc::downgrade(owner);
    weak
}
