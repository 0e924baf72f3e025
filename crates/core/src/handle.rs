//! Shared, identity-compared handles to mutable entities.
//!
//! The catalog hands the same entity to several holders at once: the store's
//! collection, a product's association list, a screen's current selection.
//! Every holder observes field edits made through any other, and equality is
//! reference identity, never field equality.
//!
//! Handles are single-threaded (`!Send`). The whole catalog lives on one
//! thread; an embedding that needs threads must keep the store behind a single
//! owner.

use core::cell::{Ref, RefCell, RefMut};
use core::fmt;
use std::rc::Rc;

use crate::entity::Entity;

/// Reference-counted handle to a mutable entity.
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Immutable access to the entity.
    ///
    /// # Panics
    ///
    /// Panics if the entity is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutable access to the entity. Edits are visible through every clone.
    ///
    /// # Panics
    ///
    /// Panics if the entity is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// True when both handles point at the same entity instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Entity> Shared<T> {
    pub fn id(&self) -> T::Id {
        self.borrow().id()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Shared<T> {}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(inner) => f.debug_tuple("Shared").field(&*inner).finish(),
            Err(_) => f.write_str("Shared(<borrowed>)"),
        }
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
