//! Ordered field lists for repeatable form sections
//!
//! Sections such as children, gifts, beneficiaries, and personal
//! representatives are edited as an ordered list of records owned by the
//! caller. [`FieldList`] never holds that list itself: it borrows the current
//! snapshot, derives the next list for each edit intent, and hands the
//! complete replacement to the caller's `on_change` callback.
//!
//! ## Usage
//!
//! ```
//! use willwizard_core::{Child, FieldList};
//!
//! let mut children = vec![Child::named("Ada")];
//! let snapshot = children.clone();
//! let mut list = FieldList::new(&snapshot, |next| children = next, Child::default);
//!
//! list.add();
//! assert_eq!(list.count(), 1); // queries read the snapshot, not the result
//! drop(list);
//! assert_eq!(children.len(), 2);
//! ```
//!
//! Identity is positional. Indices are valid for the snapshot the manager was
//! built from; the caller rebuilds the manager after every replacement.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{FieldListError, FieldListResult};

/// Typed descriptor for a single attribute of a record
///
/// Pairs the attribute name (used for logging) with a setter. Record types
/// expose these as associated constants, e.g. [`crate::Child::FULL_NAME`].
pub struct Field<R, V> {
    name: &'static str,
    set: fn(&mut R, V),
}

impl<R, V> Field<R, V> {
    /// Create a descriptor from an attribute name and its setter
    pub const fn new(name: &'static str, set: fn(&mut R, V)) -> Self {
        Self { name, set }
    }

    /// Attribute name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Write `value` into `record`
    pub fn apply(&self, record: &mut R, value: V) {
        (self.set)(record, value)
    }
}

impl<R, V> Clone for Field<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V> Copy for Field<R, V> {}

impl<R, V> fmt::Debug for Field<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// A record that accepts partial updates
///
/// `Patch` carries an `Option` per attribute; `None` leaves the attribute
/// untouched, so merging is never a whole-record replacement.
pub trait Record {
    /// Partial-attribute mapping for this record
    type Patch: Default;

    /// Merge every attribute set in `patch` into `self`
    fn merge(&mut self, patch: Self::Patch);
}

/// Stateless edit manager over a caller-owned ordered list
pub struct FieldList<'a, T, F, C>
where
    F: Fn() -> T,
    C: FnMut(Vec<T>),
{
    items: &'a [T],
    factory: F,
    on_change: C,
}

impl<'a, T, F, C> FieldList<'a, T, F, C>
where
    T: Clone,
    F: Fn() -> T,
    C: FnMut(Vec<T>),
{
    /// Build a manager over the current snapshot
    ///
    /// `on_change` receives the full replacement list after each successful
    /// edit; `factory` produces the record appended by [`FieldList::add`].
    pub fn new(items: &'a [T], on_change: C, factory: F) -> Self {
        Self {
            items,
            factory,
            on_change,
        }
    }

    /// The snapshot this manager was built from
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Number of records in the snapshot
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot has no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a default record produced by the factory
    pub fn add(&mut self) {
        let mut next = self.items.to_vec();
        next.push((self.factory)());
        self.commit("add", next);
    }

    /// Replace a single attribute on the record at `index`
    pub fn update<V>(&mut self, index: usize, field: Field<T, V>, value: V) -> FieldListResult<()> {
        self.check(index)?;
        let mut next = self.items.to_vec();
        field.apply(&mut next[index], value);
        trace!(index, field = field.name(), "field list attribute updated");
        self.commit("update", next);
        Ok(())
    }

    /// Merge several attributes into the record at `index` in one step
    pub fn update_item(&mut self, index: usize, patch: T::Patch) -> FieldListResult<()>
    where
        T: Record,
    {
        self.check(index)?;
        let mut next = self.items.to_vec();
        next[index].merge(patch);
        self.commit("update_item", next);
        Ok(())
    }

    /// Delete the record at `index`; later records shift down by one
    pub fn remove(&mut self, index: usize) -> FieldListResult<()> {
        self.check(index)?;
        let mut next = self.items.to_vec();
        next.remove(index);
        self.commit("remove", next);
        Ok(())
    }

    /// Relocate the record at `from` to `to`
    ///
    /// A destination outside `[0, len)` is a silent no-op and the callback is
    /// not invoked. A source outside that range is an error.
    pub fn move_item(&mut self, from: usize, to: usize) -> FieldListResult<()> {
        self.check(from)?;
        match moved(self.items, from, to) {
            Some(next) => self.commit("move", next),
            None => trace!(from, to, len = self.items.len(), "move destination out of range"),
        }
        Ok(())
    }

    /// Empty the list
    pub fn clear(&mut self) {
        self.commit("clear", Vec::new());
    }

    fn check(&self, index: usize) -> FieldListResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(FieldListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    fn commit(&mut self, op: &'static str, next: Vec<T>) {
        debug!(op, len = next.len(), "field list replaced");
        (self.on_change)(next);
    }
}

/// `items` with the record at `from` relocated to `to`
///
/// Returns `None` when either index is outside `[0, len)`.
pub fn moved<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() || to >= items.len() {
        return None;
    }
    let mut next = items.to_vec();
    let record = next.remove(from);
    next.insert(to, record);
    Some(next)
}
