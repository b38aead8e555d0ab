//! Repeatable form sections
//!
//! [`use_field_list`] wires a page's `Signal<Vec<T>>` to the core
//! [`FieldList`] manager. [`FieldListSection`] and [`FieldRow`] render the
//! section chrome: header, add button, empty state, and per-row move and
//! remove controls.

use dioxus::prelude::*;
use willwizard_core::{Field, FieldList, FieldListResult, Record};

use super::{Button, ButtonVariant, IconButton};

type Replace<'c, T> = &'c mut dyn FnMut(Vec<T>);

/// Edit handle for one repeatable section
///
/// `Copy`, so it can be moved into any number of event handlers. Each edit
/// builds a fresh [`FieldList`] over the signal's current value and writes
/// the replacement list back through the signal.
pub struct FieldListHandle<T: 'static> {
    items: Signal<Vec<T>>,
    factory: fn() -> T,
}

impl<T: 'static> Clone for FieldListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FieldListHandle<T> {}

/// Bind a section's list signal to the field list manager
///
/// # Example
///
/// ```rust,ignore
/// let children = use_signal(Vec::<Child>::new);
/// let list = use_field_list(children, Child::default);
///
/// rsx! {
///     Button { onclick: move |_| list.add(), "Add a child" }
/// }
/// ```
pub fn use_field_list<T: Clone + 'static>(items: Signal<Vec<T>>, factory: fn() -> T) -> FieldListHandle<T> {
    FieldListHandle { items, factory }
}

impl<T: Clone + 'static> FieldListHandle<T> {
    /// Current records (subscribes the caller to changes)
    pub fn items(&self) -> Vec<T> {
        self.items.read().to_vec()
    }

    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn add(&self) {
        self.edit("add", |list| {
            list.add();
            Ok(())
        });
    }

    pub fn update<V>(&self, index: usize, field: Field<T, V>, value: V) {
        self.edit("update", |list| list.update(index, field, value));
    }

    pub fn update_item(&self, index: usize, patch: T::Patch)
    where
        T: Record,
    {
        self.edit("update_item", |list| list.update_item(index, patch));
    }

    pub fn remove(&self, index: usize) {
        self.edit("remove", |list| list.remove(index));
    }

    pub fn move_item(&self, from: usize, to: usize) {
        self.edit("move", |list| list.move_item(from, to));
    }

    pub fn clear(&self) {
        self.edit("clear", |list| {
            list.clear();
            Ok(())
        });
    }

    fn edit(
        &self,
        op: &'static str,
        apply: impl FnOnce(&mut FieldList<'_, T, fn() -> T, Replace<'_, T>>) -> FieldListResult<()>,
    ) {
        // Snapshot first: the signal cannot be written while a read guard is alive
        let snapshot = self.items.peek().to_vec();
        let mut items = self.items;
        let mut replace = move |next: Vec<T>| items.set(next);
        let mut list = FieldList::new(&snapshot, &mut replace as Replace<'_, T>, self.factory);

        if let Err(e) = apply(&mut list) {
            tracing::warn!(op, error = %e, "Ignoring field list edit");
        }
    }
}

/// Header, add button, and empty state around a section's rows
#[component]
pub fn FieldListSection(
    title: String,
    /// Label for the add button, e.g. "Add a child"
    add_label: String,
    /// Shown instead of rows when the list is empty
    empty_text: String,
    count: usize,
    on_add: EventHandler<()>,
    /// Clears the whole section when provided
    #[props(default)]
    on_clear: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "field-list",
            div { class: "field-list__header",
                h3 { class: "field-list__title", "{title}" }
                span { class: "field-list__count", "{count}" }
            }
            if count == 0 {
                p { class: "field-list__empty", "{empty_text}" }
            } else {
                div { class: "field-list__rows", {children} }
            }
            div { class: "field-list__actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_add.call(()),
                    "+ {add_label}"
                }
                if let Some(on_clear) = on_clear {
                    if count > 0 {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_clear.call(()),
                            "Remove all"
                        }
                    }
                }
            }
        }
    }
}

/// One row of a repeatable section with reorder and remove controls
///
/// Emits `(from, to)` on move; the up/down buttons disable themselves at the
/// ends of the list.
#[component]
pub fn FieldRow(
    index: usize,
    count: usize,
    /// Row heading, e.g. "Child" renders as "Child 1"
    label: String,
    on_move: EventHandler<(usize, usize)>,
    on_remove: EventHandler<usize>,
    children: Element,
) -> Element {
    let position = index + 1;
    let is_first = index == 0;
    let is_last = index + 1 >= count;

    rsx! {
        div { class: "field-row",
            div { class: "field-row__header",
                span { class: "field-row__label", "{label} {position}" }
                div { class: "field-row__controls",
                    IconButton {
                        aria_label: "Move up".to_string(),
                        disabled: is_first,
                        onclick: move |_| {
                            if let Some(to) = index.checked_sub(1) {
                                on_move.call((index, to));
                            }
                        },
                        "\u{2191}"
                    }
                    IconButton {
                        aria_label: "Move down".to_string(),
                        disabled: is_last,
                        onclick: move |_| on_move.call((index, index + 1)),
                        "\u{2193}"
                    }
                    IconButton {
                        aria_label: "Remove".to_string(),
                        class: "icon-btn--danger".to_string(),
                        onclick: move |_| on_remove.call(index),
                        "\u{00D7}"
                    }
                }
            }
            div { class: "field-row__body", {children} }
        }
    }
}
