//! Florida Will Wizard UI Components
//!
//! Dioxus components shared by every wizard page: buttons, form inputs, the
//! card container, and the repeatable-section chrome.
//!
//! ## Repeatable sections
//!
//! [`use_field_list`] binds a `Signal<Vec<T>>` to the core
//! [`willwizard_core::FieldList`] manager. Every edit snapshots the signal,
//! derives the replacement list, and writes it back with `Signal::set`, so
//! the page re-renders with the new list before the next edit can run.

pub mod components;

pub use components::*;
