//! Input Field Components
//!
//! Text inputs, textareas, selects, and checkboxes sharing the `form-field`
//! layout: label on top, optional hint, control below.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::NaiveDate;
use dioxus::prelude::*;

/// Format used by `<input type="date">` values
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Hint shown after the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, number, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Full legal name".to_string(),
///         required: true
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = use_hook(|| props.id.clone().unwrap_or_else(|| next_id("input")));
    let oninput = props.oninput;

    rsx! {
        div { class: "form-field",
            FieldLabel { id: id.clone(), label: props.label.clone(), hint: props.hint.clone(), required: props.required }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub hint: Option<String>,
    /// Number of visible rows
    #[props(default = 3)]
    pub rows: u32,
    #[props(default = false)]
    pub readonly: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_hook(|| props.id.clone().unwrap_or_else(|| next_id("textarea")));
    let oninput = props.oninput;

    rsx! {
        div { class: "form-field",
            FieldLabel { id: id.clone(), label: props.label.clone(), hint: props.hint.clone(), required: false }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                readonly: props.readonly,
                value: "{props.value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Currently selected option label
    pub value: String,
    /// Option labels, in display order
    pub options: Vec<String>,
    /// Handler called with the chosen label
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Disabled first entry shown while nothing is chosen
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Dropdown over a fixed list of labels
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Select {
///         label: "County".to_string(),
///         value: county(),
///         options: FLORIDA_COUNTIES.iter().map(|c| c.to_string()).collect(),
///         placeholder: "Choose a county".to_string(),
///         onchange: move |c| county.set(c)
///     }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let id = use_hook(|| props.id.clone().unwrap_or_else(|| next_id("select")));
    let nothing_chosen = props.value.is_empty();
    let onchange = props.onchange;

    rsx! {
        div { class: "form-field",
            FieldLabel { id: id.clone(), label: props.label.clone(), hint: None, required: props.required }
            select {
                id: "{id}",
                class: "input-field select",
                required: props.required,
                onchange: move |e| onchange.call(e.value()),
                if let Some(placeholder) = &props.placeholder {
                    option { value: "", disabled: true, selected: nothing_chosen, "{placeholder}" }
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
        }
    }
}

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    pub checked: bool,
    pub onchange: EventHandler<bool>,
    /// Text shown beside the box
    pub label: String,
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled checkbox
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let id = use_hook(|| props.id.clone().unwrap_or_else(|| next_id("checkbox")));
    let onchange = props.onchange;

    rsx! {
        div { class: "form-field form-field--inline",
            input {
                id: "{id}",
                class: "checkbox",
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            label { class: "input-label", r#for: "{id}", "{props.label}" }
        }
    }
}

#[component]
fn FieldLabel(id: String, label: Option<String>, hint: Option<String>, required: bool) -> Element {
    rsx! {
        if let Some(text) = label {
            label {
                class: "input-label",
                r#for: "{id}",
                "{text}"
                if required {
                    span { class: "input-required", " *" }
                }
                if let Some(hint) = hint {
                    span { class: "input-hint", " ({hint})" }
                }
            }
        }
    }
}

/// Generate a unique ID for label association
fn next_id(prefix: &str) -> String {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    format!("{}-{}", prefix, NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Parse an `<input type="date">` value; empty or malformed input is `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

/// Render a date for an `<input type="date">` value
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a whole-number input, ignoring `$`, `%`, and thousands separators
pub fn parse_whole_number(value: &str) -> Option<u64> {
    let digits: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | '%' | ',' | ' '))
        .collect();
    digits.parse().ok()
}
