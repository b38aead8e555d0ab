//! Card container
//!
//! Bordered panel with a title block, used for every wizard section and for
//! each row of a repeatable section.

use dioxus::prelude::*;

/// Card with a title, optional subtitle, and arbitrary body content
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         title: "About You".to_string(),
///         subtitle: Some("as it should appear in your will".to_string()),
///         Input { value: name(), oninput: move |s| name.set(s) }
///     }
/// }
/// ```
#[component]
pub fn Card(
    /// Heading shown at the top of the card
    title: String,
    #[props(default = None)]
    subtitle: Option<String>,
    /// Compact styling for nested cards
    #[props(default = false)]
    nested: bool,
    children: Element,
) -> Element {
    let nested_class = if nested { "card--nested" } else { "" };

    rsx! {
        section { class: "card {nested_class}",
            header { class: "card__header",
                h2 { class: "card__title", "{title}" }
                if let Some(sub) = subtitle {
                    p { class: "card__subtitle", "{sub}" }
                }
            }
            div { class: "card__body",
                {children}
            }
        }
    }
}
