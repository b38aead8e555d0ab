//! Fiduciary List - ordered personal representatives or guardians.
//!
//! The first row serves; every later row is an alternate, in order.

use dioxus::prelude::*;
use willwizard_core::{state_name, Fiduciary, Relationship, US_STATES};
use willwizard_ui::{use_field_list, FieldListSection, FieldRow, Input, Select};

/// Editable ordered list of fiduciaries for one role.
#[component]
pub fn FiduciaryList(
    items: Signal<Vec<Fiduciary>>,
    /// Role name, e.g. "Personal representative"
    role: String,
    empty_text: String,
) -> Element {
    let list = use_field_list(items, Fiduciary::default);
    let rows = list.items();
    let count = rows.len();
    let relationships: Vec<String> = Relationship::all().iter().map(|r| r.as_str().to_string()).collect();
    let states: Vec<String> = US_STATES.iter().map(|(_, name)| name.to_string()).collect();

    rsx! {
        FieldListSection {
            title: format!("{}s", role),
            add_label: format!("Add {}", role.to_lowercase()),
            empty_text: empty_text,
            count: count,
            on_add: move |_| list.add(),
            for (i, rep) in rows.into_iter().enumerate() {
                {
                    let label = row_label(&role, i);
                    let state_label = state_name(&rep.state).unwrap_or_default().to_string();
                    rsx! {
                        FieldRow {
                            key: "{i}",
                            index: i,
                            count: count,
                            label: label,
                            on_move: move |(from, to): (usize, usize)| list.move_item(from, to),
                            on_remove: move |index| list.remove(index),
                            Input {
                                label: "Full name".to_string(),
                                value: rep.full_name.clone(),
                                required: true,
                                oninput: move |v| list.update(i, Fiduciary::FULL_NAME, v),
                            }
                            Select {
                                label: "Relationship".to_string(),
                                value: rep.relationship.as_str().to_string(),
                                options: relationships.clone(),
                                onchange: move |v: String| {
                                    if let Some(r) = Relationship::from_label(&v) {
                                        list.update(i, Fiduciary::RELATIONSHIP, r);
                                    }
                                },
                            }
                            Input {
                                label: "City".to_string(),
                                value: rep.city.clone(),
                                oninput: move |v| list.update(i, Fiduciary::CITY, v),
                            }
                            Select {
                                label: "State".to_string(),
                                value: state_label,
                                options: states.clone(),
                                onchange: move |v: String| {
                                    if let Some((code, _)) = US_STATES.iter().find(|(_, name)| *name == v) {
                                        list.update(i, Fiduciary::STATE, code.to_string());
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "Personal representative" for the first row, "Alternate personal
/// representative" after it
fn row_label(role: &str, index: usize) -> String {
    if index == 0 {
        role.to_string()
    } else {
        format!("Alternate {}", role.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_serves() {
        assert_eq!(row_label("Guardian", 0), "Guardian");
        assert_eq!(row_label("Guardian", 1), "Alternate guardian");
    }
}
