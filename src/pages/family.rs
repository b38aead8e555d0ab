//! Your Family - children of the testator.

use dioxus::prelude::*;
use willwizard_core::{Child, ChildRelationship, WizardStep};
use willwizard_ui::{
    format_date_input, parse_date_input, use_field_list, Card, FieldListSection, FieldRow, Input,
    Select,
};

use crate::components::WizardFrame;
use crate::context::{today, use_wizard};

/// Children page component.
#[component]
pub fn Family() -> Element {
    let state = use_wizard();
    let children = use_field_list(state.children, Child::default);
    let rows = children.items();
    let count = rows.len();
    let as_of = today();
    let relationships: Vec<String> = ChildRelationship::all().iter().map(|r| r.as_str().to_string()).collect();

    rsx! {
        WizardFrame { step: WizardStep::Family,
            Card {
                title: "Children".to_string(),
                subtitle: Some("include every child, living or deceased, adopted or by birth".to_string()),

                FieldListSection {
                    title: "Your children".to_string(),
                    add_label: "Add a child".to_string(),
                    empty_text: "You have not listed any children.".to_string(),
                    count: count,
                    on_add: move |_| children.add(),
                    on_clear: move |_| children.clear(),
                    for (i, child) in rows.into_iter().enumerate() {
                        {
                            let is_minor = child.is_minor_on(as_of);
                            rsx! {
                                FieldRow {
                                    key: "{i}",
                                    index: i,
                                    count: count,
                                    label: "Child".to_string(),
                                    on_move: move |(from, to): (usize, usize)| children.move_item(from, to),
                                    on_remove: move |index| children.remove(index),
                                    Input {
                                        label: "Full name".to_string(),
                                        value: child.full_name.clone(),
                                        required: true,
                                        oninput: move |v| children.update(i, Child::FULL_NAME, v),
                                    }
                                    Input {
                                        label: "Date of birth".to_string(),
                                        input_type: "date".to_string(),
                                        value: format_date_input(child.birth_date),
                                        oninput: move |v: String| children.update(i, Child::BIRTH_DATE, parse_date_input(&v)),
                                    }
                                    Select {
                                        label: "Relationship".to_string(),
                                        value: child.relationship.as_str().to_string(),
                                        options: relationships.clone(),
                                        onchange: move |v: String| {
                                            if let Some(r) = ChildRelationship::from_label(&v) {
                                                children.update(i, Child::RELATIONSHIP, r);
                                            }
                                        },
                                    }
                                    if is_minor {
                                        p { class: "badge badge--minor",
                                            "Minor: you will be asked to name a guardian"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
