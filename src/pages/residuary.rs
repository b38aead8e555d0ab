//! Remainder of Your Estate - residuary beneficiaries, in priority order.

use dioxus::prelude::*;
use willwizard_core::{even_shares, Beneficiary, Relationship, WizardStep};
use willwizard_ui::{
    parse_whole_number, use_field_list, Button, ButtonVariant, Card, FieldListSection, FieldRow,
    Input, Select,
};

use crate::components::WizardFrame;
use crate::context::use_wizard;

/// Residuary estate page component.
#[component]
pub fn Residuary() -> Element {
    let beneficiaries = use_field_list(use_wizard().beneficiaries, Beneficiary::default);
    let rows = beneficiaries.items();
    let count = rows.len();
    let total: u32 = rows.iter().map(|b| u32::from(b.share_percent)).sum();
    let total_class = if total == 100 {
        "share-total__value"
    } else {
        "share-total__value share-total__value--off"
    };
    let relationships: Vec<String> = Relationship::all().iter().map(|r| r.as_str().to_string()).collect();

    let split_evenly = move |_| {
        for (i, share) in even_shares(beneficiaries.count()).into_iter().enumerate() {
            beneficiaries.update(i, Beneficiary::SHARE_PERCENT, share);
        }
    };

    rsx! {
        WizardFrame { step: WizardStep::Residuary,
            Card {
                title: "Who receives the rest".to_string(),
                subtitle: Some("everything not given away as a specific gift, divided by percentage".to_string()),

                FieldListSection {
                    title: "Beneficiaries".to_string(),
                    add_label: "Add a beneficiary".to_string(),
                    empty_text: "Name at least one person or charity to receive your estate.".to_string(),
                    count: count,
                    on_add: move |_| beneficiaries.add(),
                    on_clear: move |_| beneficiaries.clear(),
                    for (i, b) in rows.into_iter().enumerate() {
                        FieldRow {
                            key: "{i}",
                            index: i,
                            count: count,
                            label: "Beneficiary".to_string(),
                            on_move: move |(from, to): (usize, usize)| beneficiaries.move_item(from, to),
                            on_remove: move |index| beneficiaries.remove(index),
                            Input {
                                label: "Full name or charity".to_string(),
                                value: b.full_name.clone(),
                                required: true,
                                oninput: move |v| beneficiaries.update(i, Beneficiary::FULL_NAME, v),
                            }
                            Select {
                                label: "Relationship".to_string(),
                                value: b.relationship.as_str().to_string(),
                                options: relationships.clone(),
                                onchange: move |v: String| {
                                    if let Some(r) = Relationship::from_label(&v) {
                                        beneficiaries.update(i, Beneficiary::RELATIONSHIP, r);
                                    }
                                },
                            }
                            Input {
                                label: "Share (%)".to_string(),
                                input_type: "number".to_string(),
                                value: b.share_percent.to_string(),
                                oninput: move |v: String| {
                                    let share = parse_whole_number(&v).unwrap_or(0).min(100) as u8;
                                    beneficiaries.update(i, Beneficiary::SHARE_PERCENT, share);
                                },
                            }
                        }
                    }
                }

                div { class: "share-total",
                    span { class: total_class,
                        "Total: {total}%"
                    }
                    if count > 1 {
                        Button { variant: ButtonVariant::Ghost, onclick: split_evenly, "Split evenly" }
                    }
                }
            }
        }
    }
}
