//! Specific Gifts - bequests made before the residuary estate is divided.

use dioxus::prelude::*;
use willwizard_core::{Gift, GiftKind, GiftPatch, Relationship, WizardStep};
use willwizard_ui::{
    parse_whole_number, use_field_list, Card, FieldListSection, FieldRow, Input, Select, TextArea,
};

use crate::components::WizardFrame;
use crate::context::use_wizard;

/// Specific gifts page component.
#[component]
pub fn Gifts() -> Element {
    let gifts = use_field_list(use_wizard().gifts, Gift::default);
    let rows = gifts.items();
    let count = rows.len();
    let kinds: Vec<String> = GiftKind::all().iter().map(|k| k.as_str().to_string()).collect();
    let relationships: Vec<String> = Relationship::all().iter().map(|r| r.as_str().to_string()).collect();

    rsx! {
        WizardFrame { step: WizardStep::Gifts,
            Card {
                title: "Specific gifts".to_string(),
                subtitle: Some("optional: money, items, or property left to a particular person or charity".to_string()),

                FieldListSection {
                    title: "Gifts".to_string(),
                    add_label: "Add a gift".to_string(),
                    empty_text: "No specific gifts. Everything passes through the remainder of your estate.".to_string(),
                    count: count,
                    on_add: move |_| gifts.add(),
                    on_clear: move |_| gifts.clear(),
                    for (i, gift) in rows.into_iter().enumerate() {
                        {
                            let is_monetary = gift.kind == GiftKind::Monetary;
                            let amount = gift.amount.map(|a| a.to_string()).unwrap_or_default();
                            rsx! {
                                FieldRow {
                                    key: "{i}",
                                    index: i,
                                    count: count,
                                    label: "Gift".to_string(),
                                    on_move: move |(from, to): (usize, usize)| gifts.move_item(from, to),
                                    on_remove: move |index| gifts.remove(index),
                                    Select {
                                        label: "Type of gift".to_string(),
                                        value: gift.kind.as_str().to_string(),
                                        options: kinds.clone(),
                                        onchange: move |v: String| {
                                            if let Some(kind) = GiftKind::from_label(&v) {
                                                gifts.update_item(i, kind_change(kind));
                                            }
                                        },
                                    }
                                    if is_monetary {
                                        Input {
                                            label: "Amount (US dollars)".to_string(),
                                            input_type: "number".to_string(),
                                            value: amount,
                                            oninput: move |v: String| gifts.update(i, Gift::AMOUNT, parse_whole_number(&v)),
                                        }
                                    } else {
                                        TextArea {
                                            label: "Description".to_string(),
                                            placeholder: Some("e.g. my grandmother's diamond ring".to_string()),
                                            value: gift.description.clone(),
                                            oninput: move |v| gifts.update(i, Gift::DESCRIPTION, v),
                                        }
                                    }
                                    Input {
                                        label: "Recipient".to_string(),
                                        value: gift.recipient.clone(),
                                        required: true,
                                        oninput: move |v| gifts.update(i, Gift::RECIPIENT, v),
                                    }
                                    Select {
                                        label: "Recipient's relationship to you".to_string(),
                                        value: gift.recipient_relationship.as_str().to_string(),
                                        options: relationships.clone(),
                                        onchange: move |v: String| {
                                            if let Some(r) = Relationship::from_label(&v) {
                                                gifts.update(i, Gift::RECIPIENT_RELATIONSHIP, r);
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
    }
}

/// Patch for switching a gift's kind; the amount only applies to money
fn kind_change(kind: GiftKind) -> GiftPatch {
    GiftPatch {
        kind: Some(kind),
        amount: if kind == GiftKind::Monetary { None } else { Some(None) },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use willwizard_core::Record;

    #[test]
    fn switching_away_from_money_drops_the_amount() {
        let mut gift = Gift {
            amount: Some(500),
            description: "note".to_string(),
            ..Default::default()
        };
        gift.merge(kind_change(GiftKind::SpecificItem));
        assert_eq!(gift.kind, GiftKind::SpecificItem);
        assert_eq!(gift.amount, None);
        assert_eq!(gift.description, "note");

        gift.amount = Some(1);
        gift.merge(kind_change(GiftKind::Monetary));
        assert_eq!(gift.amount, Some(1));
    }
}
