//! Personal Representative & Guardians.

use dioxus::prelude::*;
use willwizard_core::WizardStep;
use willwizard_ui::Card;

use crate::components::{FiduciaryList, WizardFrame};
use crate::context::{today, use_wizard};

/// Fiduciaries page component.
///
/// The guardian section only appears when a child is a minor or guardians
/// were already named.
#[component]
pub fn Representatives() -> Element {
    let state = use_wizard();
    let has_minors = state.children.read().iter().any(|c| c.is_minor_on(today()));
    let show_guardians = has_minors || !state.guardians.read().is_empty();

    rsx! {
        WizardFrame { step: WizardStep::Representatives,
            Card {
                title: "Personal representative".to_string(),
                subtitle: Some("the person who settles your estate; list alternates in order".to_string()),
                p { class: "body-text",
                    "A personal representative who lives outside Florida must be related to you."
                }
                FiduciaryList {
                    items: state.representatives,
                    role: "Personal representative".to_string(),
                    empty_text: "Name at least one personal representative.".to_string(),
                }
            }

            if show_guardians {
                Card {
                    title: "Guardian for minor children".to_string(),
                    subtitle: Some("who raises your children if no parent can".to_string()),
                    FiduciaryList {
                        items: state.guardians,
                        role: "Guardian".to_string(),
                        empty_text: "Name a guardian for your minor children.".to_string(),
                    }
                }
            }
        }
    }
}
