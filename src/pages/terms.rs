//! Terms of service - entry point to the wizard.
//!
//! The terms must be accepted before any other step can be reached.

use dioxus::prelude::*;
use willwizard_core::WizardStep;
use willwizard_ui::{Card, Checkbox};

use crate::components::WizardFrame;
use crate::context::use_wizard;

/// Terms of service page component.
#[component]
pub fn Terms() -> Element {
    let mut accepted = use_wizard().terms_accepted;

    rsx! {
        WizardFrame { step: WizardStep::Terms,
            Card {
                title: "Before you begin".to_string(),
                subtitle: Some("Please read these terms carefully".to_string()),

                div { class: "terms-text",
                    p {
                        "This wizard helps Florida residents prepare a simple last will and testament. "
                        "It is a document preparation tool, not a law firm, and using it does not create "
                        "an attorney-client relationship. Nothing shown here is legal advice."
                    }
                    h3 { "Who can use this wizard" }
                    p {
                        "You must be at least 18 years old (or an emancipated minor), of sound mind, "
                        "and a resident of Florida. If you own property in another state or country, "
                        "have a complex estate, or want to create a trust, consult a Florida attorney."
                    }
                    h3 { "Making your will valid" }
                    p {
                        "A Florida will must be signed at the end by you in the presence of two "
                        "witnesses, who must also sign in your presence and in the presence of each "
                        "other. A will that is not properly signed and witnessed has no legal effect."
                    }
                    p {
                        "You may also sign a self-proving affidavit before a notary public. This lets "
                        "the court accept your will without contacting your witnesses."
                    }
                    h3 { "Your answers" }
                    p {
                        "Your answers stay on this device while you use the wizard. You are "
                        "responsible for reviewing the finished document for accuracy before signing."
                    }
                }

                Checkbox {
                    checked: accepted(),
                    label: "I have read and accept these terms".to_string(),
                    onchange: move |checked| accepted.set(checked),
                }
            }
        }
    }
}
