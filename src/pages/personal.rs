//! About You - testator details.

use dioxus::prelude::*;
use willwizard_core::{MaritalStatus, Record, TestatorPatch, WizardStep, FLORIDA_COUNTIES};
use willwizard_ui::{format_date_input, parse_date_input, Card, Input, Select};

use crate::components::WizardFrame;
use crate::context::use_wizard;

/// Testator details page component.
#[component]
pub fn Personal() -> Element {
    let mut testator = use_wizard().testator;
    let current = testator.read().clone();

    let counties: Vec<String> = FLORIDA_COUNTIES.iter().map(|c| c.to_string()).collect();
    let statuses: Vec<String> = MaritalStatus::all().iter().map(|s| s.as_str().to_string()).collect();
    let is_married = current.marital_status == MaritalStatus::Married;

    let mut edit = move |patch: TestatorPatch| testator.write().merge(patch);

    rsx! {
        WizardFrame { step: WizardStep::Personal,
            Card {
                title: "Your information".to_string(),
                subtitle: Some("as it should appear in your will".to_string()),

                Input {
                    label: "Full legal name".to_string(),
                    value: current.full_name.clone(),
                    required: true,
                    oninput: move |v| edit(TestatorPatch { full_name: Some(v), ..Default::default() }),
                }
                Input {
                    label: "Date of birth".to_string(),
                    input_type: "date".to_string(),
                    hint: Some("optional".to_string()),
                    value: format_date_input(current.birth_date),
                    oninput: move |v: String| edit(TestatorPatch { birth_date: Some(parse_date_input(&v)), ..Default::default() }),
                }
                Select {
                    label: "County of residence".to_string(),
                    value: current.county.clone(),
                    options: counties,
                    placeholder: Some("Choose your county".to_string()),
                    required: true,
                    onchange: move |v| edit(TestatorPatch { county: Some(v), ..Default::default() }),
                }
                Input {
                    label: "City".to_string(),
                    value: current.city.clone(),
                    oninput: move |v| edit(TestatorPatch { city: Some(v), ..Default::default() }),
                }
            }

            Card {
                title: "Marital status".to_string(),
                Select {
                    label: "I am currently".to_string(),
                    value: current.marital_status.as_str().to_string(),
                    options: statuses,
                    onchange: move |v: String| {
                        if let Some(status) = MaritalStatus::from_label(&v) {
                            edit(TestatorPatch { marital_status: Some(status), ..Default::default() });
                        }
                    },
                }
                if is_married {
                    Input {
                        label: "Spouse's full name".to_string(),
                        value: current.spouse_name.clone(),
                        required: true,
                        oninput: move |v| edit(TestatorPatch { spouse_name: Some(v), ..Default::default() }),
                    }
                }
            }
        }
    }
}
