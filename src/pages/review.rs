//! Review - summary of every answer, plus export and import of the answers.

use dioxus::prelude::*;
use willwizard_core::{
    first_incomplete_step, summary_lines, Beneficiary, Child, Fiduciary, Gift, WillAnswers,
    WizardStep,
};
use willwizard_ui::{use_field_list, Button, ButtonVariant, Card, TextArea};

use crate::app::Route;
use crate::components::WizardFrame;
use crate::context::{today, use_wizard};

/// Review page component.
#[component]
pub fn Review() -> Element {
    let navigator = use_navigator();
    let mut state = use_wizard();
    let answers = state.snapshot();
    let as_of = today();

    let lines = summary_lines(&answers, as_of);
    let incomplete = first_incomplete_step(&answers, as_of).filter(|s| *s != WizardStep::Review);
    let export = answers.to_json().unwrap_or_else(|e| {
        tracing::error!("Failed to export answers: {}", e);
        String::new()
    });

    let mut import_text = use_signal(String::new);
    let mut import_error: Signal<Option<String>> = use_signal(|| None);

    let on_import = move |_| {
        let text = import_text();
        match WillAnswers::from_json(&text) {
            Ok(imported) => {
                tracing::info!("Imported answers");
                state.load(imported);
                import_text.set(String::new());
                import_error.set(None);
            }
            Err(e) => import_error.set(Some(format!("Could not read those answers: {}", e))),
        }
    };

    let children = use_field_list(state.children, Child::default);
    let gifts = use_field_list(state.gifts, Gift::default);
    let beneficiaries = use_field_list(state.beneficiaries, Beneficiary::default);
    let representatives = use_field_list(state.representatives, Fiduciary::default);
    let guardians = use_field_list(state.guardians, Fiduciary::default);

    let start_over = move |_| {
        children.clear();
        gifts.clear();
        beneficiaries.clear();
        representatives.clear();
        guardians.clear();
        state.testator.set(Default::default());
        tracing::info!("Cleared all answers");
        navigator.push(Route::Personal {});
    };

    rsx! {
        WizardFrame { step: WizardStep::Review,
            if let Some(step) = incomplete {
                {
                    let title = step.title();
                    rsx! {
                        div { class: "notice notice--warning", role: "alert",
                            p { "The \"{title}\" step still needs attention." }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| { navigator.push(Route::from(step)); },
                                "Go to {title}"
                            }
                        }
                    }
                }
            }

            Card {
                title: "Summary".to_string(),
                subtitle: Some("check every detail before your will is prepared".to_string()),
                ul { class: "summary",
                    for (i, line) in lines.iter().enumerate() {
                        li { key: "{i}", class: "summary__line", "{line}" }
                    }
                }
            }

            Card {
                title: "Save your answers".to_string(),
                subtitle: Some("copy this text to continue later on any device".to_string()),
                TextArea {
                    value: export,
                    rows: 8,
                    readonly: true,
                    oninput: move |_| {},
                }
                TextArea {
                    label: "Load saved answers".to_string(),
                    placeholder: Some("paste previously saved answers here".to_string()),
                    value: import_text(),
                    rows: 4,
                    oninput: move |v| import_text.set(v),
                }
                if let Some(err) = import_error() {
                    p { class: "validation-issue", role: "alert", "{err}" }
                }
                div { class: "wizard-nav",
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: import_text.read().trim().is_empty(),
                        onclick: on_import,
                        "Load answers"
                    }
                    Button { variant: ButtonVariant::Danger, onclick: start_over, "Start over" }
                }
            }
        }
    }
}
