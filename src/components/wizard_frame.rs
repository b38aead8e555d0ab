//! Wizard Frame - progress header and back/continue footer around a step.

use dioxus::prelude::*;
use willwizard_core::{validate_step, WizardStep};
use willwizard_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::{today, use_wizard};

/// Step page chrome.
///
/// Continuing is blocked while the step has validation issues; the first
/// attempt reveals them.
#[component]
pub fn WizardFrame(step: WizardStep, children: Element) -> Element {
    let navigator = use_navigator();
    let state = use_wizard();
    let mut show_issues = use_signal(|| false);

    let title = step.title();
    let issues = validate_step(&state.snapshot(), step, today());
    let blocked = !issues.is_empty();

    let on_back = move |_| {
        if let Some(prev) = step.prev() {
            navigator.push(Route::from(prev));
        }
    };

    let on_continue = move |_| {
        if blocked {
            show_issues.set(true);
            tracing::debug!(step = title, "continue blocked by validation");
            return;
        }
        show_issues.set(false);
        if let Some(next) = step.next() {
            navigator.push(Route::from(next));
        }
    };

    rsx! {
        main { class: "wizard",
            StepProgress { current: step }

            h1 { class: "page-title", "{title}" }

            {children}

            if show_issues() && blocked {
                ul { class: "validation-issues", role: "alert",
                    for issue in issues.iter() {
                        li { class: "validation-issue", "{issue}" }
                    }
                }
            }

            footer { class: "wizard-nav",
                if step.prev().is_some() {
                    Button { variant: ButtonVariant::Secondary, onclick: on_back, "Back" }
                }
                if step.next().is_some() {
                    Button { variant: ButtonVariant::Primary, onclick: on_continue, "Continue" }
                }
            }
        }
    }
}

/// Numbered list of steps with the current one highlighted.
#[component]
fn StepProgress(current: WizardStep) -> Element {
    rsx! {
        ol { class: "step-progress",
            for step in WizardStep::all().iter().copied() {
                {
                    let number = step.index() + 1;
                    let title = step.title();
                    rsx! {
                        li {
                            key: "{number}",
                            class: progress_class(step, current),
                            span { class: "step-progress__number", "{number}" }
                            span { class: "step-progress__title", "{title}" }
                        }
                    }
                }
            }
        }
    }
}

fn progress_class(step: WizardStep, current: WizardStep) -> &'static str {
    if step == current {
        "step-progress__item step-progress__item--current"
    } else if step.index() < current.index() {
        "step-progress__item step-progress__item--done"
    } else {
        "step-progress__item"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_classes() {
        assert_eq!(
            progress_class(WizardStep::Terms, WizardStep::Family),
            "step-progress__item step-progress__item--done"
        );
        assert_eq!(
            progress_class(WizardStep::Family, WizardStep::Family),
            "step-progress__item step-progress__item--current"
        );
        assert_eq!(
            progress_class(WizardStep::Review, WizardStep::Family),
            "step-progress__item"
        );
    }
}
