//! Wizard state provider for the Florida Will Wizard.
//!
//! Every section of the answers lives in its own signal so that a page only
//! re-renders for the section it edits. Repeatable sections hand their
//! signal to `use_field_list`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(WizardState::new);
//!
//! // In pages
//! let state = use_wizard();
//! let children = use_field_list(state.children, Child::default);
//! ```

use chrono::NaiveDate;
use dioxus::prelude::*;
use willwizard_core::{Beneficiary, Child, Fiduciary, Gift, Testator, WillAnswers};

/// Signals for every section of the answers.
#[derive(Clone, Copy, PartialEq)]
pub struct WizardState {
    pub terms_accepted: Signal<bool>,
    pub testator: Signal<Testator>,
    pub children: Signal<Vec<Child>>,
    pub gifts: Signal<Vec<Gift>>,
    pub beneficiaries: Signal<Vec<Beneficiary>>,
    pub representatives: Signal<Vec<Fiduciary>>,
    pub guardians: Signal<Vec<Fiduciary>>,
}

impl WizardState {
    /// Empty answers, owned by the calling component's scope
    pub fn new() -> Self {
        Self::from_answers(WillAnswers::default())
    }

    fn from_answers(answers: WillAnswers) -> Self {
        Self {
            terms_accepted: Signal::new(answers.terms_accepted),
            testator: Signal::new(answers.testator),
            children: Signal::new(answers.children),
            gifts: Signal::new(answers.gifts),
            beneficiaries: Signal::new(answers.beneficiaries),
            representatives: Signal::new(answers.representatives),
            guardians: Signal::new(answers.guardians),
        }
    }

    /// Assemble the current answers (subscribes the caller to every section)
    pub fn snapshot(&self) -> WillAnswers {
        WillAnswers {
            terms_accepted: (self.terms_accepted)(),
            testator: self.testator.read().clone(),
            children: self.children.read().to_vec(),
            gifts: self.gifts.read().to_vec(),
            beneficiaries: self.beneficiaries.read().to_vec(),
            representatives: self.representatives.read().to_vec(),
            guardians: self.guardians.read().to_vec(),
        }
    }

    /// Replace every section with imported answers
    pub fn load(&mut self, answers: WillAnswers) {
        self.terms_accepted.set(answers.terms_accepted);
        self.testator.set(answers.testator);
        self.children.set(answers.children);
        self.gifts.set(answers.gifts);
        self.beneficiaries.set(answers.beneficiaries);
        self.representatives.set(answers.representatives);
        self.guardians.set(answers.guardians);
    }
}

/// Hook to access the wizard state from context.
pub fn use_wizard() -> WizardState {
    use_context::<WizardState>()
}

/// Date used for age-dependent validation.
pub fn today() -> NaiveDate {
    crate::get_today()
}
