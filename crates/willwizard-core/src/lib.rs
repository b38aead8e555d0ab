//! Florida Will Wizard Core Library
//!
//! Form records, option tables, and wizard state for a last-will-and-testament
//! wizard for Florida residents.
//!
//! ## Overview
//!
//! The wizard collects personal, family, gift, and distribution answers across
//! a fixed sequence of steps. Repeatable sections (children, gifts,
//! beneficiaries, personal representatives, guardians) are ordered lists of
//! records edited through [`FieldList`], a stateless manager that derives each
//! new list from the current one and hands it back through a replacement
//! callback.
//!
//! ## Quick Start
//!
//! ```
//! use willwizard_core::{Beneficiary, FieldList, WillAnswers};
//!
//! let mut answers = WillAnswers::default();
//! let snapshot = answers.beneficiaries.clone();
//! let mut list = FieldList::new(
//!     &snapshot,
//!     |next| answers.beneficiaries = next,
//!     || Beneficiary::named("", 100),
//! );
//! list.add();
//! drop(list);
//!
//! assert_eq!(answers.residuary_total(), 100);
//! ```

pub mod error;
pub mod field_list;
pub mod options;
pub mod types;
pub mod wizard;

// Re-exports
pub use error::{FieldListError, FieldListResult, WizardError, WizardResult};
pub use field_list::{moved, Field, FieldList, Record};
pub use options::{
    is_florida_county, state_name, ChildRelationship, GiftKind, MaritalStatus, Relationship,
    FLORIDA_COUNTIES, US_STATES,
};
pub use types::*;
pub use wizard::{
    even_shares, first_incomplete_step, format_dollars, summary_lines, validate_step, ValidationIssue,
    WillAnswers, WizardStep,
};
