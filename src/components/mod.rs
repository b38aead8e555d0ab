//! App-level components for the Florida Will Wizard.
//!
//! Generic form widgets live in `willwizard-ui`; these are specific to the
//! wizard's pages.

mod fiduciary_rows;
mod wizard_frame;

pub use fiduciary_rows::FiduciaryList;
pub use wizard_frame::WizardFrame;
