//! Visual theme for the Florida Will Wizard.

mod styles;

pub use styles::GLOBAL_STYLES;
