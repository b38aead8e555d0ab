//! Reusable form components
//!
//! Class names match the rules in the desktop app's global stylesheet.

mod button;
mod card;
mod field_list;
mod input;

pub use button::*;
pub use card::*;
pub use field_list::*;
pub use input::*;
