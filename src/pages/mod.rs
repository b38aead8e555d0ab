//! Page components for the Florida Will Wizard, one per wizard step.

mod family;
mod gifts;
mod personal;
mod representatives;
mod residuary;
mod review;
mod terms;

pub use family::Family;
pub use gifts::Gifts;
pub use personal::Personal;
pub use representatives::Representatives;
pub use residuary::Residuary;
pub use review::Review;
pub use terms::Terms;
