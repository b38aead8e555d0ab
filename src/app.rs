use dioxus::prelude::*;
use willwizard_core::WizardStep;

use crate::context::WizardState;
use crate::pages::{Family, Gifts, Personal, Representatives, Residuary, Review, Terms};
use crate::theme::GLOBAL_STYLES;

/// Application routes, one per wizard step.
///
/// - `/` - Terms of service (must be accepted before continuing)
/// - `/personal` - Testator details
/// - `/family` - Children
/// - `/gifts` - Specific gifts
/// - `/residuary` - Remainder of the estate
/// - `/representatives` - Personal representatives and guardians
/// - `/review` - Summary and answers export
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Terms {},
    #[route("/personal")]
    Personal {},
    #[route("/family")]
    Family {},
    #[route("/gifts")]
    Gifts {},
    #[route("/residuary")]
    Residuary {},
    #[route("/representatives")]
    Representatives {},
    #[route("/review")]
    Review {},
}

impl From<WizardStep> for Route {
    fn from(step: WizardStep) -> Self {
        match step {
            WizardStep::Terms => Route::Terms {},
            WizardStep::Personal => Route::Personal {},
            WizardStep::Family => Route::Family {},
            WizardStep::Gifts => Route::Gifts {},
            WizardStep::Residuary => Route::Residuary {},
            WizardStep::Representatives => Route::Representatives {},
            WizardStep::Review => Route::Review {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, wizard state context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(WizardState::new);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_has_a_distinct_route() {
        let routes: Vec<String> = WizardStep::all()
            .iter()
            .map(|step| Route::from(*step).to_string())
            .collect();
        assert_eq!(
            routes,
            ["/", "/personal", "/family", "/gifts", "/residuary", "/representatives", "/review"]
        );
    }
}
