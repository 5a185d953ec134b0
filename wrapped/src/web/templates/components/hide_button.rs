use maud::{html, Render};
use wrapped_api_types::StatKind;

/// Toggle link shown to the row owner on each card.
pub(crate) struct HideButton {
    pub(crate) stat: StatKind,
}

impl Render for HideButton {
    fn render(&self) -> maud::Markup {
        html! {
            a class="hide-button" href=(format!("/stats/hide/{}", self.stat)) { "Hide" }
        }
    }
}
