use maud::{html, Render};
use wrapped_api_types::{StatKind, UserRecord};

use crate::web::templates::components::hide_button::HideButton;
use crate::web::templates::components::pick_caption;

const CAPTIONS: [&str; 3] = [
    "Polyglot in the making",
    "Fluent in many tongues",
    "Syntax connoisseur",
];

pub(crate) struct TopLanguagesCard<'a> {
    pub(crate) record: &'a UserRecord,
    pub(crate) show_hide: bool,
}

impl<'a> Render for TopLanguagesCard<'a> {
    fn render(&self) -> maud::Markup {
        let Some(languages) = &self.record.top_languages else {
            return html! {};
        };
        if self.record.is_hidden(StatKind::TopLanguages) {
            return html! {};
        }
        html! {
            div class="stat-card" {
                h2 class="stat-caption" { (pick_caption(&CAPTIONS, &self.record.username)) }
                @for language in languages {
                    div class="lang-row" {
                        span class="lang-name" { (language.name) }
                        div class="lang-bar" style=(format!(
                            "width: {:.1}%; background-color: {}",
                            language.percent, language.color
                        )) {}
                        span class="lang-percent" { (format!("{:.1}%", language.percent)) }
                    }
                }
                @if self.show_hide {
                    (HideButton { stat: StatKind::TopLanguages })
                }
            }
        }
    }
}
