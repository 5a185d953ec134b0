use maud::{html, Render};
use wrapped_api_types::{StatKind, UserRecord};

use crate::web::templates::components::hide_button::HideButton;
use crate::web::templates::components::pick_caption;

const CAPTIONS: [&str; 3] = ["You're a star", "Eyes to the sky", "Shoot for the moon"];

pub(crate) struct StarsCard<'a> {
    pub(crate) record: &'a UserRecord,
    pub(crate) show_hide: bool,
}

impl<'a> Render for StarsCard<'a> {
    fn render(&self) -> maud::Markup {
        let Some(stars) = &self.record.stars else {
            return html! {};
        };
        if self.record.is_hidden(StatKind::Stars) {
            return html! {};
        }
        html! {
            div class="stat-card" {
                h2 class="stat-caption" { (pick_caption(&CAPTIONS, &self.record.username)) }
                div class="stat-line" {
                    span class="stat-value stat-green" { "+" (stars.given) }
                    span class="stat-label" { "starred" }
                }
                div class="stat-line" {
                    span class="stat-value stat-orange" { "+" (stars.received) }
                    span class="stat-label" { "stars" }
                }
                @if self.show_hide {
                    (HideButton { stat: StatKind::Stars })
                }
            }
        }
    }
}
