use maud::{html, Render};
use wrapped_api_types::{StatKind, UserRecord};

use crate::web::templates::components::hide_button::HideButton;
use crate::web::templates::components::pick_caption;

const CAPTIONS: [&str; 3] = ["Quite the year", "Numbers don't lie", "Look at you go"];

/// Headline counts: commits, pull requests, issues, reviews.
pub(crate) struct HighlightsCard<'a> {
    pub(crate) record: &'a UserRecord,
    pub(crate) show_hide: bool,
}

impl<'a> Render for HighlightsCard<'a> {
    fn render(&self) -> maud::Markup {
        let Some(highlights) = &self.record.highlights else {
            return html! {};
        };
        if self.record.is_hidden(StatKind::Highlights) {
            return html! {};
        }
        let lines = [
            (highlights.commits, "commits"),
            (highlights.pull_requests, "pull requests"),
            (highlights.issues, "issues"),
            (highlights.reviews, "reviews"),
        ];
        html! {
            div class="stat-card" {
                h2 class="stat-caption" { (pick_caption(&CAPTIONS, &self.record.username)) }
                @for (value, label) in lines {
                    div class="stat-line" {
                        span class="stat-value stat-purple" { (value) }
                        span class="stat-label" { (label) }
                    }
                }
                @if self.show_hide {
                    (HideButton { stat: StatKind::Highlights })
                }
            }
        }
    }
}
