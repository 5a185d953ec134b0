use maud::{html, Render};
use wrapped_api_types::{StatKind, UserRecord};

use crate::web::templates::components::block_chart::{Block, BlockChart};
use crate::web::templates::components::hide_button::HideButton;
use crate::web::templates::components::pick_caption;

const CAPTIONS: [&str; 3] = ["Always building", "Rain or shine", "Every day counts"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(crate) struct ContributionsCard<'a> {
    pub(crate) record: &'a UserRecord,
    pub(crate) show_hide: bool,
}

impl<'a> Render for ContributionsCard<'a> {
    fn render(&self) -> maud::Markup {
        let Some(contributions) = &self.record.contributions else {
            return html! {};
        };
        if self.record.is_hidden(StatKind::Contributions) {
            return html! {};
        }
        let blocks = contributions
            .months
            .iter()
            .map(|month| Block {
                label: MONTHS[usize::from(month.month.clamp(1, 12)) - 1],
                value: month.count,
                color: "block-purple",
                href: None,
            })
            .collect();
        html! {
            div class="stat-card" {
                h2 class="stat-caption" { (pick_caption(&CAPTIONS, &self.record.username)) }
                div class="stat-line" {
                    span class="stat-value stat-green" { (contributions.total) }
                    span class="stat-label" { "contributions" }
                }
                (BlockChart { blocks })
                @if self.show_hide {
                    (HideButton { stat: StatKind::Contributions })
                }
            }
        }
    }
}
