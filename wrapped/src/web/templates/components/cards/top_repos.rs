use maud::{html, Render};
use wrapped_api_types::{StatKind, UserRecord};

use crate::web::templates::components::block_chart::{Block, BlockChart};
use crate::web::templates::components::hide_button::HideButton;
use crate::web::templates::components::pick_caption;

const CAPTIONS: [&str; 3] = [
    "You're an absolute beast",
    "You get around",
    "You code far and wide",
];

const BLOCK_COLORS: [&str; 3] = ["block-orange", "block-green", "block-purple"];

/// The repositories the user contributed to most, charted by contribution
/// count.
pub(crate) struct TopReposCard<'a> {
    pub(crate) record: &'a UserRecord,
    pub(crate) show_hide: bool,
}

impl<'a> Render for TopReposCard<'a> {
    fn render(&self) -> maud::Markup {
        let Some(repos) = &self.record.top_repos else {
            return html! {};
        };
        if self.record.is_hidden(StatKind::TopRepos) {
            return html! {};
        }
        let blocks = repos
            .iter()
            .enumerate()
            .map(|(i, repo)| Block {
                label: &repo.name,
                value: repo.contributions,
                color: BLOCK_COLORS[i % BLOCK_COLORS.len()],
                href: Some(&repo.url),
            })
            .collect();
        html! {
            div class="stat-card" {
                h2 class="stat-caption" { (pick_caption(&CAPTIONS, &self.record.username)) }
                (BlockChart { blocks })
                ul class="repo-list" {
                    @for repo in repos {
                        li class="repo-row" {
                            img class="repo-avatar" src=(repo.avatar_url) alt=(repo.name);
                            a class="repo-name" href=(repo.url) { (repo.name_with_owner) }
                            @if repo.is_private {
                                span class="repo-private" { "private" }
                            }
                            span class="repo-stars" { "★ " (repo.stars) }
                        }
                    }
                }
                @if self.show_hide {
                    (HideButton { stat: StatKind::TopRepos })
                }
            }
        }
    }
}
