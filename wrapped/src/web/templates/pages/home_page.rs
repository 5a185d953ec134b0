use maud::{html, Markup};
use wrapped_api_types::UserRecord;

use crate::web::{
    oauth::AuthGithubUser,
    templates::{
        components::{
            cards::{
                ContributionsCard, HighlightsCard, StarsCard, TopLanguagesCard, TopReposCard,
            },
            header::Header,
            sign_in_out::SignInOut,
        },
        page::Page,
    },
};

pub(crate) struct HomePage {
    pub(crate) user: Option<AuthGithubUser>,
    /// The stats being shown: the subdomain's user on public views, the
    /// signed-in user's own otherwise.
    pub(crate) record: Option<UserRecord>,
    pub(crate) subdomain: Option<String>,
    /// Public URL of the stored social preview image, when one exists.
    pub(crate) preview: Option<String>,
}

impl Page for HomePage {
    fn get_name(&self) -> String {
        "GitHub Wrapped".to_string()
    }

    fn get_description(&self) -> Option<String> {
        Some(
            "Dive into analytics of your year as a developer. Total commits, top repositories, \
             and favourite languages."
                .to_string(),
        )
    }

    fn get_image(&self) -> Option<String> {
        self.preview.clone()
    }

    fn draw_body(&self) -> Markup {
        let show_hide = match (&self.user, &self.record) {
            (Some(user), Some(record)) => user.login == record.username,
            _ => false,
        };
        html! {
            (Header { user: self.user.as_ref() })
            main class="main" {
                h1 class="hero-title" {
                    "GitHub " span class="accent" { "Wrapped" }
                }
                (SignInOut { user: self.user.as_ref() })
                @if let Some(username) = &self.subdomain {
                    div class="welcome" {
                        "Welcome to " (username) "'s year in review."
                    }
                }
                @if let Some(record) = &self.record {
                    div id="wrap" class="wrap-gradient" {
                        div class="card-strip" {
                            (HighlightsCard { record, show_hide })
                            (StarsCard { record, show_hide })
                            (TopReposCard { record, show_hide })
                            (TopLanguagesCard { record, show_hide })
                            (ContributionsCard { record, show_hide })
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapped_api_types::Stars;

    fn signed_out() -> HomePage {
        HomePage {
            user: None,
            record: None,
            subdomain: None,
            preview: None,
        }
    }

    #[test]
    fn signed_out_page_offers_login() {
        let body = signed_out().draw_body().into_string();
        assert!(body.contains("/login"));
        assert!(!body.contains("card-strip"));
    }

    #[test]
    fn subdomain_visit_shows_welcome_line() {
        let mut record = UserRecord::stub("alice", None, None);
        record.stars = Some(Stars {
            given: 3,
            received: 7,
        });
        let page = HomePage {
            record: Some(record),
            subdomain: Some("alice".to_string()),
            ..signed_out()
        };
        let body = page.draw_body().into_string();
        assert!(body.contains("Welcome to alice's year in review."));
        // public visitors never see the hide toggles
        assert!(!body.contains("/stats/hide/"));
    }
}
