use maud::{html, Render};

use crate::web::oauth::AuthGithubUser;

pub(crate) struct SignInOut<'a> {
    pub(crate) user: Option<&'a AuthGithubUser>,
}

impl<'a> Render for SignInOut<'a> {
    fn render(&self) -> maud::Markup {
        html! {
            @if let Some(user) = self.user {
                div class="session" {
                    img class="avatar" src=(user.avatar_url) alt=(format!("{}'s avatar", user.display_name()));
                    span { "Hey, " (user.display_name()) ", you're logged in!" }
                    a class="btn nav-item" href="/logout" { "Sign out" }
                }
            } @else {
                a class="btn nav-item" href="/login" { "Sign in with GitHub" }
            }
        }
    }
}
