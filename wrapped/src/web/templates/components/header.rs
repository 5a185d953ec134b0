use maud::{html, Render};

use crate::web::oauth::AuthGithubUser;
use crate::web::templates::components::sign_in_out::SignInOut;

pub(crate) struct Header<'a> {
    pub(crate) user: Option<&'a AuthGithubUser>,
}

impl<'a> Render for Header<'a> {
    fn render(&self) -> maud::Markup {
        html! {
          header {
            div class="header" {
              a class="nav-item" href="/" {
                "GitHub " span class="accent" { "Wrapped" }
              };
              (SignInOut { user: self.user })
            }
          }
        }
    }
}
