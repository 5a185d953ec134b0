use maud::{html, Render};

pub(crate) struct Footer {}

impl Render for Footer {
    fn render(&self) -> maud::Markup {
        html! {
            footer {
                p class="footer-text" {
                    "Made by " a class="footer-link" href="https://neat.run" { "Neat" }
                }
            }
        }
    }
}
