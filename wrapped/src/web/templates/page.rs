use crate::web::templates::components::footer::Footer;

use super::head::HtmlHead;
use axum::response::{Html, IntoResponse};
use maud::{html, Markup, Render};

pub trait Page {
    fn get_name(&'_ self) -> String;
    fn get_description(&'_ self) -> Option<String> {
        None
    }
    /// Absolute URL used for the social link preview image.
    fn get_image(&'_ self) -> Option<String> {
        None
    }
    fn draw_body(&self) -> Markup;
}

pub struct RenderPage<T: Page>(pub(crate) T);

impl<T> IntoResponse for RenderPage<T>
where
    T: Page,
{
    fn into_response(self) -> axum::response::Response {
        Html(self.render().0).into_response()
    }
}

impl<T> Render for RenderPage<T>
where
    T: Page,
{
    fn render(&self) -> Markup {
        let page = &self.0;
        let description = page.get_description();
        let image = page.get_image();
        let header = HtmlHead {
            title: &page.get_name(),
            description: description.as_deref(),
            image: image.as_deref(),
        };
        html! {
          (header)
          body {
            (self.0.draw_body())
            ((Footer {}))
          }
        }
    }
}
