use maud::{html, Render, DOCTYPE};

/// Shown by link unfurlers when no generated preview has been stored yet.
pub(crate) const FALLBACK_PREVIEW_IMAGE: &str =
    "https://user-images.githubusercontent.com/36117635/144351202-c8c64e44-5be8-43c3-8cec-b86ada4dd423.png";

pub(crate) struct HtmlHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) image: Option<&'a str>,
}

impl<'a> Render for HtmlHead<'a> {
    fn render(&self) -> maud::Markup {
        let image = self.image.unwrap_or(FALLBACK_PREVIEW_IMAGE);
        html! {
          (DOCTYPE)
          head {
            title { (self.title) };
            link rel="stylesheet" href="/static/main.css";
            meta charset="utf-8" {};
            meta name="viewport" content="width=device-width, initial-scale=1.0" {};
            meta name="theme-color" content="#000" {};
            meta property="og:title" content=(self.title) {};
            meta property="og:type" content="website" {};
            @if let Some(description) = self.description {
                meta name="description" content=(description) {};
                meta name="og:description" content=(description) {};
            }
            meta property="og:image" content=(image) {};
            meta name="twitter:card" content="summary_large_image" {};
            meta property="twitter:image" content=(image) {};
          }
        }
    }
}
