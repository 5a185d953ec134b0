use maud::{html, Render};

/// One bar of a [`BlockChart`].
pub(crate) struct Block<'a> {
    pub(crate) label: &'a str,
    pub(crate) value: u32,
    /// CSS class carrying the bar color.
    pub(crate) color: &'a str,
    pub(crate) href: Option<&'a str>,
}

/// Horizontal proportional bars, widths scaled against the largest value.
pub(crate) struct BlockChart<'a> {
    pub(crate) blocks: Vec<Block<'a>>,
}

impl<'a> Render for BlockChart<'a> {
    fn render(&self) -> maud::Markup {
        let max = self.blocks.iter().map(|b| b.value).max().unwrap_or(0).max(1);
        html! {
            div class="block-chart" {
                @for block in &self.blocks {
                    @let width = format!("width: {}%", block.value * 100 / max);
                    div class=(format!("block {}", block.color)) style=(width) {
                        @if let Some(href) = block.href {
                            a class="block-label" href=(href) { (block.label) }
                        } @else {
                            span class="block-label" { (block.label) }
                        }
                        span class="block-value" { (block.value) }
                    }
                }
            }
        }
    }
}
