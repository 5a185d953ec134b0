use anyhow::{anyhow, Result};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response},
    response::IntoResponse,
};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use wrapped_api_types::{StatKind, UserRecord};
use wrapped_backend::BackendClient;

use super::error::WebError;

const SIZE: (u32, u32) = (1200, 630);

const BACKGROUND: RGBColor = RGBColor(10, 8, 14);
const ACCENT: RGBColor = RGBColor(190, 160, 255);
const BAR: RGBColor = RGBColor(124, 58, 237);

/// Draw the share card for a record. Hidden stats stay hidden here too; the
/// preview is the most public surface there is.
pub(crate) fn generate_image(record: &UserRecord) -> Result<Vec<u8>> {
    let mut rgb = vec![0u8; (SIZE.0 * SIZE.1 * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, SIZE).into_drawing_area();
        root.fill(&BACKGROUND)
            .map_err(|e| anyhow!("can't fill preview background {e}"))?;

        let title = format!("{}'s year on GitHub", record.username);
        root.draw(&Text::new(
            title,
            (60, 50),
            ("sans-serif", 56).into_font().color(&WHITE),
        ))
        .map_err(|e| anyhow!("can't draw preview title {e}"))?;

        let mut line_y = 150;
        for line in headline_lines(record) {
            root.draw(&Text::new(
                line,
                (60, line_y),
                ("sans-serif", 36).into_font().color(&ACCENT),
            ))
            .map_err(|e| anyhow!("can't draw preview line {e}"))?;
            line_y += 56;
        }

        let months = record
            .contributions
            .as_ref()
            .filter(|_| !record.is_hidden(StatKind::Contributions))
            .map(|contributions| contributions.months.as_slice())
            .unwrap_or_default();
        if !months.is_empty() {
            let max = months.iter().map(|m| m.count).max().unwrap_or(0).max(1);
            let chart_area = root.margin(360, 40, 60, 60);
            let mut chart = ChartBuilder::on(&chart_area)
                .x_label_area_size(30)
                .y_label_area_size(50)
                .build_cartesian_2d(0u32..12u32, 0u32..max)
                .map_err(|e| anyhow!("can't build preview chart {e}"))?;
            chart
                .configure_mesh()
                .disable_mesh()
                .label_style(("sans-serif", 20).into_font().color(&WHITE))
                .x_labels(12)
                .draw()
                .map_err(|e| anyhow!("can't draw preview chart mesh {e}"))?;
            chart
                .draw_series(months.iter().map(|month| {
                    let x = u32::from(month.month.clamp(1, 12)) - 1;
                    Rectangle::new([(x, 0), (x + 1, month.count)], BAR.filled())
                }))
                .map_err(|e| anyhow!("can't draw preview bars {e}"))?;
        }

        root.present()
            .map_err(|e| anyhow!("can't finish preview {e}"))?;
    }

    let image = RgbImage::from_raw(SIZE.0, SIZE.1, rgb)
        .ok_or_else(|| anyhow!("preview buffer size mismatch"))?;
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

fn headline_lines(record: &UserRecord) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(highlights) = record
        .highlights
        .as_ref()
        .filter(|_| !record.is_hidden(StatKind::Highlights))
    {
        lines.push(format!(
            "{} commits, {} pull requests",
            highlights.commits, highlights.pull_requests
        ));
    }
    if let Some(stars) = record
        .stars
        .as_ref()
        .filter(|_| !record.is_hidden(StatKind::Stars))
    {
        lines.push(format!("+{} stars received", stars.received));
    }
    if let Some(repo) = record
        .top_repos
        .as_ref()
        .filter(|_| !record.is_hidden(StatKind::TopRepos))
        .and_then(|repos| repos.first())
    {
        lines.push(format!("Top repo: {}", repo.name_with_owner));
    }
    lines
}

/// Regenerates the card, stores it for link unfurlers, and serves it.
pub(crate) async fn preview_card(
    Path(username): Path<String>,
    State(backend): State<BackendClient>,
) -> Result<impl IntoResponse, WebError> {
    let record = backend.get_user(&username).await?;
    let bytes = generate_image(&record)?;
    backend
        .upload_preview(&record.username, bytes.clone())
        .await?;
    let mime_type = mime_guess::from_path("preview.png").first_or_text_plain();
    Ok(Response::builder()
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .body(Body::from(bytes))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapped_api_types::{Highlights, Stars};

    fn record() -> UserRecord {
        let mut record = UserRecord::stub("alice", None, None);
        record.highlights = Some(Highlights {
            commits: 812,
            pull_requests: 44,
            issues: 12,
            reviews: 31,
        });
        record.stars = Some(Stars {
            given: 120,
            received: 4512,
        });
        record
    }

    #[test]
    fn headline_covers_visible_stats() {
        let lines = headline_lines(&record());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("812 commits"));
        assert!(lines[1].contains("+4512 stars"));
    }

    #[test]
    fn hidden_stats_stay_out_of_the_preview() {
        let mut record = record();
        record.hidden.push(StatKind::Stars);
        let lines = headline_lines(&record);
        assert!(!lines.iter().any(|line| line.contains("stars")));
    }
}
