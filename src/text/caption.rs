use crate::{
    config::render::CaptionStyle,
    foundation::color::Rgba8,
    progress::YearProgress,
    text::compose::{TextLine, TextSegment},
};

/// Caption lines below a grid whose bottom edge sits at `grid_bottom`.
///
/// The stats line reads `"{days_left}d left • {percent}%"` with the days-left part in `accent`.
/// The optional detail line addresses `display_name` and sits `detail_gap` below it.
pub fn caption_lines(
    progress: &YearProgress,
    display_name: &str,
    grid_bottom: f64,
    style: &CaptionStyle,
    accent: Rgba8,
) -> Vec<TextLine> {
    let stats_y = grid_bottom + style.stats_gap;
    let mut lines = vec![TextLine {
        segments: vec![
            TextSegment::new(format!("{}d left", progress.days_left), accent),
            TextSegment::new(format!(" • {}%", progress.percent), style.stats_muted),
        ],
        baseline_y: stats_y,
        size_px: style.stats_size_px,
    }];

    if style.detail {
        lines.push(TextLine {
            segments: vec![TextSegment::new(
                format!(
                    "{display_name} you have completed {}% of {}. {} days left",
                    progress.percent, progress.year, progress.days_left
                ),
                style.detail_color,
            )],
            baseline_y: stats_y + style.detail_gap,
            size_px: style.detail_size_px,
        });
    }

    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/caption.rs"]
mod tests;
