use crate::{
    fonts::resolver::{FontFace, ResolvedFont},
    foundation::color::Rgba8,
    foundation::core::Point,
    foundation::error::DotsResult,
    render::surface::DrawSurface,
};

/// A run of same-colored text. Any spacing between runs must be part of `text`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TextSegment {
    pub text: String,
    pub color: Rgba8,
}

impl TextSegment {
    pub fn new(text: impl Into<String>, color: Rgba8) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Ordered segments drawn on one baseline at one font size.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextLine {
    pub segments: Vec<TextSegment>,
    pub baseline_y: f64,
    pub size_px: f32,
}

impl TextLine {
    /// The line's text with segment boundaries removed.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Where a composited line ended up.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinePlacement {
    pub start_x: f64,
    pub width: f64,
    pub baseline_y: f64,
}

/// Draw `segments` left to right as one horizontally centered block.
///
/// Each segment is measured separately and the block width is the sum of those widths; no
/// spacing is inserted between segments.
pub fn draw_centered_line<S: DrawSurface + ?Sized>(
    surface: &mut S,
    segments: &[TextSegment],
    baseline_y: f64,
    font: &ResolvedFont,
) -> DotsResult<LinePlacement> {
    let mut widths = Vec::with_capacity(segments.len());
    for seg in segments {
        widths.push(surface.measure_text(&seg.text, font)?);
    }
    let width: f64 = widths.iter().sum();
    let start_x = (surface.canvas().width_f64() - width) / 2.0;

    let mut x = start_x;
    for (seg, w) in segments.iter().zip(widths) {
        surface.fill_text(&seg.text, Point::new(x, baseline_y), font, seg.color)?;
        x += w;
    }

    Ok(LinePlacement {
        start_x,
        width,
        baseline_y,
    })
}

/// [`draw_centered_line`] for a [`TextLine`], sizing `face` to the line.
pub fn draw_line<S: DrawSurface + ?Sized>(
    surface: &mut S,
    line: &TextLine,
    face: &FontFace,
) -> DotsResult<LinePlacement> {
    draw_centered_line(
        surface,
        &line.segments,
        line.baseline_y,
        &face.sized(line.size_px),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/text/compose.rs"]
mod tests;
