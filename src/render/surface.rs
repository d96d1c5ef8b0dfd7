use crate::{
    fonts::resolver::ResolvedFont,
    foundation::color::Rgba8,
    foundation::core::{Canvas, Point, Rect},
    foundation::error::DotsResult,
};

/// Minimal 2D drawing capability the year renderer paints onto.
///
/// Text is positioned by its left edge and baseline, matching a canvas `fillText` with left
/// alignment.
pub trait DrawSurface {
    fn canvas(&self) -> Canvas;

    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// Advance width of `text` under `font`, in pixels.
    fn measure_text(&mut self, text: &str, font: &ResolvedFont) -> DotsResult<f64>;

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &ResolvedFont,
        color: Rgba8,
    ) -> DotsResult<()>;
}
