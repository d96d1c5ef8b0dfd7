use crate::{
    fonts::resolver::ResolvedFont,
    foundation::color::Rgba8,
    foundation::core::{Canvas, Point, Rect},
    foundation::error::{DotsError, DotsResult},
    render::surface::DrawSurface,
};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        color: Rgba8,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    Text {
        text: String,
        origin: Point,
        font: ResolvedFont,
        color: Rgba8,
    },
}

/// In-memory [`DrawSurface`] that records every draw call.
///
/// Text is measured with a fixed advance of `advance_em * size_px` per character, so widths are
/// additive across segment boundaries and independent of the font family.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    advance_em: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self::with_advance(canvas, 0.5)
    }

    pub fn with_advance(canvas: Canvas, advance_em: f64) -> Self {
        Self {
            canvas,
            advance_em,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded circles as `(center, radius, color)`, in draw order.
    pub fn circles(&self) -> Vec<(Point, f64, Rgba8)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    /// Recorded text runs as `(text, origin, color)`, in draw order.
    pub fn texts(&self) -> Vec<(&str, Point, Rgba8)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    origin,
                    color,
                    ..
                } => Some((text.as_str(), *origin, *color)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn measure_text(&mut self, text: &str, font: &ResolvedFont) -> DotsResult<f64> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(DotsError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        Ok(text.chars().count() as f64 * self.advance_em * f64::from(font.size_px))
    }

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &ResolvedFont,
        color: Rgba8,
    ) -> DotsResult<()> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            font: font.clone(),
            color,
        });
        Ok(())
    }
}
