use std::collections::HashMap;

use vello_cpu::kurbo::Shape as _;

use crate::{
    encode::png::encode_png_premul,
    fonts::resolver::ResolvedFont,
    foundation::color::Rgba8,
    foundation::core::{Canvas, Point, Rect},
    foundation::error::{DotsError, DotsResult},
    render::surface::DrawSurface,
    text::engine::TextLayoutEngine,
};

/// Circle flattening tolerance in pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Largest pixmap a surface may allocate (64 Mpx, 256 MiB of RGBA8).
pub const MAX_SURFACE_PIXELS: u64 = 64 * 1024 * 1024;

/// [`DrawSurface`] rasterized on the CPU with `vello_cpu`; text is shaped with Parley.
pub struct CpuSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    text: TextLayoutEngine,
    fonts: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl CpuSurface {
    /// Create a surface; fails when either side is zero or exceeds `u16::MAX`, or when the area
    /// exceeds [`MAX_SURFACE_PIXELS`].
    pub fn new(canvas: Canvas, text: TextLayoutEngine) -> DotsResult<Self> {
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| DotsError::surface("surface width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| DotsError::surface("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(DotsError::surface("surface dimensions must be > 0"));
        }
        let area = u64::from(w) * u64::from(h);
        if area > MAX_SURFACE_PIXELS {
            return Err(DotsError::surface(format!(
                "surface {w}x{h} is {area} pixels, limit is {MAX_SURFACE_PIXELS}"
            )));
        }

        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            text,
            fonts: HashMap::new(),
        })
    }

    /// Rasterize pending draw calls into premultiplied RGBA8 bytes.
    pub fn into_premul_rgba8(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.ctx.width(), self.ctx.height());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }

    /// Rasterize and encode as PNG.
    pub fn encode_png(self) -> DotsResult<Vec<u8>> {
        let canvas = self.canvas;
        let premul = self.into_premul_rgba8();
        encode_png_premul(&premul, canvas.width, canvas.height)
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        let circle = vello_cpu::kurbo::Circle::new((center.x, center.y), radius);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
    }

    fn measure_text(&mut self, text: &str, font: &ResolvedFont) -> DotsResult<f64> {
        self.text.measure(text, font)
    }

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &ResolvedFont,
        color: Rgba8,
    ) -> DotsResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let layout = self.text.layout_line(text, font, color)?;
        let baseline = layout
            .lines()
            .next()
            .map(|line| f64::from(line.metrics().baseline))
            .unwrap_or(0.0);

        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            origin.x,
            origin.y - baseline,
        )));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                let font = run.run().font();
                let font_data = self
                    .fonts
                    .entry((font.data.id(), font.index))
                    .or_insert_with(|| {
                        vello_cpu::peniko::FontData::new(
                            vello_cpu::peniko::Blob::from(font.data.data().to_vec()),
                            font.index,
                        )
                    })
                    .clone();
                self.ctx.set_paint(paint(brush));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
