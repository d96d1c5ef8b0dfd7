//! Render orchestration: font, date math, surface, dots, caption, PNG.

use chrono::{DateTime, Utc};

use crate::{
    config::render::RenderConfig,
    config::request::RenderRequest,
    encode::png::PNG_CONTENT_TYPE,
    fonts::resolver::{FontFace, FontProbe, FsProbe, resolve_font},
    foundation::error::DotsResult,
    layout::grid::GridGeometry,
    progress::YearProgress,
    render::cpu::CpuSurface,
    render::dots::draw_dots,
    render::surface::DrawSurface,
    text::caption::caption_lines,
    text::compose::{LinePlacement, draw_line},
    text::engine::TextLayoutEngine,
};

/// What a render computed along the way.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderReport {
    pub progress: YearProgress,
    pub grid: GridGeometry,
    pub font: FontFace,
    /// One entry per caption line, top to bottom.
    pub lines: Vec<LinePlacement>,
}

/// Encoded image plus response hints.
#[derive(Clone, Debug)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub cache_max_age_secs: u32,
    pub report: RenderReport,
}

impl RenderedImage {
    /// `Cache-Control` header value for this image.
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age_secs)
    }
}

/// Paint background, dot grid and caption onto `surface`.
pub fn paint_year<S: DrawSurface + ?Sized>(
    surface: &mut S,
    config: &RenderConfig,
    progress: &YearProgress,
    font: &FontFace,
) -> DotsResult<RenderReport> {
    let canvas = surface.canvas();
    surface.fill_rect(canvas.full_rect(), config.background);

    let grid = GridGeometry::solve(
        canvas.width_f64(),
        canvas.height_f64(),
        config.grid,
        progress.total_days,
    );
    tracing::debug!(
        rows = grid.rows,
        columns = grid.columns,
        origin_x = grid.origin.x,
        origin_y = grid.origin.y,
        "solved grid"
    );
    draw_dots(surface, &grid, progress.day_of_year, &config.palette);

    let lines = caption_lines(
        progress,
        &config.display_name,
        grid.bottom(),
        &config.caption,
        config.palette.today,
    );
    let mut placements = Vec::with_capacity(lines.len());
    for line in &lines {
        placements.push(draw_line(surface, line, font)?);
    }

    Ok(RenderReport {
        progress: *progress,
        grid,
        font: font.clone(),
        lines: placements,
    })
}

/// Render the year containing `now` (under the fixed +05:30 offset) to PNG.
#[tracing::instrument(skip(config), fields(width = config.canvas.width, height = config.canvas.height))]
pub fn render_year_png(config: &RenderConfig, now: DateTime<Utc>) -> DotsResult<RenderedImage> {
    render_progress_png(config, &YearProgress::at(now), &FsProbe)
}

/// Apply a request's overrides to `base` and render.
pub fn render_request(
    base: RenderConfig,
    req: &RenderRequest,
    now: DateTime<Utc>,
) -> DotsResult<RenderedImage> {
    let config = base.with_request(req)?;
    render_year_png(&config, now)
}

/// Render precomputed progress to PNG, probing font candidates through `probe`.
pub fn render_progress_png(
    config: &RenderConfig,
    progress: &YearProgress,
    probe: &dyn FontProbe,
) -> DotsResult<RenderedImage> {
    config.validate()?;

    let mut text = TextLayoutEngine::new();
    let font = resolve_font(&config.font, probe, &mut text);
    tracing::debug!(
        year = progress.year,
        day_of_year = progress.day_of_year,
        total_days = progress.total_days,
        percent = progress.percent,
        "computed year progress"
    );

    let mut surface = CpuSurface::new(config.canvas, text)?;
    let report = paint_year(&mut surface, config, progress, &font)?;
    let bytes = surface.encode_png()?;

    Ok(RenderedImage {
        bytes,
        content_type: PNG_CONTENT_TYPE,
        cache_max_age_secs: config.cache_max_age_secs,
        report,
    })
}
