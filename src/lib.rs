//! yeardots renders progress through the current calendar year as a PNG: one dot per day,
//! colored past/today/future, with a centered multi-colored caption below the grid.
//!
//! # Pipeline overview
//!
//! 1. **Font**: [`resolve_font`] registers the first existing candidate font or falls back to a
//!    generic family. It never fails.
//! 2. **Date math**: [`YearProgress`] under a fixed UTC+05:30 offset.
//! 3. **Surface**: [`CpuSurface`] (`vello_cpu`) sized from [`RenderConfig`].
//! 4. **Grid + dots**: [`GridGeometry::solve`] then [`draw_dots`].
//! 5. **Caption**: [`caption_lines`] composited by [`draw_centered_line`].
//! 6. **Encode**: PNG bytes in a [`RenderedImage`] with cache hints.
//!
//! Everything is request-scoped; painting works against any [`DrawSurface`], including the
//! in-memory [`RecordingSurface`].
#![forbid(unsafe_code)]

mod config;
mod encode;
mod fonts;
mod foundation;
mod layout;
mod pipeline;
mod progress;
mod render;
mod text;

pub use config::render::{CaptionStyle, DEFAULT_DISPLAY_NAME, Preset, RenderConfig};
pub use config::request::RenderRequest;
pub use encode::png::{PNG_CONTENT_TYPE, encode_png_premul};
pub use fonts::resolver::{
    FontFace, FontProbe, FontSource, FontStore, FsProbe, ResolvedFont, resolve_font,
};
pub use foundation::color::Rgba8;
pub use foundation::core::{Canvas, Point, Rect};
pub use foundation::error::{DotsError, DotsResult};
pub use layout::grid::{GridGeometry, GridSpec, VerticalPlacement};
pub use pipeline::{
    RenderReport, RenderedImage, paint_year, render_progress_png, render_request,
    render_year_png,
};
pub use progress::{IST_OFFSET_SECS, YearProgress, days_in_year, is_leap_year};
pub use render::cpu::{CpuSurface, MAX_SURFACE_PIXELS};
pub use render::dots::{DayStatus, StatusPalette, draw_dots};
pub use render::record::{DrawOp, RecordingSurface};
pub use render::surface::DrawSurface;
pub use text::caption::caption_lines;
pub use text::compose::{LinePlacement, TextLine, TextSegment, draw_centered_line, draw_line};
pub use text::engine::TextLayoutEngine;
