use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use crate::{
    config::request::RenderRequest,
    fonts::resolver::FontSource,
    foundation::color::Rgba8,
    foundation::core::Canvas,
    foundation::error::{DotsError, DotsResult},
    layout::grid::{GridSpec, VerticalPlacement},
    render::dots::StatusPalette,
};

/// Display name used when a request does not carry one.
pub const DEFAULT_DISPLAY_NAME: &str = "R Subham";

/// Caption typography and spacing below the grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CaptionStyle {
    /// Font size of the "Nd left • P%" line.
    pub stats_size_px: f32,
    /// Grid bottom to stats baseline.
    pub stats_gap: f64,
    /// Color of the " • P%" part; the days-left part uses the palette's today color.
    pub stats_muted: Rgba8,
    /// Whether the personalized detail line is drawn.
    pub detail: bool,
    pub detail_size_px: f32,
    /// Stats baseline to detail baseline.
    pub detail_gap: f64,
    pub detail_color: Rgba8,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            stats_size_px: 50.0,
            stats_gap: 110.0,
            stats_muted: Rgba8::rgb(0x71, 0x71, 0x7a),
            detail: true,
            detail_size_px: 32.0,
            detail_gap: 50.0,
            detail_color: Rgba8::rgb(0xd4, 0xd4, 0xd8),
        }
    }
}

/// Immutable visual configuration for one render.
///
/// Every field is optional in JSON; missing fields take the [`Preset::Live`] values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas: Canvas,
    pub background: Rgba8,
    pub palette: StatusPalette,
    pub grid: GridSpec,
    pub caption: CaptionStyle,
    pub display_name: String,
    pub font: FontSource,
    /// Cache lifetime hint attached to the encoded image.
    pub cache_max_age_secs: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::DEFAULT,
            background: Rgba8::BLACK,
            palette: StatusPalette::default(),
            grid: GridSpec::default(),
            caption: CaptionStyle::default(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            font: FontSource::default(),
            cache_max_age_secs: 60,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DotsResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| DotsError::validation(format!("parse render config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DotsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DotsError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> DotsResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(DotsError::validation("canvas width and height must be > 0"));
        }
        if self.grid.columns == 0 {
            return Err(DotsError::validation("grid columns must be >= 1"));
        }
        if !(self.grid.dot_size.is_finite() && self.grid.dot_size > 0.0) {
            return Err(DotsError::validation("grid dot_size must be finite and > 0"));
        }
        if !(self.grid.gap.is_finite() && self.grid.gap > 0.0) {
            return Err(DotsError::validation("grid gap must be finite and > 0"));
        }
        for (name, size) in [
            ("stats_size_px", self.caption.stats_size_px),
            ("detail_size_px", self.caption.detail_size_px),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(DotsError::validation(format!(
                    "caption {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Apply request overrides. Absent fields keep the configured values.
    ///
    /// Fails with a surface error when the requested dimensions cannot back a canvas.
    pub fn with_request(mut self, req: &RenderRequest) -> DotsResult<Self> {
        if req.width.is_some() || req.height.is_some() {
            self.canvas = Canvas::new(
                req.width.unwrap_or(i64::from(self.canvas.width)),
                req.height.unwrap_or(i64::from(self.canvas.height)),
            )?;
        }
        if let Some(name) = &req.display_name {
            self.display_name = name.clone();
        }
        Ok(self)
    }
}

/// Named visual profiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// 15 columns, centered +210, refreshed every minute.
    #[default]
    Live,
    /// 15 columns, centered +190, refreshed every minute.
    Lockscreen,
    /// 13 columns, centered −40, stats line only, refreshed hourly.
    Classic,
    /// 15 columns from a fixed 600px top margin, refreshed hourly.
    Poster,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Self::Live, Self::Lockscreen, Self::Classic, Self::Poster];

    pub fn name(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Lockscreen => "lockscreen",
            Self::Classic => "classic",
            Self::Poster => "poster",
        }
    }

    pub fn config(self) -> RenderConfig {
        let base = RenderConfig::default();
        match self {
            Self::Live => base,
            Self::Lockscreen => RenderConfig {
                grid: GridSpec {
                    placement: VerticalPlacement::Centered { offset: 190.0 },
                    ..base.grid
                },
                ..base
            },
            Self::Classic => RenderConfig {
                grid: GridSpec {
                    columns: 13,
                    placement: VerticalPlacement::Centered { offset: -40.0 },
                    ..base.grid
                },
                caption: CaptionStyle {
                    detail: false,
                    ..CaptionStyle::default()
                },
                cache_max_age_secs: 3600,
                ..base
            },
            Self::Poster => RenderConfig {
                grid: GridSpec {
                    placement: VerticalPlacement::TopMargin { top: 600.0 },
                    ..base.grid
                },
                cache_max_age_secs: 3600,
                ..base
            },
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/render.rs"]
mod tests;
