use crate::foundation::error::{DotsError, DotsResult};

pub use kurbo::{Point, Rect};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Default phone-wallpaper size.
    pub const DEFAULT: Canvas = Canvas {
        width: 1206,
        height: 2622,
    };

    /// Build a canvas from signed request values; both sides must be positive.
    pub fn new(width: i64, height: i64) -> DotsResult<Self> {
        fn side(v: i64, name: &str) -> DotsResult<u32> {
            if v <= 0 {
                return Err(DotsError::surface(format!(
                    "canvas {name} must be > 0 (got {v})"
                )));
            }
            u32::try_from(v)
                .map_err(|_| DotsError::surface(format!("canvas {name} {v} is out of range")))
        }

        Ok(Self {
            width: side(width, "width")?,
            height: side(height, "height")?,
        })
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    pub fn full_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
