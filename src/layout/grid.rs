use crate::foundation::core::{Point, Rect};

/// How the dot grid is placed vertically on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalPlacement {
    /// Vertically centered, then shifted by `offset` pixels (positive moves down).
    Centered { offset: f64 },
    /// Fixed distance from the top edge.
    TopMargin { top: f64 },
}

impl Default for VerticalPlacement {
    fn default() -> Self {
        Self::Centered { offset: 210.0 }
    }
}

/// Dot-grid parameters taken from the render configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub columns: u32,
    /// Dot diameter in pixels.
    pub dot_size: f64,
    pub gap: f64,
    pub placement: VerticalPlacement,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 15,
            dot_size: 40.0,
            gap: 24.0,
            placement: VerticalPlacement::default(),
        }
    }
}

/// Solved dot-grid geometry.
///
/// The grid is not required to fit on the canvas; oversized grids keep their centered origin and
/// clip at the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridGeometry {
    pub columns: u32,
    pub rows: u32,
    pub total_days: u32,
    pub dot_size: f64,
    pub gap: f64,
    pub width: f64,
    pub height: f64,
    /// Top-left corner of the first cell.
    pub origin: Point,
}

impl GridGeometry {
    /// Solve grid geometry for `total_days` dots on a `canvas_width` x `canvas_height` canvas.
    ///
    /// Any numeric input is accepted; tiny or negative canvases produce off-canvas origins.
    pub fn solve(canvas_width: f64, canvas_height: f64, spec: GridSpec, total_days: u32) -> Self {
        let columns = spec.columns.max(1);
        let rows = total_days.div_ceil(columns);

        let width = span(columns, spec.dot_size, spec.gap);
        let height = span(rows, spec.dot_size, spec.gap);

        let x = (canvas_width - width) / 2.0;
        let y = match spec.placement {
            VerticalPlacement::Centered { offset } => (canvas_height - height) / 2.0 + offset,
            VerticalPlacement::TopMargin { top } => top,
        };

        Self {
            columns,
            rows,
            total_days,
            dot_size: spec.dot_size,
            gap: spec.gap,
            width,
            height,
            origin: Point::new(x, y),
        }
    }

    /// Distance between neighbouring cell origins.
    pub fn pitch(&self) -> f64 {
        self.dot_size + self.gap
    }

    /// Zero-based (row, column) of a 1-based day.
    pub fn cell_of(&self, day: u32) -> (u32, u32) {
        let i = day.saturating_sub(1);
        (i / self.columns, i % self.columns)
    }

    /// Top-left corner of a 1-based day's cell.
    pub fn cell_origin(&self, day: u32) -> Point {
        let (row, col) = self.cell_of(day);
        Point::new(
            self.origin.x + f64::from(col) * self.pitch(),
            self.origin.y + f64::from(row) * self.pitch(),
        )
    }

    /// Center of a 1-based day's dot.
    pub fn cell_center(&self, day: u32) -> Point {
        let o = self.cell_origin(day);
        let r = self.dot_size / 2.0;
        Point::new(o.x + r, o.y + r)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    /// Y coordinate of the grid's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.height
    }
}

fn span(count: u32, dot_size: f64, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    f64::from(count) * dot_size + f64::from(count - 1) * gap
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
