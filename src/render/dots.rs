use crate::{
    foundation::color::Rgba8, foundation::core::Point, layout::grid::GridGeometry,
    render::surface::DrawSurface,
};

/// Where a day sits relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DayStatus {
    Past,
    Today,
    Future,
}

impl DayStatus {
    pub fn classify(day: u32, day_of_year: u32) -> Self {
        match day.cmp(&day_of_year) {
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Today,
            std::cmp::Ordering::Greater => Self::Future,
        }
    }
}

/// Dot fill colors per [`DayStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusPalette {
    pub past: Rgba8,
    pub today: Rgba8,
    pub future: Rgba8,
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            past: Rgba8::WHITE,
            today: Rgba8::rgb(0xf9, 0x73, 0x16),
            future: Rgba8::rgb(0x27, 0x27, 0x2a),
        }
    }
}

impl StatusPalette {
    pub fn color_for(&self, status: DayStatus) -> Rgba8 {
        match status {
            DayStatus::Past => self.past,
            DayStatus::Today => self.today,
            DayStatus::Future => self.future,
        }
    }
}

/// Draw one filled circle per day of the year, row-major from the grid origin.
pub fn draw_dots<S: DrawSurface + ?Sized>(
    surface: &mut S,
    grid: &GridGeometry,
    day_of_year: u32,
    palette: &StatusPalette,
) {
    let radius = grid.dot_size / 2.0;
    let mut x = grid.origin.x;
    let mut y = grid.origin.y;

    for day in 1..=grid.total_days {
        let color = palette.color_for(DayStatus::classify(day, day_of_year));
        surface.fill_circle(Point::new(x + radius, y + radius), radius, color);

        x += grid.pitch();
        if day % grid.columns == 0 {
            x = grid.origin.x;
            y += grid.pitch();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/dots.rs"]
mod tests;
