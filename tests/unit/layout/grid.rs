use super::*;

fn live_spec() -> GridSpec {
    GridSpec {
        columns: 15,
        dot_size: 40.0,
        gap: 24.0,
        placement: VerticalPlacement::Centered { offset: 210.0 },
    }
}

#[test]
fn default_wallpaper_geometry() {
    let g = GridGeometry::solve(1206.0, 2622.0, live_spec(), 365);
    assert_eq!(g.rows, 25);
    assert_eq!(g.width, 936.0);
    assert_eq!(g.height, 1576.0);
    assert_eq!(g.origin, Point::new(135.0, 733.0));
    assert_eq!(g.bottom(), 2309.0);
    assert_eq!(g.bounds(), Rect::new(135.0, 733.0, 1071.0, 2309.0));
}

#[test]
fn last_dot_sits_inside_bounds() {
    let g = GridGeometry::solve(1206.0, 2622.0, live_spec(), 366);
    let last = g.cell_center(366);
    let b = g.bounds();
    assert!(b.contains(last));
    assert!(b.contains(g.cell_center(1)));
    assert_eq!(g.cell_of(366), (24, 5));
}

#[test]
fn leap_year_adds_a_row_only_when_needed() {
    let g = GridGeometry::solve(1206.0, 2622.0, live_spec(), 366);
    assert_eq!(g.rows, 25);

    let spec = GridSpec {
        columns: 13,
        ..live_spec()
    };
    assert_eq!(GridGeometry::solve(1206.0, 2622.0, spec, 364).rows, 28);
    assert_eq!(GridGeometry::solve(1206.0, 2622.0, spec, 365).rows, 29);
}

#[test]
fn grid_is_horizontally_centered() {
    for (w, cols) in [(1206.0, 15), (1080.0, 13), (2000.0, 7), (936.0, 15)] {
        let spec = GridSpec {
            columns: cols,
            ..live_spec()
        };
        let g = GridGeometry::solve(w, 2622.0, spec, 365);
        assert!((g.origin.x + g.width / 2.0 - w / 2.0).abs() < 1e-9);
    }
}

#[test]
fn placement_modes() {
    let spec = GridSpec {
        placement: VerticalPlacement::Centered { offset: -40.0 },
        ..live_spec()
    };
    let g = GridGeometry::solve(1206.0, 2622.0, spec, 365);
    assert_eq!(g.origin.y, 483.0);

    let spec = GridSpec {
        placement: VerticalPlacement::TopMargin { top: 600.0 },
        ..live_spec()
    };
    let g = GridGeometry::solve(1206.0, 2622.0, spec, 365);
    assert_eq!(g.origin.y, 600.0);
}

#[test]
fn oversized_grid_is_not_clamped() {
    let g = GridGeometry::solve(100.0, 100.0, live_spec(), 365);
    assert!(g.origin.x < 0.0);
    assert!(g.origin.y < 0.0);
    assert_eq!(g.width, 936.0);

    let g = GridGeometry::solve(-10.0, -10.0, live_spec(), 365);
    assert!(g.origin.x.is_finite());
}

#[test]
fn cells_are_row_major() {
    let g = GridGeometry::solve(1206.0, 2622.0, live_spec(), 365);
    for day in 1..=365 {
        let (row, col) = g.cell_of(day);
        assert_eq!(row, (day - 1) / 15);
        assert_eq!(col, (day - 1) % 15);
    }
    assert_eq!(g.cell_origin(1), g.origin);
    assert_eq!(g.cell_origin(16), Point::new(135.0, 733.0 + 64.0));
    assert_eq!(g.cell_center(2), Point::new(135.0 + 64.0 + 20.0, 753.0));
}

#[test]
fn vertical_placement_json_shape() {
    let p: VerticalPlacement =
        serde_json::from_value(serde_json::json!({ "top_margin": { "top": 12.0 } })).unwrap();
    assert_eq!(p, VerticalPlacement::TopMargin { top: 12.0 });
}
