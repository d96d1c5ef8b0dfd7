use chrono::NaiveDate;

use super::*;

const ACCENT: Rgba8 = Rgba8::rgb(0xf9, 0x73, 0x16);

fn progress(y: i32, m: u32, d: u32) -> YearProgress {
    YearProgress::for_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn stats_and_detail_lines() {
    let style = CaptionStyle::default();
    let lines = caption_lines(&progress(2025, 4, 10), "R Subham", 2309.0, &style, ACCENT);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "265d left • 27%");
    assert_eq!(lines[0].segments[0].color, ACCENT);
    assert_eq!(lines[0].segments[1].color, style.stats_muted);
    assert_eq!(lines[0].baseline_y, 2419.0);
    assert_eq!(lines[0].size_px, 50.0);

    assert_eq!(
        lines[1].text(),
        "R Subham you have completed 27% of 2025. 265 days left"
    );
    assert_eq!(lines[1].segments[0].color, style.detail_color);
    assert_eq!(lines[1].baseline_y, 2469.0);
    assert_eq!(lines[1].size_px, 32.0);
}

#[test]
fn last_day_reads_zero_days_left() {
    let lines = caption_lines(
        &progress(2025, 12, 31),
        "Ada",
        0.0,
        &CaptionStyle::default(),
        ACCENT,
    );
    assert_eq!(lines[0].text(), "0d left • 100%");
    assert!(lines[1].text().ends_with("100% of 2025. 0 days left"));
}

#[test]
fn detail_line_can_be_disabled() {
    let style = CaptionStyle {
        detail: false,
        ..CaptionStyle::default()
    };
    let lines = caption_lines(&progress(2024, 2, 29), "Ada", 10.0, &style, ACCENT);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "306d left • 16%");
}
