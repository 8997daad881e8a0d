use archarts::api::{ChartConfig, map_bar_chart, map_line_chart};
use archarts::core::{Color, ContentRect, ScreenPoint, Size};
use archarts::extensions::{
    MARKER_VERTICAL_GAP, MarkerBoxMetrics, MarkerContent, MarkerLine, estimate_marker_size,
    marker_content, place_marker,
};

fn plot() -> ContentRect {
    ContentRect::new(0.0, 0.0, 300.0, 400.0)
}

#[test]
fn series_marker_lists_every_series_at_tapped_x() {
    let config = ChartConfig::from_json_str(
        r#"{
            "series": [
                {"id": "a", "label": "A", "points": [{"x": 0, "y": 1}, {"x": 1, "y": 2}]},
                {"id": "b", "label": "B", "points": [{"x": 1.0005, "y": 3.25}]},
                {"id": "c", "label": "C", "points": [{"x": 4, "y": 9}]}
            ],
            "perSeriesStyle": {"a": {"lineColor": 4279312947}},
            "marker": {"enabled": true}
        }"#,
    )
    .expect("config");
    let description = map_line_chart(&config);

    let content = marker_content(&description, 1.0).expect("marker");
    assert_eq!(
        content,
        MarkerContent {
            title: "1.0".to_owned(),
            lines: vec![
                MarkerLine {
                    bullet_color: Some(Color::from_argb(0xFF11_2233)),
                    label: "A".to_owned(),
                    value: "2.0".to_owned(),
                },
                MarkerLine {
                    bullet_color: None,
                    label: "B".to_owned(),
                    value: "3.25".to_owned(),
                },
            ],
        }
    );
    assert_eq!(content.to_plain_text(), "1.0\n\u{25CF} A: 2.0\n\u{25CF} B: 3.25");
    assert_eq!(content.line_count(), 3);
}

#[test]
fn series_marker_title_uses_axis_labels() {
    let config = ChartConfig::from_json_str(
        r#"{
            "series": [{"label": "Sales", "points": [
                {"x": 0, "y": 5, "label": "Jan"},
                {"x": 1, "y": 7, "label": "Feb"}
            ]}],
            "marker": {"enabled": true}
        }"#,
    )
    .expect("config");
    let description = map_bar_chart(&config);

    let content = marker_content(&description, 1.0).expect("marker");
    assert_eq!(content.to_plain_text(), "Feb\n\u{25CF} Sales: 7.0");
}

#[test]
fn empty_series_list_and_disabled_marker() {
    let config = ChartConfig::from_json_str(r#"{"marker": {"enabled": true}}"#).expect("config");
    let content = marker_content(&map_line_chart(&config), 2.0).expect("marker");
    assert_eq!(content.title, "2.0");
    assert!(content.lines.is_empty());
    assert_eq!(content.line_count(), 1);

    assert_eq!(marker_content(&map_line_chart(&ChartConfig::default()), 0.0), None);
}

#[test]
fn series_marker_box_grows_with_rows() {
    let config = ChartConfig::from_json_str(
        r#"{
            "series": [
                {"label": "A", "points": [{"x": 0, "y": 1}]},
                {"label": "B", "points": [{"x": 0, "y": 2}]}
            ],
            "marker": {"enabled": true}
        }"#,
    )
    .expect("config");
    let content = marker_content(&map_line_chart(&config), 0.0).expect("marker");
    let metrics = MarkerBoxMetrics::default();
    let size = estimate_marker_size(&content, metrics);

    // Widest row is "\u{25CF} A: 1.0" (8 chars); three rows with padding.
    assert_eq!(size.width, 8.0 * metrics.char_width + 2.0 * metrics.padding);
    assert_eq!(size.height, 3.0 * metrics.line_height + 2.0 * metrics.padding);
}

#[test]
fn marker_box_is_centered_above_the_point() {
    let placement = place_marker(
        ScreenPoint::new(150.0, 200.0),
        Size::new(60.0, 30.0),
        plot(),
    );
    assert_eq!(placement.offset, ScreenPoint::new(-30.0, -(30.0 + MARKER_VERTICAL_GAP)));
    assert_eq!(placement.origin, ScreenPoint::new(120.0, 162.0));
}

#[test]
fn right_overflow_shifts_left_by_exact_overflow() {
    let placement = place_marker(ScreenPoint::new(290.0, 200.0), Size::new(60.0, 30.0), plot());
    // Centered box would end at 320; it moves 20 units left to end at 300.
    assert_eq!(placement.offset.x, -50.0);
    assert_eq!(placement.origin.x + 60.0, 300.0);
}

#[test]
fn left_and_top_overflow_shift_inward() {
    let placement = place_marker(ScreenPoint::new(10.0, 20.0), Size::new(60.0, 30.0), plot());
    assert_eq!(placement.origin, ScreenPoint::new(0.0, 0.0));
    assert_eq!(placement.offset, ScreenPoint::new(-10.0, -20.0));
}

#[test]
fn bottom_overflow_shifts_up() {
    let rect = ContentRect::new(0.0, 100.0, 300.0, 120.0);
    let placement = place_marker(ScreenPoint::new(150.0, 140.0), Size::new(40.0, 10.0), rect);
    // Raised box spans 122..132, below the 120 bottom edge.
    assert_eq!(placement.origin.y, 110.0);
}
