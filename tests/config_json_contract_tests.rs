use archarts::api::{
    AxisTimeZone, BarGroupConfig, ChartConfig, ChartDescription, ChartKind, FillMode, FormatType,
    map_bar_chart, map_line_chart,
};
use archarts::core::Color;
use archarts::error::ChartError;

#[test]
fn non_object_payloads_are_invalid() {
    for input in ["[]", "42", "\"line\"", "null", "{not json"] {
        assert!(
            matches!(
                ChartConfig::from_json_str(input),
                Err(ChartError::InvalidConfig(_))
            ),
            "{input}"
        );
    }
}

#[test]
fn empty_object_is_an_empty_config() {
    assert_eq!(
        ChartConfig::from_json_str("{}").expect("config"),
        ChartConfig::default()
    );
}

#[test]
fn wrong_shaped_fields_are_treated_as_absent() {
    let config = ChartConfig::from_json_str(
        r#"{
            "series": [
                {"id": 7, "label": ["x"], "points": [{"x": 1, "y": 2}, {"x": "bad"}, 3]},
                "not a series"
            ],
            "defaultLineStyle": {"lineWidth": "thick", "lineColor": "red", "fill": "sparkle"},
            "perSeriesStyle": {"a": 5, "b": {"barWidth": 0.5}},
            "xAxis": {"enabled": "yes", "min": 1, "labelCount": -3},
            "legend": 12,
            "barGroup": {"enabled": 1}
        }"#,
    )
    .expect("config");

    assert_eq!(config.series.len(), 1);
    let series = &config.series[0];
    assert_eq!(series.id, None);
    assert_eq!(series.label, None);
    assert_eq!(series.points.len(), 1);

    let style = config.default_line_style.as_ref().expect("style object");
    assert_eq!(style.line_width, None);
    assert_eq!(style.line_color, None);
    assert_eq!(style.fill, None);

    assert_eq!(config.per_series_style.len(), 1);
    assert_eq!(config.per_series_style["b"].bar.bar_width, Some(0.5));

    let x_axis = config.x_axis.as_ref().expect("axis object");
    assert_eq!(x_axis.enabled, None);
    assert_eq!(x_axis.min, Some(1.0));
    assert_eq!(x_axis.label_count, None);

    assert_eq!(config.legend, None);
    assert!(!config.bar_group.as_ref().is_some_and(BarGroupConfig::is_enabled));
}

#[test]
fn colors_accept_signed_and_unsigned_argb() {
    let config = ChartConfig::from_json_str(
        r#"{"perSeriesStyle": {
            "signed": {"lineColor": -15654349},
            "unsigned": {"lineColor": 4279312947}
        }}"#,
    )
    .expect("config");
    let expected = Some(Color::from_argb(0xFF11_2233));
    assert_eq!(config.per_series_style["signed"].line.line_color, expected);
    assert_eq!(config.per_series_style["unsigned"].line.line_color, expected);
}

#[test]
fn colors_accept_whole_valued_floats() {
    let config = ChartConfig::from_json_str(
        r#"{"perSeriesStyle": {
            "unsigned": {"lineColor": 4294901760.0},
            "signed": {"barColor": -65536.0},
            "fractional": {"lineColor": 4294901760.5}
        }}"#,
    )
    .expect("config");
    let red = Some(Color::from_argb(0xFFFF_0000));
    assert_eq!(config.per_series_style["unsigned"].line.line_color, red);
    assert_eq!(config.per_series_style["signed"].bar.bar_color, red);
    assert_eq!(config.per_series_style["fractional"].line.line_color, None);
}

#[test]
fn axis_format_keys_are_flat_on_the_axis_map() {
    let config = ChartConfig::from_json_str(
        r#"{"leftAxis": {
            "formatType": "date",
            "formatTypeDecimals": 3,
            "formatPattern": "yyyy",
            "formatUtcOffsetMinutes": 0
        }}"#,
    )
    .expect("config");
    let spec = config
        .left_axis
        .as_ref()
        .and_then(|axis| axis.format_spec())
        .expect("format spec");
    assert_eq!(spec.format_type, FormatType::Date);
    assert_eq!(spec.decimals, 3);
    assert_eq!(spec.date_pattern, "yyyy");
    assert_eq!(spec.time_zone, AxisTimeZone::Utc);
}

#[test]
fn unknown_format_type_installs_default_numeral_formatter() {
    let config = ChartConfig::from_json_str(r#"{"xAxis": {"formatType": "scientific"}}"#)
        .expect("config");
    let description = map_line_chart(&config);
    assert_eq!(description.x_axis.format_label(1.5), "1.5");
    assert!(description.x_axis.formatter.is_some());
}

#[test]
fn per_series_entries_keep_line_and_bar_views() {
    let config = ChartConfig::from_json_str(
        r#"{"perSeriesStyle": {"a": {"fill": "gradient", "barWidth": 0.3, "drawValues": true}}}"#,
    )
    .expect("config");
    let entry = &config.per_series_style["a"];
    assert_eq!(entry.line.fill, Some(FillMode::Gradient));
    assert_eq!(entry.line.draw_values, Some(true));
    assert_eq!(entry.bar.bar_width, Some(0.3));
    assert_eq!(entry.bar.draw_values, Some(true));
}

#[test]
fn config_survives_a_serialize_parse_cycle() {
    let source = r#"{
        "series": [{"id": "a", "label": "A", "points": [{"x": 0, "y": 1, "label": "Jan"}]}],
        "defaultBarStyle": {"barColor": 4278255360, "barWidth": 0.5},
        "perSeriesStyle": {"a": {"lineColor": 4279312947, "lineDash": {"lengths": [4, 2]}}},
        "xAxis": {"formatType": "compact"},
        "barGroup": {"enabled": true, "groupSpace": 0.3},
        "viewport": {"viewPortOffsets": {"left": 4}},
        "animation": {"enabled": true, "durationMs": 300, "easing": "linear"}
    }"#;
    let config = ChartConfig::from_json_str(source).expect("config");
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ChartConfig::from_json_str(&json).expect("reparse"), config);
}

#[test]
fn mapped_description_serializes_for_adapters() {
    let config = ChartConfig::from_json_str(
        r#"{"series": [{"points": [{"x": 0, "y": 1, "label": "Q1"}]}], "legend": {}}"#,
    )
    .expect("config");
    let description = map_bar_chart(&config);

    let json = description.to_json_pretty().expect("serialize");
    assert!(json.contains("\"kind\": \"bar\""));
    let parsed: ChartDescription = serde_json::from_str(&json).expect("reparse");
    assert_eq!(parsed, description);
    assert_eq!(parsed.kind, ChartKind::Bar);
}
