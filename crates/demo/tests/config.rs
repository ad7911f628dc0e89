// File: crates/demo/tests/config.rs
// Purpose: TOML settings plus command-line overrides resolve to render settings.

use fitchart::config::{FileConfig, Overrides, Settings};
use fitchart_core::types::{HEIGHT, WIDTH};
use fitchart_core::{Field, Rgb};

#[test]
fn defaults_without_a_file() {
    let s = Settings::resolve(&FileConfig::default(), &Overrides::default()).unwrap();
    assert_eq!((s.frame.width, s.frame.height), (WIDTH, HEIGHT));
    assert_eq!(s.render.theme.name, "dark");
    assert!(s.render.draw_labels);
    assert!(!s.stacked);
    assert_eq!(s.metrics.len(), 6);
    assert_eq!(s.metrics[0].field, Field::Speed);
}

#[test]
fn file_overrides_metrics_and_output() {
    let cfg = FileConfig::parse(
        r##"
        [output]
        width = 1200
        theme = "light"
        max_points = 500
        labels = false

        [[metric]]
        field = "power"
        enabled = false

        [[metric]]
        field = "speed"
        unit = "mph"
        color = "#000000"
        y_max = 60.0

        [[metric]]
        field = "distance"
        label = "Distance"
        unit = "km"
        "##,
    )
    .unwrap();
    let s = Settings::resolve(&cfg, &Overrides::default()).unwrap();

    assert_eq!(s.frame.width, 1200);
    assert_eq!(s.frame.height, HEIGHT);
    assert_eq!(s.render.theme.name, "light");
    assert_eq!(s.render.max_points, Some(500));
    assert!(!s.render.draw_labels);

    assert!(s.metrics.iter().all(|m| m.field != Field::Power));
    let speed = &s.metrics[0];
    assert_eq!(speed.unit, "mph");
    assert_eq!(speed.color, Rgb::new(0, 0, 0));
    assert_eq!(speed.y_override.max, Some(60.0));
    assert_eq!(speed.y_override.min, None);

    let last = s.metrics.last().unwrap();
    assert_eq!(last.field, Field::Distance);
    assert_eq!(last.caption(), "Distance (km)");
}

#[test]
fn temperature_keeps_its_zero_floor_when_only_max_is_set() {
    let cfg = FileConfig::parse("[[metric]]\nfield = \"temperature\"\ny_max = 40.0\n").unwrap();
    let specs = cfg.metric_specs();
    let temp = specs.iter().find(|m| m.field == Field::Temperature).unwrap();
    assert_eq!(temp.y_override.min, Some(0.0));
    assert_eq!(temp.y_override.max, Some(40.0));
}

#[test]
fn command_line_wins_over_file() {
    let cfg = FileConfig::parse("[output]\ntheme = \"light\"\nheight = 300\n").unwrap();
    let cli = Overrides {
        theme: Some("solarized-dark".into()),
        height: Some(200),
        no_labels: true,
        stacked: true,
        metrics: vec!["heart_rate".into(), "distance".into()],
        ..Overrides::default()
    };
    let s = Settings::resolve(&cfg, &cli).unwrap();
    assert_eq!(s.render.theme.name, "solarized-dark");
    assert_eq!(s.frame.height, 200);
    assert!(!s.render.draw_labels);
    assert!(s.stacked);
    let fields: Vec<Field> = s.metrics.iter().map(|m| m.field).collect();
    assert_eq!(fields, vec![Field::HeartRate, Field::Distance]);
}

#[test]
fn bad_settings_are_rejected() {
    let unknown_theme = Overrides { theme: Some("neon".into()), ..Overrides::default() };
    let err = Settings::resolve(&FileConfig::default(), &unknown_theme).unwrap_err();
    assert!(err.to_string().contains("neon"));

    let tiny = Overrides { width: Some(50), ..Overrides::default() };
    assert!(Settings::resolve(&FileConfig::default(), &tiny).is_err());

    let bad_metric = Overrides { metrics: vec!["watts_per_kg".into()], ..Overrides::default() };
    assert!(Settings::resolve(&FileConfig::default(), &bad_metric).is_err());

    assert!(FileConfig::parse("[output]\ncolour = \"red\"\n").is_err());
    assert!(FileConfig::parse("[[metric]]\nfield = \"vo2\"\n").is_err());
}

#[test]
fn selecting_a_disabled_metric_uses_its_built_in_spec() {
    let cfg = FileConfig::parse("[[metric]]\nfield = \"temperature\"\nenabled = false\n").unwrap();
    assert!(cfg.metric_specs().iter().all(|m| m.field != Field::Temperature));

    let cli = Overrides { metrics: vec!["temperature".into()], ..Overrides::default() };
    let s = Settings::resolve(&cfg, &cli).unwrap();
    assert_eq!(s.metrics.len(), 1);
    assert_eq!(s.metrics[0].caption(), "Temperature (°C)");
    assert_eq!(s.metrics[0].y_override.min, Some(0.0));
}

#[test]
fn thinning_below_two_points_is_rejected() {
    for n in [0, 1] {
        let cli = Overrides { max_points: Some(n), ..Overrides::default() };
        let err = Settings::resolve(&FileConfig::default(), &cli).unwrap_err();
        assert!(err.to_string().contains("max_points"), "{n}: {err}");
    }
    let file = FileConfig::parse("[output]\nmax_points = 1\n").unwrap();
    assert!(Settings::resolve(&file, &Overrides::default()).is_err());

    let cli = Overrides { max_points: Some(2), ..Overrides::default() };
    assert_eq!(Settings::resolve(&FileConfig::default(), &cli).unwrap().render.max_points, Some(2));
}
