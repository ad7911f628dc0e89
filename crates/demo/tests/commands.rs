// File: crates/demo/tests/commands.rs
// Purpose: CSV decoding, `render` output files, `inspect` summary and flag parsing.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use fitchart::cli::{Cli, Command, InspectArgs, RenderArgs};
use fitchart::commands::{inspect, render};
use fitchart::decode::{CsvDecoder, DecodeError};
use fitchart_core::{Field, RecordSource};

const RIDE: &str = "\
timestamp,speed,heart_rate,power,lat,lon,notes
2024-05-01T08:00:00Z,20.0,120,180,47.3700,8.5400,start
2024-05-01T08:00:01Z,22.5,125,,47.3702,8.5403,
2024-05-01T08:00:02Z,,131,210,,,gps drop
2024-05-01T08:00:03Z,30.0,140,250,47.3706,8.5409,
";

fn write_fixture(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn render_args(input: PathBuf, out: PathBuf) -> RenderArgs {
    RenderArgs {
        input,
        out,
        format: None,
        config: None,
        theme: None,
        width: Some(320),
        height: Some(160),
        max_points: None,
        metrics: Vec::new(),
        stacked: false,
        no_labels: true,
    }
}

#[test]
fn csv_cells_map_to_fields_and_gaps_stay_missing() {
    let records = CsvDecoder.decode(RIDE.as_bytes()).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].get(Field::Speed), Some(20.0));
    assert_eq!(records[1].get(Field::Power), None);
    assert_eq!(records[2].get(Field::Speed), None);
    assert_eq!(records[2].get(Field::PositionLat), None);
    assert_eq!(records[3].get(Field::PositionLong), Some(8.5409));
    assert!(records.iter().all(|r| r.timestamp.is_some()));
}

#[test]
fn csv_errors() {
    assert!(matches!(CsvDecoder.decode(b"foo,bar\n1,2\n"), Err(DecodeError::NoKnownColumns)));
    let err = CsvDecoder.decode(b"time,speed\nyesterday,10\n").unwrap_err();
    assert!(matches!(err, DecodeError::Timestamp { row: 1, .. }));
    // epoch seconds are accepted
    let recs = CsvDecoder.decode(b"time,speed\n1714550400,10\n").unwrap();
    assert_eq!(recs[0].timestamp.map(|t| t.timestamp()), Some(1_714_550_400));
}

#[test]
fn render_writes_a_png_per_metric_and_the_route() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ride.csv", RIDE);
    let out = dir.path().join("charts");

    let report = render(&render_args(input, out.clone())).unwrap();

    assert!(report.skipped.is_empty());
    for name in ["speed.png", "power.png", "heart_rate.png", "cadence.png", "altitude.png", "temperature.png"] {
        let path = out.join(name);
        assert!(report.written.contains(&path), "missing {name}");
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    let route = fs::read_to_string(out.join("route.csv")).unwrap();
    let lines: Vec<&str> = route.lines().collect();
    assert_eq!(lines[0], "lat,lon");
    assert_eq!(lines.len(), 4, "the gps drop row is left out");
    assert_eq!(lines[1], "47.37,8.54");
}

#[test]
fn render_subset_stacked() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ride.csv", RIDE);
    let out = dir.path().join("out");
    let mut args = render_args(input, out.clone());
    args.metrics = vec!["heart_rate".into(), "speed".into()];
    args.stacked = true;
    args.max_points = Some(3);

    let report = render(&args).unwrap();
    let names: Vec<String> = report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["heart_rate.png", "speed.png", "activity.png", "route.csv"]);
}

#[test]
fn header_only_file_skips_every_metric() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "empty.csv", "timestamp,speed,heart_rate\n");
    let report = render(&render_args(input, dir.path().join("out"))).unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.skipped.len(), 6);
    assert!(report.skipped.iter().all(|(_, why)| why.contains("empty")));
}

#[test]
fn decode_failures_surface_with_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "broken.fit", "definitely not FIT");
    let err = render(&render_args(input, dir.path().join("out"))).unwrap_err();
    assert!(err.to_string().contains("broken.fit"));
    assert!(err.chain().any(|e| e.to_string().contains("FIT decode failed")));

    let odd = write_fixture(dir.path(), "ride.gpx", RIDE);
    assert!(render(&render_args(odd, dir.path().join("out"))).is_err());
}

#[test]
fn inspect_summarises_the_activity() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "ride.csv", RIDE);
    let report = inspect(&InspectArgs { input, format: None }).unwrap();

    assert_eq!(report.record_count, 4);
    assert_eq!(report.route_points, 3);
    let coverage: Vec<(Field, usize)> = report.coverage.iter().copied().filter(|(_, n)| *n > 0).collect();
    assert!(coverage.contains(&(Field::HeartRate, 4)));
    assert!(coverage.contains(&(Field::Power, 3)));
    assert!(coverage.contains(&(Field::Speed, 3)));

    let text = report.to_string();
    assert!(text.contains("records: 4"));
    assert!(text.contains("elapsed: 0:00:03"));
    assert!(text.contains("route:   3 points"));
}

#[test]
fn cli_parses_render_flags() {
    let cli = Cli::try_parse_from([
        "fitchart", "-v", "render", "ride.fit", "--out", "x", "--metrics", "speed,power", "--theme", "light",
        "--stacked",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Render(args) => {
            assert_eq!(args.out, PathBuf::from("x"));
            assert_eq!(args.metrics, vec!["speed", "power"]);
            assert!(args.stacked);
            assert!(!args.no_labels);
            assert_eq!(args.theme.as_deref(), Some("light"));
        }
        Command::Inspect(_) => panic!("expected render"),
    }
}
