use rill_cli::config::StreamConfig;
use rill_cli::report::MAX_PREVIEW_EVENTS;
use rill_cli::{build_report, join_values, render_text, run, CliError, Config, OutputFormat};
use rill_types::Catalog;

fn render(config: &Config, format: OutputFormat) -> String {
    let mut out = Vec::new();
    run(config, format, &mut out).expect("run should succeed");
    String::from_utf8(out).expect("output should be utf-8")
}

#[test]
fn join_values_separates_with_comma() {
    assert_eq!(join_values(&[0u64, 1, 1, 2], ", "), "0, 1, 1, 2");
    assert_eq!(join_values::<u64>(&[], ", "), "");
    assert_eq!(join_values(&[7u64], ", "), "7");
}

#[test]
fn default_text_report_matches_expected_lines() {
    let text = render(&Config::default(), OutputFormat::Text);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "=== Game Data Stream Processor ===");
    assert_eq!(lines[1], "Processing 1000 game events...");
    assert_eq!(lines[2], "Event 1: Player alice (level 8) killed monster");
    assert_eq!(lines[3], "Event 2: Player bob (level 15) found treasure");
    assert_eq!(lines[4], "Event 3: Player charlie (level 2) leveled up");
    assert_eq!(lines[5], "...");
    assert_eq!(lines[6], "=== Stream Analytics ===");
    assert_eq!(lines[7], "Total events processed: 1000");
    assert_eq!(lines[8], "High-level players (10+): 550");
    assert_eq!(lines[9], "Treasure events: 333");
    assert_eq!(lines[10], "Level-up events: 333");
    assert_eq!(lines[11], "Memory usage: Constant (streaming)");
    assert!(lines[12].starts_with("Processing time: "));
    assert!(lines[12].ends_with(" seconds"));
    assert_eq!(lines[13], "=== Generator Demonstration ===");
    assert_eq!(
        lines[14],
        "Fibonacci sequence (first 10): 0, 1, 1, 2, 3, 5, 8, 13, 21, 34"
    );
    assert_eq!(lines[15], "Prime numbers (first 5): 2, 3, 5, 7, 11");
    assert_eq!(lines.len(), 16);
}

#[test]
fn preview_is_capped_by_event_count() {
    let settings = StreamConfig {
        event_count: 2,
        preview_events: 5,
        ..StreamConfig::default()
    };
    let report = build_report(&settings, Catalog::default()).expect("report should build");
    assert_eq!(report.preview.len(), 2);
    assert_eq!(report.aggregate.processed_count, 2);
}

#[test]
fn preview_is_capped_at_the_hard_limit() {
    let settings = StreamConfig {
        event_count: 500,
        preview_events: u64::MAX,
        ..StreamConfig::default()
    };
    let report = build_report(&settings, Catalog::default()).expect("report should build");
    assert_eq!(report.preview.len() as u64, MAX_PREVIEW_EVENTS);
    assert_eq!(
        report.preview.last().map(|r| r.sequence_id),
        Some(MAX_PREVIEW_EVENTS)
    );
    assert_eq!(report.aggregate.processed_count, 500);
}

#[test]
fn zero_sized_run_renders_empty_prefixes() {
    let mut config = Config::default();
    config.stream.event_count = 0;
    config.stream.fibonacci_terms = 0;
    config.stream.prime_terms = 0;

    let text = render(&config, OutputFormat::Text);
    assert!(text.contains("Total events processed: 0"));
    assert!(text.contains("Fibonacci sequence (first 0): \n"));
    assert!(text.contains("Prime numbers (first 0): \n"));
}

#[test]
fn json_report_carries_aggregate_and_prefixes() {
    let mut config = Config::default();
    config.stream.event_count = 10;

    let json = render(&config, OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&json).expect("should be valid json");

    assert_eq!(value["event_count"], 10);
    assert_eq!(value["aggregate"]["processed_count"], 10);
    assert_eq!(value["preview"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["preview"][0]["actor"], "alice");
    assert_eq!(value["fibonacci"][9], 34);
    assert_eq!(value["primes"][4], 11);
    assert!(value["elapsed_seconds"].is_f64());
}

#[test]
fn record_ceiling_surfaces_as_stream_error() {
    let mut config = Config::default();
    config.stream.record_ceiling = Some(100);

    let err = run(&config, OutputFormat::Text, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Stream(_)));
}

#[test]
fn empty_catalog_surfaces_as_catalog_error() {
    let mut config = Config::default();
    config.catalog.actors.clear();

    let err = run(&config, OutputFormat::Text, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Catalog(_)));
}

#[test]
fn render_text_is_deterministic_apart_from_timing() {
    let settings = StreamConfig::default();
    let report = build_report(&settings, Catalog::default()).expect("report should build");

    let mut first = Vec::new();
    let mut second = Vec::new();
    render_text(&report, &mut first).expect("render should succeed");
    render_text(&report, &mut second).expect("render should succeed");
    assert_eq!(first, second);
}
