use courier::domain::config::CourierConfig;
use courier_demo::{Summary, parse_line, run};
use std::io::Write;

#[test]
fn parses_numbers_and_flags_as_text() {
    let raw = parse_line(r#"{"kind": "reading", "celsius": 19.5, "calibrated": true}"#)
        .unwrap()
        .unwrap();
    assert_eq!(raw.discriminator(), Some("reading"));
    assert_eq!(raw.field("celsius"), Some("19.5"));
    assert_eq!(raw.field("calibrated"), Some("true"));

    assert!(parse_line("   ").unwrap().is_none());
    assert!(parse_line("[1, 2]").is_err());
}

#[tokio::test]
async fn run_tallies_every_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"kind": "reading", "sensor": "boiler", "celsius": 19.5}}
{{"kind": "reading", "sensor": "boiler", "celsius": 90}}
{{"kind": "humidity", "sensor": "cellar"}}
{{"sensor": "cellar"}}

not json"#
    )
    .unwrap();

    let platform = courier::init(&CourierConfig::default()).unwrap();
    let summary = run(&platform, file.path()).await.unwrap();

    assert_eq!(summary, Summary { delivered: 2, rejected: 3, failed: 0, alarms: 1 });
}

#[tokio::test]
async fn missing_input_file_is_an_error() {
    let platform = courier::init(&CourierConfig::default()).unwrap();
    assert!(run(&platform, std::path::Path::new("no/such/file.jsonl")).await.is_err());
}
