use courier::domain::capability::CapabilitySet;
use courier::domain::config::{AlarmConfig, CourierConfig, DispatchMode};
use courier::domain::input::RawInput;
use courier::kernel::AssemblyState;
use courier::kernel::contracts::MemoryReporter;
use std::sync::Arc;

#[tokio::test]
async fn init_assembles_every_feature() {
    let platform = courier::init(&CourierConfig::default()).unwrap();

    assert_eq!(platform.state(), AssemblyState::Assembled);
    assert!(platform.graph().is_bound(CapabilitySet::ALL));
    assert!(courier::features::is_enabled("sensor"));

    let senders: Vec<_> = platform.graph().bindings().iter().map(|b| &*b.sender).collect();
    assert!(senders.contains(&"alarm"));
    assert!(senders.contains(&"sensor"));

    let raw = RawInput::new("reading").with_field("sensor", "attic").with_field("celsius", "90");
    platform.sensor().ingest(&raw).await.unwrap();
    assert_eq!(platform.alarm().journal().lines(), vec!["critical alarm in attic"]);
}

#[tokio::test]
async fn graph_serializes_for_diagnostics() {
    let platform = courier::init(&CourierConfig::default()).unwrap();
    let json = serde_json::to_value(platform.graph()).unwrap();
    assert!(json["bindings"].as_array().is_some_and(|b| !b.is_empty()));
}

#[tokio::test]
async fn recipient_failures_reach_the_reporter() {
    let mut config = CourierConfig::default();
    config.alarm = AlarmConfig { siren: true, dial_number: Some("555-0100".to_owned()) };
    config.dispatch.mode = DispatchMode::Parallel;
    let reporter = Arc::new(MemoryReporter::new());

    let platform = courier::init_with_reporter(&config, reporter.clone()).unwrap();
    if let Some(dialer) = platform.alarm().dialer() {
        dialer.set_line(false);
    }

    let raw = RawInput::new("reading").with_field("sensor", "attic").with_field("celsius", "90");
    assert!(platform.sensor().ingest(&raw).await.is_err());

    let recipients: Vec<_> = reporter.entries().into_iter().map(|e| e.recipient).collect();
    // Dialer inside the responders group, the group on the alarm sender, the bridge on the sensor.
    assert!(recipients.contains(&"dialer".to_owned()));
    assert!(recipients.contains(&"responders".to_owned()));
    assert!(recipients.contains(&"alarm-bridge".to_owned()));
}
