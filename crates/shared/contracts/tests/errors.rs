use courier_contracts::{
    CompositeDispatchFailure, DispatchError, FactoryError, FactoryErrorExt, MemoryReporter,
    RecipientError, RecipientFailure, Reporter, TracingReporter,
};
use std::time::Duration;

fn failure(name: &'static str, position: usize) -> RecipientFailure {
    RecipientFailure::new(name, position, RecipientError::unavailable("line busy"))
}

#[test]
fn composite_orders_failures_by_position() {
    let composite = CompositeDispatchFailure::new(vec![failure("b", 2), failure("a", 0)], 3);
    let positions: Vec<_> = composite.failures().iter().map(|f| f.position).collect();
    assert_eq!(positions, vec![0, 2]);
    assert_eq!(composite.attempted(), 3);
    assert_eq!(composite.to_string(), "2 of 3 recipient(s) failed");
}

#[test]
fn dispatch_error_exposes_all_failures() {
    let halted = DispatchError::from(failure("siren", 0));
    assert_eq!(halted.failures().len(), 1);
    assert_eq!(halted.kind(), "Recipient");

    let composite: DispatchError =
        CompositeDispatchFailure::new(vec![failure("a", 0), failure("b", 1)], 2).into();
    assert_eq!(composite.kind(), "Composite");
    assert_eq!(composite.into_failures().len(), 2);

    let duplicate =
        DispatchError::DuplicateRecipient { recipient: "a".into(), position: 1, context: None };
    assert!(duplicate.failures().is_empty());
}

#[test]
fn recipient_failure_display_names_the_recipient() {
    let failure = failure("dialer", 1);
    assert_eq!(
        failure.to_string(),
        "recipient `dialer` (#1) failed: Recipient unavailable: line busy"
    );
}

#[test]
fn timed_out_reports_milliseconds() {
    let err = RecipientError::TimedOut { elapsed: Duration::from_millis(250), context: None };
    assert_eq!(err.to_string(), "Recipient timed out after 250ms");
}

#[test]
fn factory_error_context_is_rendered() {
    let result: Result<(), FactoryError> = Err(FactoryError::unrecognized("teleport"));
    let err = result.context("sensor factory").unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized input kind `teleport` (sensor factory)");

    let missing = FactoryError::MissingKinds { kinds: vec!["a".into(), "b".into()], context: None };
    assert_eq!(missing.to_string(), "Factory cannot build kinds [a, b]");
}

#[test]
fn memory_reporter_records_every_failure() {
    let reporter = MemoryReporter::new();
    reporter.report("alarm", &failure("dialer", 1));
    reporter.report("alarm", &failure("siren", 0));
    TracingReporter.report("alarm", &failure("siren", 0));

    let entries = reporter.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].recipient, "dialer");
    assert_eq!(entries[0].kind, "Unavailable");
    assert_eq!(entries[1].sender, "alarm");
}
