use crate::error::RecipientFailure;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt::Debug;
use tracing::warn;

/// Sink for recipient failures observed during dispatch.
///
/// Dispatchers call it for every failure before propagating or aggregating,
/// so nothing is swallowed even when the caller discards the error.
pub trait Reporter: Debug + Send + Sync {
    /// Name recorded in the assembly graph. Defaults to the unqualified type name.
    fn name(&self) -> Cow<'static, str> {
        let full = std::any::type_name::<Self>();
        Cow::Borrowed(full.rsplit("::").next().unwrap_or(full))
    }

    fn report(&self, sender: &str, failure: &RecipientFailure);
}

/// Reports failures as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, sender: &str, failure: &RecipientFailure) {
        warn!(
            sender,
            recipient = %failure.recipient,
            position = failure.position,
            kind = failure.source.kind(),
            error = %failure.source,
            "Cannot secure recipient"
        );
    }
}

/// One entry recorded by [`MemoryReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedFailure {
    pub sender: String,
    pub recipient: String,
    pub position: usize,
    pub kind: &'static str,
}

/// Keeps every reported failure in memory, for diagnostics and tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<ReportedFailure>>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<ReportedFailure> {
        self.entries.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, sender: &str, failure: &RecipientFailure) {
        self.entries.lock().push(ReportedFailure {
            sender: sender.to_owned(),
            recipient: failure.recipient.to_string(),
            position: failure.position,
            kind: failure.source.kind(),
        });
    }
}
