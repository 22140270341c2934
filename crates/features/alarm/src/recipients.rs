use crate::event::{AlarmEvent, Severity};
use courier_kernel::contracts::{Recipient, RecipientError, async_trait};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{info, warn};

/// Sounds on every alarm.
#[derive(Debug, Default)]
pub struct Siren {
    sounded: AtomicUsize,
}

impl Siren {
    #[must_use]
    pub fn times_sounded(&self) -> usize {
        self.sounded.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Recipient<AlarmEvent> for Siren {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("siren")
    }

    async fn notify(&self, event: &AlarmEvent) -> Result<(), RecipientError> {
        self.sounded.fetch_add(1, Ordering::Relaxed);
        warn!(zone = %event.zone, severity = %event.severity, "Siren sounding");
        Ok(())
    }
}

/// Dials a fixed number for warnings and worse.
///
/// Fails with `Unavailable` while the line cannot be secured.
#[derive(Debug)]
pub struct Dialer {
    number: String,
    line_up: AtomicBool,
    calls: AtomicUsize,
}

impl Dialer {
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: number.into(), line_up: AtomicBool::new(true), calls: AtomicUsize::new(0) }
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Simulates losing or regaining the phone line.
    pub fn set_line(&self, up: bool) {
        self.line_up.store(up, Ordering::Relaxed);
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Recipient<AlarmEvent> for Dialer {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("dialer")
    }

    async fn notify(&self, event: &AlarmEvent) -> Result<(), RecipientError> {
        if event.severity < Severity::Warning {
            return Ok(());
        }
        if !self.line_up.load(Ordering::Relaxed) {
            return Err(RecipientError::unavailable(format!("cannot secure line to {}", self.number)));
        }
        self.calls.fetch_add(1, Ordering::Relaxed);
        info!(number = %self.number, %event, "Dialing");
        Ok(())
    }
}

/// Keeps a line per alarm.
#[derive(Debug, Default)]
pub struct Journal {
    lines: Mutex<Vec<String>>,
}

impl Journal {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[async_trait]
impl Recipient<AlarmEvent> for Journal {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("journal")
    }

    async fn notify(&self, event: &AlarmEvent) -> Result<(), RecipientError> {
        self.lines.lock().push(event.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dialer_ignores_notices_and_fails_without_line() {
        let dialer = Dialer::new("555-0100");
        dialer.notify(&AlarmEvent::new("hall", Severity::Notice)).await.unwrap();
        assert_eq!(dialer.calls(), 0);

        dialer.set_line(false);
        let err = dialer.notify(&AlarmEvent::new("hall", Severity::Critical)).await.unwrap_err();
        assert_eq!(err.kind(), "Unavailable");
        assert!(err.to_string().contains("555-0100"));
    }

    #[tokio::test]
    async fn journal_keeps_every_event() {
        let journal = Journal::default();
        journal.notify(&AlarmEvent::new("hall", Severity::Warning)).await.unwrap();
        journal.notify(&AlarmEvent::new("vault", Severity::Critical)).await.unwrap();
        assert_eq!(journal.lines(), vec!["warning alarm in hall", "critical alarm in vault"]);
    }
}
