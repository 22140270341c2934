//! Alarm feature.
//!
//! A single `alarm` sender notifies a responders group (siren and dialer, in
//! parallel) followed by the journal. The sender only sees the [`Recipient`]
//! contract; which responders exist is decided by [`init`] from `[alarm]` config.
//!
//! [`Recipient`]: courier_kernel::contracts::Recipient

mod error;
mod event;
mod recipients;

pub use crate::error::{AlarmError, AlarmErrorExt};
pub use crate::event::{AlarmEvent, Severity};
pub use crate::recipients::{Dialer, Journal, Siren};

use courier_kernel::contracts::Recipient;
use courier_kernel::dispatch::{BroadcastGroup, DispatchReport, Parallel};
use courier_kernel::domain::config::AlarmConfig;
use courier_kernel::{Assembly, Sender};
use std::borrow::Cow;
use std::sync::Arc;

pub const SENDER: &str = "alarm";

/// Handle to the wired alarm.
#[derive(Debug, Clone)]
pub struct Alarm {
    sender: Sender<AlarmEvent>,
    journal: Arc<Journal>,
    siren: Option<Arc<Siren>>,
    dialer: Option<Arc<Dialer>>,
}

impl Alarm {
    /// Broadcasts an alarm for `zone`.
    ///
    /// # Errors
    /// [`AlarmError::Send`] before assembly finished or when a responder failed.
    pub async fn trigger(
        &self,
        zone: impl Into<Cow<'static, str>>,
        severity: Severity,
    ) -> Result<DispatchReport, AlarmError> {
        let event = AlarmEvent::new(zone, severity);
        tracing::debug!(%event, "Raising alarm");
        Ok(self.sender.send(event).await?)
    }

    #[must_use]
    pub const fn sender(&self) -> &Sender<AlarmEvent> {
        &self.sender
    }

    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    #[must_use]
    pub fn siren(&self) -> Option<&Siren> {
        self.siren.as_deref()
    }

    #[must_use]
    pub fn dialer(&self) -> Option<&Dialer> {
        self.dialer.as_deref()
    }
}

/// Wires the alarm sender and its recipients into `assembly`.
///
/// # Errors
/// [`AlarmError::Wiring`] if the responders group cannot be built.
pub fn init(assembly: &mut Assembly, config: &AlarmConfig) -> Result<Alarm, AlarmError> {
    let sender = assembly.sender::<AlarmEvent>(SENDER);

    let siren = config.siren.then(|| Arc::new(Siren::default()));
    let dialer = config.dial_number.as_deref().map(|number| Arc::new(Dialer::new(number)));

    let responders: Vec<Arc<dyn Recipient<AlarmEvent>>> = siren
        .iter()
        .map(|s| Arc::clone(s) as Arc<dyn Recipient<AlarmEvent>>)
        .chain(dialer.iter().map(|d| Arc::clone(d) as Arc<dyn Recipient<AlarmEvent>>))
        .collect();
    if !responders.is_empty() {
        let group = BroadcastGroup::builder("responders")
            .recipients(responders)
            .dispatcher(Arc::new(Parallel::new().with_reporter(assembly.reporter())))
            .build()?;
        assembly.bind_recipient(&sender, Arc::new(group));
    }

    let journal = Arc::new(Journal::default());
    assembly.bind_recipient(&sender, journal.clone());

    tracing::info!(siren = config.siren, dialer = dialer.is_some(), "Alarm feature initialized");
    Ok(Alarm { sender, journal, siren, dialer })
}
