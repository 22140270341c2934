use crate::error::SendError;
use crate::gate::AssemblyGate;
use courier_contracts::{Message, Recipient};
use courier_dispatch::{DispatchMode, DispatchReport, Dispatcher};
use courier_registry::{RecipientRegistry, Recipients};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Handle a feature uses to notify whoever is registered for `M`.
///
/// The sender knows its recipients only through the [`Recipient`] contract and
/// refuses to dispatch until the composition root has finished.
pub struct Sender<M: Message> {
    name: Cow<'static, str>,
    gate: AssemblyGate,
    registry: RecipientRegistry<M>,
    dispatcher: Arc<dyn Dispatcher<M>>,
}

impl<M: Message> fmt::Debug for Sender<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("name", &self.name)
            .field("state", &self.gate.state())
            .field("recipients", &self.registry.len())
            .field("mode", &self.dispatcher.mode())
            .finish()
    }
}

impl<M: Message> Clone for Sender<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            gate: self.gate.clone(),
            registry: self.registry.clone(),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<M: Message> Sender<M> {
    pub(crate) const fn new(
        name: Cow<'static, str>,
        gate: AssemblyGate,
        registry: RecipientRegistry<M>,
        dispatcher: Arc<dyn Dispatcher<M>>,
    ) -> Self {
        Self { name, gate, registry, dispatcher }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mode(&self) -> DispatchMode {
        self.dispatcher.mode()
    }

    /// Registers another recipient; the swappable-recipient interface.
    ///
    /// Dispatches already in flight keep the recipients they started with.
    pub fn register(&self, recipient: Arc<dyn Recipient<M>>) -> usize {
        self.registry.register(recipient)
    }

    #[must_use]
    pub fn recipients(&self) -> Recipients<M> {
        self.registry.current_recipients()
    }

    /// Notifies every registered recipient.
    ///
    /// With nothing registered the no-op fallback runs and the report counts zero deliveries.
    ///
    /// # Errors
    /// * [`SendError::Assembly`] with `NotYetComposed` before assembly finished.
    /// * [`SendError::Dispatch`] when recipients failed.
    pub async fn send(&self, message: M) -> Result<DispatchReport, SendError> {
        self.send_shared(Arc::new(message)).await
    }

    /// As [`Sender::send`], for a message already behind an `Arc`.
    ///
    /// # Errors
    /// See [`Sender::send`].
    pub async fn send_shared(&self, message: Arc<M>) -> Result<DispatchReport, SendError> {
        self.gate.ensure_assembled(&self.name)?;

        let recipients = self.registry.current_recipients();
        if recipients.is_fallback() {
            debug!(sender = %self.name, "No recipients registered, using fallback");
        }

        let mut report = self.dispatcher.dispatch(&self.name, recipients.as_slice(), message).await?;
        if recipients.is_fallback() {
            report.delivered = 0;
        }
        trace!(sender = %self.name, delivered = report.delivered, elapsed = ?report.elapsed, "Message sent");
        Ok(report)
    }
}
