use crate::dispatcher::{DispatchReport, Dispatcher};
use courier_contracts::{
    CompositeDispatchFailure, DispatchError, Message, Recipient, RecipientFailure, Reporter,
    TracingReporter, async_trait,
};
use courier_domain::config::{DispatchMode, FailurePolicy};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::trace;

/// Invokes recipients one after another in registration order.
#[derive(Debug, Clone)]
pub struct Sequential {
    on_error: FailurePolicy,
    reporter: Arc<dyn Reporter>,
}

impl Default for Sequential {
    fn default() -> Self {
        Self::new(FailurePolicy::default())
    }
}

impl Sequential {
    #[must_use]
    pub fn new(on_error: FailurePolicy) -> Self {
        Self { on_error, reporter: Arc::new(TracingReporter) }
    }

    /// Stops at the first failure.
    #[must_use]
    pub fn halting() -> Self {
        Self::new(FailurePolicy::Halt)
    }

    /// Invokes every recipient, then reports all failures together.
    #[must_use]
    pub fn continuing() -> Self {
        Self::new(FailurePolicy::Continue)
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    #[must_use]
    pub const fn on_error(&self) -> FailurePolicy {
        self.on_error
    }
}

#[async_trait]
impl<M: Message> Dispatcher<M> for Sequential {
    fn mode(&self) -> DispatchMode {
        DispatchMode::Sequential
    }

    async fn dispatch(
        &self,
        sender: &str,
        recipients: &[Arc<dyn Recipient<M>>],
        message: Arc<M>,
    ) -> Result<DispatchReport, DispatchError> {
        let started = Instant::now();
        let mut failures = Vec::new();

        for (position, recipient) in recipients.iter().enumerate() {
            trace!(sender, recipient = %recipient.name(), position, "Delivering message");
            let Err(err) = recipient.notify(&message).await else {
                continue;
            };

            let failure = RecipientFailure::new(recipient.name(), position, err);
            self.reporter.report(sender, &failure);

            match self.on_error {
                FailurePolicy::Halt => return Err(failure.into()),
                FailurePolicy::Continue => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(DispatchReport { delivered: recipients.len(), elapsed: started.elapsed() })
        } else {
            Err(CompositeDispatchFailure::new(failures, recipients.len()).into())
        }
    }
}
