use crate::parallel::Parallel;
use crate::sequential::Sequential;
use courier_contracts::{DispatchError, Message, Recipient, Reporter};
use courier_domain::config::{DispatchConfig, DispatchMode};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of a dispatch in which every recipient succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    /// Recipients invoked, counting a no-op fallback passed in the slice.
    pub delivered: usize,
    pub elapsed: Duration,
}

/// Fans one message out to an ordered slice of recipients.
///
/// Implementations must hand every failure to their [`Reporter`] before returning it.
#[courier_contracts::async_trait]
pub trait Dispatcher<M: Message>: Debug + Send + Sync {
    fn mode(&self) -> DispatchMode;

    /// Delivers `message` to `recipients` on behalf of `sender`.
    ///
    /// # Errors
    /// * [`DispatchError::Recipient`] when a halting dispatch stopped at a failure.
    /// * [`DispatchError::Composite`] when one or more recipients failed and the
    ///   dispatch kept going.
    async fn dispatch(
        &self,
        sender: &str,
        recipients: &[Arc<dyn Recipient<M>>],
        message: Arc<M>,
    ) -> Result<DispatchReport, DispatchError>;
}

/// Builds the dispatcher selected by `config`.
#[must_use]
pub fn from_config<M: Message>(
    config: &DispatchConfig,
    reporter: Arc<dyn Reporter>,
) -> Arc<dyn Dispatcher<M>> {
    match config.mode {
        DispatchMode::Sequential => {
            Arc::new(Sequential::new(config.on_error).with_reporter(reporter))
        },
        DispatchMode::Parallel => Arc::new(
            Parallel::new().with_timeout(config.recipient_timeout()).with_reporter(reporter),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_contracts::TracingReporter;
    use courier_domain::config::FailurePolicy;

    #[test]
    fn config_selects_strategy() {
        let mut config = DispatchConfig::default();
        let dispatcher = from_config::<u8>(&config, Arc::new(TracingReporter));
        assert_eq!(dispatcher.mode(), DispatchMode::Sequential);

        config.mode = DispatchMode::Parallel;
        config.on_error = FailurePolicy::Continue;
        let dispatcher = from_config::<u8>(&config, Arc::new(TracingReporter));
        assert_eq!(dispatcher.mode(), DispatchMode::Parallel);
    }
}
