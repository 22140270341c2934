use crate::dispatcher::{DispatchReport, Dispatcher};
use courier_contracts::{
    CompositeDispatchFailure, DispatchError, Message, Recipient, RecipientError, RecipientFailure,
    Reporter, TracingReporter, async_trait,
};
use courier_domain::config::DispatchMode;
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::trace;

/// Invokes every recipient concurrently and waits for all of them.
///
/// Each recipient runs in its own task, so a panicking recipient surfaces as
/// [`RecipientError::Aborted`] instead of taking the dispatch down with it.
/// Must be driven from within a `tokio` runtime.
#[derive(Debug, Clone)]
pub struct Parallel {
    timeout: Option<Duration>,
    reporter: Arc<dyn Reporter>,
}

impl Default for Parallel {
    fn default() -> Self {
        Self::new()
    }
}

impl Parallel {
    #[must_use]
    pub fn new() -> Self {
        Self { timeout: None, reporter: Arc::new(TracingReporter) }
    }

    /// Bounds how long a single recipient may take; `None` waits indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

async fn deliver<M: Message>(
    recipient: Arc<dyn Recipient<M>>,
    message: Arc<M>,
    timeout: Option<Duration>,
) -> Result<(), RecipientError> {
    let Some(limit) = timeout else {
        return recipient.notify(&message).await;
    };
    tokio::time::timeout(limit, recipient.notify(&message))
        .await
        .unwrap_or(Err(RecipientError::TimedOut { elapsed: limit, context: None }))
}

#[async_trait]
impl<M: Message> Dispatcher<M> for Parallel {
    fn mode(&self) -> DispatchMode {
        DispatchMode::Parallel
    }

    async fn dispatch(
        &self,
        sender: &str,
        recipients: &[Arc<dyn Recipient<M>>],
        message: Arc<M>,
    ) -> Result<DispatchReport, DispatchError> {
        let started = Instant::now();
        let mut tasks = JoinSet::new();
        let mut positions: FxHashMap<tokio::task::Id, (usize, Cow<'static, str>)> =
            FxHashMap::default();

        for (position, recipient) in recipients.iter().enumerate() {
            let name = recipient.name();
            trace!(sender, recipient = %name, position, "Spawning delivery");
            let handle =
                tasks.spawn(deliver(Arc::clone(recipient), Arc::clone(&message), self.timeout));
            positions.insert(handle.id(), (position, name));
        }

        let mut failures = Vec::new();
        while let Some(joined) = tasks.join_next_with_id().await {
            let (id, err) = match joined {
                Ok((_, Ok(()))) => continue,
                Ok((id, Err(err))) => (id, err),
                Err(join) => (
                    join.id(),
                    RecipientError::Aborted { message: join.to_string().into(), context: None },
                ),
            };
            let (position, name) =
                positions.remove(&id).unwrap_or((usize::MAX, Cow::Borrowed("unknown")));
            let failure = RecipientFailure::new(name, position, err);
            self.reporter.report(sender, &failure);
            failures.push(failure);
        }

        if failures.is_empty() {
            Ok(DispatchReport { delivered: recipients.len(), elapsed: started.elapsed() })
        } else {
            Err(CompositeDispatchFailure::new(failures, recipients.len()).into())
        }
    }
}
