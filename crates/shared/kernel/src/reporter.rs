use courier_contracts::{RecipientFailure, Reporter, TracingReporter};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::sync::Arc;

/// Reporter handed to every dispatcher built during assembly.
///
/// Forwards to whatever reporter is bound, so senders created before
/// `bind_reporter` still report to the final sink.
#[derive(Debug)]
pub(crate) struct SharedReporter {
    inner: RwLock<Arc<dyn Reporter>>,
}

impl Default for SharedReporter {
    fn default() -> Self {
        Self { inner: RwLock::new(Arc::new(TracingReporter)) }
    }
}

impl SharedReporter {
    pub(crate) fn bind(&self, reporter: Arc<dyn Reporter>) {
        *self.inner.write() = reporter;
    }
}

impl Reporter for SharedReporter {
    fn name(&self) -> Cow<'static, str> {
        self.inner.read().name()
    }

    fn report(&self, sender: &str, failure: &RecipientFailure) {
        let reporter = Arc::clone(&*self.inner.read());
        reporter.report(sender, failure);
    }
}
