use crate::snapshot::Recipients;
use courier_contracts::{Message, NoopRecipient, Recipient};
use courier_domain::config::RegistrationPolicy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

type Entries<M> = Arc<[Arc<dyn Recipient<M>>]>;

/// Ordered, thread-safe set of recipients for one sender.
///
/// Cloning is cheap and yields a handle to the same registry.
#[derive(Debug)]
pub struct RecipientRegistry<M: Message> {
    policy: RegistrationPolicy,
    entries: Arc<RwLock<Entries<M>>>,
    fallback: Arc<dyn Recipient<M>>,
}

impl<M: Message> Clone for RecipientRegistry<M> {
    fn clone(&self) -> Self {
        Self {
            policy: self.policy,
            entries: Arc::clone(&self.entries),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

impl<M: Message> Default for RecipientRegistry<M> {
    fn default() -> Self {
        Self::new(RegistrationPolicy::default())
    }
}

impl<M: Message> RecipientRegistry<M> {
    #[must_use]
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            entries: Arc::new(RwLock::new(Arc::from(Vec::new()))),
            fallback: Arc::new(NoopRecipient),
        }
    }

    /// Registry that appends on every registration.
    #[must_use]
    pub fn many() -> Self {
        Self::new(RegistrationPolicy::Many)
    }

    /// Registry that keeps only the most recent registration.
    #[must_use]
    pub fn single() -> Self {
        Self::new(RegistrationPolicy::Single)
    }

    /// Replaces the no-op stand-in used while nothing is registered.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn Recipient<M>>) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Registers a recipient and returns the number of registered recipients.
    ///
    /// Under [`RegistrationPolicy::Many`] the recipient is appended; registering the
    /// same instance twice makes it receive every message twice. Under
    /// [`RegistrationPolicy::Single`] it replaces whatever was registered before.
    pub fn register(&self, recipient: Arc<dyn Recipient<M>>) -> usize {
        let name = recipient.name();
        let mut entries = self.entries.write();
        let next: Entries<M> = match self.policy {
            RegistrationPolicy::Many => entries.iter().cloned().chain([recipient]).collect(),
            RegistrationPolicy::Single => {
                if let Some(previous) = entries.first() {
                    debug!(replaced = %previous.name(), recipient = %name, "Replacing recipient");
                }
                Arc::from(vec![recipient])
            },
        };
        *entries = next;
        let count = entries.len();
        drop(entries);

        trace!(recipient = %name, count, policy = ?self.policy, "Recipient registered");
        count
    }

    /// A stable snapshot in registration order, or the fallback when empty.
    #[must_use]
    pub fn current_recipients(&self) -> Recipients<M> {
        let entries = Arc::clone(&*self.entries.read());
        if entries.is_empty() {
            Recipients::fallback(Arc::clone(&self.fallback))
        } else {
            Recipients::registered(entries)
        }
    }

    /// Removes every recipient and returns how many were registered.
    pub fn clear(&self) -> usize {
        let previous = std::mem::replace(&mut *self.entries.write(), Arc::from(Vec::new()));
        debug!(removed = previous.len(), "Registry cleared");
        previous.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
