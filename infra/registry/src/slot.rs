use crate::registry::RecipientRegistry;
use crate::snapshot::Recipients;
use courier_contracts::{Message, Recipient};
use std::sync::Arc;

/// A swappable single recipient: a registry with capacity one.
///
/// Lets an already-created sender get a new recipient later without being rebuilt.
#[derive(Debug)]
pub struct RecipientSlot<M: Message> {
    registry: RecipientRegistry<M>,
}

impl<M: Message> Clone for RecipientSlot<M> {
    fn clone(&self) -> Self {
        Self { registry: self.registry.clone() }
    }
}

impl<M: Message> Default for RecipientSlot<M> {
    fn default() -> Self {
        Self { registry: RecipientRegistry::single() }
    }
}

impl<M: Message> RecipientSlot<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `recipient` in the slot, replacing any previous one.
    pub fn set(&self, recipient: Arc<dyn Recipient<M>>) {
        self.registry.register(recipient);
    }

    /// The current recipient, or the no-op fallback when the slot is empty.
    #[must_use]
    pub fn get(&self) -> Arc<dyn Recipient<M>> {
        let snapshot = self.registry.current_recipients();
        Arc::clone(&snapshot.as_slice()[0])
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Empties the slot; later reads return the fallback.
    pub fn clear(&self) {
        self.registry.clear();
    }

    #[must_use]
    pub fn snapshot(&self) -> Recipients<M> {
        self.registry.current_recipients()
    }
}
