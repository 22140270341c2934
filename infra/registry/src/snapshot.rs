use courier_contracts::{Message, Recipient};
use std::borrow::Cow;
use std::sync::Arc;

/// An immutable, ordered view of a registry taken at one instant.
#[derive(Debug)]
pub struct Recipients<M: Message> {
    entries: Arc<[Arc<dyn Recipient<M>>]>,
    fallback: bool,
}

impl<M: Message> Clone for Recipients<M> {
    fn clone(&self) -> Self {
        Self { entries: Arc::clone(&self.entries), fallback: self.fallback }
    }
}

impl<M: Message> Recipients<M> {
    pub(crate) const fn registered(entries: Arc<[Arc<dyn Recipient<M>>]>) -> Self {
        Self { entries, fallback: false }
    }

    pub(crate) fn fallback(noop: Arc<dyn Recipient<M>>) -> Self {
        Self { entries: Arc::from(vec![noop]), fallback: true }
    }

    /// `true` when nobody was registered and the no-op recipient stands in.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Arc<dyn Recipient<M>>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Recipient<M>>> {
        self.entries.iter()
    }

    /// Number of entries, counting the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of recipients that were actually registered.
    #[must_use]
    pub fn registered_len(&self) -> usize {
        if self.fallback { 0 } else { self.entries.len() }
    }

    #[must_use]
    pub fn names(&self) -> Vec<Cow<'static, str>> {
        self.entries.iter().map(|r| r.name()).collect()
    }
}
