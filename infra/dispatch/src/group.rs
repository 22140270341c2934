use crate::dispatcher::Dispatcher;
use crate::sequential::Sequential;
use courier_contracts::{DispatchError, Message, Recipient, RecipientError, async_trait};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// Ordered recipients presented as one recipient.
///
/// The member list is fixed once built. Notifying the group dispatches to every
/// member through the group's own [`Dispatcher`]; member failures come back as
/// [`RecipientError::Fanout`].
#[derive(Debug)]
pub struct BroadcastGroup<M: Message> {
    label: Cow<'static, str>,
    members: Arc<[Arc<dyn Recipient<M>>]>,
    dispatcher: Arc<dyn Dispatcher<M>>,
}

impl<M: Message> Clone for BroadcastGroup<M> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            members: Arc::clone(&self.members),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<M: Message> BroadcastGroup<M> {
    #[must_use]
    pub fn builder(label: impl Into<Cow<'static, str>>) -> BroadcastGroupBuilder<M> {
        BroadcastGroupBuilder {
            label: label.into(),
            members: Vec::new(),
            allow_duplicates: false,
            dispatcher: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn members(&self) -> &[Arc<dyn Recipient<M>>] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[async_trait]
impl<M: Message + Clone> Recipient<M> for BroadcastGroup<M> {
    fn name(&self) -> Cow<'static, str> {
        self.label.clone()
    }

    async fn notify(&self, message: &M) -> Result<(), RecipientError> {
        self.dispatcher
            .dispatch(&self.label, &self.members, Arc::new(message.clone()))
            .await
            .map(|_| ())
            .map_err(|err| RecipientError::Fanout { failures: err.into_failures(), context: None })
    }
}

/// Collects members for a [`BroadcastGroup`].
#[derive(Debug)]
pub struct BroadcastGroupBuilder<M: Message> {
    label: Cow<'static, str>,
    members: Vec<Arc<dyn Recipient<M>>>,
    allow_duplicates: bool,
    dispatcher: Option<Arc<dyn Dispatcher<M>>>,
}

impl<M: Message> BroadcastGroupBuilder<M> {
    #[must_use]
    pub fn recipient(mut self, recipient: Arc<dyn Recipient<M>>) -> Self {
        self.members.push(recipient);
        self
    }

    #[must_use]
    pub fn recipients(
        mut self,
        recipients: impl IntoIterator<Item = Arc<dyn Recipient<M>>>,
    ) -> Self {
        self.members.extend(recipients);
        self
    }

    /// Permits the same instance to appear more than once; it is then notified once per entry.
    #[must_use]
    pub const fn allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    /// Defaults to a halting [`Sequential`] dispatcher.
    #[must_use]
    pub fn dispatcher(mut self, dispatcher: Arc<dyn Dispatcher<M>>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Freezes the member list.
    ///
    /// # Errors
    /// Returns [`DispatchError::DuplicateRecipient`] when an instance was added twice
    /// and duplicates were not allowed.
    pub fn build(self) -> Result<BroadcastGroup<M>, DispatchError> {
        if !self.allow_duplicates {
            for (position, member) in self.members.iter().enumerate() {
                let seen = &self.members[..position];
                if seen.iter().any(|other| same_instance(other, member)) {
                    return Err(DispatchError::DuplicateRecipient {
                        recipient: member.name(),
                        position,
                        context: Some(self.label.clone()),
                    });
                }
            }
        }

        debug!(group = %self.label, members = self.members.len(), "Broadcast group built");
        Ok(BroadcastGroup {
            label: self.label,
            members: Arc::from(self.members),
            dispatcher: self.dispatcher.unwrap_or_else(|| Arc::new(Sequential::halting())),
        })
    }
}

fn same_instance<M: Message>(a: &Arc<dyn Recipient<M>>, b: &Arc<dyn Recipient<M>>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
