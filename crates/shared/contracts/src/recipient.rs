use crate::error::RecipientError;
use crate::message::Message;
use async_trait::async_trait;
use std::borrow::Cow;
use std::fmt::Debug;

/// The `notify` capability.
///
/// Senders hold `Arc<dyn Recipient<M>>` and never learn which concrete type
/// answers the call.
#[async_trait]
pub trait Recipient<M: Message>: Debug + Send + Sync {
    /// Name used in logs and failure reports. Defaults to the unqualified type name.
    fn name(&self) -> Cow<'static, str> {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        Cow::Borrowed(base.rsplit("::").next().unwrap_or(base))
    }

    /// Handles one message.
    ///
    /// # Errors
    /// Returns a [`RecipientError`] when the message could not be handled.
    async fn notify(&self, message: &M) -> Result<(), RecipientError>;
}

/// Recipient that accepts every message and does nothing.
///
/// Substituted whenever a sender has nobody registered, so a sender never
/// holds an absent recipient.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecipient;

#[async_trait]
impl<M: Message> Recipient<M> for NoopRecipient {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("noop")
    }

    async fn notify(&self, _message: &M) -> Result<(), RecipientError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Bell;

    #[async_trait]
    impl Recipient<u32> for Bell {
        async fn notify(&self, _message: &u32) -> Result<(), RecipientError> {
            Ok(())
        }
    }

    #[test]
    fn default_name_is_unqualified_type_name() {
        assert_eq!(Recipient::<u32>::name(&Bell), "Bell");
    }

    #[tokio::test]
    async fn noop_accepts_anything() {
        let noop = NoopRecipient;
        assert!(Recipient::<u32>::notify(&noop, &7).await.is_ok());
        assert!(Recipient::<String>::notify(&noop, &"x".to_owned()).await.is_ok());
        assert_eq!(Recipient::<u32>::name(&noop), "noop");
    }
}
