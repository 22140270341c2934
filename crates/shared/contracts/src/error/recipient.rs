use super::dispatch::RecipientFailure;
use std::borrow::Cow;
use std::time::Duration;

/// Failure raised by a single recipient while handling a message.
#[courier_derive::courier_error]
pub enum RecipientError {
    /// The recipient understood the message but refused it.
    #[error("Recipient rejected message{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The resource behind the recipient (line, device, queue) could not be secured.
    #[error("Recipient unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The recipient did not finish within the per-recipient timeout.
    #[error("Recipient timed out after {}ms{}", .elapsed.as_millis(), format_context(.context))]
    TimedOut { elapsed: Duration, context: Option<Cow<'static, str>> },

    /// The recipient task panicked or was cancelled.
    #[error("Recipient aborted{}: {message}", format_context(.context))]
    Aborted { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The recipient is itself a broadcast group and some of its members failed.
    #[error("Fan-out failed{}: {} member(s) failed", format_context(.context), .failures.len())]
    Fanout { failures: Vec<RecipientFailure>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal recipient error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RecipientError {
    pub fn rejected(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Rejected { message: message.into(), context: None }
    }

    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable { message: message.into(), context: None }
    }
}
