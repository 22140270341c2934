use super::recipient::RecipientError;
use std::borrow::Cow;

/// A single recipient's failure, tagged with where it sat in the dispatch order.
#[derive(Debug, thiserror::Error)]
#[error("recipient `{recipient}` (#{position}) failed: {source}")]
pub struct RecipientFailure {
    pub recipient: Cow<'static, str>,
    pub position: usize,
    #[source]
    pub source: RecipientError,
}

impl RecipientFailure {
    pub fn new(
        recipient: impl Into<Cow<'static, str>>,
        position: usize,
        source: RecipientError,
    ) -> Self {
        Self { recipient: recipient.into(), position, source }
    }
}

/// Every failure collected from one dispatch, ordered by recipient position.
#[derive(Debug, thiserror::Error)]
#[error("{} of {attempted} recipient(s) failed", .failures.len())]
pub struct CompositeDispatchFailure {
    failures: Vec<RecipientFailure>,
    attempted: usize,
}

impl CompositeDispatchFailure {
    #[must_use]
    pub fn new(mut failures: Vec<RecipientFailure>, attempted: usize) -> Self {
        failures.sort_by_key(|f| f.position);
        Self { failures, attempted }
    }

    #[must_use]
    pub fn failures(&self) -> &[RecipientFailure] {
        &self.failures
    }

    #[must_use]
    pub fn into_failures(self) -> Vec<RecipientFailure> {
        self.failures
    }

    /// Number of recipients the dispatch tried to reach.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.attempted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

/// Errors returned by a broadcast dispatcher.
#[courier_derive::courier_error]
pub enum DispatchError {
    /// Sequential dispatch stopped at this failure; later recipients were not invoked.
    #[error("Dispatch halted{}: {source}", format_context(.context))]
    Recipient { source: RecipientFailure, context: Option<Cow<'static, str>> },

    /// One or more recipients failed; every failure is kept.
    #[error("Dispatch failed{}: {source}", format_context(.context))]
    Composite { source: CompositeDispatchFailure, context: Option<Cow<'static, str>> },

    /// A broadcast group was given the same recipient instance twice.
    #[error("Duplicate recipient `{recipient}` at position {position}{}", format_context(.context))]
    DuplicateRecipient {
        recipient: Cow<'static, str>,
        position: usize,
        context: Option<Cow<'static, str>>,
    },
}

impl DispatchError {
    /// Recipient failures carried by this error, in dispatch order.
    #[must_use]
    pub fn failures(&self) -> &[RecipientFailure] {
        match self {
            Self::Recipient { source, .. } => std::slice::from_ref(source),
            Self::Composite { source, .. } => source.failures(),
            Self::DuplicateRecipient { .. } => &[],
        }
    }

    #[must_use]
    pub fn into_failures(self) -> Vec<RecipientFailure> {
        match self {
            Self::Recipient { source, .. } => vec![source],
            Self::Composite { source, .. } => source.into_failures(),
            Self::DuplicateRecipient { .. } => Vec::new(),
        }
    }
}
