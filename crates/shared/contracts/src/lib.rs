//! # Capability Contracts
//!
//! The operation sets senders depend on instead of concrete types:
//!
//! * [`Recipient`]: receives `notify(message)` calls from a sender.
//! * [`Factory`]: produces capability-typed instances from a [`RawInput`].
//! * [`Reporter`]: consumes recipient failures observed during dispatch.
//!
//! Every error kind raised across the workspace lives in [`error`], so a sender,
//! a dispatcher and a factory can agree on failures without depending on each other.
//!
//! [`RawInput`]: courier_domain::input::RawInput

pub mod error;
mod factory;
mod message;
mod recipient;
mod reporter;

pub use error::{
    CompositeDispatchFailure, DispatchError, DispatchErrorExt, FactoryError, FactoryErrorExt,
    RecipientError, RecipientErrorExt, RecipientFailure,
};
pub use factory::Factory;
pub use message::Message;
pub use recipient::{NoopRecipient, Recipient};
pub use reporter::{MemoryReporter, ReportedFailure, Reporter, TracingReporter};

/// Re-exported so implementors do not need a direct dependency.
pub use async_trait::async_trait;
