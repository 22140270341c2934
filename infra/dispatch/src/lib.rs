//! # Broadcast Dispatcher
//!
//! Delivers one message to an ordered list of recipients.
//!
//! * [`Sequential`]: registration order, one at a time. On failure it either halts
//!   ([`FailurePolicy::Halt`]) or carries on and reports every failure at the end
//!   ([`FailurePolicy::Continue`]).
//! * [`Parallel`]: one `tokio` task per recipient, optional per-recipient timeout,
//!   join-all; every failure is collected into a composite error.
//! * [`BroadcastGroup`]: an immutable set of recipients presented as a single recipient.
//!
//! Senders only see [`Dispatcher`], so switching between the two strategies is a
//! configuration decision taken where the sender is assembled.
//!
//! [`FailurePolicy::Halt`]: courier_domain::config::FailurePolicy::Halt
//! [`FailurePolicy::Continue`]: courier_domain::config::FailurePolicy::Continue

mod dispatcher;
mod group;
mod parallel;
mod sequential;

pub use courier_domain::config::{DispatchMode, FailurePolicy};
pub use dispatcher::{DispatchReport, Dispatcher, from_config};
pub use group::{BroadcastGroup, BroadcastGroupBuilder};
pub use parallel::Parallel;
pub use sequential::Sequential;
