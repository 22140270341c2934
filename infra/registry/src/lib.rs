//! # Recipient Registry
//!
//! Holds the ordered recipients registered with one sender.
//!
//! ## Overview
//!
//! * **Ordered**: dispatch order is registration order.
//! * **Policies**: `Many` appends, `Single` replaces (capacity one, see [`RecipientSlot`]).
//! * **Never absent**: an empty registry yields the [`NoopRecipient`] fallback.
//! * **Snapshot reads**: entries live in an `Arc<[..]>` behind a `parking_lot::RwLock`.
//!   Writers publish a fresh slice; readers clone the `Arc`, so a dispatch already in
//!   flight keeps the set it started with.
//!
//! # Example
//!
//! ```rust
//! use courier_contracts::{async_trait, Recipient, RecipientError};
//! use courier_registry::RecipientRegistry;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Lamp;
//!
//! #[async_trait]
//! impl Recipient<u8> for Lamp {
//!     async fn notify(&self, _level: &u8) -> Result<(), RecipientError> {
//!         Ok(())
//!     }
//! }
//!
//! let registry = RecipientRegistry::<u8>::many();
//! assert!(registry.current_recipients().is_fallback());
//!
//! registry.register(Arc::new(Lamp));
//! assert_eq!(registry.current_recipients().names(), vec!["Lamp"]);
//! ```
//!
//! [`NoopRecipient`]: courier_contracts::NoopRecipient

mod registry;
mod slot;
mod snapshot;

pub use courier_domain::config::RegistrationPolicy;
pub use registry::RecipientRegistry;
pub use slot::RecipientSlot;
pub use snapshot::Recipients;
