//! Composition kernel.
//! Holds the assembler that wires every sender once at startup, the gated [`Sender`]
//! handle features talk through, and the layered config loader.
//!
//! ## Assembly
//! ```rust
//! use courier_kernel::{Assembler, contracts::NoopRecipient, domain::capability::CapabilitySet};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assembler = Assembler::new(Default::default());
//! let mut assembly = assembler.begin()?;
//! assembly.require(CapabilitySet::NOTIFY);
//!
//! let doorbell = assembly.sender::<String>("doorbell");
//! assembly.bind_recipient(&doorbell, Arc::new(NoopRecipient));
//! assert!(doorbell.send("ring".to_owned()).await.is_err()); // not assembled yet
//!
//! let graph = assembly.finish()?;
//! assert!(graph.is_bound(CapabilitySet::NOTIFY));
//! doorbell.send("ring".to_owned()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use courier_kernel::config::load_config;
//! let cfg: courier_kernel::domain::config::CourierConfig = load_config(Some("config/courier")).unwrap();
//! ```
mod assembler;
pub mod config;
mod error;
mod gate;
mod graph;
mod reporter;
mod sender;

pub use assembler::{Assembler, Assembly};
pub use error::{AssemblyError, AssemblyErrorExt, SendError, SendErrorExt};
pub use gate::{AssemblyGate, AssemblyState};
pub use graph::{AssemblyGraph, Binding};
pub use sender::Sender;

pub use courier_contracts as contracts;
pub use courier_dispatch as dispatch;
pub use courier_domain as domain;
pub use courier_factory as factory;
pub use courier_registry as registry;
