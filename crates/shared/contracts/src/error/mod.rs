//! Error kinds shared across the workspace.
//!
//! One `#[courier_error]` enum per module: the macro emits a module-level
//! `format_context` helper.

mod dispatch;
mod factory;
mod recipient;

pub use dispatch::{CompositeDispatchFailure, DispatchError, DispatchErrorExt, RecipientFailure};
pub use factory::{FactoryError, FactoryErrorExt};
pub use recipient::{RecipientError, RecipientErrorExt};
