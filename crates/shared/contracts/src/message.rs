use std::any::Any;
use std::fmt::Debug;

/// Marker trait for payloads a sender can hand to its recipients.
///
/// Any type that is `Debug + Send + Sync + 'static` automatically implements this trait.
pub trait Message: Any + Debug + Send + Sync + 'static {}
impl<T: Any + Debug + Send + Sync + 'static> Message for T {}
