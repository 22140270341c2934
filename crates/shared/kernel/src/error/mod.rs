mod assembly;
mod send;

pub use assembly::{AssemblyError, AssemblyErrorExt};
pub use send::{SendError, SendErrorExt};
