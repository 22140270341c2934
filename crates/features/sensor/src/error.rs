use courier_kernel::contracts::FactoryError;
use courier_kernel::{AssemblyError, SendError};
use std::borrow::Cow;

#[courier_derive::courier_error]
pub enum SensorError {
    /// Raw input did not describe a known signal.
    #[error("Sensor input rejected{}: {source}", format_context(.context))]
    Input { source: FactoryError, context: Option<Cow<'static, str>> },

    #[error("Sensor update not delivered{}: {source}", format_context(.context))]
    Send { source: SendError, context: Option<Cow<'static, str>> },

    #[error("Sensor wiring failed{}: {source}", format_context(.context))]
    Assembly { source: AssemblyError, context: Option<Cow<'static, str>> },
}
