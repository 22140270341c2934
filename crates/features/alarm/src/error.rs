use courier_kernel::SendError;
use courier_kernel::contracts::DispatchError;
use std::borrow::Cow;

#[courier_derive::courier_error]
pub enum AlarmError {
    #[error("Alarm could not be raised{}: {source}", format_context(.context))]
    Send { source: SendError, context: Option<Cow<'static, str>> },

    #[error("Alarm responders could not be grouped{}: {source}", format_context(.context))]
    Wiring { source: DispatchError, context: Option<Cow<'static, str>> },
}
