use super::assembly::AssemblyError;
use courier_contracts::DispatchError;
use std::borrow::Cow;

#[courier_derive::courier_error]
pub enum SendError {
    #[error("Send refused{}: {source}", format_context(.context))]
    Assembly { source: AssemblyError, context: Option<Cow<'static, str>> },

    #[error("Send failed{}: {source}", format_context(.context))]
    Dispatch { source: DispatchError, context: Option<Cow<'static, str>> },
}
