use crate::gate::AssemblyState;
use courier_contracts::FactoryError;
use courier_domain::capability::CapabilitySet;
use std::borrow::Cow;

#[courier_derive::courier_error]
pub enum AssemblyError {
    /// A sender was used before the composition root finished wiring.
    #[error("Sender `{sender}` used before composition completed (state: {state}){}", format_context(.context))]
    NotYetComposed {
        sender: Cow<'static, str>,
        state: AssemblyState,
        context: Option<Cow<'static, str>>,
    },

    /// Assembly runs once per assembler.
    #[error("Assembly already started (state: {state}){}", format_context(.context))]
    AlreadyStarted { state: AssemblyState, context: Option<Cow<'static, str>> },

    /// Required capabilities were left unbound.
    #[error("Assembly incomplete{}: unbound capabilities [{missing}]", format_context(.context))]
    Incomplete { missing: CapabilitySet, context: Option<Cow<'static, str>> },

    #[error("Factory binding failed{}: {source}", format_context(.context))]
    Factory { source: FactoryError, context: Option<Cow<'static, str>> },
}
