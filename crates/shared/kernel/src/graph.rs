use courier_domain::capability::CapabilitySet;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::Arc;

/// One wiring decision: which implementation answers which capability for which sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub sender: Cow<'static, str>,
    pub capability: CapabilitySet,
    pub implementation: Cow<'static, str>,
}

/// The wiring produced by a finished assembly. Immutable and cheap to clone.
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyGraph {
    bindings: Arc<[Binding]>,
    capabilities: CapabilitySet,
}

impl AssemblyGraph {
    pub(crate) fn new(bindings: Vec<Binding>, capabilities: CapabilitySet) -> Self {
        Self { bindings: bindings.into(), capabilities }
    }

    /// Bindings in the order they were made.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[must_use]
    pub const fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    #[must_use]
    pub const fn is_bound(&self, capabilities: CapabilitySet) -> bool {
        self.capabilities.contains(capabilities)
    }

    pub fn for_sender<'a>(&'a self, sender: &'a str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |binding| binding.sender == sender)
    }
}
