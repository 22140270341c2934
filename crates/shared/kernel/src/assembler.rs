use crate::error::AssemblyError;
use crate::gate::{AssemblyGate, AssemblyState};
use crate::graph::{AssemblyGraph, Binding};
use crate::reporter::SharedReporter;
use crate::sender::Sender;
use courier_contracts::{Factory, FactoryError, Message, Recipient, Reporter};
use courier_dispatch::Dispatcher;
use courier_domain::capability::CapabilitySet;
use courier_domain::config::CourierConfig;
use courier_registry::RecipientRegistry;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Composition root.
///
/// Owns the [`AssemblyGate`] shared with every sender and hands out exactly one
/// [`Assembly`] session.
#[derive(Debug)]
pub struct Assembler {
    config: CourierConfig,
    gate: AssemblyGate,
}

impl Assembler {
    #[must_use]
    pub fn new(config: CourierConfig) -> Self {
        Self { config, gate: AssemblyGate::default() }
    }

    #[must_use]
    pub fn gate(&self) -> AssemblyGate {
        self.gate.clone()
    }

    #[must_use]
    pub fn state(&self) -> AssemblyState {
        self.gate.state()
    }

    /// Starts the one and only wiring session.
    ///
    /// # Errors
    /// [`AssemblyError::AlreadyStarted`] on any call after the first.
    pub fn begin(&self) -> Result<Assembly, AssemblyError> {
        self.gate
            .advance(AssemblyState::Unassembled, AssemblyState::Assembling)
            .map_err(|state| AssemblyError::AlreadyStarted { state, context: None })?;

        info!("Assembly started");
        Ok(Assembly {
            config: self.config.clone(),
            gate: self.gate.clone(),
            reporter: Arc::new(SharedReporter::default()),
            required: CapabilitySet::empty(),
            bound: CapabilitySet::empty(),
            bindings: Vec::new(),
        })
    }
}

/// A wiring session. Senders are created here, recipients, factories and the
/// reporter are bound here, and [`Assembly::finish`] opens the gate.
#[derive(Debug)]
pub struct Assembly {
    config: CourierConfig,
    gate: AssemblyGate,
    reporter: Arc<SharedReporter>,
    required: CapabilitySet,
    bound: CapabilitySet,
    bindings: Vec<Binding>,
}

impl Assembly {
    #[must_use]
    pub const fn config(&self) -> &CourierConfig {
        &self.config
    }

    #[must_use]
    pub fn gate(&self) -> AssemblyGate {
        self.gate.clone()
    }

    /// The failure sink of this assembly, for dispatchers built by hand.
    ///
    /// Forwards to whatever [`Assembly::bind_reporter`] binds, before or after this call.
    #[must_use]
    pub fn reporter(&self) -> Arc<dyn Reporter> {
        self.reporter.clone()
    }

    /// Declares capabilities that must be bound before [`Assembly::finish`] succeeds.
    pub fn require(&mut self, capabilities: CapabilitySet) -> &mut Self {
        self.required |= capabilities;
        self
    }

    /// Sets the sink every dispatcher of this assembly reports failures to.
    pub fn bind_reporter(&mut self, reporter: Arc<dyn Reporter>) -> &mut Self {
        let implementation = reporter.name();
        self.reporter.bind(reporter);
        self.record("*", CapabilitySet::REPORT, implementation);
        self
    }

    /// Creates a sender whose registry and dispatcher follow the configuration.
    pub fn sender<M: Message>(&mut self, name: impl Into<Cow<'static, str>>) -> Sender<M> {
        let dispatcher = courier_dispatch::from_config(&self.config.dispatch, self.reporter());
        self.sender_with(name, dispatcher)
    }

    /// Creates a sender with an explicit dispatcher; the registry still follows the configuration.
    pub fn sender_with<M: Message>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        dispatcher: Arc<dyn Dispatcher<M>>,
    ) -> Sender<M> {
        let name = name.into();
        let registry = RecipientRegistry::new(self.config.registry.policy);
        debug!(sender = %name, mode = ?dispatcher.mode(), policy = ?registry.policy(), "Sender created");
        Sender::new(name, self.gate.clone(), registry, dispatcher)
    }

    /// Registers `recipient` with `sender` and records the binding.
    pub fn bind_recipient<M: Message>(
        &mut self,
        sender: &Sender<M>,
        recipient: Arc<dyn Recipient<M>>,
    ) -> usize {
        let implementation = recipient.name();
        let count = sender.register(recipient);
        self.record(sender.name().to_owned(), CapabilitySet::NOTIFY, implementation);
        count
    }

    /// Records `factory` as the creator for `owner`, after checking it can build every
    /// discriminator in `expected`.
    ///
    /// # Errors
    /// [`AssemblyError::Factory`] wrapping `MissingKinds` when some are not covered.
    pub fn bind_factory<P, F>(
        &mut self,
        owner: impl Into<Cow<'static, str>>,
        factory: &F,
        expected: &[&str],
    ) -> Result<&mut Self, AssemblyError>
    where
        P: ?Sized,
        F: Factory<P> + ?Sized,
    {
        let owner = owner.into();
        let missing: Vec<Cow<'static, str>> = expected
            .iter()
            .filter(|kind| !factory.knows(kind))
            .map(|kind| Cow::Owned((*kind).to_owned()))
            .collect();
        if !missing.is_empty() {
            return Err(AssemblyError::Factory {
                source: FactoryError::MissingKinds { kinds: missing, context: None },
                context: Some(owner),
            });
        }

        let implementation = format!("factory[{}]", factory.kinds().join(", "));
        self.record(owner, CapabilitySet::CREATE, implementation);
        Ok(self)
    }

    /// Checks every required capability is bound and opens the gate.
    ///
    /// # Errors
    /// [`AssemblyError::Incomplete`] naming the unbound capabilities. The gate then
    /// stays `Assembling` and every sender keeps refusing to dispatch.
    pub fn finish(self) -> Result<AssemblyGraph, AssemblyError> {
        let missing = self.required.difference(self.bound);
        if !missing.is_empty() {
            warn!(%missing, "Assembly incomplete");
            return Err(AssemblyError::Incomplete { missing, context: None });
        }

        self.gate
            .advance(AssemblyState::Assembling, AssemblyState::Assembled)
            .map_err(|state| AssemblyError::AlreadyStarted { state, context: None })?;

        info!(bindings = self.bindings.len(), capabilities = %self.bound, "Assembly finished");
        Ok(AssemblyGraph::new(self.bindings, self.bound))
    }

    fn record(
        &mut self,
        sender: impl Into<Cow<'static, str>>,
        capability: CapabilitySet,
        implementation: impl Into<Cow<'static, str>>,
    ) {
        let binding = Binding {
            sender: sender.into(),
            capability,
            implementation: implementation.into(),
        };
        debug!(sender = %binding.sender, capability = %capability, implementation = %binding.implementation, "Bound");
        self.bound |= capability;
        self.bindings.push(binding);
    }
}
