use courier_contracts::{Factory, FactoryError};
use courier_domain::constants::DISCRIMINATOR_FIELD;
use courier_domain::input::RawInput;
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Builds one concrete product from raw input.
pub type Constructor<P> = Arc<dyn Fn(&RawInput) -> Result<Box<P>, FactoryError> + Send + Sync>;

/// Discriminator → constructor lookup table.
pub struct FactoryTable<P: ?Sized> {
    label: Cow<'static, str>,
    constructors: FxHashMap<Cow<'static, str>, Constructor<P>>,
    order: Vec<Cow<'static, str>>,
}

impl<P: ?Sized> fmt::Debug for FactoryTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryTable")
            .field("label", &self.label)
            .field("kinds", &self.order)
            .finish_non_exhaustive()
    }
}

impl<P: ?Sized> Clone for FactoryTable<P> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            constructors: self.constructors.clone(),
            order: self.order.clone(),
        }
    }
}

impl<P: ?Sized> FactoryTable<P> {
    #[must_use]
    pub fn builder(label: impl Into<Cow<'static, str>>) -> FactoryTableBuilder<P> {
        FactoryTableBuilder { label: label.into(), entries: Vec::new() }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Checks that every `expected` discriminator has a constructor.
    ///
    /// # Errors
    /// [`FactoryError::MissingKinds`] listing the discriminators nobody can build.
    pub fn ensure_kinds(&self, expected: &[&str]) -> Result<(), FactoryError> {
        let missing: Vec<Cow<'static, str>> = expected
            .iter()
            .filter(|kind| !self.constructors.contains_key(**kind))
            .map(|kind| Cow::Owned((*kind).to_owned()))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FactoryError::MissingKinds { kinds: missing, context: Some(self.label.clone()) })
        }
    }
}

impl<P: ?Sized> Factory<P> for FactoryTable<P> {
    fn create_from(&self, input: &RawInput) -> Result<Box<P>, FactoryError> {
        let kind = input.discriminator().ok_or_else(|| FactoryError::MissingDiscriminator {
            field: DISCRIMINATOR_FIELD.into(),
            context: Some(self.label.clone()),
        })?;

        let constructor = self.constructors.get(kind).ok_or_else(|| {
            FactoryError::UnrecognizedInputKind {
                kind: Cow::Owned(kind.to_owned()),
                context: Some(self.label.clone()),
            }
        })?;

        trace!(factory = %self.label, kind, "Creating product");
        constructor(input)
    }

    fn kinds(&self) -> Vec<Cow<'static, str>> {
        self.order.clone()
    }

    fn knows(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }
}

/// Collects constructors for a [`FactoryTable`].
pub struct FactoryTableBuilder<P: ?Sized> {
    label: Cow<'static, str>,
    entries: Vec<(Cow<'static, str>, Constructor<P>)>,
}

impl<P: ?Sized> fmt::Debug for FactoryTableBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryTableBuilder")
            .field("label", &self.label)
            .field("kinds", &self.entries.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

impl<P: ?Sized> FactoryTableBuilder<P> {
    /// Registers the constructor for one discriminator value.
    #[must_use]
    pub fn kind<F>(mut self, kind: impl Into<Cow<'static, str>>, constructor: F) -> Self
    where
        F: Fn(&RawInput) -> Result<Box<P>, FactoryError> + Send + Sync + 'static,
    {
        self.entries.push((kind.into(), Arc::new(constructor)));
        self
    }

    /// # Errors
    /// [`FactoryError::DuplicateKind`] when a discriminator was registered twice.
    pub fn build(self) -> Result<FactoryTable<P>, FactoryError> {
        let mut constructors = FxHashMap::default();
        let mut order = Vec::with_capacity(self.entries.len());

        for (kind, constructor) in self.entries {
            if constructors.insert(kind.clone(), constructor).is_some() {
                return Err(FactoryError::DuplicateKind { kind, context: Some(self.label) });
            }
            order.push(kind);
        }

        debug!(factory = %self.label, kinds = order.len(), "Factory table built");
        Ok(FactoryTable { label: self.label, constructors, order })
    }
}
