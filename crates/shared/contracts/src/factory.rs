use crate::error::FactoryError;
use courier_domain::input::RawInput;
use std::borrow::Cow;
use std::fmt::Debug;

/// The `create_from` capability.
///
/// `P` is the capability the products satisfy (usually a `dyn Trait`); callers
/// only ever see `Box<P>`, never the concrete type that was chosen.
pub trait Factory<P: ?Sized>: Debug + Send + Sync {
    /// Builds the instance selected by the discriminator embedded in `input`.
    ///
    /// # Errors
    /// Returns [`FactoryError::UnrecognizedInputKind`] for an unknown discriminator,
    /// [`FactoryError::MissingDiscriminator`] when there is none, or whatever the
    /// selected constructor reports for malformed fields.
    fn create_from(&self, input: &RawInput) -> Result<Box<P>, FactoryError>;

    /// Discriminator values this factory can build, in registration order.
    fn kinds(&self) -> Vec<Cow<'static, str>>;

    fn knows(&self, kind: &str) -> bool {
        self.kinds().iter().any(|k| k == kind)
    }
}
