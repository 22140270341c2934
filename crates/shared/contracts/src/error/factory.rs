use std::borrow::Cow;

/// Errors raised while turning raw input into a capability instance.
#[courier_derive::courier_error]
pub enum FactoryError {
    /// The discriminator matches no registered concrete type.
    #[error("Unrecognized input kind `{kind}`{}", format_context(.context))]
    UnrecognizedInputKind { kind: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The input carries no discriminator at all.
    #[error("Missing discriminator field `{field}`{}", format_context(.context))]
    MissingDiscriminator { field: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A constructor found a required field absent or malformed.
    #[error("Invalid field `{field}`{}: {message}", format_context(.context))]
    InvalidField {
        field: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Two constructors were registered for the same discriminator.
    #[error("Duplicate input kind `{kind}`{}", format_context(.context))]
    DuplicateKind { kind: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Assembly expected discriminators the factory cannot build.
    #[error("Factory cannot build kinds [{}]{}", .kinds.join(", "), format_context(.context))]
    MissingKinds { kinds: Vec<Cow<'static, str>>, context: Option<Cow<'static, str>> },
}

impl FactoryError {
    pub fn unrecognized(kind: impl Into<Cow<'static, str>>) -> Self {
        Self::UnrecognizedInputKind { kind: kind.into(), context: None }
    }

    pub fn invalid_field(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidField { field: field.into(), message: message.into(), context: None }
    }
}
