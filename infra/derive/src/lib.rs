#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the courier crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! courier-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant wrapping a source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants made of exactly a
///   `source` field and a `context` field, so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
/// * **Kind**: `kind(&self) -> &'static str` returns the variant name, for structured logs.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with **named-field** variants.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source (`source` field, `#[source]` or `#[from]`) must carry `context`.
///
/// Only one `#[courier_error]` enum may live in a module: the macro emits a
/// module-level `format_context` helper used in the `#[error(...)]` strings.
///
/// # Example
///
/// ```rust,ignore
/// use courier_derive::courier_error;
/// use std::borrow::Cow;
///
/// #[courier_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<(), ConfigError> {
///     builder.build().context("Building layered config")?;
///     Err("unreachable".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn courier_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
