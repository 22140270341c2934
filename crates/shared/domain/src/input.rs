//! Raw, discriminated input fed to factories.
//!
//! A [`RawInput`] is an opaque, ordered mapping of fields. One of them, named by
//! [`DISCRIMINATOR_FIELD`], tells a factory which concrete type to produce.

use crate::constants::DISCRIMINATOR_FIELD;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Opaque field mapping with an embedded discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawInput {
    fields: BTreeMap<String, String>,
}

impl RawInput {
    /// Creates input tagged with the given discriminator.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self::default().with_field(DISCRIMINATOR_FIELD, kind)
    }

    /// Creates input without a discriminator (useful to exercise rejection paths).
    #[must_use]
    pub fn untagged() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The discriminator value, if present.
    #[must_use]
    pub fn discriminator(&self) -> Option<&str> {
        self.field(DISCRIMINATOR_FIELD)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Scalar values accepted from external sources; everything is normalized to text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for RawInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = BTreeMap::<String, Scalar>::deserialize(deserializer)?;
        Ok(fields.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_discriminator() {
        let input = RawInput::new("reading").with_field("celsius", "21.5");
        assert_eq!(input.discriminator(), Some("reading"));
        assert_eq!(input.field("celsius"), Some("21.5"));
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn untagged_has_no_discriminator() {
        assert!(RawInput::untagged().discriminator().is_none());
    }

    #[test]
    fn deserializes_mixed_scalars_as_text() {
        let input: RawInput =
            serde_json::from_str(r#"{"kind":"reading","celsius":21.5,"sensor":"hall","ok":true}"#)
                .expect("raw input should deserialize");
        assert_eq!(input.discriminator(), Some("reading"));
        assert_eq!(input.field("celsius"), Some("21.5"));
        assert_eq!(input.field("ok"), Some("true"));
    }

    #[test]
    fn keeps_integers_beyond_i64_exact() {
        let input: RawInput =
            serde_json::from_str(r#"{"kind":"counter","total":18446744073709551615,"delta":-3}"#)
                .expect("raw input should deserialize");
        assert_eq!(input.field("total"), Some("18446744073709551615"));
        assert_eq!(input.field("delta"), Some("-3"));
    }

    #[test]
    fn rejects_nested_values() {
        let result = serde_json::from_str::<RawInput>(r#"{"kind":{"nested":1}}"#);
        assert!(result.is_err());
    }
}
