use courier_contracts::FactoryError;
use courier_domain::input::RawInput;
use std::fmt::Display;
use std::str::FromStr;

/// Field accessors for constructors.
pub trait RawInputExt {
    /// # Errors
    /// [`FactoryError::InvalidField`] when the field is absent.
    fn required(&self, field: &'static str) -> Result<&str, FactoryError>;

    /// # Errors
    /// [`FactoryError::InvalidField`] when the field is absent or does not parse as `T`.
    fn parsed<T>(&self, field: &'static str) -> Result<T, FactoryError>
    where
        T: FromStr,
        T::Err: Display;
}

impl RawInputExt for RawInput {
    fn required(&self, field: &'static str) -> Result<&str, FactoryError> {
        self.field(field).ok_or_else(|| FactoryError::invalid_field(field, "field is required"))
    }

    fn parsed<T>(&self, field: &'static str) -> Result<T, FactoryError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.required(field)?
            .trim()
            .parse()
            .map_err(|err: T::Err| FactoryError::invalid_field(field, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_invalid() {
        let err = RawInput::new("reading").required("celsius").unwrap_err();
        assert!(matches!(err, FactoryError::InvalidField { ref field, .. } if field == "celsius"));
    }

    #[test]
    fn parses_trimmed_values() {
        let input = RawInput::new("reading").with_field("celsius", " 21.5 ");
        assert!((input.parsed::<f64>("celsius").unwrap() - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unparsable_value_keeps_the_reason() {
        let input = RawInput::new("reading").with_field("celsius", "warm");
        let err = input.parsed::<f64>("celsius").unwrap_err();
        assert!(err.to_string().contains("celsius"));
        assert_eq!(err.kind(), "InvalidField");
    }
}
