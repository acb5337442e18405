// models/src/fields.rs

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::errors::{ValidationError, ValidationResult};

/// Raw, untyped input as submitted by a form or command line: field name to text.
///
/// The typed `New*` records are built from this and do all coercion and
/// validation at that boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, builder style.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Sets a field only when a value is present.
    pub fn insert_opt(&mut self, key: &str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Trimmed value of an optional free-text field; empty when absent.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Trimmed value of a required field.
    pub fn required(&self, key: &str) -> ValidationResult<String> {
        let value = self.text(key);
        if value.is_empty() {
            return Err(ValidationError::MissingField(key.to_string()));
        }
        Ok(value)
    }

    /// Required field parsed as a number.
    pub fn required_number<T: FromStr>(&self, key: &str) -> ValidationResult<T> {
        let raw = self.required(key)?;
        raw.parse::<T>()
            .map_err(|_| ValidationError::InvalidNumber(key.to_string(), raw))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Non-empty email addresses must at least look like one.
pub fn check_email(value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_and_require_fields() {
        let fields = FormFields::new().with("name", "  Ann ").with("blank", "   ");
        assert_eq!(fields.required("name").unwrap(), "Ann");
        assert_eq!(
            fields.required("blank").unwrap_err(),
            ValidationError::MissingField("blank".to_string())
        );
        assert_eq!(fields.text("absent"), "");
    }

    #[test]
    fn should_reject_non_numeric_input() {
        let fields: FormFields = [("age", "thirty")].into_iter().collect();
        assert_eq!(
            fields.required_number::<u32>("age").unwrap_err(),
            ValidationError::InvalidNumber("age".to_string(), "thirty".to_string())
        );
    }

    #[test]
    fn should_check_email_shape() {
        assert!(check_email("").is_ok());
        assert!(check_email("ann@clinic.com").is_ok());
        assert!(check_email("ann.clinic.com").is_err());
        assert!(check_email("@clinic.com").is_err());
    }
}
