//! Contact scalars
//!
//! Output values come straight from stored rows. Input values are checked
//! for a plausible shape, not deliverability.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};

/// An email address such as `ada@example.com`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(pub String);

impl EmailAddress {
    pub fn new(raw: &str) -> Option<Self> {
        let (local, domain) = raw.split_once('@')?;
        let plausible = !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !raw.contains(char::is_whitespace);
        plausible.then(|| Self(raw.to_string()))
    }
}

#[Scalar]
impl ScalarType for EmailAddress {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(raw) => EmailAddress::new(raw)
                .ok_or_else(|| InputValueError::custom(format!("Invalid email address: {}", raw))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

/// A phone number such as `+1 555 0100`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    /// Digits with optional separators and a leading `+`; at least 7 digits
    pub fn new(raw: &str) -> Option<Self> {
        let body = raw.strip_prefix('+').unwrap_or(raw);
        let allowed = body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'));
        let digits = body.chars().filter(char::is_ascii_digit).count();
        (allowed && digits >= 7).then(|| Self(raw.to_string()))
    }
}

#[Scalar]
impl ScalarType for PhoneNumber {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(raw) => PhoneNumber::new(raw)
                .ok_or_else(|| InputValueError::custom(format!("Invalid phone number: {}", raw))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}
