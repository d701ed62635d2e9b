//! The `EmailAddress` custom scalar.
//!
//! Values of this type are checked against the usual `local-part@domain`
//! address grammar whenever they enter the schema (document literals and
//! variables) and whenever they leave it (response serialization).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use regex::Regex;
use thiserror::Error;

/// Local part from the printable ASCII set, domain made of dot-separated
/// labels of 1-63 alphanumerics/hyphens that neither start nor end with `-`.
static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Value is not string: {0}")]
    NotString(String),

    #[error("Value is not a valid email address: {0}")]
    InvalidEmail(String),

    #[error("Query error: Can only parse strings as email addresses but got a: {0}")]
    UnexpectedLiteral(&'static str),
}

/// The serialize / parse-value / parse-literal triple of a custom scalar.
pub trait CustomScalar: Sized {
    /// Checks an outgoing value and returns it unchanged. Called from
    /// `ScalarType::to_value` on every response value of the type.
    fn serialize(value: &Value) -> Result<Value, ValidationError>;

    /// Parses a runtime input value (e.g. a variable).
    fn parse_value(value: &Value) -> Result<Self, ValidationError>;

    /// Parses a literal written in a query document.
    fn parse_literal(literal: &Value) -> Result<Self, ValidationError>;
}

/// Returns the address unchanged if `value` is a string in address syntax.
pub fn validate(value: &Value) -> Result<&str, ValidationError> {
    let Value::String(s) = value else {
        return Err(ValidationError::NotString(value.to_string()));
    };
    validate_str(s)
}

pub fn validate_str(s: &str) -> Result<&str, ValidationError> {
    if EMAIL_ADDRESS_REGEX.is_match(s) {
        Ok(s)
    } else {
        Err(ValidationError::InvalidEmail(s.to_string()))
    }
}

/// GraphQL literal kind name for a value, as printed in error messages.
pub fn literal_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "NullValue",
        Value::Number(n) if n.is_f64() => "FloatValue",
        Value::Number(_) => "IntValue",
        Value::String(_) => "StringValue",
        Value::Boolean(_) => "BooleanValue",
        Value::Binary(_) => "BinaryValue",
        Value::Enum(_) => "EnumValue",
        Value::List(_) => "ListValue",
        Value::Object(_) => "ObjectValue",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_str(s).map(|s| Self(s.to_string()))
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl CustomScalar for EmailAddress {
    fn serialize(value: &Value) -> Result<Value, ValidationError> {
        validate(value).map(|s| Value::String(s.to_string()))
    }

    fn parse_value(value: &Value) -> Result<Self, ValidationError> {
        validate(value).map(|s| Self(s.to_string()))
    }

    fn parse_literal(literal: &Value) -> Result<Self, ValidationError> {
        if !matches!(literal, Value::String(_)) {
            return Err(ValidationError::UnexpectedLiteral(literal_kind(literal)));
        }
        Self::parse_value(literal)
    }
}

/// A field whose value conforms to the standard internet email address format
#[Scalar(name = "EmailAddress")]
impl ScalarType for EmailAddress {
    /// Literals and variables both arrive here as resolved values, after
    /// document validation. Errors carry the scalar's own message.
    fn parse(value: Value) -> InputValueResult<Self> {
        <Self as CustomScalar>::parse_literal(&value).map_err(InputValueError::custom)
    }

    fn to_value(&self) -> Value {
        let value = Value::String(self.0.clone());
        match <Self as CustomScalar>::serialize(&value) {
            Ok(value) => value,
            Err(e) => {
                // Only reachable if an unvalidated address was constructed.
                tracing::error!("{}", e);
                Value::Null
            }
        }
    }
}
