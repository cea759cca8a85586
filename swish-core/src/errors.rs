use std::fmt::Display;

/// A required payment request field, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    PayeeAlias,
    Amount,
    Currency,
    CallbackUrl,
}

impl RequiredField {
    /// The JSON field name used on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RequiredField::PayeeAlias => "payeeAlias",
            RequiredField::Amount => "amount",
            RequiredField::Currency => "currency",
            RequiredField::CallbackUrl => "callbackUrl",
        }
    }
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Pre-flight validation failure of a payment request.
///
/// Raised before anything is serialized or sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Pre-validation of payment request failed: field {field} is required")]
pub struct ValidationError {
    /// The first missing or invalid field.
    pub field: RequiredField,
}

impl From<RequiredField> for ValidationError {
    fn from(field: RequiredField) -> Self {
        ValidationError { field }
    }
}
