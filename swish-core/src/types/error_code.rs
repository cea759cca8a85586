use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// An error code reported by the gateway, e.g. `FF08`.
///
/// Kept as an open string: codes not listed in [`KnownErrorCode`] still
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub String);

/// Error codes documented by the gateway for payment requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownErrorCode {
    /// `FF08`
    InvalidPayeePaymentReference,
    /// `RP03`
    InvalidCallbackUrl,
    /// `BE18`
    InvalidPayerAlias,
    /// `RP01`
    MissingPayeeAlias,
    /// `PA02`
    InvalidAmount,
    /// `AM02`
    AmountTooLarge,
    /// `AM03`
    InvalidCurrency,
    /// `AM06`
    AmountTooSmall,
    /// `RP02`
    InvalidMessage,
    /// `RP06`
    DuplicatePaymentRequest,
    /// `ACMT03`
    PayerNotEnrolled,
    /// `ACMT01`
    CounterpartNotActivated,
    /// `ACMT07`
    PayeeNotEnrolled,
    /// `RF07`
    TransactionDeclined,
    /// `FF10`
    BankSystemError,
    /// `TA02`
    PayerAmountLimitExceeded,
}

impl KnownErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownErrorCode::InvalidPayeePaymentReference => "FF08",
            KnownErrorCode::InvalidCallbackUrl => "RP03",
            KnownErrorCode::InvalidPayerAlias => "BE18",
            KnownErrorCode::MissingPayeeAlias => "RP01",
            KnownErrorCode::InvalidAmount => "PA02",
            KnownErrorCode::AmountTooLarge => "AM02",
            KnownErrorCode::InvalidCurrency => "AM03",
            KnownErrorCode::AmountTooSmall => "AM06",
            KnownErrorCode::InvalidMessage => "RP02",
            KnownErrorCode::DuplicatePaymentRequest => "RP06",
            KnownErrorCode::PayerNotEnrolled => "ACMT03",
            KnownErrorCode::CounterpartNotActivated => "ACMT01",
            KnownErrorCode::PayeeNotEnrolled => "ACMT07",
            KnownErrorCode::TransactionDeclined => "RF07",
            KnownErrorCode::BankSystemError => "FF10",
            KnownErrorCode::PayerAmountLimitExceeded => "TA02",
        }
    }

    /// Human readable explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            KnownErrorCode::InvalidPayeePaymentReference => "PayeePaymentReference is invalid",
            KnownErrorCode::InvalidCallbackUrl => "Callback URL is missing or does not use HTTPS",
            KnownErrorCode::InvalidPayerAlias => "Payer alias is invalid",
            KnownErrorCode::MissingPayeeAlias => "Missing merchant Swish number",
            KnownErrorCode::InvalidAmount => "Amount value is missing or not a valid number",
            KnownErrorCode::AmountTooLarge => "Amount value is too large",
            KnownErrorCode::InvalidCurrency => "Invalid or missing currency",
            KnownErrorCode::AmountTooSmall => "Specified transaction amount is less than the agreed minimum",
            KnownErrorCode::InvalidMessage => "Message is too long or contains invalid characters",
            KnownErrorCode::DuplicatePaymentRequest => "A payment request already exists for that payer",
            KnownErrorCode::PayerNotEnrolled => "Payer not enrolled",
            KnownErrorCode::CounterpartNotActivated => "Counterpart is not activated",
            KnownErrorCode::PayeeNotEnrolled => "Payee not enrolled",
            KnownErrorCode::TransactionDeclined => "Transaction declined",
            KnownErrorCode::BankSystemError => "Bank system processing error",
            KnownErrorCode::PayerAmountLimitExceeded => "Transaction amount exceeds the amount the payer may pay",
        }
    }
}

impl FromStr for KnownErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s {
            "FF08" => KnownErrorCode::InvalidPayeePaymentReference,
            "RP03" => KnownErrorCode::InvalidCallbackUrl,
            "BE18" => KnownErrorCode::InvalidPayerAlias,
            "RP01" => KnownErrorCode::MissingPayeeAlias,
            "PA02" => KnownErrorCode::InvalidAmount,
            "AM02" => KnownErrorCode::AmountTooLarge,
            "AM03" => KnownErrorCode::InvalidCurrency,
            "AM06" => KnownErrorCode::AmountTooSmall,
            "RP02" => KnownErrorCode::InvalidMessage,
            "RP06" => KnownErrorCode::DuplicatePaymentRequest,
            "ACMT03" => KnownErrorCode::PayerNotEnrolled,
            "ACMT01" => KnownErrorCode::CounterpartNotActivated,
            "ACMT07" => KnownErrorCode::PayeeNotEnrolled,
            "RF07" => KnownErrorCode::TransactionDeclined,
            "FF10" => KnownErrorCode::BankSystemError,
            "TA02" => KnownErrorCode::PayerAmountLimitExceeded,
            _ => return Err(()),
        };
        Ok(code)
    }
}

impl ErrorCode {
    /// Look the code up among the documented values.
    pub fn known(&self) -> Option<KnownErrorCode> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        ErrorCode(code.to_string())
    }
}

impl From<KnownErrorCode> for ErrorCode {
    fn from(code: KnownErrorCode) -> Self {
        ErrorCode(code.as_str().to_string())
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, KnownErrorCode};

    #[test]
    fn test_error_code_lookup() {
        let code = ErrorCode::from("FF08");
        assert_eq!(code.known(), Some(KnownErrorCode::InvalidPayeePaymentReference));
        assert_eq!(ErrorCode::from(KnownErrorCode::AmountTooLarge).as_str(), "AM02");
        assert_eq!(ErrorCode::from("XX99").known(), None);
    }
}
