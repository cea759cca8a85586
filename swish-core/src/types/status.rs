use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Status of a payment request as reported by the gateway.
///
/// The gateway owns this enumeration and may introduce new values at any
/// time, so the raw string is kept as-is. Use [`PaymentStatus::known`] to
/// match on the documented values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentStatus(pub String);

/// The payment statuses documented by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownPaymentStatus {
    Created,
    Paid,
    Declined,
    Error,
    Cancelled,
}

impl KnownPaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownPaymentStatus::Created => "CREATED",
            KnownPaymentStatus::Paid => "PAID",
            KnownPaymentStatus::Declined => "DECLINED",
            KnownPaymentStatus::Error => "ERROR",
            KnownPaymentStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for KnownPaymentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(KnownPaymentStatus::Created),
            "PAID" => Ok(KnownPaymentStatus::Paid),
            "DECLINED" => Ok(KnownPaymentStatus::Declined),
            "ERROR" => Ok(KnownPaymentStatus::Error),
            "CANCELLED" => Ok(KnownPaymentStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl PaymentStatus {
    /// Look the status up among the documented values.
    pub fn known(&self) -> Option<KnownPaymentStatus> {
        self.0.parse().ok()
    }

    /// Whether the payment has reached a documented terminal state.
    ///
    /// Unknown statuses are never considered final.
    pub fn is_final(&self) -> bool {
        matches!(
            self.known(),
            Some(
                KnownPaymentStatus::Paid
                    | KnownPaymentStatus::Declined
                    | KnownPaymentStatus::Error
                    | KnownPaymentStatus::Cancelled
            )
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<KnownPaymentStatus> for PaymentStatus {
    fn from(status: KnownPaymentStatus) -> Self {
        PaymentStatus(status.as_str().to_string())
    }
}

impl From<&str> for PaymentStatus {
    fn from(status: &str) -> Self {
        PaymentStatus(status.to_string())
    }
}

impl PartialEq<KnownPaymentStatus> for PaymentStatus {
    fn eq(&self, other: &KnownPaymentStatus) -> bool {
        self.0 == other.as_str()
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{KnownPaymentStatus, PaymentStatus};

    #[test]
    fn test_known_status_lookup() {
        let status: PaymentStatus = serde_json::from_value(json!("PAID")).unwrap();
        assert_eq!(status.known(), Some(KnownPaymentStatus::Paid));
        assert_eq!(status, KnownPaymentStatus::Paid);
        assert!(status.is_final());

        let created = PaymentStatus::from(KnownPaymentStatus::Created);
        assert_eq!(created.as_str(), "CREATED");
        assert!(!created.is_final());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: PaymentStatus = serde_json::from_value(json!("PENDING_REVIEW")).unwrap();
        assert_eq!(status.known(), None);
        assert!(!status.is_final());
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("PENDING_REVIEW"));
    }
}
