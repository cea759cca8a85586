//! [`Amount`] represents the amount of a payment request.
//!
//! This module holds its type definition and implementations.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment amount in major currency units, e.g. `100.50` SEK.
///
/// Sent to the gateway as a decimal string. Decoding accepts both strings and
/// JSON numbers, since the gateway echoes amounts back as numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(pub Decimal);

impl Amount {
    /// Whether the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount(Decimal::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Amount)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer).map(Amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::Amount;

    #[test]
    fn test_amount_serializes_as_string() {
        let amount = Amount(dec!(100.50));
        assert_eq!(serde_json::to_value(amount).unwrap(), json!("100.50"));
    }

    #[test]
    fn test_amount_accepts_string_and_number() {
        let from_str: Amount = serde_json::from_value(json!("1.25")).unwrap();
        let from_num: Amount = serde_json::from_value(json!(1.25)).unwrap();
        let from_int: Amount = serde_json::from_value(json!(100)).unwrap();

        assert_eq!(from_str, Amount(dec!(1.25)));
        assert_eq!(from_num, Amount(dec!(1.25)));
        assert_eq!(from_int, Amount::from(100u32));
    }

    #[test]
    fn test_amount_is_positive() {
        assert!(Amount::from(1u32).is_positive());
        assert!(Amount(dec!(0.01)).is_positive());
        assert!(!Amount::default().is_positive());
        assert!(!Amount(dec!(-5)).is_positive());
    }
}
