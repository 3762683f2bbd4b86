use crate::error::PixError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative transaction amount in Brazilian Reais.
///
/// This is a wrapper around `rust_decimal::Decimal` that renders with exactly
/// two fraction digits, the way field `54` of a BR Code expects it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PixError> {
        if value.is_zero() {
            // Drops the sign of "-0"
            Ok(Self(Decimal::ZERO))
        } else if value.is_sign_negative() {
            Err(PixError::InvalidAmount(format!(
                "amount must not be negative, got {value}"
            )))
        } else if round_to_cents(value).scale() != 2 {
            // Decimal keeps 28 significant digits, two of them must be cents
            Err(PixError::InvalidAmount(format!(
                "amount {value} has too many integer digits"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The amount rounded half away from zero to two fraction digits.
    pub fn to_cents_precision(&self) -> Decimal {
        round_to_cents(self.0)
    }
}

fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cents_precision())
    }
}

impl FromStr for Amount {
    type Err = PixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| PixError::InvalidAmount(format!("'{s}': {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PixError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(Amount::new(dec!(0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(-0.01)),
            Err(PixError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_display_always_two_digits() {
        assert_eq!(Amount::new(dec!(25)).unwrap().to_string(), "25.00");
        assert_eq!(Amount::new(dec!(25.5)).unwrap().to_string(), "25.50");
        assert_eq!(Amount::new(dec!(0)).unwrap().to_string(), "0.00");
        assert_eq!(Amount::new(dec!(1234.56)).unwrap().to_string(), "1234.56");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Amount::new(dec!(1.005)).unwrap().to_string(), "1.01");
        assert_eq!(Amount::new(dec!(1.004)).unwrap().to_string(), "1.00");
        assert_eq!(Amount::new(dec!(9.999)).unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_rejects_values_without_room_for_cents() {
        assert!(matches!(
            Amount::new(Decimal::MAX),
            Err(PixError::InvalidAmount(_))
        ));
        assert!(matches!(
            "7922816251426433759354395033".parse::<Amount>(),
            Err(PixError::InvalidAmount(_))
        ));

        // 26 integer digits still leave two for the cents
        let widest = Amount::from_str("12345678901234567890123456").unwrap();
        assert_eq!(widest.to_string(), "12345678901234567890123456.00");
    }

    #[test]
    fn test_parse() {
        let amount: Amount = " 25.00 ".parse().unwrap();
        assert_eq!(amount.value(), dec!(25.00));
        assert!(matches!(
            "abc".parse::<Amount>(),
            Err(PixError::InvalidAmount(_))
        ));
        assert!(matches!(
            "-3".parse::<Amount>(),
            Err(PixError::InvalidAmount(_))
        ));
    }
}
