use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::OptionsError;

/// Token decimal places assumed when scaling amounts.
pub const DECIMALS: usize = 18;

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]*)(?:\.([0-9]+))?$").expect("valid amount regex"));

/// A non-negative decimal token amount, e.g. `"1000"` or `"2.5"`.
///
/// Stored normalized: no leading zeros in the integer part, no trailing zeros
/// in the fraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    integer: String,
    fraction: String,
}

impl Amount {
    /// Parse a decimal amount for the option named `field`.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, OptionsError> {
        let invalid = || OptionsError::InvalidAmount {
            field,
            value: value.to_string(),
        };

        let caps = AMOUNT_PATTERN.captures(value.trim()).ok_or_else(invalid)?;
        let integer = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(2).map_or("", |m| m.as_str());
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > DECIMALS {
            return Err(OptionsError::TooManyDecimals {
                field,
                value: value.to_string(),
                max: DECIMALS,
            });
        }

        Ok(Self {
            integer: integer.trim_start_matches('0').to_string(),
            fraction: fraction.to_string(),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.integer.is_empty() && self.fraction.is_empty()
    }

    /// Digits of the amount with the decimal point removed.
    pub fn units(&self) -> String {
        let digits = format!("{}{}", self.integer, self.fraction);
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            "0".to_string()
        } else {
            digits.to_string()
        }
    }

    /// Power of ten that scales [`Amount::units`] to base units.
    pub fn exponent(&self) -> usize {
        DECIMALS - self.fraction.len()
    }

    /// Solidity expression for the amount in base units.
    pub fn to_expression(&self) -> String {
        if self.is_zero() {
            "0".to_string()
        } else {
            format!("{} * 10 ** {}", self.units(), self.exponent())
        }
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.integer
            .len()
            .cmp(&other.integer.len())
            .then_with(|| self.integer.cmp(&other.integer))
            .then_with(|| self.fraction.cmp(&other.fraction))
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = if self.integer.is_empty() { "0" } else { &self.integer };
        if self.fraction.is_empty() {
            f.write_str(integer)
        } else {
            write!(f, "{}.{}", integer, self.fraction)
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse("premint", s).unwrap()
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(amount("0010").to_string(), "10");
        assert_eq!(amount("1.500").to_string(), "1.5");
        assert_eq!(amount(".25").to_string(), "0.25");
        assert!(amount("0").is_zero());
        assert!(amount("0.000").is_zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Amount::parse("cap", "abc"),
            Err(OptionsError::InvalidAmount { field: "cap", .. })
        ));
        assert!(Amount::parse("cap", "").is_err());
        assert!(Amount::parse("cap", "1.").is_err());
        assert!(Amount::parse("cap", "-1").is_err());
    }

    #[test]
    fn test_only_ascii_digits() {
        assert!(matches!(
            Amount::parse("premint", "١٢٣"),
            Err(OptionsError::InvalidAmount { field: "premint", .. })
        ));
        assert!(Amount::parse("cap", "１０").is_err());
        assert!(Amount::parse("cap", "1.٥").is_err());
    }

    #[test]
    fn test_too_many_decimals() {
        let value = format!("1.{}", "1".repeat(19));
        assert!(matches!(
            Amount::parse("premint", &value),
            Err(OptionsError::TooManyDecimals { max: 18, .. })
        ));
    }

    #[test]
    fn test_expression() {
        assert_eq!(amount("1000").to_expression(), "1000 * 10 ** 18");
        assert_eq!(amount("2.5").to_expression(), "25 * 10 ** 17");
        assert_eq!(amount("0.05").to_expression(), "5 * 10 ** 16");
        assert_eq!(amount("0").to_expression(), "0");
    }

    #[test]
    fn test_ordering() {
        assert!(amount("1000") > amount("999.99"));
        assert!(amount("0.5") > amount("0.45"));
        assert!(amount("10") == amount("10.0"));
        assert!(amount("2") < amount("10"));
    }
}
