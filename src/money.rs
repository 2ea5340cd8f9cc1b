// used for decimal numbers
use bigdecimal::{BigDecimal, Zero};

// used when parsing a string to a BigDecimal
use std::str::FromStr;
// used to print out readable forms of an amount
use std::fmt;
// used to overload multiplication by a count
use std::ops;

/// A strictly positive decimal amount of money.
///
/// An `Amount` can only be obtained through [`Amount::parse`], so every
/// instance is known to be positive. Wages, fees and computed pay all use
/// exact decimal arithmetic rather than floating point.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct Amount(BigDecimal);

impl Amount {
    /// Parses a positive decimal amount from user input.
    ///
    /// The string must be non-empty, contain only digits and at most one
    /// decimal point, parse in its entirety, and denote a strictly
    /// positive value. Anything else yields `None`.
    pub fn parse(s: &str) -> Option<Amount> {
        if s.is_empty() {
            return None;
        }
        let mut dots = 0;
        for c in s.chars() {
            if c == '.' {
                dots += 1;
                if dots > 1 {
                    return None;
                }
            } else if !c.is_ascii_digit() {
                return None;
            }
        }
        let value = BigDecimal::from_str(s).ok()?;
        if value > BigDecimal::zero() {
            Some(Amount(value))
        } else {
            None
        }
    }
}

// Pay for part-time and contractual employees is the rate times a count.
impl ops::Mul<u32> for &Amount {
    type Output = Amount;
    fn mul(self, count: u32) -> Amount {
        Amount(&self.0 * BigDecimal::from(count))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
