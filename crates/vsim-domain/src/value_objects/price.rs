//! Fixed-point price value object

use crate::constants::PRICE_SCALE;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SCALE_FACTOR: i64 = 10_i64.pow(PRICE_SCALE);

/// Value Object: Fixed-Point Price
///
/// Mirrors a `NUMERIC(10,2)` column: the amount is held as integer
/// hundredths so equality and ordering are exact. Travels to and from the
/// database as decimal text.
///
/// ## Example
///
/// ```rust
/// use vsim_domain::Price;
///
/// let price: Price = "1.5".parse().unwrap();
/// assert_eq!(price.cents(), 150);
/// assert_eq!(price.to_string(), "1.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(i64);

impl Price {
    /// Create a price from integer hundredths
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Amount in integer hundredths
    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::parse(format!("invalid price '{s}'"));

        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            Some(_) => (false, text),
            None => return Err(invalid()),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !all_digits(whole)
            || !all_digits(fraction)
        {
            return Err(invalid());
        }
        if fraction.len() > PRICE_SCALE as usize {
            return Err(Error::parse(format!(
                "price '{s}' has more than {PRICE_SCALE} fractional digits"
            )));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut fraction_cents: i64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| invalid())?
        };
        if fraction.len() == 1 {
            fraction_cents *= 10;
        }

        let cents = whole
            .checked_mul(SCALE_FACTOR)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let factor = SCALE_FACTOR.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / factor,
            abs % factor,
            width = PRICE_SCALE as usize
        )
    }
}

impl TryFrom<String> for Price {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}
