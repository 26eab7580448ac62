use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Currency;

/// Money amount represented as **integer minor units** of a currency.
///
/// Use this type for all monetary values in the engine to avoid
/// floating-point drift. Provider amounts are non-negative, but the field is
/// signed so sums never wrap silently.
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::new(Currency::Gbp, 12_34);
/// assert_eq!(amount.minor_units, 1234);
/// assert_eq!(amount.to_string(), "12.34 GBP");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub currency: Currency,
    pub minor_units: i64,
}

impl Money {
    #[must_use]
    pub const fn new(currency: Currency, minor_units: i64) -> Self {
        Self {
            currency,
            minor_units,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(currency, 0)
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.minor_units > 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.unsigned_abs();
        let major = abs / 100;
        let minor = abs % 100;
        write!(f, "{sign}{major}.{minor:02} {}", self.currency)
    }
}
