use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

const SCALE: i64 = 10_000;

/// Numeric login credential. Compared by equality only.
pub type Pin = u32;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a currency unit.
///
/// Movements are whole units in practice, but interest is a fraction of a
/// deposit, so the fixed-point scale keeps every derived figure exact
/// without floating-point drift.
///
/// # Examples
/// ```
/// use bankist::common::money::Money;
///
/// let deposit = Money::from_units(200);
/// assert_eq!(deposit.as_i64(), 2_000_000);
/// assert_eq!(deposit.to_string_4dp(), "200.0000");
/// ```
pub struct Money(i64);

impl Money {
    /// Whole currency units, e.g. `Money::from_units(-400)`.
    pub fn from_units(units: i64) -> Self {
        Money(units * SCALE)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Self {
        Money(self.0.abs())
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_abs(self) -> Option<Money> {
        self.0.checked_abs().map(Money)
    }

    /// `self * rate / 100`, or `None` if the result leaves the `i64` range.
    pub fn percent(&self, rate: &InterestRate) -> Option<Money> {
        let bd = BigDecimal::from(self.0) * rate.0.clone() / BigDecimal::from(100);
        bd.round(0).to_i64().map(Money)
    }

    pub fn to_string_4dp(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        format!("{sign}{}.{:04}", abs / scale, abs % scale)
    }
}

impl FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Yearly interest rate in percent, e.g. `1.2` for 1.2 %.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestRate(BigDecimal);

impl InterestRate {
    /// `InterestRate::from_hundredths(120)` is 1.20 %.
    pub fn from_hundredths(hundredths: i64) -> Self {
        Self(BigDecimal::new(hundredths.into(), 2))
    }
}

impl FromStr for InterestRate {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty interest rate".into()));
        }

        // interest on a deposit never exceeds the deposit itself
        let rate: BigDecimal = t.parse()?;
        if rate < BigDecimal::from(0) || rate > BigDecimal::from(100) {
            return Err(ParseBigDecimalError::Other(
                "interest rate must be between 0 and 100".into(),
            ));
        }
        Ok(Self(rate))
    }
}
