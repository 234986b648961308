//! Derived figures over a sequence of movements.
//!
//! Every function here is pure and order-independent; nothing is cached, so
//! a balance can never drift from the movements it was computed from.

use crate::{
    common::{
        error::LedgerError,
        money::{InterestRate, Money},
    },
    domain::account::Account,
};

/// Sum of all movements.
///
/// ```
/// use bankist::common::money::Money;
/// use bankist::domain::summary::compute_balance;
///
/// let movements = [200, 450, -400, 3000, -650, -130, 70, 1300].map(Money::from_units);
/// assert_eq!(compute_balance(&movements), Money::from_units(3840));
/// ```
pub fn compute_balance(movements: &[Money]) -> Money {
    movements.iter().sum()
}

/// Sum of the deposits.
pub fn compute_income(movements: &[Money]) -> Money {
    movements.iter().filter(|m| m.is_positive()).sum()
}

/// Absolute value of the sum of the withdrawals.
pub fn compute_outflow(movements: &[Money]) -> Money {
    movements
        .iter()
        .filter(|m| m.is_negative())
        .sum::<Money>()
        .abs()
}

// Interest earned by each deposit, keeping only those worth at least one unit.
fn qualifying_interest(movements: &[Money], rate: &InterestRate) -> Vec<Money> {
    let threshold = Money::from_units(1);
    movements
        .iter()
        .filter(|m| m.is_positive())
        // overflowing products are skipped
        .filter_map(|deposit| deposit.percent(rate))
        .filter(|interest| *interest >= threshold)
        .collect()
}

/// Interest on deposits at `rate` percent, counting only deposits whose
/// interest reaches one unit. Zero when no deposit qualifies.
///
/// ```
/// use std::str::FromStr;
/// use bankist::common::money::{InterestRate, Money};
/// use bankist::domain::summary::compute_qualifying_interest;
///
/// let movements = [200, 450, -400, 3000, -650, -130, 70, 1300].map(Money::from_units);
/// let rate = InterestRate::from_str("1.2").unwrap();
/// assert_eq!(
///     compute_qualifying_interest(&movements, &rate),
///     Money::from_str("59.4").unwrap()
/// );
/// ```
pub fn compute_qualifying_interest(movements: &[Money], rate: &InterestRate) -> Money {
    qualifying_interest(movements, rate).into_iter().sum()
}

/// Like [`compute_qualifying_interest`], but reports
/// [`LedgerError::InterestUndefined`] instead of zero when no deposit qualifies.
pub fn try_qualifying_interest(
    movements: &[Money],
    rate: &InterestRate,
) -> Result<Money, LedgerError> {
    let earned = qualifying_interest(movements, rate);
    if earned.is_empty() {
        return Err(LedgerError::InterestUndefined);
    }
    Ok(earned.into_iter().sum())
}

/// The four figures shown next to an account statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub balance: Money,
    pub income: Money,
    pub outflow: Money,
    pub interest: Money,
}

impl Summary {
    pub fn of(account: &Account) -> Self {
        let movements = &account.movements;
        Self {
            balance: compute_balance(movements),
            income: compute_income(movements),
            outflow: compute_outflow(movements),
            interest: compute_qualifying_interest(movements, &account.interest_rate),
        }
    }
}
