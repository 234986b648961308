use crate::{
    common::{
        error::LedgerError,
        money::{InterestRate, Money, Pin},
    },
    domain::summary,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Lookup key derived from the owner's initials.
    pub username: String,
    pub owner: String,
    pub pin: Pin,
    /// Chronological movements; positive values are deposits.
    pub movements: Vec<Money>,
    pub interest_rate: InterestRate,
}

impl Account {
    pub fn new(
        owner: impl Into<String>,
        pin: Pin,
        interest_rate: InterestRate,
        movements: Vec<Money>,
    ) -> Self {
        let owner = owner.into();
        Self {
            username: derive_username(&owner),
            owner,
            pin,
            movements,
            interest_rate,
        }
    }

    pub fn balance(&self) -> Money {
        summary::compute_balance(&self.movements)
    }

    /// Sum of the absolute values of all movements, or `None` if it does
    /// not fit. Balance, income, outflow and interest never exceed it.
    pub fn turnover(&self) -> Option<Money> {
        self.movements
            .iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m.checked_abs()?))
    }

    /// Fails with `Overflow` unless the movements plus `extra` keep every
    /// derived figure in range. `Money::zero()` checks the movements alone.
    pub fn ensure_fits(&self, extra: Money) -> Result<(), LedgerError> {
        self.turnover()
            .zip(extra.checked_abs())
            .and_then(|(turnover, extra)| turnover.checked_add(extra))
            .map(|_| ())
            .ok_or(LedgerError::Overflow)
    }

    /// First word of the owner's name, used in the login greeting.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or_default()
    }
}

/// Lowercase initials of every word in `owner`: "Steven Thomas Williams" -> "stw".
pub fn derive_username(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_lowercase_initials() {
        assert_eq!(derive_username("Jonas Schmedtmann"), "js");
        assert_eq!(derive_username("Steven Thomas Williams"), "stw");
        assert_eq!(derive_username("  sarah   Smith "), "ss");
        assert_eq!(derive_username(""), "");
    }

    #[test]
    fn new_account_derives_username_and_balance() {
        let acc = Account::new(
            "Jessica Davis",
            2222,
            InterestRate::from_hundredths(150),
            vec![Money::from_units(5000), Money::from_units(-150)],
        );

        assert_eq!(acc.username, "jd");
        assert_eq!(acc.first_name(), "Jessica");
        assert_eq!(acc.balance(), Money::from_units(4850));
    }

    #[test]
    fn turnover_bounds_derived_figures() {
        let acc = Account::new(
            "Jonas Schmedtmann",
            1111,
            InterestRate::from_hundredths(120),
            [200, 450, -400, 3000, -650, -130, 70, 1300]
                .into_iter()
                .map(Money::from_units)
                .collect(),
        );

        assert_eq!(acc.turnover(), Some(Money::from_units(6200)));
        assert_eq!(acc.ensure_fits(Money::from_units(1_000_000)), Ok(()));
    }

    #[test]
    fn ensure_fits_rejects_out_of_range_movements() {
        let big = Money::from_units(500_000_000_000_000);
        let acc = Account::new(
            "Big Spender",
            1,
            InterestRate::from_hundredths(100),
            vec![big, -big],
        );

        // the balance is zero, but income and outflow cannot be represented
        assert_eq!(acc.turnover(), None);
        assert_eq!(acc.ensure_fits(Money::zero()), Err(LedgerError::Overflow));

        let acc = Account::new("Big Saver", 1, InterestRate::from_hundredths(100), vec![big]);
        assert_eq!(acc.ensure_fits(Money::zero()), Ok(()));
        assert_eq!(acc.ensure_fits(big), Err(LedgerError::Overflow));
        assert_eq!(acc.ensure_fits(-big), Err(LedgerError::Overflow));
    }

    #[test]
    fn first_name_of_blank_owner_is_empty() {
        let acc = Account::new(" ", 1, InterestRate::from_hundredths(100), Vec::new());
        assert_eq!(acc.first_name(), "");
        assert_eq!(acc.balance(), Money::zero());
    }
}
