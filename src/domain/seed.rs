use crate::{
    common::money::{InterestRate, Money},
    domain::account::Account,
};

fn movements(values: &[i64]) -> Vec<Money> {
    values.iter().copied().map(Money::from_units).collect()
}

/// The four demo accounts loaded when no accounts file is given.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            1111,
            InterestRate::from_hundredths(120),
            movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]),
        ),
        Account::new(
            "Jessica Davis",
            2222,
            InterestRate::from_hundredths(150),
            movements(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30]),
        ),
        Account::new(
            "Steven Thomas Williams",
            3333,
            InterestRate::from_hundredths(70),
            movements(&[200, -200, 340, -300, -20, 50, 400, -460]),
        ),
        Account::new(
            "Sarah Smith",
            4444,
            InterestRate::from_hundredths(100),
            movements(&[430, 1000, 700, 50, 90]),
        ),
    ]
}
