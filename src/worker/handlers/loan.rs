use tracing::debug;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::account::Account,
    worker::session::Session,
};

pub fn handle(session: &mut Session, amount: Money) -> Result<(), LedgerError> {
    apply_loan(session.current_account_mut()?, amount)
}

/// Credits `amount` if some past movement is at least 10% of it.
pub fn apply_loan(acc: &mut Account, amount: Money) -> Result<(), LedgerError> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(amount));
    }

    if !qualifies(&acc.movements, amount) {
        return Err(LedgerError::LoanRejected(amount));
    }
    acc.ensure_fits(amount)?;

    acc.movements.push(amount);
    debug!(username = %acc.username, %amount, "loan granted");
    Ok(())
}

// movement >= amount * 0.1, compared as movement * 10 >= amount to stay exact
fn qualifies(movements: &[Money], amount: Money) -> bool {
    let needed = i128::from(amount.as_i64());
    movements
        .iter()
        .any(|m| i128::from(m.as_i64()) * 10 >= needed)
}
