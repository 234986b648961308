use tracing::debug;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::ledger::Ledger,
    worker::session::Session,
};

/// Moves `amount` from the current account to `to`.
pub fn handle(session: &mut Session, to: &str, amount: Money) -> Result<(), LedgerError> {
    let sender = session
        .current_username()
        .ok_or(LedgerError::NoActiveSession)?
        .to_string();
    apply_transfer(session.ledger_mut(), &sender, to, amount)
}

/// Debits `sender` and credits `receiver` by `amount`.
///
/// Every precondition is checked before either account is touched, so a
/// rejected transfer leaves the ledger exactly as it was.
pub fn apply_transfer(
    ledger: &mut Ledger,
    sender: &str,
    receiver: &str,
    amount: Money,
) -> Result<(), LedgerError> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(amount));
    }

    let from = ledger
        .position(sender)
        .ok_or_else(|| LedgerError::NotFound(sender.to_string()))?;
    let to = ledger
        .position(receiver)
        .ok_or_else(|| LedgerError::NotFound(receiver.to_string()))?;

    let (src, dst) = ledger.pair_mut(from, to).ok_or(LedgerError::SelfTransfer)?;

    let balance = src.balance();
    if balance < amount {
        return Err(LedgerError::InsufficientBalance {
            balance,
            requested: amount,
        });
    }
    src.ensure_fits(-amount)?;
    dst.ensure_fits(amount)?;

    src.movements.push(-amount);
    dst.movements.push(amount);
    debug!(sender, receiver, %amount, "transfer applied");
    Ok(())
}
