use tracing::info;

use crate::{
    common::{error::LedgerError, money::Pin},
    domain::account::Account,
    worker::session::Session,
};

/// Closes the current account after re-checking its credentials, then ends
/// the session. Returns the removed account.
pub fn handle(session: &mut Session, username: &str, pin: Pin) -> Result<Account, LedgerError> {
    let current = session.current_account()?;
    if current.username != username || current.pin != pin {
        return Err(LedgerError::InvalidCredential);
    }

    let removed = session.ledger_mut().remove_account(username)?;
    session.sign_out();
    info!(username, "account closed");
    Ok(removed)
}
