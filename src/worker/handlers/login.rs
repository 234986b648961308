use tracing::info;

use crate::{
    common::{error::LedgerError, money::Pin},
    domain::ledger::authenticate,
    worker::session::Session,
};

/// Logs `username` in and returns the welcome greeting.
///
/// A failed attempt leaves whoever was logged in before untouched.
pub fn handle(session: &mut Session, username: &str, pin: Pin) -> Result<String, LedgerError> {
    let lookup = session.ledger().find_account(username);
    let acc = lookup
        .account()
        .ok_or_else(|| LedgerError::NotFound(username.to_string()))?;

    if !authenticate(lookup, pin) {
        return Err(LedgerError::InvalidCredential);
    }

    let greeting = format!("Welcome back, {}", acc.first_name());
    session.sign_in(username);
    info!(username, "logged in");
    Ok(greeting)
}
