use tracing::debug;

use crate::{common::error::LedgerError, worker::session::Session};

/// Flips the statement order of the current account. Returns the new state.
pub fn handle(session: &mut Session) -> Result<bool, LedgerError> {
    session.current_account()?;
    let sorted = session.toggle_sort();
    debug!(sorted, "statement order toggled");
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ledger::Ledger, seed};

    #[test]
    fn sort_toggles_back_and_forth() {
        let mut session = Session::new(Ledger::from_accounts(seed::demo_accounts()).unwrap());
        assert_eq!(handle(&mut session), Err(LedgerError::NoActiveSession));

        session.sign_in("js");
        assert_eq!(handle(&mut session), Ok(true));
        assert_eq!(handle(&mut session), Ok(false));
    }
}
