use crate::{
    common::error::LedgerError,
    domain::{
        account::Account,
        ledger::Ledger,
        movement::{self, StatementRow},
        summary::Summary,
    },
};

/// State of one interactive session: the ledger it owns, the account that
/// is logged in, and whether the statement is shown sorted.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    current: Option<String>,
    sorted: bool,
}

impl Session {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            current: None,
            sorted: false,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    pub fn current_username(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_account(&self) -> Result<&Account, LedgerError> {
        let username = self.current.as_deref().ok_or(LedgerError::NoActiveSession)?;
        self.ledger
            .find_account(username)
            .account()
            .ok_or(LedgerError::NoActiveSession)
    }

    pub(crate) fn current_account_mut(&mut self) -> Result<&mut Account, LedgerError> {
        let username = self.current.as_deref().ok_or(LedgerError::NoActiveSession)?;
        self.ledger
            .get_mut(username)
            .ok_or(LedgerError::NoActiveSession)
    }

    /// Makes `username` the current account and resets the sort toggle.
    pub(crate) fn sign_in(&mut self, username: &str) {
        self.current = Some(username.to_string());
        self.sorted = false;
    }

    pub(crate) fn sign_out(&mut self) {
        self.current = None;
        self.sorted = false;
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub(crate) fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }

    pub fn statement(&self) -> Result<Vec<StatementRow>, LedgerError> {
        let acc = self.current_account()?;
        Ok(movement::statement(&acc.movements, self.sorted))
    }

    pub fn summary(&self) -> Result<Summary, LedgerError> {
        self.current_account().map(Summary::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::money::Money, domain::seed};

    fn demo_session() -> Session {
        Session::new(Ledger::from_accounts(seed::demo_accounts()).unwrap())
    }

    #[test]
    fn new_session_has_no_current_account() {
        let session = demo_session();

        assert_eq!(session.current_username(), None);
        assert_eq!(session.current_account().unwrap_err(), LedgerError::NoActiveSession);
        assert_eq!(session.statement().unwrap_err(), LedgerError::NoActiveSession);
        assert_eq!(session.summary().unwrap_err(), LedgerError::NoActiveSession);
    }

    #[test]
    fn sign_in_selects_account_and_resets_sort() {
        let mut session = demo_session();
        session.sign_in("ss");
        assert!(session.toggle_sort());

        session.sign_in("js");
        assert!(!session.is_sorted());
        assert_eq!(session.current_account().unwrap().owner, "Jonas Schmedtmann");
        assert_eq!(session.summary().unwrap().balance, Money::from_units(3840));
    }

    #[test]
    fn statement_follows_sort_toggle() {
        let mut session = demo_session();
        session.sign_in("ss");

        let first: Vec<Money> = session.statement().unwrap().iter().map(|r| r.amount).collect();
        assert_eq!(first[0], Money::from_units(430));

        session.toggle_sort();
        let sorted: Vec<Money> = session.statement().unwrap().iter().map(|r| r.amount).collect();
        assert_eq!(sorted[0], Money::from_units(50));
        assert_eq!(
            session.current_account().unwrap().movements[0],
            Money::from_units(430)
        );
    }

    #[test]
    fn sign_out_clears_current_account() {
        let mut session = demo_session();
        session.sign_in("jd");
        session.sign_out();

        assert!(session.current_account_mut().is_err());
        assert_eq!(session.into_ledger().accounts().len(), 4);
    }
}
