use crate::{
    common::{
        error::LedgerError,
        money::{Money, Pin},
    },
    domain::account::Account,
};

/// Outcome of a username lookup. Kept apart from credential checks so a
/// caller can tell an unknown user from a wrong pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Account),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn account(self) -> Option<&'a Account> {
        match self {
            Lookup::Found(acc) => Some(acc),
            Lookup::NotFound => None,
        }
    }
}

/// True iff the lookup found an account whose pin equals `pin`.
pub fn authenticate(lookup: Lookup<'_>, pin: Pin) -> bool {
    matches!(lookup, Lookup::Found(acc) if acc.pin == pin)
}

/// The ordered collection of accounts, unique by username.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Fails on the first username that appears twice.
    pub fn from_accounts(accounts: Vec<Account>) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for acc in accounts {
            ledger.insert(acc)?;
        }
        Ok(ledger)
    }

    /// Rejects a taken username, or movements too large to summarize.
    pub fn insert(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.position(&account.username).is_some() {
            return Err(LedgerError::DuplicateUsername(account.username));
        }
        account.ensure_fits(Money::zero())?;
        self.accounts.push(account);
        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.username == username)
    }

    pub fn find_account(&self, username: &str) -> Lookup<'_> {
        match self.accounts.iter().find(|acc| acc.username == username) {
            Some(acc) => Lookup::Found(acc),
            None => Lookup::NotFound,
        }
    }

    pub(crate) fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.username == username)
    }

    /// Mutable access to two distinct accounts by index.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Account, &mut Account)> {
        if a == b || a >= self.accounts.len() || b >= self.accounts.len() {
            return None;
        }
        if a < b {
            let (left, right) = self.accounts.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.accounts.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Removes the first account with `username`.
    pub fn remove_account(&mut self, username: &str) -> Result<Account, LedgerError> {
        let index = self
            .position(username)
            .ok_or_else(|| LedgerError::NotFound(username.to_string()))?;
        Ok(self.accounts.remove(index))
    }
}
