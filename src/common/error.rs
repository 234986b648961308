use crate::common::money::Money;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing session csv path. usage: cargo run -- <session.csv> [accounts.csv]")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Expected, recoverable outcomes of ledger and session operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no account with username {0}")]
    NotFound(String),
    #[error("invalid credentials")]
    InvalidCredential,
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),
    #[error("insufficient balance: {balance} available, {requested} requested")]
    InsufficientBalance { balance: Money, requested: Money },
    #[error("cannot transfer to the sending account")]
    SelfTransfer,
    #[error("no deposit earns at least one unit of interest")]
    InterestUndefined,
    #[error("loan of {0} rejected: no movement covers 10% of it")]
    LoanRejected(Money),
    #[error("no account is logged in")]
    NoActiveSession,
    #[error("movements no longer fit the ledger's amount range")]
    Overflow,
    #[error("duplicate username {0}")]
    DuplicateUsername(String),
}
