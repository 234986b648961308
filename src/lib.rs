//! In-memory banking ledger: seeded accounts, a single login session,
//! transfers, loans, account closure and derived statement summaries.

pub mod app;

pub mod common {
    pub mod error;
    pub mod event;
    pub mod money;
}

pub mod domain {
    pub mod account;
    pub mod ledger;
    pub mod movement;
    pub mod seed;
    pub mod summary;
}

pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod worker {
    pub mod handlers {
        pub mod close;
        pub mod loan;
        pub mod login;
        pub mod sort;
        pub mod transfer;
    }
    pub mod processor;
    pub mod session;
}
