use crate::common::money::{Money, Pin};

/// A user action read from a session script and handed to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Login { username: String, pin: Pin },
    Transfer { to: String, amount: Money },
    Loan { amount: Money },
    Close { username: String, pin: Pin },
    Sort,
}
