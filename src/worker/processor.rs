use tracing::info;

use crate::{
    common::{error::LedgerError, event::SessionEvent},
    worker::{
        handlers::{close, loan, login, sort, transfer},
        session::Session,
    },
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Runs one session action. An `Err` is a rejected action; the session
    /// stays usable either way.
    pub fn process(
        &mut self,
        session: &mut Session,
        event: SessionEvent,
    ) -> Result<(), LedgerError> {
        match event {
            SessionEvent::Login { username, pin } => {
                let greeting = login::handle(session, &username, pin)?;
                info!("{greeting}");
            }
            SessionEvent::Transfer { to, amount } => {
                transfer::handle(session, &to, amount)?;
            }
            SessionEvent::Loan { amount } => {
                loan::handle(session, amount)?;
            }
            SessionEvent::Close { username, pin } => {
                close::handle(session, &username, pin)?;
            }
            SessionEvent::Sort => {
                sort::handle(session)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::money::Money,
        domain::{ledger::Ledger, seed},
    };

    fn login(username: &str, pin: u32) -> SessionEvent {
        SessionEvent::Login {
            username: username.to_string(),
            pin,
        }
    }

    #[test]
    fn rejected_action_does_not_end_the_session() {
        let mut session = Session::new(Ledger::from_accounts(seed::demo_accounts()).unwrap());
        let mut processor = Processor::new();

        processor.process(&mut session, login("js", 1111)).unwrap();

        let err = processor
            .process(&mut session, SessionEvent::Transfer {
                to: "jd".to_string(),
                amount: Money::from_units(999_999),
            })
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));

        processor
            .process(&mut session, SessionEvent::Loan {
                amount: Money::from_units(1000),
            })
            .unwrap();
        assert_eq!(session.summary().unwrap().balance, Money::from_units(4840));
    }

    #[test]
    fn close_then_transfer_needs_new_login() {
        let mut session = Session::new(Ledger::from_accounts(seed::demo_accounts()).unwrap());
        let mut processor = Processor::new();

        processor.process(&mut session, login("ss", 4444)).unwrap();
        processor.process(&mut session, SessionEvent::Sort).unwrap();
        processor
            .process(&mut session, SessionEvent::Close {
                username: "ss".to_string(),
                pin: 4444,
            })
            .unwrap();

        assert_eq!(
            processor.process(&mut session, SessionEvent::Sort),
            Err(LedgerError::NoActiveSession)
        );
        assert_eq!(
            processor.process(&mut session, login("ss", 4444)),
            Err(LedgerError::NotFound("ss".to_string()))
        );
    }
}
