use crate::common::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// Zero counts as a withdrawal.
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

/// One line of an account statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementRow {
    /// 1-based position in the row order of the statement.
    pub position: usize,
    pub kind: MovementKind,
    pub amount: Money,
}

/// Builds statement rows, optionally ordered by ascending amount.
/// The movements themselves are never reordered.
pub fn statement(movements: &[Money], sorted: bool) -> Vec<StatementRow> {
    let mut amounts = movements.to_vec();
    if sorted {
        amounts.sort();
    }

    amounts
        .into_iter()
        .enumerate()
        .map(|(i, amount)| StatementRow {
            position: i + 1,
            kind: MovementKind::of(amount),
            amount,
        })
        .collect()
}
