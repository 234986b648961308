use std::io::Write;

use crate::domain::{account::Account, summary::Summary};

#[derive(serde::Serialize)]
/// Internal CSV output row.
///
/// Headers written (in this order): `username,owner,balance,income,outflow,interest`.
/// Monetary fields are formatted to 4 decimal places as strings.
struct OutputRow<'a> {
    username: &'a str,
    owner: &'a str,
    balance: String,
    income: String,
    outflow: String,
    interest: String,
}

/// Writes one summary row per account, in ledger order.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bankist::io::writer::write_summaries;
/// use bankist::domain::seed::demo_accounts;
///
/// let mut out = Vec::new();
/// write_summaries(&mut out, &demo_accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("username,owner,balance,income,outflow,interest\n"));
/// assert!(s.contains("\njs,Jonas Schmedtmann,3840.0000,"));
/// ```
pub fn write_summaries<W: Write>(writer: W, accounts: &[Account]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        let summary = Summary::of(acc);
        let row = OutputRow {
            username: &acc.username,
            owner: &acc.owner,
            balance: summary.balance.to_string_4dp(),
            income: summary.income.to_string_4dp(),
            outflow: summary.outflow.to_string_4dp(),
            interest: summary.interest.to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::money::{InterestRate, Money},
        domain::seed,
    };

    fn write_to_string(accounts: &[Account]) -> String {
        let mut out = Vec::new();
        write_summaries(&mut out, accounts).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_demo_accounts_in_ledger_order() {
        let s = write_to_string(&seed::demo_accounts());
        let lines: Vec<&str> = s.lines().collect();

        assert_eq!(lines, vec![
            "username,owner,balance,income,outflow,interest",
            "js,Jonas Schmedtmann,3840.0000,5020.0000,1180.0000,59.4000",
            "jd,Jessica Davis,11720.0000,16900.0000,5180.0000,253.5000",
            "stw,Steven Thomas Williams,10.0000,990.0000,980.0000,6.5800",
            "ss,Sarah Smith,2270.0000,2270.0000,0.0000,21.3000",
        ]);
    }

    #[test]
    fn writes_nothing_for_empty_ledger() {
        // csv writes headers lazily, on the first serialized row
        assert_eq!(write_to_string(&[]), "");
    }

    #[test]
    fn writes_negative_balance() {
        let acc = Account::new(
            "Over Drawn",
            1,
            InterestRate::from_hundredths(100),
            vec![Money::from_units(-25)],
        );
        let s = write_to_string(&[acc]);

        assert_eq!(s.lines().nth(1), Some("od,Over Drawn,-25.0000,0.0000,25.0000,0.0000"));
    }
}
