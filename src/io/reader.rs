use crate::{
    common::{
        event::SessionEvent,
        money::{InterestRate, Money, Pin},
    },
    domain::account::Account,
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row of a session script. Only the columns an action needs
/// are filled; the rest stay blank or are cut off.
struct SessionRow {
    action: String,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    pin: Option<String>,
    #[serde(default)]
    amount: Option<String>,
}

#[derive(serde::Deserialize)]
/// Internal CSV row of an accounts file; `movements` is space separated.
struct AccountRow {
    owner: String,
    pin: Pin,
    interest_rate: String,
    #[serde(default)]
    movements: Option<String>,
}

fn required(field: Option<String>, name: &str, action: &str) -> Result<String, String> {
    field
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("{action} missing {name}"))
}

fn parse_pin(raw: String) -> Result<Pin, String> {
    raw.parse::<Pin>()
        .map_err(|e| format!("invalid pin {raw:?}: {e}"))
}

fn parse_amount(raw: String) -> Result<Money, String> {
    Money::from_str(&raw).map_err(|e| format!("invalid amount {raw:?}: {e}"))
}

/// Reads session actions from a CSV reader.
///
/// Supported headers: `action,user,pin,amount`. Actions are `login`
/// (user, pin), `transfer` (user is the receiver, amount), `loan` (amount),
/// `close` (user, pin) and `sort`. Action names are case-insensitive.
///
/// # Examples
///
/// ```
/// use bankist::io::reader::read_session;
/// use bankist::common::event::SessionEvent;
/// use csv::ReaderBuilder;
///
/// let data = "action,user,pin,amount\n\
/// login,js,1111,\n\
/// sort,,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_session(&mut rdr).collect();
///
/// assert!(matches!(&events[0], Ok(SessionEvent::Login { pin: 1111, .. })));
/// assert!(matches!(events[1], Ok(SessionEvent::Sort)));
/// ```
pub fn read_session<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SessionEvent, String>> + '_ {
    rdr.deserialize::<SessionRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let action = row.action.trim().to_ascii_lowercase();

        match action.as_str() {
            "login" => {
                let username = required(row.user, "user", &action)?;
                let pin = parse_pin(required(row.pin, "pin", &action)?)?;
                Ok(SessionEvent::Login { username, pin })
            }
            "transfer" => {
                let to = required(row.user, "user", &action)?;
                let amount = parse_amount(required(row.amount, "amount", &action)?)?;
                Ok(SessionEvent::Transfer { to, amount })
            }
            "loan" => {
                let amount = parse_amount(required(row.amount, "amount", &action)?)?;
                Ok(SessionEvent::Loan { amount })
            }
            "close" => {
                let username = required(row.user, "user", &action)?;
                let pin = parse_pin(required(row.pin, "pin", &action)?)?;
                Ok(SessionEvent::Close { username, pin })
            }
            "sort" => Ok(SessionEvent::Sort),
            other => Err(format!("unknown action: {other}")),
        }
    })
}

/// Reads accounts from a CSV reader with headers
/// `owner,pin,interest_rate,movements`.
///
/// # Examples
///
/// ```
/// use bankist::io::reader::read_accounts;
/// use csv::ReaderBuilder;
///
/// let data = "owner,pin,interest_rate,movements\n\
/// Sarah Smith,4444,1,430 1000 -50\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let accounts: Vec<_> = read_accounts(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(accounts[0].username, "ss");
/// assert_eq!(accounts[0].movements.len(), 3);
/// ```
pub fn read_accounts<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Account, String>> + '_ {
    rdr.deserialize::<AccountRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;

        let interest_rate = InterestRate::from_str(&row.interest_rate).map_err(|e| {
            format!("invalid interest rate {:?} for {}: {e}", row.interest_rate, row.owner)
        })?;

        let movements = row
            .movements
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(|m| {
                Money::from_str(m)
                    .map_err(|e| format!("invalid movement {m:?} for {}: {e}", row.owner))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let account = Account::new(row.owner.trim(), row.pin, interest_rate, movements);
        account
            .ensure_fits(Money::zero())
            .map_err(|e| format!("movements of {}: {e}", account.owner))?;
        Ok(account)
    })
}
