use std::io::{stdout, BufWriter, Read};

use tracing::{debug, warn};

use crate::{
    common::error::AppError,
    domain::{ledger::Ledger, seed},
    io::{reader, writer},
    worker::{processor::Processor, session::Session},
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let session_path = &args[1];

    let ledger = match args.get(2) {
        Some(accounts_path) => load_accounts(std::fs::File::open(accounts_path)?)?,
        None => Ledger::from_accounts(seed::demo_accounts())?,
    };
    debug!(accounts = ledger.accounts().len(), "ledger seeded");

    let file = std::fs::File::open(session_path)?;
    let session = replay(file, ledger)?;

    // After the session ends, write the remaining accounts to stdout
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_summaries(writer, session.ledger().accounts())?;

    Ok(())
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}

/// Builds a ledger from an accounts CSV.
pub fn load_accounts<R: Read>(input: R) -> Result<Ledger, AppError> {
    let mut reader = csv_reader(input);
    let accounts = reader::read_accounts(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::Parse)?;
    Ok(Ledger::from_accounts(accounts)?)
}

/// Plays a session script against `ledger`. Rejected actions are logged and
/// skipped; a malformed row aborts the replay.
pub fn replay<R: Read>(input: R, ledger: Ledger) -> Result<Session, AppError> {
    let mut reader = csv_reader(input);
    let mut session = Session::new(ledger);
    let mut processor = Processor::new();

    for event in reader::read_session(&mut reader) {
        let event = event.map_err(AppError::Parse)?;
        if let Err(err) = processor.process(&mut session, event.clone()) {
            warn!(?event, %err, "action rejected");
        }
    }

    Ok(session)
}
