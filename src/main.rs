use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries the CSV report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = bankist::app::run(std::env::args()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
