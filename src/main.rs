use std::io;

use clap::Parser;
use tracing::info;

use eventbook::{
    catalog::InclusionCatalog,
    config::{ConsoleConfig, DEFAULT_RECEIPT_WIDTH},
    console::Console,
    core::store::EventStore,
    logging, seed,
};

/// Console organizer for birthdays, anniversaries, and burials.
#[derive(Parser, Debug)]
#[command(name = "eventbook", version, about)]
struct Cli {
    /// Start with an empty event list instead of the sample bookings.
    #[arg(long)]
    no_seed: bool,

    /// Tracing filter, e.g. `debug` or `eventbook=trace`. Defaults to RUST_LOG, then `warn`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Receipt width in columns (minimum 40).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RECEIPT_WIDTH)]
    receipt_width: usize,
}

impl Cli {
    fn into_config(self) -> ConsoleConfig {
        ConsoleConfig {
            seed_sample_events: !self.no_seed,
            log_filter: self.log_level,
            ..ConsoleConfig::default()
        }
        .with_receipt_width(self.receipt_width)
    }
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    logging::init_logging(config.log_filter.as_deref())?;

    let mut store = EventStore::new();
    if config.seed_sample_events {
        let ids = seed::seed_sample_events(&mut store)?;
        info!(count = ids.len(), "sample events booked");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(store, InclusionCatalog::standard(), config, stdin.lock(), stdout.lock());
    console.run()?;
    Ok(())
}
