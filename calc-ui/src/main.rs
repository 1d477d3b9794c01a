use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use calc_ui::{App, Cli, Config, logging, prefs};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging is not up yet, so a broken config file is reported directly.
    let config = Config::load(cli.config.as_deref())?;

    logging::init_logging(&config.logging.level);
    if cli.verbose {
        logging::set_log_level("debug")?;
    }
    if let Some(path) = &config.logging.file {
        if let Err(error) = logging::enable_file_logging(path) {
            warn!(%error, "file logging disabled");
        }
    }
    debug!(?config, "configuration loaded");

    let store = prefs::open_store(&config.storage);
    let stdout = io::stdout();
    let mut app = App::new(config.defaults, store)
        .with_chart(!cli.no_chart)
        .with_colour(stdout.is_terminal());

    let mut out = stdout.lock();
    app.run(&cli.command, &mut out)?;
    out.flush().context("flushing output")?;

    Ok(())
}
