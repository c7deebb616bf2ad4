mod cli;
mod session;
mod settings;

use std::io;

use anyhow::Result;
use clap::Parser;
use stonehenge_core::Game;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::session::Session;
use crate::settings::PlaySettings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let directive = if cli.verbose {
        "stonehenge=debug"
    } else {
        "stonehenge=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    let mut settings = match &cli.config {
        Some(path) => PlaySettings::load_from(path),
        None => PlaySettings::load(),
    };
    cli.apply(&mut settings);

    if cli.save {
        match cli.settings_path() {
            Some(path) => settings.save_to(&path)?,
            None => warn!("No config directory available, settings not saved"),
        }
    }

    info!("Stonehenge starting...");

    let stdin = io::stdin();
    let mut session = Session::new(settings, stdin.lock(), io::stdout())?;
    let outcome = session.run()?;
    info!(
        "Finished: {} with {} cells claimed",
        outcome,
        session.game().current_state().claimed_cell_count()
    );

    Ok(())
}
