use anyhow::Context;
use skybook_booking::{Console, Desk};
use skybook_catalog::FlightCatalog;
use skybook_store::{Config, StoreError, TicketLog};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // Logs go to stderr so they never interleave with the menus on stdout
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(tickets = %config.tickets.path.display(), "Starting skybook");

    let log = TicketLog::new(&config.tickets.path);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let mut desk = match Desk::open(FlightCatalog::seeded(), log.clone()) {
        Ok(desk) => desk,
        // Restarting the counter would hand out ids already in the log
        Err(e @ StoreError::TicketIdsExhausted(_)) => {
            return Err(e).context("Cannot issue new tickets");
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not replay ticket log");
            writeln!(console, "Warning: {}. Starting with no previous bookings.", e)?;
            Desk::new(FlightCatalog::seeded(), 1, log)
        }
    };

    let reason = skybook_cli::run(&mut desk, &mut console)?;
    tracing::info!(?reason, next_ticket_id = desk.next_ticket_id(), "Session ended");

    Ok(())
}
