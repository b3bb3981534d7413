use skybook_booking::{render, BookingFlow, Console, Desk};
use skybook_store::TicketRepository;
use std::io::{BufRead, Write};
use tracing::{debug, error, info};

pub mod error;

pub use error::AppError;

/// Why the main menu loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Option 2: tickets listed, program ends.
    Listed,
    /// Input closed at the main menu.
    EndOfInput,
}

/// Main menu loop. Returns once the user picks "exit" or input runs out.
pub fn run<T, R, W>(desk: &mut Desk<T>, console: &mut Console<R, W>) -> Result<ExitReason, AppError>
where
    T: TicketRepository,
    R: BufRead,
    W: Write,
{
    loop {
        render::main_menu(console)?;

        let Some(answer) = console.read_line()? else {
            info!("Input closed at main menu");
            writeln!(console)?;
            return Ok(ExitReason::EndOfInput);
        };

        match answer.trim().parse::<i64>() {
            Err(_) => writeln!(console, "Invalid input. Please enter a number.")?,
            Ok(1) => {
                let outcome = BookingFlow::new(desk, console).run()?;
                debug!(?outcome, "Booking flow finished");
            }
            Ok(2) => {
                list_tickets(desk, console)?;
                writeln!(console, "Program ending now. Goodbye.")?;
                return Ok(ExitReason::Listed);
            }
            Ok(_) => writeln!(console, "Invalid option. Please choose 1 or 2.")?,
        }
    }
}

fn list_tickets<T, W>(desk: &Desk<T>, out: &mut W) -> Result<(), AppError>
where
    T: TicketRepository,
    W: Write,
{
    match desk.repository().load_all(desk.catalog()) {
        Ok(records) => {
            info!(count = records.as_ref().map_or(0, |r| r.len()), "Listing tickets");
            render::ticket_listing(out, records.as_deref())?;
        }
        Err(e) => {
            error!(error = %e, "Could not read ticket log for listing");
            render::ticket_listing_unreadable(out)?;
        }
    }
    Ok(())
}
