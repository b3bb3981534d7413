pub mod app_config;
pub mod codec;
pub mod ticket_log;

pub use app_config::Config;
pub use codec::{decode_line, encode_line, LineError};
pub use ticket_log::{BookedSeat, LogReplay, StoreError, TicketLog, TicketRecord, TicketRepository};
