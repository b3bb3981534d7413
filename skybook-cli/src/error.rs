use skybook_booking::BookingError;
use skybook_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
