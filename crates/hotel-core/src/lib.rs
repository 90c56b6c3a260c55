//! Infrastructure shared between the booking service, the HTTP server and
//! the test harness.
#![warn(missing_docs)]

mod booking;
mod request;

pub use booking::{messages, BookOutcome, Booking, CancelOutcome, RoomNo};
pub use request::{RawRequest, Request, RequestHandler, RequestKind};

/// Configuration of the booking service
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of rooms the hotel has
    pub rooms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self { rooms: 5 }
    }
}
