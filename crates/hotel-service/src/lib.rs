//! The booking service: one mutex-serialized hotel instance
#![warn(missing_docs)]

mod ledger;

pub use ledger::RoomLedger;

use hotel_core::{BookOutcome, CancelOutcome, Config, Request, RequestHandler, RequestKind};
use parking_lot::Mutex;
use uuid::Uuid;

struct ServiceInner {
    /// The service instance's id
    id: Uuid,

    /// Occupancy of all rooms
    ledger: RoomLedger,
}

/// A request handler serializing all ledger access
///
/// All three operations take the same lock, so a list never observes a
/// half-applied book or cancel. The lock covers only the ledger update:
/// bodies are read before taking it and responses are sent after releasing
/// it, keeping the critical section free of network I/O.
pub struct Service(Mutex<ServiceInner>);

impl RequestHandler for Service {
    fn handle(&self, mut rq: Request) {
        match *rq.kind() {
            RequestKind::BookRoom => {
                let guest = match rq.read_guest_name() {
                    Ok(guest) => guest,
                    Err(_) => return rq.respond_with_err("Could not read guest name!"),
                };
                let (id, outcome) = {
                    let mut inner = self.0.lock();
                    (inner.id, inner.ledger.book(&guest))
                };
                rq.set_service_id(id);
                match outcome {
                    BookOutcome::Booked { room } => rq.respond_with_booked(room, guest),
                    BookOutcome::NoRoomsAvailable => rq.respond_with_no_rooms(),
                }
            }
            RequestKind::CancelBooking => {
                let guest = match rq.read_guest_name() {
                    Ok(guest) => guest,
                    Err(_) => return rq.respond_with_err("Could not read guest name!"),
                };
                let (id, outcome) = {
                    let mut inner = self.0.lock();
                    (inner.id, inner.ledger.cancel(&guest))
                };
                rq.set_service_id(id);
                match outcome {
                    CancelOutcome::Cancelled => rq.respond_with_cancelled(guest),
                    CancelOutcome::NotFound => rq.respond_with_not_found(guest),
                }
            }
            RequestKind::GetBookings => {
                let (id, bookings) = {
                    let inner = self.0.lock();
                    (inner.id, inner.ledger.bookings())
                };
                rq.set_service_id(id);
                rq.respond_with_bookings(&bookings);
            }
        }
    }

    fn shutdown(self) {
        // nothing to do, state is in memory only
    }
}

impl Service {
    /// Create a new service with all rooms free
    pub fn new(config: &Config) -> Self {
        let inner = ServiceInner {
            id: Uuid::new_v4(), // random uuid
            ledger: RoomLedger::new(config.rooms),
        };
        Self(Mutex::new(inner))
    }

    /// Get the service instance's id
    pub fn id(&self) -> Uuid {
        self.0.lock().id
    }
}
