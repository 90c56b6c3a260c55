//! Typed outcomes of the booking operations
//!
//! Domain failures (full house, unknown guest) are ordinary values, not
//! errors. The human-readable message text is rendered only at the
//! transport boundary.

/// Room number as shown to guests (1-based)
pub type RoomNo = u32;

/// Outcome of a book request
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BookOutcome {
    /// The guest was assigned the lowest-numbered free room
    Booked {
        /// Assigned room number
        room: RoomNo,
    },
    /// Every room is occupied; nothing was changed
    NoRoomsAvailable,
}

/// Outcome of a cancel request
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CancelOutcome {
    /// The guest's lowest-numbered room was freed
    Cancelled,
    /// No room is held under that name; nothing was changed
    NotFound,
}

/// One occupied room
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Booking {
    /// Room number
    pub room: RoomNo,
    /// Name the room is held under
    pub guest: String,
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room {}: {}", self.room, self.guest)
    }
}

/// The message text sent over the wire
///
/// Clients print these verbatim, so they are part of the protocol.
pub mod messages {
    use super::RoomNo;

    /// Answer to a successful book request
    pub fn booked(room: RoomNo, guest: &str) -> String {
        format!("Room {room} booked for {guest}")
    }

    /// Answer to a book request when every room is occupied
    pub const NO_ROOMS_AVAILABLE: &str = "No rooms available";

    /// Answer to a successful cancel request
    pub fn cancelled(guest: &str) -> String {
        format!("Booking cancelled for {guest}")
    }

    /// Answer to a cancel request naming an unknown guest
    pub fn not_found(guest: &str) -> String {
        format!("No booking found for {guest}")
    }
}
