//! The room ledger backing one hotel instance

use hotel_core::{BookOutcome, Booking, CancelOutcome, RoomNo};

/// Fixed-size ledger of room slots
///
/// Slot `i` holds room number `i + 1`. Availability is always derived from
/// the slots themselves; there is no separate counter that could drift out
/// of sync with the actual occupancy.
pub struct RoomLedger {
    /// Occupant name per room, `None` while the room is free
    slots: Vec<Option<String>>,
}

impl RoomLedger {
    /// Create a ledger with `rooms` free rooms.
    pub fn new(rooms: u32) -> Self {
        Self {
            slots: vec![None; rooms as usize],
        }
    }

    /// Get the total number of rooms.
    pub fn total(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Get the number of currently free rooms.
    pub fn available(&self) -> u32 {
        self.slots.iter().filter(|slot| slot.is_none()).count() as u32
    }

    /// Assign `guest` to the lowest-numbered free room.
    ///
    /// Names are not validated or deduplicated: an empty name books
    /// normally and the same name may hold several rooms.
    pub fn book(&mut self, guest: &str) -> BookOutcome {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(guest.to_owned());
                return BookOutcome::Booked {
                    room: i as RoomNo + 1,
                };
            }
        }
        BookOutcome::NoRoomsAvailable
    }

    /// Free the lowest-numbered room held under `guest` (exact match).
    pub fn cancel(&mut self, guest: &str) -> CancelOutcome {
        for slot in self.slots.iter_mut() {
            if slot.as_deref() == Some(guest) {
                *slot = None;
                return CancelOutcome::Cancelled;
            }
        }
        CancelOutcome::NotFound
    }

    /// Get all current bookings in ascending room order.
    pub fn bookings(&self) -> Vec<Booking> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.as_ref().map(|guest| Booking {
                    room: i as RoomNo + 1,
                    guest: guest.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_availability(ledger: &RoomLedger) {
        assert_eq!(
            ledger.available() as usize,
            ledger.total() as usize - ledger.bookings().len(),
            "available rooms must equal total minus occupied"
        );
    }

    #[test]
    fn availability_is_derived_from_the_slots() {
        let mut ledger = RoomLedger::new(3);
        assert_eq!(ledger.total(), 3);
        assert_eq!(ledger.available(), 3);

        assert_eq!(ledger.book("Alice"), BookOutcome::Booked { room: 1 });
        assert_availability(&ledger);
        assert_eq!(ledger.available(), 2);

        assert_eq!(ledger.book("Bob"), BookOutcome::Booked { room: 2 });
        assert_availability(&ledger);

        assert_eq!(ledger.cancel("Alice"), CancelOutcome::Cancelled);
        assert_availability(&ledger);
        assert_eq!(ledger.available(), 2);

        // A failed cancel must not change the count
        assert_eq!(ledger.cancel("Nobody"), CancelOutcome::NotFound);
        assert_availability(&ledger);
        assert_eq!(ledger.available(), 2);
    }

    #[test]
    fn full_ledger_has_no_availability() {
        let mut ledger = RoomLedger::new(2);
        ledger.book("Alice");
        ledger.book("Bob");
        assert_eq!(ledger.available(), 0);

        // A failed booking must not change the count either
        assert_eq!(ledger.book("Carol"), BookOutcome::NoRoomsAvailable);
        assert_availability(&ledger);
        assert_eq!(ledger.available(), 0);

        ledger.cancel("Bob");
        assert_eq!(ledger.available(), 1);
        assert_availability(&ledger);
    }
}
