use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::models::{Booking, NewBooking};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Room {room_number} is no longer available on {booking_date}.")]
    RoomUnavailable {
        room_number: i64,
        booking_date: NaiveDate,
    },
}

struct Ledger {
    bookings: Vec<Booking>,
    next_id: u64,
}

/// In-memory registry of bookings.
///
/// Bookings and the id counter sit behind a single lock so that the conflict
/// check and the append in [`BookingStore::create`] cannot interleave with
/// another create.
pub struct BookingStore {
    ledger: RwLock<Ledger>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(Ledger {
                bookings: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Nothing panics while the write lock is held, so a poisoned ledger is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All bookings, oldest first.
    pub fn list(&self) -> Vec<Booking> {
        self.read().bookings.clone()
    }

    pub fn count(&self) -> usize {
        self.read().bookings.len()
    }

    /// Records a booking unless its room is already taken on that date.
    ///
    /// Returns the full list of bookings, including the new one at the end.
    pub fn create(&self, candidate: NewBooking) -> Result<Vec<Booking>, BookingError> {
        let mut ledger = self.write();

        let taken = ledger
            .bookings
            .iter()
            .any(|b| b.occupies(candidate.room_number, candidate.booking_date));
        if taken {
            tracing::warn!(
                room_number = candidate.room_number,
                booking_date = %candidate.booking_date,
                "booking rejected: room unavailable"
            );
            return Err(BookingError::RoomUnavailable {
                room_number: candidate.room_number,
                booking_date: candidate.booking_date,
            });
        }

        let id = ledger.next_id;
        ledger.next_id += 1;

        let booking = Booking::from_new(id, candidate);
        tracing::info!(
            id,
            room_number = booking.room_number,
            booking_date = %booking.booking_date,
            "booking created"
        );
        ledger.bookings.push(booking);

        Ok(ledger.bookings.clone())
    }
}
