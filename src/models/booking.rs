use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A confirmed reservation. Only the booking store creates these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub id: u64,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub room_number: i64,
    pub room_description: String,
    pub booking_date: NaiveDate,
}

/// A booking request as received from a client, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct NewBooking {
    #[validate(length(min = 1, message = "client_name must not be empty"))]
    pub client_name: String,
    #[validate(length(min = 3, message = "client_phone must be at least 3 characters"))]
    pub client_phone: String,
    #[validate(email(message = "client_email must be a valid email address"))]
    pub client_email: String,
    #[validate(range(min = 1, message = "room_number must be at least 1"))]
    pub room_number: i64,
    #[validate(length(min = 1, message = "room_description must not be empty"))]
    pub room_description: String,
    pub booking_date: NaiveDate,
}

impl Booking {
    pub fn from_new(id: u64, new: NewBooking) -> Self {
        Self {
            id,
            client_name: new.client_name,
            client_phone: new.client_phone,
            client_email: new.client_email,
            room_number: new.room_number,
            room_description: new.room_description,
            booking_date: new.booking_date,
        }
    }

    pub fn occupies(&self, room_number: i64, date: NaiveDate) -> bool {
        self.room_number == room_number && self.booking_date == date
    }
}
