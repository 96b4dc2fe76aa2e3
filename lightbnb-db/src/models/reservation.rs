//! Reservation rows as seen by a guest

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Property;

/// A reserved property with the reservation's dates and the property's rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GuestReservation {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_rating: f64,
}
