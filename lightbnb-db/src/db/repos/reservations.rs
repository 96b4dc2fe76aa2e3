//! Reservation repository

use sqlx::PgPool;
use tracing::debug;

use crate::error::Result;
use crate::models::{GuestReservation, Limit};

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Properties a guest has reserved, with reservation dates and average rating.
    ///
    /// Earliest start date first, at most `limit` rows. Properties without
    /// reviews are left out by the inner join.
    pub async fn list_for_guest(&self, guest_id: i32, limit: Limit) -> Result<Vec<GuestReservation>> {
        let rows: Vec<GuestReservation> = sqlx::query_as(
            r#"
            SELECT
                properties.*,
                reservations.id AS reservation_id,
                reservations.start_date,
                reservations.end_date,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE reservations.guest_id = $1
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date ASC
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        debug!(guest_id, rows = rows.len(), "reservations listed");
        Ok(rows)
    }
}
