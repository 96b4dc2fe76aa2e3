//! Property repository
//!
//! - search: dynamic filter query built by `query::property_search`
//! - add: INSERT of all listing fields, RETURNING the stored row

use sqlx::PgPool;
use tracing::debug;

use crate::error::Result;
use crate::models::{Limit, NewProperty, Property, PropertyFilters, PropertyListing};
use crate::query::property_search;

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties with optional filters, cheapest first.
    ///
    /// Filters are validated before the query is built; invalid filters
    /// fail with `DbError::Validation` without touching the database.
    pub async fn search(&self, filters: &PropertyFilters, limit: Limit) -> Result<Vec<PropertyListing>> {
        let criteria = filters.validate()?;
        let mut built = property_search(&criteria, limit);
        debug!(sql = built.sql(), bound = ?built.bound(), "property search");

        let rows = built.query_as::<PropertyListing>().fetch_all(self.pool).await?;

        debug!(rows = rows.len(), "property search returned");
        Ok(rows)
    }

    /// Add a property listing, returning the stored row.
    pub async fn add(&self, property: NewProperty) -> Result<Property> {
        let p = property.fields();
        let stored: Property = sqlx::query_as(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(p.owner_id)
        .bind(&p.title)
        .bind(&p.description)
        .bind(&p.thumbnail_photo_url)
        .bind(&p.cover_photo_url)
        .bind(p.cost_per_night)
        .bind(&p.street)
        .bind(&p.city)
        .bind(&p.province)
        .bind(&p.post_code)
        .bind(&p.country)
        .bind(p.parking_spaces)
        .bind(p.number_of_bathrooms)
        .bind(p.number_of_bedrooms)
        .fetch_one(self.pool)
        .await?;

        debug!(id = stored.id, owner_id = stored.owner_id, "property added");
        Ok(stored)
    }
}
