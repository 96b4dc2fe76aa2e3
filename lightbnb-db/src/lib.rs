//! lightbnb-db: data-access layer for LightBnB
//!
//! Translates application queries (user lookup, a guest's reservations,
//! filtered property search, inserts) into parameterized PostgreSQL
//! statements over one shared connection pool.
//!
//! ```ignore
//! let pool = lightbnb_db::db::create_pool(&url).await?;
//! let filters = PropertyFilters::default().city("Rome").minimum_rating(4.0);
//! let listings = PropertyRepo::new(&pool).search(&filters, Limit::default()).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;

pub use config::DatabaseConfig;
pub use db::{PropertyRepo, ReservationRepo, UserRepo};
pub use error::{ConfigError, DbError, Result};
pub use models::{
    Email, GuestReservation, Limit, NewProperty, NewUser, Property, PropertyDraft,
    PropertyFilters, PropertyListing, User, ValidationError,
};
