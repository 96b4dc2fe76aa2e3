//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and maps one application query to
//! one parameterized statement. Failures surface as `DbError`.

pub mod users;
pub mod reservations;
pub mod properties;

pub use users::UserRepo;
pub use reservations::ReservationRepo;
pub use properties::PropertyRepo;
