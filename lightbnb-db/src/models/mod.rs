//! Domain models with validation at construction
//!
//! Caller input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod email;
pub mod limit;
pub mod user;
pub mod property;
pub mod reservation;
pub mod filters;

pub use validation::ValidationError;
pub use email::Email;
pub use limit::Limit;
pub use user::{NewUser, User};
pub use property::{NewProperty, Property, PropertyDraft, PropertyListing};
pub use reservation::GuestReservation;
pub use filters::{PropertyFilters, SearchCriteria};
