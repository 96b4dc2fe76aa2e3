//! Dynamic SQL construction
//!
//! Only property search needs a query shaped at runtime; everything else is a
//! static statement inside its repository.

pub mod builder;
pub mod search;

pub use builder::{BindValue, BuiltQuery, GroupedSelect, OrderedSelect, SelectBuilder};
pub use search::property_search;
