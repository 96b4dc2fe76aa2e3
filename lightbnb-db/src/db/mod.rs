//! Database layer - connection pool, migrations and repositories
//!
//! - One shared PgPool, borrowed by every repository
//! - Statements are parameterized; dynamic search goes through `query::SelectBuilder`
//! - Single-statement operations, no explicit transactions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{connect, create_pool, create_pool_with_options};
pub use repos::*;
