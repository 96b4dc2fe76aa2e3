//! Row cap for list queries

use serde::{Deserialize, Serialize};

/// Default rows when the caller doesn't ask for a specific count
pub const DEFAULT_LIMIT: u32 = 10;

/// Row cap applied through SQL `LIMIT`
///
/// The value is passed through unchanged. `Limit::new(0)` renders `LIMIT 0`
/// and returns no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Limit(u32);

impl Limit {
    pub fn new(rows: u32) -> Self {
        Self(rows)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Value to bind for SQL `LIMIT`.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<u32> for Limit {
    fn from(rows: u32) -> Self {
        Self::new(rows)
    }
}

impl From<Limit> for u32 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

impl From<Option<u32>> for Limit {
    fn from(rows: Option<u32>) -> Self {
        rows.map(Self::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten() {
        assert_eq!(Limit::default().get(), 10);
        assert_eq!(Limit::from(None).get(), 10);
    }

    #[test]
    fn keeps_requested_rows() {
        assert_eq!(Limit::new(0).get(), 0);
        assert_eq!(Limit::new(5).as_i64(), 5);
        assert_eq!(Limit::new(250).as_i64(), 250);
        assert_eq!(Limit::from(Some(0)).get(), 0);
    }

    #[test]
    fn deserializes_zero_as_zero() {
        let limit: Limit = serde_json::from_str("0").unwrap();
        assert_eq!(limit.get(), 0);
    }
}
