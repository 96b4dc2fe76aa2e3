//! Property search filters
//!
//! `PropertyFilters` is the caller-facing, JSON-shaped set of optional
//! constraints. `validate` turns it into `SearchCriteria`: prices scaled to
//! cents, the city turned into an escaped `ILIKE` pattern.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Highest average rating a review can produce
const MAX_RATING: f64 = 5.0;

/// Optional search constraints on property listings.
///
/// Prices are whole currency units; `cost_per_night` is stored in cents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilters {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i32>,
    #[serde(default)]
    pub minimum_price_per_night: Option<i64>,
    #[serde(default)]
    pub maximum_price_per_night: Option<i64>,
    #[serde(default)]
    pub minimum_rating: Option<f64>,
}

impl PropertyFilters {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn price_range(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum_price_per_night = minimum;
        self.maximum_price_per_night = maximum;
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Validate and normalise into query-ready criteria.
    pub fn validate(&self) -> Result<SearchCriteria, ValidationError> {
        let city_pattern = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(|city| format!("%{}%", escape_like(city)));

        let min_cost_cents = self
            .minimum_price_per_night
            .map(|price| to_cents("minimum_price_per_night", price))
            .transpose()?;
        let max_cost_cents = self
            .maximum_price_per_night
            .map(|price| to_cents("maximum_price_per_night", price))
            .transpose()?;

        if let (Some(min), Some(max)) = (min_cost_cents, max_cost_cents) {
            if min > max {
                return Err(ValidationError::InvalidRange {
                    lower: "minimum_price_per_night",
                    upper: "maximum_price_per_night",
                });
            }
        }

        if let Some(rating) = self.minimum_rating {
            if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
                return Err(ValidationError::OutOfRange {
                    field: "minimum_rating",
                    reason: format!("{} is not between 0 and {}", rating, MAX_RATING),
                });
            }
        }

        Ok(SearchCriteria {
            city_pattern,
            owner_id: self.owner_id,
            min_cost_cents,
            max_cost_cents,
            minimum_rating: self.minimum_rating,
        })
    }
}

/// Validated search constraints, in the units the database compares
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// `ILIKE` pattern with wildcards escaped, wrapped in `%`
    pub city_pattern: Option<String>,
    pub owner_id: Option<i32>,
    pub min_cost_cents: Option<i32>,
    pub max_cost_cents: Option<i32>,
    pub minimum_rating: Option<f64>,
}

/// Scale whole currency units to cents, rejecting negatives and overflow.
fn to_cents(field: &'static str, price: i64) -> Result<i32, ValidationError> {
    if price < 0 {
        return Err(ValidationError::OutOfRange {
            field,
            reason: format!("{} is negative", price),
        });
    }

    price
        .checked_mul(100)
        .and_then(|cents| i32::try_from(cents).ok())
        .ok_or_else(|| ValidationError::OutOfRange {
            field,
            reason: format!("{} is too large", price),
        })
}

/// Escape `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
