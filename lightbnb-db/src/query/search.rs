//! Property search query assembly

use super::builder::{BuiltQuery, SelectBuilder};
use crate::models::{Limit, SearchCriteria};

const SEARCH_BASE: &str = r#"
SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id
"#;

/// Build the property search for validated criteria.
///
/// Predicate order: city, owner, minimum price, maximum price. Minimum
/// rating filters the aggregate through `HAVING`. Results are cheapest first.
pub fn property_search(criteria: &SearchCriteria, limit: Limit) -> BuiltQuery {
    SelectBuilder::new(SEARCH_BASE)
        .filter_opt("properties.city ILIKE", criteria.city_pattern.clone())
        .filter_opt("properties.owner_id =", criteria.owner_id)
        .filter_opt("properties.cost_per_night >=", criteria.min_cost_cents)
        .filter_opt("properties.cost_per_night <=", criteria.max_cost_cents)
        .group_by("properties.id")
        .having_opt("AVG(property_reviews.rating)::float8 >=", criteria.minimum_rating)
        .order_by("properties.cost_per_night ASC, properties.id ASC")
        .limit(limit.as_i64())
}
