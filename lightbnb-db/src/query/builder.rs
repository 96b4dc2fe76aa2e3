//! Structured `SELECT` builder on top of `sqlx::QueryBuilder`
//!
//! A predicate is a left-hand fragment (`"properties.owner_id ="`) plus exactly
//! one value. The value goes through `push_bind`, so sqlx numbers the `$n`
//! placeholders and fragments never carry one. Clause order is carried by the
//! builder type:
//!
//! - `SelectBuilder`: `WHERE`/`AND` predicates, then `group_by` or `order_by`
//! - `GroupedSelect`: `HAVING`/`AND` predicates, then `order_by`
//! - `OrderedSelect`: optional `limit`, which finishes the statement

use std::fmt::Debug;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{Encode, FromRow, Postgres, QueryBuilder, Type};

/// A value that can fill one placeholder
pub trait BindValue: Encode<'static, Postgres> + Type<Postgres> + Send + Debug + 'static {}

impl<T> BindValue for T where T: Encode<'static, Postgres> + Type<Postgres> + Send + Debug + 'static {}

struct Statement {
    query: QueryBuilder<'static, Postgres>,
    bound: Vec<String>,
}

impl Statement {
    fn predicate<T: BindValue>(&mut self, keyword: &str, lhs: &str, value: T) {
        self.bound.push(format!("{value:?}"));
        self.query.push(keyword).push(lhs).push(' ').push_bind(value);
    }

    fn order_by(mut self, ordering: &str) -> OrderedSelect {
        self.query.push(" ORDER BY ").push(ordering);
        OrderedSelect { stmt: self }
    }

    fn finish(self) -> BuiltQuery {
        BuiltQuery {
            query: self.query,
            bound: self.bound,
        }
    }
}

/// Builder for a single `SELECT` statement
pub struct SelectBuilder {
    stmt: Statement,
    predicates: usize,
}

impl SelectBuilder {
    /// Start from the `SELECT ... FROM ... JOIN ...` head. Surrounding whitespace is trimmed.
    pub fn new(base: &str) -> Self {
        Self {
            stmt: Statement {
                query: QueryBuilder::new(base.trim()),
                bound: Vec::new(),
            },
            predicates: 0,
        }
    }

    /// Add a `WHERE` predicate. The first one opens `WHERE`, later ones are joined with `AND`.
    pub fn filter<T: BindValue>(mut self, lhs: &str, value: T) -> Self {
        let keyword = if self.predicates == 0 { " WHERE " } else { " AND " };
        self.stmt.predicate(keyword, lhs, value);
        self.predicates += 1;
        self
    }

    /// Add a predicate only when `value` is present.
    pub fn filter_opt<T: BindValue>(self, lhs: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.filter(lhs, value),
            None => self,
        }
    }

    pub fn group_by(mut self, columns: &str) -> GroupedSelect {
        self.stmt.query.push(" GROUP BY ").push(columns);
        GroupedSelect {
            stmt: self.stmt,
            predicates: 0,
        }
    }

    pub fn order_by(self, ordering: &str) -> OrderedSelect {
        self.stmt.order_by(ordering)
    }

    pub fn build(self) -> BuiltQuery {
        self.stmt.finish()
    }
}

/// A `SELECT` past `GROUP BY`, accepting post-aggregation predicates
pub struct GroupedSelect {
    stmt: Statement,
    predicates: usize,
}

impl GroupedSelect {
    /// Add a `HAVING` predicate, joined with `AND` like `filter`.
    pub fn having<T: BindValue>(mut self, lhs: &str, value: T) -> Self {
        let keyword = if self.predicates == 0 { " HAVING " } else { " AND " };
        self.stmt.predicate(keyword, lhs, value);
        self.predicates += 1;
        self
    }

    pub fn having_opt<T: BindValue>(self, lhs: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.having(lhs, value),
            None => self,
        }
    }

    pub fn order_by(self, ordering: &str) -> OrderedSelect {
        self.stmt.order_by(ordering)
    }

    pub fn build(self) -> BuiltQuery {
        self.stmt.finish()
    }
}

/// A `SELECT` with its ordering fixed
pub struct OrderedSelect {
    stmt: Statement,
}

impl OrderedSelect {
    /// Cap the result at `rows` and finish the statement.
    pub fn limit(mut self, rows: i64) -> BuiltQuery {
        self.stmt.bound.push(rows.to_string());
        self.stmt.query.push(" LIMIT ").push_bind(rows);
        self.stmt.finish()
    }

    pub fn build(self) -> BuiltQuery {
        self.stmt.finish()
    }
}

/// Rendered statement with its values already bound
pub struct BuiltQuery {
    query: QueryBuilder<'static, Postgres>,
    bound: Vec<String>,
}

impl BuiltQuery {
    /// SQL text with `$1..$n` placeholders.
    pub fn sql(&self) -> &str {
        self.query.sql()
    }

    /// `Debug` rendering of each bound value, in placeholder order.
    pub fn bound(&self) -> &[String] {
        &self.bound
    }

    /// Prepare the typed query. Call once per built statement.
    pub fn query_as<O>(&mut self) -> QueryAs<'_, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        self.query.build_query_as::<O>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_select_with_limit() {
        let built = SelectBuilder::new("SELECT * FROM users")
            .order_by("id")
            .limit(10);
        assert_eq!(built.sql(), "SELECT * FROM users ORDER BY id LIMIT $1");
        assert_eq!(built.bound(), ["10"]);
    }

    #[test]
    fn first_predicate_opens_where_rest_use_and() {
        let built = SelectBuilder::new("SELECT * FROM t")
            .filter("a =", 1i32)
            .filter("b =", "x".to_owned())
            .filter("c >=", 2i32)
            .build();
        assert_eq!(built.sql(), "SELECT * FROM t WHERE a = $1 AND b = $2 AND c >= $3");
        assert_eq!(built.bound(), ["1", "\"x\"", "2"]);
    }

    #[test]
    fn optional_predicates_skip_absent_values() {
        let built = SelectBuilder::new("SELECT * FROM t")
            .filter_opt("a =", None::<i32>)
            .filter_opt("b =", Some(7i32))
            .build();
        assert_eq!(built.sql(), "SELECT * FROM t WHERE b = $1");
        assert_eq!(built.bound(), ["7"]);
    }

    #[test]
    fn having_numbers_continue_after_where() {
        let built = SelectBuilder::new("SELECT id, AVG(r) FROM t")
            .filter("a =", 1i32)
            .group_by("id")
            .having_opt("AVG(r) >=", Some(4.0f64))
            .order_by("id")
            .limit(5);
        assert_eq!(
            built.sql(),
            "SELECT id, AVG(r) FROM t WHERE a = $1 GROUP BY id HAVING AVG(r) >= $2 ORDER BY id LIMIT $3"
        );
        assert_eq!(built.bound(), ["1", "4.0", "5"]);
    }

    #[test]
    fn having_without_where() {
        let built = SelectBuilder::new("SELECT id FROM t")
            .group_by("id")
            .having("COUNT(*) >", 1i64)
            .having("MAX(r) <", 3i32)
            .build();
        assert_eq!(
            built.sql(),
            "SELECT id FROM t GROUP BY id HAVING COUNT(*) > $1 AND MAX(r) < $2"
        );
    }

    #[test]
    fn question_marks_in_fragments_are_left_alone() {
        let built = SelectBuilder::new("SELECT * FROM docs")
            .filter("tags ?", "draft".to_owned())
            .filter("title =", "why?".to_owned())
            .build();
        assert_eq!(built.sql(), "SELECT * FROM docs WHERE tags ? $1 AND title = $2");
        assert_eq!(built.bound(), ["\"draft\"", "\"why?\""]);
    }

    #[test]
    fn base_whitespace_is_trimmed() {
        let built = SelectBuilder::new("\n  SELECT 1\n  ").build();
        assert_eq!(built.sql(), "SELECT 1");
        assert!(built.bound().is_empty());
    }
}
