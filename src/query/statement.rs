//! Rendered SQL text plus positional parameters.
//!
//! [`StatementBuilder`] follows the `push` / `push_bind` shape of
//! `sqlx::QueryBuilder`, but keeps the parameters inspectable so the count
//! and list statements of a page can be compared and tested without a
//! database.

use super::predicate::{BindValue, PredicateSet, PLACEHOLDER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<BindValue>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }
}

#[derive(Debug)]
pub struct StatementBuilder {
    sql: String,
    params: Vec<BindValue>,
}

impl StatementBuilder {
    pub fn new(head: &str) -> Self {
        Self {
            sql: head.to_string(),
            params: Vec::new(),
        }
    }

    /// Append static SQL. Never pass client-supplied text here.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Append the next numbered placeholder and bind `value` to it.
    pub fn push_bind(&mut self, value: impl Into<BindValue>) -> &mut Self {
        self.params.push(value.into());
        self.sql.push('$');
        self.sql.push_str(&self.params.len().to_string());
        self
    }

    /// Append ` WHERE a AND b ...`, or nothing for an empty set.
    pub fn push_where(&mut self, predicates: &PredicateSet) -> &mut Self {
        if predicates.is_empty() {
            return self;
        }
        self.push(" WHERE ");
        for (i, predicate) in predicates.iter().enumerate() {
            if i > 0 {
                self.push(" AND ");
            }
            let mut values = predicate.values().iter();
            for (j, piece) in predicate.template().split(PLACEHOLDER).enumerate() {
                if j > 0 {
                    // Templates are built with one marker per value.
                    if let Some(value) = values.next() {
                        self.push_bind(value.clone());
                    }
                }
                self.push(piece);
            }
        }
        self
    }

    /// Append ` LIMIT $n OFFSET $m`.
    pub fn push_limit_offset(&mut self, limit: i64, offset: i64) -> &mut Self {
        self.push(" LIMIT ").push_bind(limit);
        self.push(" OFFSET ").push_bind(offset)
    }

    pub fn build(self) -> Statement {
        Statement {
            sql: self.sql,
            params: self.params,
        }
    }
}
