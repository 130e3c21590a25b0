//! Postgres implementation of [`CorpusStore`].
//!
//! Statements are executed with runtime binding: each [`BindValue`] is
//! bound in order onto the rendered `$n` placeholders. Paged reads open a
//! `REPEATABLE READ, READ ONLY` transaction so the count and the page slice
//! see the same snapshot; the transaction (and its pooled connection) is
//! released when it is committed or dropped on an error path.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{FromRow, PgPool, Postgres};

use crate::error::Result;
use crate::models::{KernelCount, Language, LanguageStat, LemmaRow};
use crate::query::{BindValue, PagedStatements, Statement};
use crate::store::CorpusStore;

const SNAPSHOT: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

pub struct PgCorpusStore {
    pool: PgPool,
}

impl PgCorpusStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all<O>(&self, statement: &Statement, what: &str) -> Result<Vec<O>>
    where
        O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let rows = bind_rows::<O>(statement)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch {what}"))?;
        Ok(rows)
    }

    async fn fetch_page<O>(&self, statements: &PagedStatements, what: &str) -> Result<(i64, Vec<O>)>
    where
        O: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin read transaction")?;
        sqlx::query(SNAPSHOT)
            .execute(&mut *tx)
            .await
            .context("Failed to set snapshot isolation")?;

        let total = bind_count(&statements.count)
            .fetch_one(&mut *tx)
            .await
            .with_context(|| format!("Failed to count {what}"))?;
        let rows = bind_rows::<O>(&statements.list)
            .fetch_all(&mut *tx)
            .await
            .with_context(|| format!("Failed to fetch {what}"))?;

        tx.commit().await.context("Failed to end read transaction")?;
        Ok((total, rows))
    }
}

fn bind_rows<O>(statement: &Statement) -> QueryAs<'_, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    statement
        .params()
        .iter()
        .fold(sqlx::query_as::<_, O>(statement.sql()), |query, value| match value {
            BindValue::Text(text) => query.bind(text.as_str()),
            BindValue::Int(n) => query.bind(*n),
        })
}

fn bind_count(statement: &Statement) -> QueryScalar<'_, Postgres, i64, PgArguments> {
    statement
        .params()
        .iter()
        .fold(sqlx::query_scalar::<_, i64>(statement.sql()), |query, value| match value {
            BindValue::Text(text) => query.bind(text.as_str()),
            BindValue::Int(n) => query.bind(*n),
        })
}

#[async_trait]
impl CorpusStore for PgCorpusStore {
    async fn languages(&self, statement: &Statement) -> Result<Vec<Language>> {
        self.fetch_all(statement, "languages").await
    }

    async fn lemmas(&self, statement: &Statement) -> Result<Vec<LemmaRow>> {
        self.fetch_all(statement, "lemmas").await
    }

    async fn lemma_page(&self, statements: &PagedStatements) -> Result<(i64, Vec<LemmaRow>)> {
        self.fetch_page(statements, "lemmas").await
    }

    async fn kernel_page(&self, statements: &PagedStatements) -> Result<(i64, Vec<KernelCount>)> {
        self.fetch_page(statements, "kernel words").await
    }

    async fn language_stats(&self, statement: &Statement) -> Result<Vec<LanguageStat>> {
        self.fetch_all(statement, "language stats").await
    }

    async fn language_stats_page(
        &self,
        statements: &PagedStatements,
    ) -> Result<(i64, Vec<LanguageStat>)> {
        self.fetch_page(statements, "language stats").await
    }
}
