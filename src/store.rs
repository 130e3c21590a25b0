//! Storage port for the corpus.
//! Implemented by [`crate::database::PgCorpusStore`]; the service depends
//! only on this trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{KernelCount, Language, LanguageStat, LemmaRow};
use crate::query::{PagedStatements, Statement};

/// Read access to the corpus.
///
/// Each call acquires a connection and releases it before returning, on
/// success and on failure alike. The `*_page` methods run the count and the
/// list statement against one consistent snapshot.
#[async_trait]
pub trait CorpusStore: Send + Sync {
    async fn languages(&self, statement: &Statement) -> Result<Vec<Language>>;

    async fn lemmas(&self, statement: &Statement) -> Result<Vec<LemmaRow>>;

    /// Returns the total from `count` and the rows from `list`.
    async fn lemma_page(&self, statements: &PagedStatements) -> Result<(i64, Vec<LemmaRow>)>;

    async fn kernel_page(&self, statements: &PagedStatements) -> Result<(i64, Vec<KernelCount>)>;

    async fn language_stats(&self, statement: &Statement) -> Result<Vec<LanguageStat>>;

    async fn language_stats_page(
        &self,
        statements: &PagedStatements,
    ) -> Result<(i64, Vec<LanguageStat>)>;
}
