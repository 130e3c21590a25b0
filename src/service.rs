//! Lexicon query service.
//!
//! Composes filters, sort order and paging into catalog statements, runs
//! them through a [`CorpusStore`], and shapes the rows into responses.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CorpusError, Result};
use crate::models::{KernelCount, Language, LanguageStat, Lemma};
use crate::query::catalog::{self, ORDER_BY_LEMMA_ID};
use crate::query::filter::{definition_contains, exact_kernel, language_lemmas};
use crate::query::{
    group_by_language, ConceptGroups, KernelFilter, LemmaFilter, Page, PageRequest, PredicateSet,
    SortOrder,
};
use crate::store::CorpusStore;

/// Concept view keyed by one kernel word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptView {
    pub kernel_word: String,
    #[serde(flatten)]
    pub groups: ConceptGroups,
}

#[derive(Clone)]
pub struct LexiconService {
    store: Arc<dyn CorpusStore>,
}

impl LexiconService {
    pub fn new(store: Arc<dyn CorpusStore>) -> Self {
        Self { store }
    }

    pub async fn languages(&self) -> Result<Vec<Language>> {
        self.store.languages(&catalog::languages()).await
    }

    /// Advanced search: filters, allow-listed sort, paging.
    pub async fn search_lemmas(
        &self,
        filter: &LemmaFilter,
        order: SortOrder,
        page: PageRequest,
    ) -> Result<Page<Lemma>> {
        self.lemma_page(&filter.predicates(), &order.order_by_sql(), page)
            .await
    }

    pub async fn lemma(&self, lemma_id: i64) -> Result<Lemma> {
        let rows = self.store.lemmas(&catalog::lemma_by_id(lemma_id)).await?;
        if rows.len() > 1 {
            warn!(lemma_id, rows = rows.len(), "lemma id matched more than one row");
        }
        rows.into_iter()
            .next()
            .map(Lemma::from)
            .ok_or_else(|| CorpusError::not_found("Lemma not found"))
    }

    /// Concept view of the lemma's kernel word.
    pub async fn lemma_concept(&self, lemma_id: i64) -> Result<ConceptView> {
        let focus = self.lemma(lemma_id).await?;
        let kernel_word = focus
            .kernel_word
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                CorpusError::invalid_state(
                    "This lemma has no kernel_word defined, cannot build concept.",
                )
            })?;

        let rows = self
            .store
            .lemmas(&catalog::concept_rows(&exact_kernel(&kernel_word, None)))
            .await?;
        Ok(ConceptView {
            groups: group_by_language(rows),
            kernel_word,
        })
    }

    pub async fn concept_by_kernel(
        &self,
        kernel_word: &str,
        lang_prefix: Option<&str>,
    ) -> Result<ConceptView> {
        let rows = self
            .store
            .lemmas(&catalog::concept_rows(&exact_kernel(kernel_word, lang_prefix)))
            .await?;
        if rows.is_empty() {
            return Err(CorpusError::not_found(
                "No lemmas found for this kernel_word",
            ));
        }
        Ok(ConceptView {
            kernel_word: kernel_word.to_string(),
            groups: group_by_language(rows),
        })
    }

    pub async fn kernels(
        &self,
        filter: &KernelFilter,
        page: PageRequest,
    ) -> Result<Page<KernelCount>> {
        if filter.min_count < 1 {
            return Err(CorpusError::invalid_parameter(
                "min_count",
                "must be greater than or equal to 1",
            ));
        }
        let statements = catalog::kernel_page(filter, page);
        debug!(sql = statements.list.sql(), "kernel page");
        let (total, rows) = self.store.kernel_page(&statements).await?;
        Ok(Page::new(page, total, rows))
    }

    pub async fn lemmas_by_kernel(
        &self,
        kernel_word: &str,
        lang_prefix: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Lemma>> {
        self.lemma_page(&exact_kernel(kernel_word, lang_prefix), ORDER_BY_LEMMA_ID, page)
            .await
    }

    /// An empty `query` matches every lemma that has a definition.
    pub async fn search_definitions(
        &self,
        query: &str,
        lang_prefix: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Lemma>> {
        self.lemma_page(&definition_contains(query, lang_prefix), ORDER_BY_LEMMA_ID, page)
            .await
    }

    pub async fn language_lemmas(
        &self,
        lang_prefix: &str,
        word_type: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Lemma>> {
        self.lemma_page(&language_lemmas(lang_prefix, word_type), ORDER_BY_LEMMA_ID, page)
            .await
    }

    pub async fn language_stats(&self) -> Result<Vec<LanguageStat>> {
        self.store.language_stats(&catalog::language_stats()).await
    }

    pub async fn language_stats_paged(&self, page: PageRequest) -> Result<Page<LanguageStat>> {
        let (total, rows) = self
            .store
            .language_stats_page(&catalog::language_stats_page(page))
            .await?;
        Ok(Page::new(page, total, rows))
    }

    /// Count, then fetch, from one predicate set.
    async fn lemma_page(
        &self,
        predicates: &PredicateSet,
        order_by: &str,
        page: PageRequest,
    ) -> Result<Page<Lemma>> {
        let statements = catalog::lemma_page(predicates, order_by, page);
        debug!(
            sql = statements.list.sql(),
            params = statements.list.params().len(),
            "lemma page"
        );
        let (total, rows) = self.store.lemma_page(&statements).await?;
        Ok(Page::new(page, total, rows).map(Lemma::from))
    }
}
