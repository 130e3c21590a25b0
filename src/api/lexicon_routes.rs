//! Lexicon API endpoints
//!
//! ## Endpoints
//!
//! - `GET /` - liveness
//! - `GET /languages` - all languages, by name
//! - `GET /lemmas` - filtered, sorted, paged lemma search
//! - `GET /lemmas/:id` - one lemma
//! - `GET /lemmas/:id/concept` - concept view of the lemma's kernel word
//! - `GET /lemmas/by_kernel/:kernel_word` - lemmas with exactly this kernel word
//! - `GET /kernels` - kernel words with lemma counts
//! - `GET /definitions/search` - substring search over definitions
//! - `GET /languages/:lang_prefix/lemmas` - lemmas of one language
//! - `GET /concepts/by_kernel/:kernel_word` - concept view by kernel word
//! - `GET /stats/languages` - lemma count per language
//! - `GET /stats/languages_paged` - the same, paged

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::models::{KernelCount, Language, LanguageStat, Lemma};
use crate::query::{KernelFilter, LemmaFilter, Page, PageLimits, SortOrder};
use crate::service::{ConceptView, LexiconService};

use super::extract::{int_param, lemma_id, page_request, LexiconPath, LexiconQuery};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query params for `GET /lemmas`
#[derive(Debug, Default, Deserialize)]
pub struct LemmaSearchQuery {
    /// Language prefix, e.g. SERB, POL, TURK (exact)
    pub lang_prefix: Option<String>,
    /// Looks in word_original, word_en and definition
    pub search: Option<String>,
    pub word_original: Option<String>,
    pub word_en: Option<String>,
    /// Substring match here; the by_kernel endpoints match exactly
    pub kernel_word: Option<String>,
    pub definition: Option<String>,
    /// Word type, e.g. adjective, noun, verb (exact)
    pub word_type: Option<String>,
    /// lemma_id, word_original, word_en or frequency
    pub sort_by: Option<String>,
    /// asc or desc
    pub sort_dir: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl LemmaSearchQuery {
    fn filter(&self) -> LemmaFilter {
        LemmaFilter {
            lang_prefix: self.lang_prefix.clone(),
            word_type: self.word_type.clone(),
            search: self.search.clone(),
            word_original: self.word_original.clone(),
            word_en: self.word_en.clone(),
            kernel_word: self.kernel_word.clone(),
            definition: self.definition.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KernelsQuery {
    pub lang_prefix: Option<String>,
    pub word_type: Option<String>,
    pub min_count: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ByKernelQuery {
    pub lang_prefix: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefinitionSearchQuery {
    /// Text to search in definitions (required)
    pub q: Option<String>,
    pub lang_prefix: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageLemmasQuery {
    pub word_type: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConceptQuery {
    pub lang_prefix: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct KernelLemmasResponse {
    pub kernel_word: String,
    pub lang_prefix: Option<String>,
    #[serde(flatten)]
    pub page: Page<Lemma>,
}

#[derive(Debug, Serialize)]
pub struct DefinitionSearchResponse {
    pub query: String,
    pub lang_prefix: Option<String>,
    #[serde(flatten)]
    pub page: Page<Lemma>,
}

#[derive(Debug, Serialize)]
pub struct LanguageLemmasResponse {
    pub lang_prefix: String,
    pub word_type: Option<String>,
    #[serde(flatten)]
    pub page: Page<Lemma>,
}

#[derive(Debug, Serialize)]
pub struct LemmaConceptResponse {
    pub focus_lemma_id: i64,
    #[serde(flatten)]
    pub concept: ConceptView,
}

#[derive(Debug, Serialize)]
pub struct KernelConceptResponse {
    pub lang_prefix: Option<String>,
    #[serde(flatten)]
    pub concept: ConceptView,
}

/// Empty query-string values count as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "corpus-api",
    })
}

/// GET /languages
async fn list_languages(State(service): State<LexiconService>) -> Result<Json<Vec<Language>>> {
    Ok(Json(service.languages().await?))
}

/// GET /lemmas
///
/// ```text
/// GET /lemmas?lang_prefix=SERB&search=vod&sort_by=frequency&sort_dir=desc&page=1&page_size=20
/// ```
async fn search_lemmas(
    State(service): State<LexiconService>,
    LexiconQuery(query): LexiconQuery<LemmaSearchQuery>,
) -> Result<Json<Page<Lemma>>> {
    let page = page_request(
        query.page.as_deref(),
        query.page_size.as_deref(),
        PageLimits::LEMMAS,
    )?;
    let order = SortOrder::resolve(query.sort_by.as_deref(), query.sort_dir.as_deref());
    let page = service.search_lemmas(&query.filter(), order, page).await?;
    Ok(Json(page))
}

/// GET /lemmas/:id
async fn get_lemma(
    State(service): State<LexiconService>,
    LexiconPath(id): LexiconPath<String>,
) -> Result<Json<Lemma>> {
    Ok(Json(service.lemma(lemma_id(&id)?).await?))
}

/// GET /lemmas/:id/concept
async fn lemma_concept(
    State(service): State<LexiconService>,
    LexiconPath(id): LexiconPath<String>,
) -> Result<Json<LemmaConceptResponse>> {
    let focus_lemma_id = lemma_id(&id)?;
    let concept = service.lemma_concept(focus_lemma_id).await?;
    Ok(Json(LemmaConceptResponse {
        focus_lemma_id,
        concept,
    }))
}

/// GET /kernels
async fn list_kernels(
    State(service): State<LexiconService>,
    LexiconQuery(query): LexiconQuery<KernelsQuery>,
) -> Result<Json<Page<KernelCount>>> {
    let page = page_request(
        query.page.as_deref(),
        query.page_size.as_deref(),
        PageLimits::AGGREGATES,
    )?;
    let filter = KernelFilter {
        lang_prefix: query.lang_prefix,
        word_type: query.word_type,
        min_count: int_param("min_count", query.min_count.as_deref())?.unwrap_or(1),
    };
    Ok(Json(service.kernels(&filter, page).await?))
}

/// GET /lemmas/by_kernel/:kernel_word
async fn lemmas_by_kernel(
    State(service): State<LexiconService>,
    LexiconPath(kernel_word): LexiconPath<String>,
    LexiconQuery(query): LexiconQuery<ByKernelQuery>,
) -> Result<Json<KernelLemmasResponse>> {
    let page = page_request(
        query.page.as_deref(),
        query.page_size.as_deref(),
        PageLimits::LEMMAS,
    )?;
    let lang_prefix = non_empty(query.lang_prefix);
    let page = service
        .lemmas_by_kernel(&kernel_word, lang_prefix.as_deref(), page)
        .await?;
    Ok(Json(KernelLemmasResponse {
        kernel_word,
        lang_prefix,
        page,
    }))
}

/// GET /definitions/search
async fn search_definitions(
    State(service): State<LexiconService>,
    LexiconQuery(query): LexiconQuery<DefinitionSearchQuery>,
) -> Result<Json<DefinitionSearchResponse>> {
    let q = query
        .q
        .ok_or_else(|| CorpusError::invalid_parameter("q", "field required"))?;
    let page = page_request(
        query.page.as_deref(),
        query.page_size.as_deref(),
        PageLimits::LEMMAS,
    )?;
    let lang_prefix = non_empty(query.lang_prefix);
    let page = service
        .search_definitions(&q, lang_prefix.as_deref(), page)
        .await?;
    Ok(Json(DefinitionSearchResponse {
        query: q,
        lang_prefix,
        page,
    }))
}

/// GET /languages/:lang_prefix/lemmas
async fn language_lemmas(
    State(service): State<LexiconService>,
    LexiconPath(lang_prefix): LexiconPath<String>,
    LexiconQuery(query): LexiconQuery<LanguageLemmasQuery>,
) -> Result<Json<LanguageLemmasResponse>> {
    let page = page_request(
        query.page.as_deref(),
        query.page_size.as_deref(),
        PageLimits::LEMMAS,
    )?;
    let word_type = non_empty(query.word_type);
    let page = service
        .language_lemmas(&lang_prefix, word_type.as_deref(), page)
        .await?;
    Ok(Json(LanguageLemmasResponse {
        lang_prefix,
        word_type,
        page,
    }))
}

/// GET /concepts/by_kernel/:kernel_word
async fn concept_by_kernel(
    State(service): State<LexiconService>,
    LexiconPath(kernel_word): LexiconPath<String>,
    LexiconQuery(query): LexiconQuery<ConceptQuery>,
) -> Result<Json<KernelConceptResponse>> {
    let lang_prefix = non_empty(query.lang_prefix);
    let concept = service
        .concept_by_kernel(&kernel_word, lang_prefix.as_deref())
        .await?;
    Ok(Json(KernelConceptResponse {
        lang_prefix,
        concept,
    }))
}

/// GET /stats/languages
async fn language_stats(
    State(service): State<LexiconService>,
) -> Result<Json<Vec<LanguageStat>>> {
    Ok(Json(service.language_stats().await?))
}

/// GET /stats/languages_paged
async fn language_stats_paged(
    State(service): State<LexiconService>,
    LexiconQuery(query): LexiconQuery<PageQuery>,
) -> Result<Json<Page<LanguageStat>>> {
    let page = page_request(
        query.page.as_deref(),
        query.page_size.as_deref(),
        PageLimits::AGGREGATES,
    )?;
    Ok(Json(service.language_stats_paged(page).await?))
}

// ============================================================================
// Router
// ============================================================================

/// Create router for lexicon endpoints
pub fn create_lexicon_router(service: LexiconService) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/languages", get(list_languages))
        .route("/languages/:lang_prefix/lemmas", get(language_lemmas))
        .route("/lemmas", get(search_lemmas))
        .route("/lemmas/by_kernel/:kernel_word", get(lemmas_by_kernel))
        .route("/lemmas/:id", get(get_lemma))
        .route("/lemmas/:id/concept", get(lemma_concept))
        .route("/kernels", get(list_kernels))
        .route("/definitions/search", get(search_definitions))
        .route("/concepts/by_kernel/:kernel_word", get(concept_by_kernel))
        .route("/stats/languages", get(language_stats))
        .route("/stats/languages_paged", get(language_stats_paged))
        .with_state(service)
}

// ============================================================================
// Tests
// ============================================================================
