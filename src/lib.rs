//! Corpus API - read-only query service over a multilingual lexical corpus
//!
//! Languages, lemmas, kernel-word concepts and definitions are served from
//! the `lemma_with_example` view through a fixed set of parameterized
//! statements.
//!
//! ## Layers
//! Request filters -> predicates + sort + paging -> catalog statements ->
//! [`store::CorpusStore`] -> row projection / concept grouping -> JSON
//!
//! ```rust
//! use corpus_api::query::{catalog, LemmaFilter, PageLimits, PageRequest, SortOrder};
//!
//! let filter = LemmaFilter {
//!     lang_prefix: Some("SERB".into()),
//!     ..Default::default()
//! };
//! let page = PageRequest::new(Some(1), Some(2), PageLimits::LEMMAS).unwrap();
//! let order = SortOrder::resolve(Some("frequency"), Some("desc"));
//! let stmts = catalog::lemma_page(&filter.predicates(), &order.order_by_sql(), page);
//! assert_eq!(stmts.count.sql(), "SELECT COUNT(*) FROM lemma_with_example WHERE lang_prefix = $1");
//! ```

// Core error handling
pub mod error;

// Row and response types
pub mod models;

// Pure query construction
pub mod query;

// Storage port and the service built on it
pub mod service;
pub mod store;

// Database integration (when enabled)
#[cfg(feature = "database")]
pub mod database;

// REST API (when enabled)
#[cfg(feature = "server")]
pub mod api;

pub use error::{CorpusError, Result};
pub use service::{ConceptView, LexiconService};
pub use store::CorpusStore;
