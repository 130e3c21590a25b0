//! Service-level tests for the lexicon query orchestration.
//!
//! # What this covers
//!
//! - Paging envelope and LIMIT/OFFSET for the lemma search
//! - Count and list statements sharing one predicate set
//! - Sort allow-list fallback
//! - Not Found and Invalid Request State failures
//! - Concept grouping order
//! - Exact vs substring kernel_word matching
//! - Store failures surfacing unchanged
//!
//! # Running
//!
//! ```sh
//! cargo test --test lexicon_service
//! ```

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use common::*;
use corpus_api::models::KernelCount;
use corpus_api::query::{BindValue, KernelFilter, LemmaFilter, PageLimits, PageRequest, SortOrder};
use corpus_api::CorpusError;

fn page(n: i64, size: i64) -> PageRequest {
    PageRequest::new(Some(n), Some(size), PageLimits::LEMMAS).unwrap()
}

fn serb_filter() -> LemmaFilter {
    LemmaFilter {
        lang_prefix: Some("SERB".into()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_page_of_five_rows() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let svc = service(store.clone());

    let result = svc
        .search_lemmas(&serb_filter(), SortOrder::default(), page(1, 2))
        .await
        .unwrap();

    assert_eq!(result.page, 1);
    assert_eq!(result.page_size, 2);
    assert_eq!(result.total, 5);
    assert_eq!(result.total_pages, 3);
    let ids: Vec<_> = result.results.iter().map(|l| l.lemma_id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(result.results[0].language.prefix, "SERB");
}

#[tokio::test]
async fn pages_partition_the_result_set() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let svc = service(store.clone());

    let first = svc
        .search_lemmas(&serb_filter(), SortOrder::default(), page(1, 2))
        .await
        .unwrap();
    let mut seen = HashSet::new();
    let mut returned = 0;
    for n in 1..=first.total_pages {
        let p = svc
            .search_lemmas(&serb_filter(), SortOrder::default(), page(n, 2))
            .await
            .unwrap();
        for lemma in &p.results {
            assert!(seen.insert(lemma.lemma_id), "lemma {} on two pages", lemma.lemma_id);
        }
        returned += p.results.len() as i64;
    }
    assert_eq!(returned, first.total);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let result = service(store)
        .search_lemmas(&serb_filter(), SortOrder::default(), page(9, 2))
        .await
        .unwrap();
    assert_eq!(result.total, 5);
    assert!(result.results.is_empty());
}

#[tokio::test]
async fn no_matches_gives_zero_pages() {
    let store = Arc::new(RecordingStore::default());
    let result = service(store)
        .search_lemmas(&LemmaFilter::default(), SortOrder::default(), page(1, 20))
        .await
        .unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages, 0);
    assert!(result.results.is_empty());
}

// ---------------------------------------------------------------------------
// Statement shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn count_and_list_bind_identical_filter_values() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let filter = LemmaFilter {
        lang_prefix: Some("SERB".into()),
        word_type: Some("noun".into()),
        search: Some("vo".into()),
        definition: Some("of".into()),
        ..Default::default()
    };
    service(store.clone())
        .search_lemmas(&filter, SortOrder::default(), page(2, 2))
        .await
        .unwrap();

    let recorded = store.recorded();
    assert_eq!(recorded.len(), 2);
    let (count, list) = (&recorded[0], &recorded[1]);
    assert!(count.sql().starts_with("SELECT COUNT(*)"));

    let n = count.params().len();
    assert_eq!(n, 6);
    assert_eq!(&list.params()[..n], count.params());
    assert_eq!(&list.params()[n..], &[BindValue::Int(2), BindValue::Int(2)]);
}

#[tokio::test]
async fn unknown_sort_key_orders_by_lemma_id() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let order = SortOrder::resolve(Some("definition; DROP TABLE lemmas"), Some("sideways"));
    service(store.clone())
        .search_lemmas(&LemmaFilter::default(), order, page(1, 20))
        .await
        .unwrap();

    let list = &store.recorded()[1];
    assert!(list.sql().contains(" ORDER BY lemma_id ASC LIMIT $1 OFFSET $2"));
    assert!(!list.sql().contains("DROP"));
}

#[tokio::test]
async fn kernel_word_is_substring_in_search_and_exact_by_kernel() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let svc = service(store.clone());

    let filter = LemmaFilter {
        kernel_word: Some("wat".into()),
        ..Default::default()
    };
    svc.search_lemmas(&filter, SortOrder::default(), page(1, 20))
        .await
        .unwrap();
    svc.lemmas_by_kernel("water", None, page(1, 20)).await.unwrap();

    let recorded = store.recorded();
    assert!(recorded[0].sql().ends_with("WHERE kernel_word ILIKE $1"));
    assert_eq!(recorded[0].params(), &[BindValue::Text("%wat%".into())]);
    assert!(recorded[2].sql().ends_with("WHERE kernel_word = $1"));
    assert_eq!(recorded[2].params(), &[BindValue::Text("water".into())]);
}

// ---------------------------------------------------------------------------
// Single lemma and concept views
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_lemma_is_not_found() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let err = service(store).lemma(99999).await.unwrap_err();
    assert!(matches!(err, CorpusError::NotFound(_)));
    assert_eq!(err.to_string(), "Lemma not found");
}

#[tokio::test]
async fn lemma_by_id_projects_language() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let lemma = service(store).lemma(2).await.unwrap();
    assert_eq!(lemma.word_original, "kuća");
    assert_eq!(lemma.language.name, "Serbian");
}

#[tokio::test]
async fn concept_of_lemma_without_kernel_is_invalid_state() {
    let store = Arc::new(RecordingStore::with_lemmas(vec![lemma(3, "TURK", "su", None)]));
    let err = service(store.clone()).lemma_concept(3).await.unwrap_err();

    assert!(matches!(err, CorpusError::InvalidState(_)));
    assert_eq!(err.http_status(), 400);
    // The grouping query never runs.
    assert_eq!(store.recorded().len(), 1);
}

#[tokio::test]
async fn concept_of_missing_lemma_is_not_found() {
    let store = Arc::new(RecordingStore::default());
    let err = service(store).lemma_concept(5).await.unwrap_err();
    assert!(matches!(err, CorpusError::NotFound(_)));
}

#[tokio::test]
async fn concept_groups_languages_first_seen() {
    let store = Arc::new(RecordingStore::with_lemmas(interleaved_concept()));
    let view = service(store.clone()).lemma_concept(12).await.unwrap();

    assert_eq!(view.kernel_word, "water");
    assert_eq!(view.groups.total_lemmas, 4);
    let prefixes: Vec<_> = view
        .groups
        .languages
        .iter()
        .map(|b| b.language.prefix.as_str())
        .collect();
    assert_eq!(prefixes, ["SERB", "POL"]);
    let serbian: Vec<_> = view.groups.languages[0]
        .lemmas
        .iter()
        .map(|l| l.lemma_id)
        .collect();
    assert_eq!(serbian, [10, 11, 13]);

    let grouping = &store.recorded()[1];
    assert!(grouping
        .sql()
        .ends_with("WHERE kernel_word = $1 ORDER BY lang_name, word_original, lemma_id"));
}

#[tokio::test]
async fn concept_by_kernel_filters_language() {
    let store = Arc::new(RecordingStore::with_lemmas(interleaved_concept()));
    let view = service(store)
        .concept_by_kernel("water", Some("POL"))
        .await
        .unwrap();
    assert_eq!(view.groups.total_lemmas, 1);
    assert_eq!(view.groups.languages[0].language.prefix, "POL");
}

#[tokio::test]
async fn concept_by_unknown_kernel_is_not_found() {
    let store = Arc::new(RecordingStore::with_lemmas(interleaved_concept()));
    let err = service(store)
        .concept_by_kernel("Water", None)
        .await
        .unwrap_err();
    assert!(matches!(err, CorpusError::NotFound(_)));
}

// ---------------------------------------------------------------------------
// Kernels, definitions, stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn kernels_bind_min_count() {
    let store = Arc::new(RecordingStore {
        kernels: vec![
            KernelCount {
                kernel_word: "water".into(),
                n_lemmas: 7,
            },
            KernelCount {
                kernel_word: "house".into(),
                n_lemmas: 3,
            },
        ],
        ..Default::default()
    });
    let filter = KernelFilter {
        min_count: 3,
        ..Default::default()
    };
    let kernels_page = PageRequest::new(None, None, PageLimits::AGGREGATES).unwrap();
    let result = service(store.clone())
        .kernels(&filter, kernels_page)
        .await
        .unwrap();

    assert_eq!(result.page_size, 50);
    assert_eq!(result.total, 2);
    let count = &store.recorded()[0];
    assert_eq!(count.params(), &[BindValue::Int(3)]);
    let list = &store.recorded()[1];
    assert!(list.sql().contains("ORDER BY n_lemmas DESC, kernel_word ASC"));
}

#[tokio::test]
async fn kernels_reject_min_count_below_one() {
    let store = Arc::new(RecordingStore::default());
    let filter = KernelFilter {
        min_count: 0,
        ..Default::default()
    };
    let err = service(store.clone())
        .kernels(&filter, PageRequest::new(None, None, PageLimits::AGGREGATES).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, CorpusError::InvalidParameter { param: "min_count", .. }));
    assert!(store.recorded().is_empty());
}

#[tokio::test]
async fn empty_definition_query_matches_any_definition() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    let result = service(store.clone())
        .search_definitions("", None, page(1, 20))
        .await
        .unwrap();
    assert_eq!(result.total, 5);
    let count = &store.recorded()[0];
    assert!(count.sql().ends_with("WHERE definition ILIKE $1"));
    assert_eq!(count.params(), &[BindValue::Text("%%".into())]);
}

#[tokio::test]
async fn definition_search_wraps_query() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    service(store.clone())
        .search_definitions("tečnost", Some("SERB"), page(1, 20))
        .await
        .unwrap();
    let count = &store.recorded()[0];
    assert_eq!(
        count.params(),
        &[
            BindValue::Text("%tečnost%".into()),
            BindValue::Text("SERB".into())
        ]
    );
}

#[tokio::test]
async fn language_lemmas_filter_by_prefix_and_type() {
    let store = Arc::new(RecordingStore::with_lemmas(serbian_lemmas()));
    service(store.clone())
        .language_lemmas("SERB", Some("verb"), page(1, 20))
        .await
        .unwrap();
    let count = &store.recorded()[0];
    assert!(count.sql().ends_with("WHERE lang_prefix = $1 AND word_type = $2"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_surfaces_as_internal() {
    let store = Arc::new(RecordingStore::failing());
    let err = service(store)
        .search_lemmas(&LemmaFilter::default(), SortOrder::default(), page(1, 20))
        .await
        .unwrap_err();
    assert!(matches!(err, CorpusError::Internal(_)));
    assert_eq!(err.http_status(), 500);
}
