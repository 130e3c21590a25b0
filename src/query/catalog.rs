//! The fixed set of statements issued against the corpus.
//!
//! Paged listings are rendered as a [`PagedStatements`] pair from one
//! predicate set, so the count and the list always share their WHERE clause
//! and bound values; only the trailing ORDER BY and LIMIT/OFFSET differ.

use super::filter::KernelFilter;
use super::pagination::PageRequest;
use super::predicate::{Column, Predicate, PredicateSet};
use super::statement::{Statement, StatementBuilder};

const LEMMA_COLUMNS: &str = "SELECT lemma_id::int8 AS lemma_id, lang_prefix, lang_iso, lang_name, \
     word_original, word_en, kernel_word, word_type, frequency::float8 AS frequency, \
     alternative_comment, definition FROM lemma_with_example";

const LEMMA_COUNT: &str = "SELECT COUNT(*) FROM lemma_with_example";

/// Default ordering of fixed lemma listings.
pub const ORDER_BY_LEMMA_ID: &str = " ORDER BY lemma_id";

const ORDER_BY_CONCEPT: &str = " ORDER BY lang_name, word_original, lemma_id";

const LANGUAGE_STATS: &str = "SELECT lang.prefix AS lang_prefix, lang.name AS language, \
     lang.iso_639_1 AS iso, COUNT(l.id) AS n_lemmas \
     FROM lemmas l JOIN languages lang ON l.language_id = lang.id \
     GROUP BY lang.id, lang.prefix, lang.name, lang.iso_639_1 \
     ORDER BY n_lemmas DESC, lang.name ASC";

const LANGUAGE_STATS_COUNT: &str = "SELECT COUNT(*) FROM (SELECT lang.id \
     FROM lemmas l JOIN languages lang ON l.language_id = lang.id \
     GROUP BY lang.id) AS stats";

/// Count and list statements of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedStatements {
    pub count: Statement,
    pub list: Statement,
}

pub fn languages() -> Statement {
    StatementBuilder::new(
        "SELECT id::int8 AS id, prefix, iso_639_1 AS iso, name FROM languages ORDER BY name, id",
    )
    .build()
}

/// `order_by` must come from [`super::sort::SortOrder`] or a constant here.
pub fn lemma_page(predicates: &PredicateSet, order_by: &str, page: PageRequest) -> PagedStatements {
    let mut count = StatementBuilder::new(LEMMA_COUNT);
    count.push_where(predicates);

    let mut list = StatementBuilder::new(LEMMA_COLUMNS);
    list.push_where(predicates)
        .push(order_by)
        .push_limit_offset(page.limit(), page.offset());

    PagedStatements {
        count: count.build(),
        list: list.build(),
    }
}

pub fn lemma_by_id(lemma_id: i64) -> Statement {
    let mut predicates = PredicateSet::new();
    predicates.push(Predicate::equals(Column::LemmaId, lemma_id));

    let mut b = StatementBuilder::new(LEMMA_COLUMNS);
    b.push_where(&predicates).push(ORDER_BY_LEMMA_ID);
    b.build()
}

/// All rows of a concept, ordered for grouping.
pub fn concept_rows(predicates: &PredicateSet) -> Statement {
    let mut b = StatementBuilder::new(LEMMA_COLUMNS);
    b.push_where(predicates).push(ORDER_BY_CONCEPT);
    b.build()
}

pub fn kernel_page(filter: &KernelFilter, page: PageRequest) -> PagedStatements {
    let predicates = filter.predicates();

    let mut count = StatementBuilder::new("SELECT COUNT(*) FROM (SELECT kernel_word FROM lemma_with_example");
    count
        .push_where(&predicates)
        .push(" GROUP BY kernel_word HAVING COUNT(*) >= ")
        .push_bind(filter.min_count)
        .push(") AS kernels");

    let mut list = StatementBuilder::new(
        "SELECT kernel_word, COUNT(*) AS n_lemmas FROM lemma_with_example",
    );
    list.push_where(&predicates)
        .push(" GROUP BY kernel_word HAVING COUNT(*) >= ")
        .push_bind(filter.min_count)
        .push(" ORDER BY n_lemmas DESC, kernel_word ASC")
        .push_limit_offset(page.limit(), page.offset());

    PagedStatements {
        count: count.build(),
        list: list.build(),
    }
}

pub fn language_stats() -> Statement {
    StatementBuilder::new(LANGUAGE_STATS).build()
}

pub fn language_stats_page(page: PageRequest) -> PagedStatements {
    let mut list = StatementBuilder::new(LANGUAGE_STATS);
    list.push_limit_offset(page.limit(), page.offset());
    PagedStatements {
        count: StatementBuilder::new(LANGUAGE_STATS_COUNT).build(),
        list: list.build(),
    }
}
