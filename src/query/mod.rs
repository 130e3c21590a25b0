//! Query construction: predicates, sorting, paging, statement rendering and
//! concept grouping. Everything here is pure and request-scoped.

pub mod catalog;
pub mod filter;
pub mod grouping;
pub mod pagination;
pub mod predicate;
pub mod sort;
pub mod statement;

pub use catalog::PagedStatements;
pub use filter::{KernelFilter, LemmaFilter};
pub use grouping::{group_by_language, ConceptGroups, LanguageBucket};
pub use pagination::{total_pages, Page, PageLimits, PageRequest};
pub use predicate::{BindValue, Column, Predicate, PredicateSet};
pub use sort::{SortColumn, SortDirection, SortOrder};
pub use statement::{Statement, StatementBuilder};
