//! Page bounds, LIMIT/OFFSET arithmetic and the paged response envelope.

use serde::Serialize;

use crate::error::{CorpusError, Result};

/// Default and maximum page size for one family of endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: i64,
    pub max_size: i64,
}

impl PageLimits {
    /// Lemma listings.
    pub const LEMMAS: PageLimits = PageLimits {
        default_size: 20,
        max_size: 100,
    };

    /// Aggregate listings (`/kernels`, `/stats/languages_paged`).
    pub const AGGREGATES: PageLimits = PageLimits {
        default_size: 50,
        max_size: 200,
    };
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Validate client input against `limits`. Missing values take the
    /// defaults: page 1 and `limits.default_size`.
    pub fn new(page: Option<i64>, page_size: Option<i64>, limits: PageLimits) -> Result<Self> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(limits.default_size);

        if page < 1 {
            return Err(CorpusError::invalid_parameter(
                "page",
                "must be greater than or equal to 1",
            ));
        }
        if !(1..=limits.max_size).contains(&page_size) {
            return Err(CorpusError::invalid_parameter(
                "page_size",
                format!("must be between 1 and {}", limits.max_size),
            ));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// `ceil(total / page_size)`. Zero rows give zero pages; a zero page size
/// gives one page instead of dividing by zero.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 1;
    }
    if total <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, total: i64, results: Vec<T>) -> Self {
        Self {
            page: request.page,
            page_size: request.page_size,
            total,
            total_pages: total_pages(total, request.page_size),
            results,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
