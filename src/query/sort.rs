//! Sort key allow-list for lemma search.
//!
//! Column names cannot be bound as parameters, so the client key is mapped
//! through a closed enum and only the enum's static name reaches the SQL.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    LemmaId,
    WordOriginal,
    WordEn,
    Frequency,
}

impl SortColumn {
    /// Resolve a client key. Unknown or missing keys fall back to `lemma_id`.
    pub fn resolve(key: Option<&str>) -> Self {
        match key {
            Some("lemma_id") => SortColumn::LemmaId,
            Some("word_original") => SortColumn::WordOriginal,
            Some("word_en") => SortColumn::WordEn,
            Some("frequency") => SortColumn::Frequency,
            _ => SortColumn::LemmaId,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::LemmaId => "lemma_id",
            SortColumn::WordOriginal => "word_original",
            SortColumn::WordEn => "word_en",
            SortColumn::Frequency => "frequency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` in any case selects descending; anything else is ascending.
    pub fn resolve(dir: Option<&str>) -> Self {
        match dir {
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn resolve(sort_by: Option<&str>, sort_dir: Option<&str>) -> Self {
        Self {
            column: SortColumn::resolve(sort_by),
            direction: SortDirection::resolve(sort_dir),
        }
    }

    /// ` ORDER BY ...`, with `lemma_id` as a tie-break so equal sort keys
    /// still page deterministically.
    pub fn order_by_sql(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " ORDER BY {} {}",
            self.column.as_sql(),
            self.direction.as_sql()
        )?;
        if self.column != SortColumn::LemmaId {
            write!(f, ", lemma_id ASC")?;
        }
        Ok(())
    }
}
