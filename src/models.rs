//! Row types read from the corpus and the response shapes they project into.
//!
//! Every lemma-bearing endpoint reads [`LemmaRow`] from `lemma_with_example`
//! and converts it with a single `From` impl, so the nested language object
//! is built in exactly one place.

use serde::Serialize;

/// A language as stored in the `languages` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Language {
    pub id: i64,
    pub prefix: String,
    pub iso: Option<String>,
    pub name: String,
}

/// Flat row of the `lemma_with_example` view.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct LemmaRow {
    pub lemma_id: i64,
    pub lang_prefix: String,
    pub lang_iso: Option<String>,
    pub lang_name: String,
    pub word_original: String,
    pub word_en: Option<String>,
    pub kernel_word: Option<String>,
    pub word_type: Option<String>,
    pub frequency: Option<f64>,
    pub alternative_comment: Option<String>,
    pub definition: Option<String>,
}

/// Language descriptor nested inside lemma and concept responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRef {
    pub prefix: String,
    pub iso: Option<String>,
    pub name: String,
}

/// Lemma as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lemma {
    pub lemma_id: i64,
    pub language: LanguageRef,
    pub word_original: String,
    pub word_en: Option<String>,
    pub kernel_word: Option<String>,
    pub word_type: Option<String>,
    pub frequency: Option<f64>,
    pub alternative_comment: Option<String>,
    pub definition: Option<String>,
}

/// Lemma inside a concept bucket; the language lives on the bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LemmaSummary {
    pub lemma_id: i64,
    pub word_original: String,
    pub word_en: Option<String>,
    pub word_type: Option<String>,
    pub frequency: Option<f64>,
    pub alternative_comment: Option<String>,
    pub definition: Option<String>,
}

/// One row of the kernel listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct KernelCount {
    pub kernel_word: String,
    pub n_lemmas: i64,
}

/// Lemma count for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct LanguageStat {
    pub lang_prefix: String,
    pub language: String,
    pub iso: Option<String>,
    pub n_lemmas: i64,
}

impl LemmaRow {
    pub fn language(&self) -> LanguageRef {
        LanguageRef {
            prefix: self.lang_prefix.clone(),
            iso: self.lang_iso.clone(),
            name: self.lang_name.clone(),
        }
    }
}

impl From<LemmaRow> for Lemma {
    fn from(row: LemmaRow) -> Self {
        Lemma {
            language: LanguageRef {
                prefix: row.lang_prefix,
                iso: row.lang_iso,
                name: row.lang_name,
            },
            lemma_id: row.lemma_id,
            word_original: row.word_original,
            word_en: row.word_en,
            kernel_word: row.kernel_word,
            word_type: row.word_type,
            frequency: row.frequency,
            alternative_comment: row.alternative_comment,
            definition: row.definition,
        }
    }
}

impl From<LemmaRow> for LemmaSummary {
    fn from(row: LemmaRow) -> Self {
        LemmaSummary {
            lemma_id: row.lemma_id,
            word_original: row.word_original,
            word_en: row.word_en,
            word_type: row.word_type,
            frequency: row.frequency,
            alternative_comment: row.alternative_comment,
            definition: row.definition,
        }
    }
}
