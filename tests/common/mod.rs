//! Shared test utilities for the corpus integration tests.
//!
//! [`RecordingStore`] serves canned rows and records every statement it is
//! asked to run, so tests can assert on both the shaped response and the
//! SQL/parameter pairs that produced it.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use corpus_api::models::{KernelCount, Language, LanguageStat, LemmaRow};
use corpus_api::query::{BindValue, PagedStatements, Statement};
use corpus_api::{CorpusError, CorpusStore, LexiconService, Result};

#[derive(Default)]
pub struct RecordingStore {
    pub languages: Vec<Language>,
    /// Rows already matching the test's filters, in lemma_id order.
    pub lemmas: Vec<LemmaRow>,
    pub kernels: Vec<KernelCount>,
    pub stats: Vec<LanguageStat>,
    pub fail: bool,
    pub recorded: Mutex<Vec<Statement>>,
}

impl RecordingStore {
    pub fn with_lemmas(lemmas: Vec<LemmaRow>) -> Self {
        Self {
            lemmas,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn recorded(&self) -> Vec<Statement> {
        self.recorded.lock().unwrap().clone()
    }

    fn record(&self, statement: &Statement) -> Result<()> {
        self.recorded.lock().unwrap().push(statement.clone());
        if self.fail {
            return Err(CorpusError::Internal(anyhow::anyhow!(
                "connection refused (os error 111)"
            )));
        }
        Ok(())
    }

    /// Apply the trailing LIMIT/OFFSET binds of a list statement.
    fn slice<T: Clone>(rows: &[T], list: &Statement) -> Vec<T> {
        let params = list.params();
        let (limit, offset) = match params[params.len() - 2..] {
            [BindValue::Int(limit), BindValue::Int(offset)] => (limit as usize, offset as usize),
            _ => panic!("list statement must end with LIMIT/OFFSET binds: {list:?}"),
        };
        rows.iter().skip(offset).take(limit).cloned().collect()
    }

    /// Minimal evaluation of the exact-match lookups issued via `lemmas()`.
    fn matches(statement: &Statement, row: &LemmaRow) -> bool {
        let sql = statement.sql();
        let params = statement.params();
        if sql.contains("WHERE lemma_id = $1") {
            return params.first() == Some(&BindValue::Int(row.lemma_id));
        }
        if sql.contains("kernel_word = $1") {
            let kernel_ok =
                params.first() == row.kernel_word.clone().map(BindValue::Text).as_ref();
            let lang_ok = !sql.contains("lang_prefix = $2")
                || params.get(1) == Some(&BindValue::Text(row.lang_prefix.clone()));
            return kernel_ok && lang_ok;
        }
        true
    }
}

#[async_trait]
impl CorpusStore for RecordingStore {
    async fn languages(&self, statement: &Statement) -> Result<Vec<Language>> {
        self.record(statement)?;
        Ok(self.languages.clone())
    }

    async fn lemmas(&self, statement: &Statement) -> Result<Vec<LemmaRow>> {
        self.record(statement)?;
        Ok(self
            .lemmas
            .iter()
            .filter(|row| Self::matches(statement, row))
            .cloned()
            .collect())
    }

    async fn lemma_page(&self, statements: &PagedStatements) -> Result<(i64, Vec<LemmaRow>)> {
        self.record(&statements.count)?;
        self.record(&statements.list)?;
        Ok((
            self.lemmas.len() as i64,
            Self::slice(&self.lemmas, &statements.list),
        ))
    }

    async fn kernel_page(&self, statements: &PagedStatements) -> Result<(i64, Vec<KernelCount>)> {
        self.record(&statements.count)?;
        self.record(&statements.list)?;
        Ok((
            self.kernels.len() as i64,
            Self::slice(&self.kernels, &statements.list),
        ))
    }

    async fn language_stats(&self, statement: &Statement) -> Result<Vec<LanguageStat>> {
        self.record(statement)?;
        Ok(self.stats.clone())
    }

    async fn language_stats_page(
        &self,
        statements: &PagedStatements,
    ) -> Result<(i64, Vec<LanguageStat>)> {
        self.record(&statements.count)?;
        self.record(&statements.list)?;
        Ok((
            self.stats.len() as i64,
            Self::slice(&self.stats, &statements.list),
        ))
    }
}

pub fn service(store: Arc<RecordingStore>) -> LexiconService {
    LexiconService::new(store)
}

pub fn lemma(id: i64, prefix: &str, word: &str, kernel: Option<&str>) -> LemmaRow {
    let lang_name = match prefix {
        "SERB" => "Serbian",
        "POL" => "Polish",
        "TURK" => "Turkish",
        _ => "Other",
    };
    LemmaRow {
        lemma_id: id,
        lang_prefix: prefix.to_string(),
        lang_iso: Some(prefix.to_lowercase()[..2].to_string()),
        lang_name: lang_name.to_string(),
        word_original: word.to_string(),
        word_en: Some(format!("{word} (en)")),
        kernel_word: kernel.map(str::to_string),
        word_type: Some("noun".to_string()),
        frequency: Some(id as f64),
        alternative_comment: None,
        definition: Some(format!("definition of {word}")),
    }
}

/// Five Serbian lemmas, ids 1..=5.
pub fn serbian_lemmas() -> Vec<LemmaRow> {
    ["voda", "kuća", "hleb", "so", "nebo"]
        .iter()
        .enumerate()
        .map(|(i, w)| lemma(i as i64 + 1, "SERB", w, Some("water")))
        .collect()
}

/// Concept rows with languages in the order [A, A, B, A].
pub fn interleaved_concept() -> Vec<LemmaRow> {
    vec![
        lemma(10, "SERB", "voda", Some("water")),
        lemma(11, "SERB", "vodica", Some("water")),
        lemma(12, "POL", "woda", Some("water")),
        lemma(13, "SERB", "vodurina", Some("water")),
    ]
}
