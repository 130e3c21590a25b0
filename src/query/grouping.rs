//! Concept grouping: rows sharing one kernel word, bucketed by language.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{LanguageRef, LemmaRow, LemmaSummary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageBucket {
    pub language: LanguageRef,
    pub lemmas: Vec<LemmaSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptGroups {
    pub total_lemmas: usize,
    pub languages: Vec<LanguageBucket>,
}

impl ConceptGroups {
    pub fn is_empty(&self) -> bool {
        self.total_lemmas == 0
    }
}

/// Group rows by `lang_prefix`. Buckets appear in first-seen order and each
/// keeps its lemmas in input order. Repeated rows are kept.
pub fn group_by_language<I>(rows: I) -> ConceptGroups
where
    I: IntoIterator<Item = LemmaRow>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut languages: Vec<LanguageBucket> = Vec::new();
    let mut total_lemmas = 0;

    for row in rows {
        total_lemmas += 1;
        let slot = match index.get(&row.lang_prefix) {
            Some(&slot) => slot,
            None => {
                index.insert(row.lang_prefix.clone(), languages.len());
                languages.push(LanguageBucket {
                    language: row.language(),
                    lemmas: Vec::new(),
                });
                languages.len() - 1
            }
        };
        languages[slot].lemmas.push(LemmaSummary::from(row));
    }

    ConceptGroups {
        total_lemmas,
        languages,
    }
}
