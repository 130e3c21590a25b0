//! Request-scoped filter sets and their predicate expansion.

use super::predicate::{Column, Predicate, PredicateSet};

/// Columns searched by the general `search` input.
const SEARCH_COLUMNS: [Column; 3] = [Column::WordOriginal, Column::WordEn, Column::Definition];

/// Optional filters of the advanced lemma search.
///
/// `lang_prefix` and `word_type` match exactly. Every other field is a
/// case-insensitive substring match, including `kernel_word`; the
/// `by_kernel` endpoints match kernel words exactly instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaFilter {
    pub lang_prefix: Option<String>,
    pub word_type: Option<String>,
    pub search: Option<String>,
    pub word_original: Option<String>,
    pub word_en: Option<String>,
    pub kernel_word: Option<String>,
    pub definition: Option<String>,
}

impl LemmaFilter {
    pub fn predicates(&self) -> PredicateSet {
        let mut set = PredicateSet::new();
        set.push_equals(Column::LangPrefix, self.lang_prefix.as_deref())
            .push_equals(Column::WordType, self.word_type.as_deref())
            .push_contains_any(&SEARCH_COLUMNS, self.search.as_deref())
            .push_contains(Column::WordOriginal, self.word_original.as_deref())
            .push_contains(Column::WordEn, self.word_en.as_deref())
            .push_contains(Column::KernelWord, self.kernel_word.as_deref())
            .push_contains(Column::Definition, self.definition.as_deref());
        set
    }
}

/// Filters of the kernel listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelFilter {
    pub lang_prefix: Option<String>,
    pub word_type: Option<String>,
    /// Minimum number of lemmas a kernel word needs to be listed.
    pub min_count: i64,
}

impl Default for KernelFilter {
    fn default() -> Self {
        Self {
            lang_prefix: None,
            word_type: None,
            min_count: 1,
        }
    }
}

impl KernelFilter {
    pub fn predicates(&self) -> PredicateSet {
        let mut set = PredicateSet::new();
        set.push(Predicate::not_null(Column::KernelWord))
            .push_equals(Column::LangPrefix, self.lang_prefix.as_deref())
            .push_equals(Column::WordType, self.word_type.as_deref());
        set
    }
}

/// Lemmas carrying exactly `kernel_word`, optionally in one language.
pub fn exact_kernel(kernel_word: &str, lang_prefix: Option<&str>) -> PredicateSet {
    let mut set = PredicateSet::new();
    set.push(Predicate::equals(Column::KernelWord, kernel_word))
        .push_equals(Column::LangPrefix, lang_prefix);
    set
}

/// Lemmas whose definition contains `query`, optionally in one language.
pub fn definition_contains(query: &str, lang_prefix: Option<&str>) -> PredicateSet {
    let mut set = PredicateSet::new();
    set.push(Predicate::contains(Column::Definition, query))
        .push_equals(Column::LangPrefix, lang_prefix);
    set
}

/// Lemmas of one language, optionally of one word type.
pub fn language_lemmas(lang_prefix: &str, word_type: Option<&str>) -> PredicateSet {
    let mut set = PredicateSet::new();
    set.push(Predicate::equals(Column::LangPrefix, lang_prefix))
        .push_equals(Column::WordType, word_type);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::predicate::BindValue;

    fn templates(set: &PredicateSet) -> Vec<&str> {
        set.iter().map(|p| p.template()).collect()
    }

    #[test]
    fn no_inputs_no_predicates() {
        assert!(LemmaFilter::default().predicates().is_empty());
    }

    #[test]
    fn fragments_follow_fixed_input_order() {
        let filter = LemmaFilter {
            definition: Some("liquid".into()),
            lang_prefix: Some("SERB".into()),
            search: Some("vod".into()),
            word_type: Some("noun".into()),
            ..Default::default()
        };
        let set = filter.predicates();
        assert_eq!(
            templates(&set),
            [
                "lang_prefix = ?",
                "word_type = ?",
                "(word_original ILIKE ? OR word_en ILIKE ? OR definition ILIKE ?)",
                "definition ILIKE ?",
            ]
        );
        let params: Vec<_> = set.params().cloned().collect();
        assert_eq!(
            params,
            [
                BindValue::Text("SERB".into()),
                BindValue::Text("noun".into()),
                BindValue::Text("%vod%".into()),
                BindValue::Text("%vod%".into()),
                BindValue::Text("%vod%".into()),
                BindValue::Text("%liquid%".into()),
            ]
        );
    }

    #[test]
    fn search_kernel_word_is_substring_match() {
        let filter = LemmaFilter {
            kernel_word: Some("wat".into()),
            ..Default::default()
        };
        let set = filter.predicates();
        assert_eq!(templates(&set), ["kernel_word ILIKE ?"]);
        assert_eq!(set.params().next(), Some(&BindValue::Text("%wat%".into())));
    }

    #[test]
    fn by_kernel_is_exact_match() {
        let set = exact_kernel("Water", Some("POL"));
        assert_eq!(templates(&set), ["kernel_word = ?", "lang_prefix = ?"]);
        assert_eq!(set.params().next(), Some(&BindValue::Text("Water".into())));
    }

    #[test]
    fn empty_definition_query_still_requires_a_definition() {
        let set = definition_contains("", None);
        assert_eq!(templates(&set), ["definition ILIKE ?"]);
        assert_eq!(set.params().next(), Some(&BindValue::Text("%%".into())));
    }

    #[test]
    fn kernel_filter_always_excludes_null_kernels() {
        let set = KernelFilter::default().predicates();
        assert_eq!(templates(&set), ["kernel_word IS NOT NULL"]);
    }
}
