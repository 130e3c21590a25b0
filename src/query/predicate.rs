//! Predicate fragments with bound values.
//!
//! A [`Predicate`] is a SQL template built only from static column names and
//! operators, with `?` marking each bound value. Client text only ever
//! travels in [`BindValue`]s; [`super::statement::StatementBuilder`] turns the
//! markers into numbered `$n` placeholders.

/// Marker replaced by a numbered placeholder when a statement is rendered.
pub(crate) const PLACEHOLDER: char = '?';

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Int(value)
    }
}

/// Columns of `lemma_with_example` that filters may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    LemmaId,
    LangPrefix,
    WordType,
    WordOriginal,
    WordEn,
    KernelWord,
    Definition,
}

impl Column {
    pub fn as_sql(self) -> &'static str {
        match self {
            Column::LemmaId => "lemma_id",
            Column::LangPrefix => "lang_prefix",
            Column::WordType => "word_type",
            Column::WordOriginal => "word_original",
            Column::WordEn => "word_en",
            Column::KernelWord => "kernel_word",
            Column::Definition => "definition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    template: String,
    values: Vec<BindValue>,
}

impl Predicate {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn values(&self) -> &[BindValue] {
        &self.values
    }

    /// `column = ?`
    pub fn equals(column: Column, value: impl Into<BindValue>) -> Self {
        Self {
            template: format!("{} = {}", column.as_sql(), PLACEHOLDER),
            values: vec![value.into()],
        }
    }

    /// `column ILIKE ?` with the text wrapped as `%text%`.
    pub fn contains(column: Column, text: &str) -> Self {
        Self {
            template: format!("{} ILIKE {}", column.as_sql(), PLACEHOLDER),
            values: vec![BindValue::Text(contains_pattern(text))],
        }
    }

    /// `(a ILIKE ? OR b ILIKE ? ...)`, binding the same pattern once per column.
    pub fn contains_any(columns: &[Column], text: &str) -> Self {
        let pattern = contains_pattern(text);
        let arms: Vec<String> = columns
            .iter()
            .map(|c| format!("{} ILIKE {}", c.as_sql(), PLACEHOLDER))
            .collect();
        Self {
            template: format!("({})", arms.join(" OR ")),
            values: columns
                .iter()
                .map(|_| BindValue::Text(pattern.clone()))
                .collect(),
        }
    }

    /// `column IS NOT NULL`
    pub fn not_null(column: Column) -> Self {
        Self {
            template: format!("{} IS NOT NULL", column.as_sql()),
            values: Vec::new(),
        }
    }
}

/// Ordered predicates combined with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    predicates: Vec<Predicate>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, predicate: Predicate) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    pub fn push_equals(&mut self, column: Column, value: Option<&str>) -> &mut Self {
        if let Some(value) = present(value) {
            self.push(Predicate::equals(column, value));
        }
        self
    }

    pub fn push_contains(&mut self, column: Column, text: Option<&str>) -> &mut Self {
        if let Some(text) = present(text) {
            self.push(Predicate::contains(column, text));
        }
        self
    }

    pub fn push_contains_any(&mut self, columns: &[Column], text: Option<&str>) -> &mut Self {
        if let Some(text) = present(text) {
            self.push(Predicate::contains_any(columns, text));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter()
    }

    /// Bound values in the order their fragments were appended.
    pub fn params(&self) -> impl Iterator<Item = &BindValue> {
        self.predicates.iter().flat_map(|p| p.values.iter())
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Wrap client text as an `ILIKE` containment pattern, escaping the LIKE
/// metacharacters so the text is matched literally.
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
