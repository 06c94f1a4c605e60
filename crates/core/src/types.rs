use serde::{Deserialize, Serialize};

/// One unit of tokenized text: either a word or a punctuation run.
///
/// Tokens built by the tokenizer have exactly one non-empty field. Merged
/// tokens keep the punctuation of everything they absorbed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    pub punct: String,
}

impl Token {
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            punct: String::new(),
        }
    }

    pub fn punct(punct: impl Into<String>) -> Self {
        Self {
            word: String::new(),
            punct: punct.into(),
        }
    }

    pub fn is_word(&self) -> bool {
        !self.word.is_empty()
    }

    /// A lone hyphen joining two words.
    pub fn is_hyphen(&self) -> bool {
        self.punct == "-"
    }
}

/// Output of the conversion pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    /// Text after word-level rules, before cross-word combinations
    pub before: String,
    /// Final text
    pub after: String,
    /// Phrase merges and per-word rule traces, in application order
    pub explanations: Vec<String>,
    /// Cross-word fusions, in application order
    pub combinations: Vec<String>,
}

impl TransformResult {
    /// Result returned when the pipeline fails: the input unchanged, with
    /// the error as the only explanation.
    pub fn unchanged(text: &str, error: impl std::fmt::Display) -> Self {
        Self {
            before: text.to_string(),
            after: text.to_string(),
            explanations: vec![format!("Error: {}", error)],
            combinations: Vec::new(),
        }
    }
}
