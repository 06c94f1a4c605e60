//! Merge fixed two-word phrases into a single token before word rules run.

use std::ops::Range;

use crate::lexicon::lexicon;
use crate::types::Token;

/// A token after phrase merging, with the span of source tokens it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedToken {
    pub token: Token,
    /// Indices into the pre-merge token list
    pub source: Range<usize>,
    /// Set when this token is a phrase replacement
    pub is_phrase: bool,
}

/// Result of one merge pass.
#[derive(Debug, Clone, Default)]
pub struct PhraseMerge {
    pub tokens: Vec<MergedToken>,
    pub explanations: Vec<String>,
}

/// Scan left to right, replacing adjacent word pairs found in the phrase
/// table with the table's spelling.
///
/// Single pass and non-overlapping: the second word of a merged pair never
/// starts another pair. Replacements are inserted as stored, without case
/// adaptation, and carry the punctuation of both tokens.
pub fn merge_phrases(tokens: &[Token]) -> PhraseMerge {
    let lex = lexicon();
    let mut merged = PhraseMerge::default();
    let mut i = 0;

    while i < tokens.len() {
        let first = &tokens[i];
        let pair = tokens
            .get(i + 1)
            .filter(|second| first.is_word() && second.is_word())
            .map(|second| {
                (
                    second,
                    format!(
                        "{} {}",
                        first.word.trim().to_lowercase(),
                        second.word.trim().to_lowercase()
                    ),
                )
            });

        if let Some((second, key)) = pair {
            if let Some(replacement) = lex.phrase(&key) {
                log::debug!("Phrase merge: {} → {}", key, replacement);
                merged.explanations.push(format!(
                    "Common pronunciation and usage: {} → {}",
                    key, replacement
                ));
                merged.tokens.push(MergedToken {
                    token: Token {
                        word: replacement.to_string(),
                        punct: format!("{}{}", first.punct, second.punct),
                    },
                    source: i..i + 2,
                    is_phrase: true,
                });
                i += 2;
                continue;
            }
        }

        merged.tokens.push(MergedToken {
            token: first.clone(),
            source: i..i + 1,
            is_phrase: false,
        });
        i += 1;
    }

    merged
}
