//! End-to-end conversion: normalize → tokenize → merge phrases → word rules
//! → combinations → reassemble.

use std::panic::{self, AssertUnwindSafe};

use crate::error::TransformError;
use crate::phonetic::combinations::apply_combinations;
use crate::phonetic::word_rules::{apply_phonetic_rules, WordContext};
use crate::text::normalize::normalize_input;
use crate::text::phrases::merge_phrases;
use crate::text::tokenize::{reassemble, tokenize};
use crate::types::{Token, TransformResult};

/// Word at `index` in `tokens`, if that position holds a word.
fn word_at(tokens: &[Token], index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| tokens.get(i))
        .map(|t| t.word.as_str())
        .filter(|w| !w.is_empty())
}

/// Run the pipeline, surfacing internal failures as errors.
pub fn try_transform_text(text: &str) -> Result<TransformResult, TransformError> {
    let text = normalize_input(text);
    let source = tokenize(&text);

    let merge = merge_phrases(&source);
    let mut explanations = merge.explanations;

    // Context comes from the pre-merge tokens, located through each merged
    // token's source span. Phrase replacements skip the word rules.
    let mut tokens = Vec::with_capacity(merge.tokens.len());
    for merged in merge.tokens {
        let token = merged.token;
        if merged.is_phrase || !token.is_word() {
            tokens.push(token);
            continue;
        }

        let span = merged.source;
        let ctx = WordContext::new(
            word_at(&source, Some(span.end)),
            word_at(&source, Some(span.end + 1)),
            word_at(&source, span.start.checked_sub(1)),
        );
        let rewrite = apply_phonetic_rules(&token.word, &ctx)?;
        if !rewrite.is_unchanged() {
            explanations.push(format!("{}: {}", token.word, rewrite.explanation));
        }
        tokens.push(Token {
            word: rewrite.output,
            punct: token.punct,
        });
    }

    let before = reassemble(&tokens);
    let combinations = apply_combinations(&mut tokens);
    let after = reassemble(&tokens);

    log::debug!(
        "Converted {:?} → {:?} ({} rules, {} combinations)",
        text,
        after,
        explanations.len(),
        combinations.len()
    );

    Ok(TransformResult {
        before,
        after,
        explanations,
        combinations,
    })
}

/// Convert Portuguese text to its colloquial phonetic spelling.
///
/// Never fails: on an internal error (or a panic inside rule application)
/// the input comes back unchanged as both `before` and `after`, with the
/// error as the only explanation.
pub fn transform_text(text: &str) -> TransformResult {
    degrade_on_failure(text, || try_transform_text(text))
}

/// Run `f`, folding an error or a panic into the unchanged result for `text`.
fn degrade_on_failure(
    text: &str,
    f: impl FnOnce() -> Result<TransformResult, TransformError>,
) -> TransformResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(TransformError::Panicked(panic_message(payload.as_ref()))));

    match outcome {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Conversion failed for {:?}: {}", text, e);
            TransformResult::unchanged(text, e)
        }
    }
}

/// Entry point used by outer layers (HTTP handlers, the CLI).
pub fn convert_text(text: &str) -> TransformResult {
    transform_text(text)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
