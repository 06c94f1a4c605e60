//! Single-word rewriting with lookahead/lookbehind context.
//!
//! Resolution runs through an ordered list of resolvers (negation,
//! second-person pronouns, irregular verbs, dictionary); the first one that
//! produces a rewrite wins. If none does, the regex cascade runs.

use std::collections::HashSet;

use crate::error::TransformError;
use crate::lexicon::lexicon;

use super::cascade::{self, WordFacts};
use super::verbs::is_verb;

/// Explanation used when nothing changed the word.
pub const NO_CHANGES: &str = "No changes needed";

lazy_static::lazy_static! {
    /// Spellings of the negation marker.
    static ref NEGATIONS: HashSet<&'static str> = {
        ["não", "nao", "nãun", "nãu", "nau"].into_iter().collect()
    };

    /// Clitic pronouns (and "já") that may sit between a word and its verb.
    static ref CLITICS: HashSet<&'static str> = {
        [
            "me", "te", "se", "nos", "vos", "lhe", "lhes", "o", "a", "os",
            "as", "lo", "la", "los", "las", "no", "na", "nas", "já",
        ].into_iter().collect()
    };

    /// Words that may sit between a second-person pronoun and its verb.
    static ref PRONOUN_GAP_WORDS: HashSet<&'static str> = {
        CLITICS.iter().chain(NEGATIONS.iter()).copied().collect()
    };

    /// Forms of "entrar", which keep their initial "ent".
    static ref ENTRAR_FORMS: HashSet<&'static str> = {
        [
            "entrar", "entro", "entra", "entramos", "entram", "entrei",
            "entrou", "entraram", "entrava", "entravam",
        ].into_iter().collect()
    };
}

/// Neighbouring words of the word being rewritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordContext<'a> {
    pub next: Option<&'a str>,
    pub next_next: Option<&'a str>,
    pub prev: Option<&'a str>,
}

impl<'a> WordContext<'a> {
    pub fn new(next: Option<&'a str>, next_next: Option<&'a str>, prev: Option<&'a str>) -> Self {
        let present = |w: Option<&'a str>| w.filter(|w| !w.is_empty());
        Self {
            next: present(next),
            next_next: present(next_next),
            prev: present(prev),
        }
    }
}

/// A rewritten word and the trace of what changed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    pub output: String,
    pub explanation: String,
}

impl Rewrite {
    fn new(output: String, explanation: String) -> Self {
        Self {
            output,
            explanation,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.explanation == NO_CHANGES
    }
}

/// How a following verb was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbAhead {
    /// Clitic, then verb
    AfterClitic,
    /// The next word is the verb
    Direct,
}

/// Look for a verb right after the word, or after one gap word.
fn verb_ahead(ctx: &WordContext, gap_words: &HashSet<&'static str>) -> Option<VerbAhead> {
    let next = ctx.next?;
    if gap_words.contains(next.to_lowercase().as_str()) && ctx.next_next.is_some_and(is_verb) {
        return Some(VerbAhead::AfterClitic);
    }
    is_verb(next).then_some(VerbAhead::Direct)
}

/// Copy the case of `original`'s first letter onto `transformed`.
pub fn preserve_capital(original: &str, transformed: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = transformed.chars();
    match chars.next() {
        Some(first) if starts_upper => first.to_uppercase().chain(chars).collect(),
        _ => transformed.to_string(),
    }
}

type Resolver = fn(&str, &str, &WordContext) -> Option<Rewrite>;

/// Resolvers in precedence order.
const RESOLVERS: &[(&str, Resolver)] = &[
    ("negation", negation),
    ("second person", second_person),
    ("irregular verb", irregular_verb),
    ("dictionary", dictionary),
];

fn negation(word: &str, lword: &str, ctx: &WordContext) -> Option<Rewrite> {
    if !NEGATIONS.contains(lword) {
        return None;
    }
    let rewrite = match verb_ahead(ctx, &CLITICS) {
        Some(VerbAhead::AfterClitic) => Rewrite::new(
            preserve_capital(word, "nu"),
            "Negation before pronoun+verb: não → nu".to_string(),
        ),
        Some(VerbAhead::Direct) => Rewrite::new(
            preserve_capital(word, "nu"),
            "Negation before verb: não → nu".to_string(),
        ),
        None => Rewrite::new(
            preserve_capital(word, "nãu"),
            "Default negation: não → nãu".to_string(),
        ),
    };
    Some(rewrite)
}

fn second_person(word: &str, lword: &str, ctx: &WordContext) -> Option<Rewrite> {
    let (source, contracted) = match lword {
        "você" | "voce" => ("você", "cê"),
        "vocês" | "voces" | "vocêis" => ("vocês", "cêis"),
        _ => return None,
    };
    let context = match verb_ahead(ctx, &PRONOUN_GAP_WORDS)? {
        VerbAhead::AfterClitic => "Pronoun before pronoun+verb",
        VerbAhead::Direct => "Pronoun before verb",
    };
    Some(Rewrite::new(
        preserve_capital(word, contracted),
        format!("{}: {} → {}", context, source, contracted),
    ))
}

fn irregular_verb(word: &str, lword: &str, _ctx: &WordContext) -> Option<Rewrite> {
    let spelling = lexicon().irregular_verb(lword)?;
    let output = preserve_capital(word, &spelling.to_lowercase());
    let explanation = format!("Irregular verb: {} → {}", word, output);
    Some(Rewrite::new(output, explanation))
}

fn dictionary(word: &str, lword: &str, ctx: &WordContext) -> Option<Rewrite> {
    let spelling = lexicon().dictionary_entry(lword)?;

    // "eu olho" at the end of a clause is the verb, not the noun
    let first_person_olho = lword == "olho"
        && ctx.next.is_none()
        && ctx.prev.is_some_and(|p| p.to_lowercase() == "eu");
    if first_person_olho {
        if let Some(rewrite) = irregular_verb(word, lword, ctx) {
            return Some(rewrite);
        }
    }

    let output = preserve_capital(word, &spelling.to_lowercase());
    let explanation = format!("Dictionary: {} → {}", word, output);
    Some(Rewrite::new(output, explanation))
}

/// Rewrite one word into its colloquial spelling.
///
/// Only the first letter's case is carried over from `word`. An empty word
/// yields an empty rewrite with an empty explanation.
pub fn apply_phonetic_rules(word: &str, ctx: &WordContext) -> Result<Rewrite, TransformError> {
    if word.is_empty() {
        return Ok(Rewrite::default());
    }
    let lword = word.to_lowercase();

    for (name, resolve) in RESOLVERS {
        if let Some(rewrite) = resolve(word, &lword, ctx) {
            log::debug!("{}: {} → {}", name, word, rewrite.output);
            return Ok(rewrite);
        }
    }

    let facts = WordFacts {
        is_verb: is_verb(word),
        is_entrar_form: ENTRAR_FORMS.contains(lword.as_str()),
    };
    let outcome = cascade::apply(&lword, facts)?;
    let explanation = if outcome.applied.is_empty() {
        NO_CHANGES.to_string()
    } else {
        outcome.applied.join(" + ")
    };

    Ok(Rewrite::new(preserve_capital(word, &outcome.text), explanation))
}
