//! Heuristic verb detection.

use crate::lexicon::lexicon;

/// Why a word was classified as a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbEvidence {
    /// Listed in the irregular-verb table as a form or as a spelling
    Irregular,
    /// Known root followed by a known ending
    RootEnding { root: String, ending: String },
}

/// Classify `word` as a verb form, returning the evidence found.
///
/// Irregular forms are checked first, both as table keys and as spellings.
/// Otherwise endings are tried in table order (no longest-match preference)
/// and the first one whose stripped remainder is a known root wins.
pub fn classify(word: &str) -> Option<VerbEvidence> {
    if word.is_empty() {
        return None;
    }
    let lex = lexicon();
    let lw = word.to_lowercase();

    if lex.is_irregular_verb_form(&lw) {
        return Some(VerbEvidence::Irregular);
    }

    lex.verb_endings().iter().find_map(|ending| {
        let root = lw.strip_suffix(ending.as_str())?;
        lex.is_verb_root(root).then(|| VerbEvidence::RootEnding {
            root: root.to_string(),
            ending: ending.clone(),
        })
    })
}

/// True if `word` looks like a verb form.
pub fn is_verb(word: &str) -> bool {
    classify(word).is_some()
}
