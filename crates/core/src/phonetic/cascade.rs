//! Ordered regex rewrites applied to a single lowercase word once the
//! dictionary lookups have missed.
//!
//! Every rule runs in table order against the output of the previous one.
//! A rule's label is recorded only when it actually changed the word.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::TransformError;

/// Vowels (plain, acute, circumflex and nasal) used by the intervocalic rule.
const VOWELS: &str = "aeiouáéíóúâêîôúãẽĩõũ";

/// Consonants used by the `l`/`n` + consonant rules.
const CONSONANTS: &str = "bcdfgjklmnpqrstvwxz";

/// Consonant pairs that get an epenthetic `i` between them.
const EPENTHESIS_PAIRS: &[&str] = &["bs", "ps", "pn", "dv", "pt", "pç", "dm", "gn", "tm", "tn"];

/// When a rule is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// Only for words classified as verbs
    Verb,
    /// Only for words not classified as verbs
    NonVerb,
    /// Skipped for the forms of "entrar"
    NotEntrarForm,
}

/// Facts about the word being rewritten, computed once per word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFacts {
    pub is_verb: bool,
    pub is_entrar_form: bool,
}

impl Guard {
    fn allows(self, facts: WordFacts) -> bool {
        match self {
            Guard::Always => true,
            Guard::Verb => facts.is_verb,
            Guard::NonVerb => !facts.is_verb,
            Guard::NotEntrarForm => !facts.is_entrar_form,
        }
    }
}

/// A compiled rewrite rule.
#[derive(Debug)]
pub struct CascadeRule {
    pub label: String,
    pub guard: Guard,
    pattern: Regex,
    replacement: String,
}

/// Result of running the cascade over one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub text: String,
    /// Labels of the rules that changed the word, in order
    pub applied: Vec<&'static str>,
}

struct RuleSpec {
    label: String,
    pattern: String,
    replacement: String,
    guard: Guard,
}

fn rule(label: &str, pattern: &str, replacement: &str) -> RuleSpec {
    RuleSpec {
        label: label.to_string(),
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
        guard: Guard::Always,
    }
}

impl RuleSpec {
    fn when(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }
}

fn rule_specs() -> Vec<RuleSpec> {
    let vowel = format!("([{}])", VOWELS);
    let consonant = format!("([{}])", CONSONANTS);

    let mut specs = vec![
        // Prefixes
        rule("Initial ent → int", "^ent", "int").when(Guard::NotEntrarForm),
        rule("Transform initial 'des' to 'dis'", "^des", "dis"),
        rule("Transform initial 'menti' to 'minti'", "^menti", "minti"),
        // Closed/open o before endings
        rule("Transform ending 'ovo' to 'ôvo'", "ovo$", "ôvo"),
        rule("Transform ending 'ovos' to 'óvos'", "ovos$", "óvos"),
        rule("Transform ending 'ogo' to 'ôgo'", "ogo$", "ôgo"),
        rule("Transform ending 'ogos' to 'ógos'", "ogos$", "ógos"),
        rule("Transform ending 'oso' to 'ôso'", "oso$", "ôso"),
        rule("Transform ending 'osos' to 'ósos'", "osos$", "ósos"),
        // Verb endings
        rule("Infinitive ending: ar → á", "ar$", "á").when(Guard::Verb),
        rule("Infinitive ending: er →ê", "er$", "ê").when(Guard::Verb),
        rule("Infinitive ending: ir → í", "ir$", "í").when(Guard::Verb),
        rule("Verb ending 'amos/amus' → 'ãmu'", "am[ou]s$", "ãmu").when(Guard::Verb),
        rule("Verb ending 'emos/emus' → 'êmu'", "em[ou]s$", "êmu").when(Guard::Verb),
        rule("Verb ending 'imos/imus' → 'imu'", "im[ou]s$", "imu").when(Guard::Verb),
        // Final vowel raising
        rule("Final o → u", "o$", "u"),
        rule("Final os → us", "os$", "us"),
        rule("Final e → i", "e$", "i"),
        rule("Final es → is", "es$", "is"),
        rule("ão → ãun", "ão$", "ãun"),
        rule("Initial es → is", "^es", "is"),
        rule("s → z between vowels", &format!("{}s{}", vowel, vowel), "${1}z${2}"),
        // Palatal lateral
        rule("olh → ôly", "olh", "ôli").when(Guard::NonVerb),
        rule("lh → ly", "lh", "li"),
        rule("ou → ô (anywhere)", "ou", "ô"),
        rule("al+consonant → au", &format!("al{}", consonant), "au${1}"),
        rule("on+consonant → oun", &format!("on{}", consonant), "oun${1}"),
        // Nasal endings
        rule("Final am → ã", "am$", "ã"),
        rule("Final em →êin", "em$", "êin"),
        rule("Final om → ôun", "om$", "ôun"),
        rule("Final um → un", "um$", "un"),
        rule("Remove initial h", "^h", ""),
        rule("Initial ex → iz", "^ex", "iz"),
        rule("Initial pol → pul", "^pol", "pul"),
        rule("Final ol → óu", "ol$", "óu"),
        rule("Final l → u", "l$", "u"),
        rule(
            "ul before consonant → u (remove duplicate u)",
            &format!("ul{}", consonant),
            "u${1}",
        ),
        rule(
            "l before consonant → u (if not after u)",
            &format!("([^u])l{}", consonant),
            "${1}u${2}",
        ),
    ];

    specs.extend(EPENTHESIS_PAIRS.iter().map(|pair| {
        let mut chars = pair.chars();
        let (a, b) = (chars.next().unwrap_or_default(), chars.next().unwrap_or_default());
        rule(
            &format!("Insert i: {} → {}i{}", pair, a, b),
            pair,
            &format!("{}i{}", a, b),
        )
    }));

    specs.extend([
        rule("Append i after final consonant", "[dtbfjkpv]$", "${0}i"),
        rule("Final c → ki", "c$", "ki"),
        rule("Append ui after final g", "g$", "${0}ui"),
        rule("eir → êr", "eir", "êr"),
        rule("Transform initial 'des' to 'dis'", "^des", "dis"),
        rule("Transform ending 'ora' to 'óra'", "ora$", "óra"),
        rule("Transform ending 'oras' to 'óras'", "oras$", "óras"),
        rule("Final 'ês' becomes 'êis'", "ês$", "êis"),
    ]);

    specs
}

fn compile(specs: Vec<RuleSpec>) -> Result<Vec<CascadeRule>, TransformError> {
    specs
        .into_iter()
        .map(|spec| {
            let pattern = Regex::new(&spec.pattern).map_err(|source| TransformError::Pattern {
                rule: spec.label.clone(),
                source,
            })?;
            Ok(CascadeRule {
                label: spec.label,
                guard: spec.guard,
                pattern,
                replacement: spec.replacement,
            })
        })
        .collect()
}

static RULES: OnceLock<Result<Vec<CascadeRule>, TransformError>> = OnceLock::new();

/// The compiled cascade, built on first use.
pub fn rules() -> Result<&'static [CascadeRule], TransformError> {
    RULES
        .get_or_init(|| compile(rule_specs()))
        .as_ref()
        .map(Vec::as_slice)
        .map_err(Clone::clone)
}

/// Run every rule allowed by `facts` over `word` (already lowercase).
pub fn apply(word: &str, facts: WordFacts) -> Result<CascadeOutcome, TransformError> {
    let mut text = word.to_string();
    let mut applied = Vec::new();

    for rule in rules()? {
        if !rule.guard.allows(facts) || !rule.pattern.is_match(&text) {
            continue;
        }
        let rewritten = rule
            .pattern
            .replace_all(&text, rule.replacement.as_str())
            .into_owned();
        if rewritten != text {
            applied.push(rule.label.as_str());
            text = rewritten;
        }
    }

    Ok(CascadeOutcome { text, applied })
}
