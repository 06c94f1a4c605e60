//! Static lexicon tables: irregular verbs, whole-word spellings, fixed
//! two-word phrases, and the verb root/ending sets used by the classifier.
//!
//! All tables are embedded at compile time and parsed once, on first use,
//! into a process-wide read-only [`Lexicon`].

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

const IRREGULAR_VERBS_DATA: &str = include_str!("irregular_verbs.tsv");
const DICTIONARY_DATA: &str = include_str!("dictionary.tsv");
const PHRASES_DATA: &str = include_str!("phrases.tsv");
const VERB_ROOTS_DATA: &str = include_str!("verb_roots.txt");
const VERB_ENDINGS_DATA: &str = include_str!("verb_endings.txt");

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Thematic grouping of verb roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbCategory {
    Basic,
    Action,
    Cognitive,
    Process,
}

impl VerbCategory {
    pub const ALL: [VerbCategory; 4] = [
        VerbCategory::Basic,
        VerbCategory::Action,
        VerbCategory::Cognitive,
        VerbCategory::Process,
    ];

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "basic" => Some(VerbCategory::Basic),
            "action" => Some(VerbCategory::Action),
            "cognitive" => Some(VerbCategory::Cognitive),
            "process" => Some(VerbCategory::Process),
            _ => None,
        }
    }
}

/// All lexicon tables, immutable after construction.
#[derive(Debug)]
pub struct Lexicon {
    irregular_verbs: HashMap<String, String>,
    irregular_spellings: HashSet<String>,
    dictionary: HashMap<String, String>,
    phrases: HashMap<String, String>,
    roots_by_category: HashMap<VerbCategory, HashSet<String>>,
    all_roots: HashSet<String>,
    endings: Vec<String>,
}

impl Lexicon {
    fn from_embedded() -> Self {
        let irregular_verbs = parse_table(IRREGULAR_VERBS_DATA);
        let irregular_spellings = irregular_verbs.values().cloned().collect();
        let roots_by_category = parse_roots(VERB_ROOTS_DATA);
        let all_roots = roots_by_category
            .values()
            .flat_map(|roots| roots.iter().cloned())
            .collect();

        let lexicon = Self {
            irregular_verbs,
            irregular_spellings,
            dictionary: parse_table(DICTIONARY_DATA),
            phrases: parse_table(PHRASES_DATA),
            roots_by_category,
            all_roots,
            endings: parse_endings(VERB_ENDINGS_DATA),
        };
        log::debug!(
            "Lexicon loaded: {} irregular forms, {} words, {} phrases, {} roots, {} endings",
            lexicon.irregular_verbs.len(),
            lexicon.dictionary.len(),
            lexicon.phrases.len(),
            lexicon.all_roots.len(),
            lexicon.endings.len()
        );
        lexicon
    }

    /// Colloquial spelling of an irregular verb form (lowercase key).
    pub fn irregular_verb(&self, form: &str) -> Option<&str> {
        self.irregular_verbs.get(form).map(String::as_str)
    }

    /// True if `word` is an irregular verb form, or equals the colloquial
    /// spelling of one.
    pub fn is_irregular_verb_form(&self, word: &str) -> bool {
        self.irregular_verbs.contains_key(word) || self.irregular_spellings.contains(word)
    }

    /// Whole-word colloquial spelling (lowercase key).
    pub fn dictionary_entry(&self, word: &str) -> Option<&str> {
        self.dictionary.get(word).map(String::as_str)
    }

    /// Replacement for a lowercase `"first second"` pair.
    pub fn phrase(&self, pair: &str) -> Option<&str> {
        self.phrases.get(pair).map(String::as_str)
    }

    pub fn is_verb_root(&self, root: &str) -> bool {
        self.all_roots.contains(root)
    }

    pub fn roots(&self, category: VerbCategory) -> Option<&HashSet<String>> {
        self.roots_by_category.get(&category)
    }

    /// Verb endings in scan order.
    pub fn verb_endings(&self) -> &[String] {
        &self.endings
    }
}

/// The shared lexicon, parsed on first access.
pub fn lexicon() -> &'static Lexicon {
    LEXICON.get_or_init(Lexicon::from_embedded)
}

fn data_lines(data: &str) -> impl Iterator<Item = &str> {
    data.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
}

/// Parse `key<TAB>value` lines. Later duplicates override earlier ones.
fn parse_table(data: &str) -> HashMap<String, String> {
    let mut table = HashMap::new();
    for line in data_lines(data) {
        let Some((key, value)) = line.split_once('\t') else {
            log::warn!("Skipping malformed lexicon line: {:?}", line);
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        table.insert(key.to_lowercase(), value.trim().to_string());
    }
    table
}

/// Parse `category: root root ...` lines.
fn parse_roots(data: &str) -> HashMap<VerbCategory, HashSet<String>> {
    let mut roots: HashMap<VerbCategory, HashSet<String>> = HashMap::new();
    for line in data_lines(data) {
        let Some((label, rest)) = line.split_once(':') else {
            continue;
        };
        let Some(category) = VerbCategory::from_label(label.trim()) else {
            log::warn!("Unknown verb category: {:?}", label);
            continue;
        };
        roots
            .entry(category)
            .or_default()
            .extend(rest.split_whitespace().map(str::to_string));
    }
    roots
}

fn parse_endings(data: &str) -> Vec<String> {
    data_lines(data)
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}
