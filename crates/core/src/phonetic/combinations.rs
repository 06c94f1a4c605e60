//! Cross-word fusion (elision and liaison) between adjacent words.
//!
//! Pairs are tested against an ordered rule table; the first rule that
//! applies fuses the pair. The pass merges at most one pair per scan and
//! rescans until a scan finds nothing to merge.

use crate::types::Token;

/// Letters treated as vowels at word boundaries.
const VOWELS: &str = "aeiouáéíóúâêîôúãẽĩõũy";

/// Placeholder pronouns that are dropped before the next word.
const BRACKETED_PRONOUNS: &[&str] = &["[eu]", "[nós]"];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Two adjacent words at a fusion boundary.
#[derive(Debug, Clone, Copy)]
pub struct Boundary<'a> {
    pub left: &'a str,
    pub right: &'a str,
    last: char,
    first: char,
}

impl<'a> Boundary<'a> {
    /// `None` if either word is empty.
    pub fn new(left: &'a str, right: &'a str) -> Option<Self> {
        Some(Self {
            left,
            right,
            last: left.chars().next_back()?,
            first: right.chars().next()?,
        })
    }

    /// Left word with its last `suffix` removed, then `infix`, then the right word.
    fn splice(&self, suffix: &str, infix: &str) -> String {
        let stem = self.left.strip_suffix(suffix).unwrap_or(self.left);
        format!("{}{}{}", stem, infix, self.right)
    }

    fn concat(&self) -> String {
        format!("{}{}", self.left, self.right)
    }

    fn fused(&self, combined: String, reason: &str) -> Fusion {
        let explanation = format!("{} + {} → {} ({})", self.left, self.right, combined, reason);
        Fusion {
            combined,
            explanation,
        }
    }
}

/// A fused word and its trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fusion {
    pub combined: String,
    pub explanation: String,
}

/// One entry of the ordered rule table.
pub struct CombinationRule {
    pub name: &'static str,
    apply: fn(&Boundary) -> Option<Fusion>,
}

macro_rules! rule {
    ($name:expr, $apply:expr) => {
        CombinationRule {
            name: $name,
            apply: $apply,
        }
    };
}

/// Fusion rules in precedence order.
///
/// Earlier entries shadow some later ones: `a + vowel` covers `ia + i` and
/// every `a/ã + i/e` case except a final `ã`, `n + m` covers `yn + m`, and the
/// first identical-letter entry covers the fallback.
pub const RULES: &[CombinationRule] = &[
    rule!("bracketed pronoun", |b| {
        BRACKETED_PRONOUNS.contains(&b.left).then(|| Fusion {
            combined: b.right.to_string(),
            explanation: format!("Skip bracketed pronoun: {} {} → {}", b.left, b.right, b.right),
        })
    }),
    rule!("r + vowel", |b| {
        (b.last == 'r' && is_vowel(b.first))
            .then(|| b.fused(b.concat(), "Keep 'r' when joining with vowel"))
    }),
    rule!("n + m", |b| {
        (b.last == 'n' && b.first == 'm').then(|| b.fused(b.splice("n", ""), "Drop 'n' before 'm'"))
    }),
    rule!("same letter", same_letter),
    rule!("a + vowel", |b| {
        (b.last == 'a' && is_vowel(b.first))
            .then(|| b.fused(b.splice("a", ""), "Join 'a' with following vowel"))
    }),
    rule!("u + vowel", |b| {
        if b.last != 'u' || !is_vowel(b.first) {
            return None;
        }
        if b.left.ends_with("eu") || b.left.ends_with("êu") {
            Some(b.fused(b.concat(), "Keep 'eu/êu' before vowel"))
        } else {
            Some(b.fused(b.splice("u", ""), "Drop 'u' before vowel"))
        }
    }),
    rule!("s/z + vowel", |b| {
        (matches!(b.last, 's' | 'z') && is_vowel(b.first)).then(|| {
            let suffix = b.last.to_string();
            b.fused(b.splice(&suffix, "z"), "'s' between vowels becomes 'z'")
        })
    }),
    rule!("m + vowel", |b| {
        (b.last == 'm' && is_vowel(b.first))
            .then(|| b.fused(b.concat(), "Join 'm' with following vowel"))
    }),
    rule!("ia + i", |b| {
        (b.left.ends_with("ia") && b.first == 'i')
            .then(|| b.fused(b.splice("ia", ""), "Drop 'ia' before 'i'"))
    }),
    rule!("i + e", |b| {
        (b.last == 'i' && matches!(b.first, 'e' | 'é' | 'ê'))
            .then(|| b.fused(b.splice("i", ""), "Drop 'i' before e/é/ê"))
    }),
    rule!("á + a", |b| {
        (b.last == 'á' && b.first == 'a').then(|| b.fused(b.splice("á", ""), "Convert 'á' to 'a'"))
    }),
    rule!("ê + é", |b| {
        (b.last == 'ê' && b.first == 'é').then(|| b.fused(b.splice("ê", ""), "Use é"))
    }),
    rule!("yn + m", |b| {
        (b.left.ends_with("yn") && b.first == 'm')
            .then(|| b.fused(b.splice("yn", "y"), "yn + m → ym"))
    }),
    rule!("a/ã + i/e", |b| {
        if !matches!(b.last, 'a' | 'ã') || !matches!(b.first, 'i' | 'e') {
            return None;
        }
        if b.left.ends_with("ga") {
            Some(b.fused(b.splice("ga", "gu"), "ga + i/e → gui/gue"))
        } else if b.left.ends_with("ca") {
            Some(b.fused(b.splice("ca", "k"), "ca + i/e → ki/ke"))
        } else {
            let suffix = b.last.to_string();
            Some(b.fused(b.splice(&suffix, ""), "Drop 'a' before i/e"))
        }
    }),
    rule!("vowel + vowel", |b| {
        (is_vowel(b.last) && is_vowel(b.first)).then(|| b.fused(b.concat(), "Join vowels"))
    }),
    rule!("same letter (fallback)", same_letter),
];

fn same_letter(b: &Boundary) -> Option<Fusion> {
    let same = b.last.to_lowercase().eq(b.first.to_lowercase());
    same.then(|| {
        let suffix = b.last.to_string();
        b.fused(b.splice(&suffix, ""), "Join same letter/sound")
    })
}

/// Try to fuse two adjacent tokens.
///
/// Only word tokens fuse, and a left token carrying punctuation never does.
pub fn combine(left: &Token, right: &Token) -> Option<Fusion> {
    if !left.punct.is_empty() {
        return None;
    }
    let boundary = Boundary::new(&left.word, &right.word)?;
    RULES.iter().find_map(|rule| {
        let fusion = (rule.apply)(&boundary)?;
        log::debug!("Combination ({}): {}", rule.name, fusion.explanation);
        Some(fusion)
    })
}

/// Merge the leftmost fusible pair, if any. Returns its explanation.
fn merge_first(tokens: &mut Vec<Token>) -> Option<String> {
    let (index, fusion) = tokens
        .windows(2)
        .enumerate()
        .find_map(|(i, pair)| combine(&pair[0], &pair[1]).map(|f| (i, f)))?;

    let right = tokens.remove(index + 1);
    tokens[index] = Token {
        word: fusion.combined,
        punct: right.punct,
    };
    Some(fusion.explanation)
}

/// Fuse adjacent words until no rule applies, returning the explanations in
/// the order the fusions happened.
///
/// Every merge removes one token, so the loop runs at most `tokens.len()`
/// times.
pub fn apply_combinations(tokens: &mut Vec<Token>) -> Vec<String> {
    let mut explanations = Vec::new();
    while let Some(explanation) = merge_first(tokens) {
        explanations.push(explanation);
    }
    explanations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuse(left: &str, right: &str) -> Option<String> {
        combine(&Token::word(left), &Token::word(right)).map(|f| f.combined)
    }

    #[test]
    fn test_r_plus_vowel() {
        assert_eq!(fuse("falar", "agora").as_deref(), Some("falaragora"));
        assert_eq!(fuse("qualquer", "um").as_deref(), Some("qualquerum"));
    }

    #[test]
    fn test_n_before_m() {
        assert_eq!(fuse("bein", "mió").as_deref(), Some("beimió"));
    }

    #[test]
    fn test_same_letter() {
        assert_eq!(fuse("caza", "amarela").as_deref(), Some("cazamarela"));
        assert_eq!(fuse("mais", "Sabe").as_deref(), Some("maiSabe"));
    }

    #[test]
    fn test_a_plus_vowel() {
        assert_eq!(fuse("minha", "irmã").as_deref(), Some("minhirmã"));
        let f = combine(&Token::word("uma"), &Token::word("ideia")).unwrap();
        assert_eq!(f.combined, "umideia");
        assert_eq!(f.explanation, "uma + ideia → umideia (Join 'a' with following vowel)");
    }

    #[test]
    fn test_u_plus_vowel() {
        assert_eq!(fuse("mêu", "amigu").as_deref(), Some("mêuamigu"));
        assert_eq!(fuse("tudu", "isso").as_deref(), Some("tudisso"));
    }

    #[test]
    fn test_s_plus_vowel_becomes_z() {
        assert_eq!(fuse("us", "amigus").as_deref(), Some("uzamigus"));
        assert_eq!(fuse("fais", "isso").as_deref(), Some("faizisso"));
    }

    #[test]
    fn test_m_plus_vowel() {
        assert_eq!(fuse("cum", "ela").as_deref(), Some("cumela"));
    }

    #[test]
    fn test_i_before_e() {
        assert_eq!(fuse("ki", "ela").as_deref(), Some("kela"));
        assert_eq!(fuse("di", "éla").as_deref(), Some("déla"));
    }

    #[test]
    fn test_accent_merges() {
        assert_eq!(fuse("tá", "aqui").as_deref(), Some("taqui"));
        assert_eq!(fuse("vê", "éla").as_deref(), Some("véla"));
    }

    #[test]
    fn test_yn_before_m() {
        assert_eq!(fuse("kêyn", "mais").as_deref(), Some("kêymais"));
    }

    #[test]
    fn test_a_plus_vowel_wins_over_later_a_rules() {
        let f = combine(&Token::word("paga"), &Token::word("isso")).unwrap();
        assert_eq!(f.combined, "pagisso");
        assert!(f.explanation.ends_with("(Join 'a' with following vowel)"));
        let f = combine(&Token::word("dia"), &Token::word("inteiro")).unwrap();
        assert_eq!(f.combined, "diinteiro");
        assert!(f.explanation.ends_with("(Join 'a' with following vowel)"));
    }

    #[test]
    fn test_nasal_a_before_i() {
        assert_eq!(fuse("irmã", "ia").as_deref(), Some("irmia"));
    }

    #[test]
    fn test_vowel_plus_vowel() {
        assert_eq!(fuse("vô", "agora").as_deref(), Some("vôagora"));
    }

    #[test]
    fn test_no_rule() {
        assert_eq!(fuse("cê", "fala"), None);
        assert_eq!(fuse("tem", "casa"), None);
    }

    #[test]
    fn test_bracketed_pronoun() {
        let f = combine(&Token::word("[eu]"), &Token::word("vô")).unwrap();
        assert_eq!(f.combined, "vô");
        assert_eq!(f.explanation, "Skip bracketed pronoun: [eu] vô → vô");
    }

    #[test]
    fn test_punctuation_blocks_fusion() {
        assert!(combine(&Token::word("caza"), &Token::punct(",")).is_none());
        assert!(combine(&Token::punct(","), &Token::word("amarela")).is_none());
        let with_punct = Token {
            word: "caza".into(),
            punct: ",".into(),
        };
        assert!(combine(&with_punct, &Token::word("amarela")).is_none());
    }

    #[test]
    fn test_apply_combinations_chains() {
        let mut tokens = vec![Token::word("uma"), Token::word("amiga"), Token::word("ótima")];
        let explanations = apply_combinations(&mut tokens);
        assert_eq!(tokens, vec![Token::word("umamigótima")]);
        assert_eq!(explanations.len(), 2);
        assert!(explanations[0].starts_with("uma + amiga"));
        assert!(explanations[1].starts_with("umamiga + ótima"));
    }

    #[test]
    fn test_apply_combinations_stops_at_punct() {
        let mut tokens = vec![
            Token::word("caza"),
            Token::punct(","),
            Token::word("amarela"),
        ];
        let explanations = apply_combinations(&mut tokens);
        assert!(explanations.is_empty());
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_fused_token_keeps_right_punct() {
        let mut tokens = vec![
            Token::word("caza"),
            Token {
                word: "amarela".into(),
                punct: "!".into(),
            },
        ];
        apply_combinations(&mut tokens);
        assert_eq!(tokens[0].word, "cazamarela");
        assert_eq!(tokens[0].punct, "!");
    }
}
