//! Split text into word and punctuation tokens, and join them back.

use crate::types::Token;

/// Letters the tokenizer keeps inside words: ASCII letters and digits, the
/// Latin-1 accented letters (À-Ö, Ø-ö, ø-ÿ) and the nasal vowels NFC composes
/// outside Latin-1 (Ẽ ẽ Ĩ ĩ Ũ ũ).
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '\u{c0}'..='\u{d6}' | '\u{d8}'..='\u{f6}' | '\u{f8}'..='\u{ff}')
        || matches!(c, 'Ẽ' | 'ẽ' | 'Ĩ' | 'ĩ' | 'Ũ' | 'ũ')
}

fn is_punct_char(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':')
}

/// Tokenize raw text.
///
/// A maximal run of word characters is one word token, a maximal run of
/// `. , ! ? ; :` is one punctuation token, and each `-` is a token of its
/// own. Whitespace separates tokens; anything else is dropped.
///
/// ```
/// use coloquial_core::text::tokenize::tokenize;
/// use coloquial_core::types::Token;
///
/// assert_eq!(
///     tokenize("Olá, mundo!"),
///     vec![Token::word("Olá"), Token::punct(","), Token::word("mundo"), Token::punct("!")]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if is_word_char(c) {
            let mut word = String::new();
            while let Some(&c) = chars.peek().filter(|c| is_word_char(**c)) {
                word.push(c);
                chars.next();
            }
            tokens.push(Token::word(word));
        } else if is_punct_char(c) {
            let mut punct = String::new();
            while let Some(&c) = chars.peek().filter(|c| is_punct_char(**c)) {
                punct.push(c);
                chars.next();
            }
            tokens.push(Token::punct(punct));
        } else if c == '-' {
            tokens.push(Token::punct("-"));
            chars.next();
        } else {
            // whitespace and unrecognized characters
            chars.next();
        }
    }

    log::trace!("Tokenized {} chars into {} tokens", text.len(), tokens.len());
    tokens
}

/// Rebuild text from tokens.
///
/// Words after the first get one leading space unless the previous token is
/// a hyphen; punctuation attaches with no space. Whitespace in the original
/// text is not preserved.
pub fn reassemble(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.is_word() {
            let after_hyphen = i > 0 && tokens[i - 1].is_hyphen();
            if !out.is_empty() && !after_hyphen {
                out.push(' ');
            }
            out.push_str(&token.word);
        }
        out.push_str(&token.punct);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words_and_punct() {
        let tokens = tokenize("Olá, mundo!");
        assert_eq!(
            tokens,
            vec![
                Token::word("Olá"),
                Token::punct(","),
                Token::word("mundo"),
                Token::punct("!"),
            ]
        );
    }

    #[test]
    fn test_tokenize_hyphen_is_own_token() {
        let tokens = tokenize("bem-vindo");
        assert_eq!(
            tokens,
            vec![Token::word("bem"), Token::punct("-"), Token::word("vindo")]
        );
    }

    #[test]
    fn test_tokenize_punct_run() {
        let tokens = tokenize("sério?!...");
        assert_eq!(tokens, vec![Token::word("sério"), Token::punct("?!...")]);
    }

    #[test]
    fn test_tokenize_drops_unknown_chars() {
        let tokens = tokenize("\"oi\" (tudo) bem@");
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["oi", "tudo", "bem"]);
    }

    #[test]
    fn test_tokenize_digits_are_words() {
        assert_eq!(tokenize("123 abc"), vec![Token::word("123"), Token::word("abc")]);
    }

    #[test]
    fn test_tokenize_keeps_composed_nasal_vowels() {
        assert_eq!(tokenize("bẽm sĩ"), vec![Token::word("bẽm"), Token::word("sĩ")]);
        assert_eq!(tokenize("Ũa"), vec![Token::word("Ũa")]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_reassemble_basic() {
        let tokens = tokenize("Olá, mundo!");
        assert_eq!(reassemble(&tokens), "Olá, mundo!");
    }

    #[test]
    fn test_reassemble_hyphen_joins() {
        assert_eq!(reassemble(&tokenize("bem-vindo")), "bem-vindo");
        // spaces around a hyphen are dropped too
        assert_eq!(reassemble(&tokenize("bem - vindo")), "bem-vindo");
    }

    #[test]
    fn test_reassemble_normalizes_whitespace() {
        assert_eq!(reassemble(&tokenize("  oi    tudo ,bem  ")), "oi tudo, bem");
    }

    #[test]
    fn test_reassemble_merged_token_punct() {
        let tokens = vec![
            Token {
                word: "prakê".into(),
                punct: "?".into(),
            },
            Token::word("sim"),
        ];
        assert_eq!(reassemble(&tokens), "prakê? sim");
    }

    #[test]
    fn test_reassemble_is_stable_on_clean_text() {
        let clean = "Eu tô aqui, cê tá lá. bem-vindo!";
        assert_eq!(reassemble(&tokenize(clean)), clean);
        let once = reassemble(&tokenize(" eu   tô ,aqui "));
        assert_eq!(reassemble(&tokenize(&once)), once);
    }
}
