//! Input cleanup applied before tokenization.

use unicode_normalization::UnicodeNormalization;

/// Replace non-breaking spaces with plain spaces and compose accents (NFC),
/// so `que` followed by a combining circumflex reads the same as `quê`.
pub fn normalize_input(text: &str) -> String {
    text.replace('\u{a0}', " ").nfc().collect()
}
