//! Phonetic rewriting: verb detection, single-word rules, and cross-word
//! combinations.

pub mod cascade;
pub mod combinations;
pub mod verbs;
pub mod word_rules;
