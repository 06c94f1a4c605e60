//! Text-level processing: input normalization, tokenization, reassembly,
//! and fixed-phrase merging.

pub mod normalize;
pub mod phrases;
pub mod tokenize;
