//! Colloquial Brazilian Portuguese respelling.
//!
//! Converts standard-orthography Portuguese into a phonetic approximation of
//! everyday Brazilian speech using fixed lexicon tables, an ordered cascade
//! of regex rules, and cross-word fusion rules. See [`convert_text`].

pub mod error;
pub mod lexicon;
pub mod phonetic;
pub mod pipeline;
pub mod text;
pub mod types;

pub use error::TransformError;
pub use pipeline::{convert_text, transform_text, try_transform_text};
pub use types::{Token, TransformResult};
