use thiserror::Error;

/// Internal failures of the conversion pipeline.
///
/// These never reach callers of [`crate::pipeline::transform_text`]; they are
/// folded into the result's explanations instead.
#[derive(Error, Debug, Clone)]
pub enum TransformError {
    #[error("invalid pattern for rule '{rule}': {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule application panicked: {0}")]
    Panicked(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_message() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = TransformError::Pattern {
            rule: "Final o → u".into(),
            source,
        };
        assert!(err.to_string().starts_with("invalid pattern for rule 'Final o → u'"));
    }

    #[test]
    fn test_panicked_message() {
        let err = TransformError::Panicked("index out of bounds".into());
        assert_eq!(err.to_string(), "rule application panicked: index out of bounds");
    }
}
