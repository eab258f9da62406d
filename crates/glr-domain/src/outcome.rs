//! Extraction outcomes

use crate::mapping::FieldMapping;

/// Result of one extraction attempt
///
/// A failure is a value rather than an error: the pipeline always continues
/// with a concrete (possibly empty) mapping and keeps the reason for logging
/// and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// The extractor produced a mapping
    Success(FieldMapping),

    /// The extractor produced nothing usable
    Failure(String),
}

impl ExtractionOutcome {
    /// Build a failure from any displayable reason
    pub fn failure(reason: impl std::fmt::Display) -> Self {
        ExtractionOutcome::Failure(reason.to_string())
    }

    /// Check whether the attempt succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Success(_))
    }

    /// The failure reason, if any
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Success(_) => None,
            ExtractionOutcome::Failure(reason) => Some(reason),
        }
    }

    /// The mapping to merge: the extracted one, or empty on failure
    pub fn mapping(&self) -> FieldMapping {
        match self {
            ExtractionOutcome::Success(mapping) => mapping.clone(),
            ExtractionOutcome::Failure(_) => FieldMapping::new(),
        }
    }

    /// Consume the outcome, returning the mapping to merge
    pub fn into_mapping(self) -> FieldMapping {
        match self {
            ExtractionOutcome::Success(mapping) => mapping,
            ExtractionOutcome::Failure(_) => FieldMapping::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_yields_empty_mapping() {
        let outcome = ExtractionOutcome::failure("connection refused");
        assert!(!outcome.is_success());
        assert_eq!(outcome.failure_reason(), Some("connection refused"));
        assert!(outcome.mapping().is_empty());
    }

    #[test]
    fn test_success_yields_its_mapping() {
        let mapping: FieldMapping = [("A", "1")].into_iter().collect();
        let outcome = ExtractionOutcome::Success(mapping.clone());
        assert!(outcome.is_success());
        assert_eq!(outcome.failure_reason(), None);
        assert_eq!(outcome.into_mapping(), mapping);
    }
}
