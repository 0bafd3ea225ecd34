//! Error types for the session layer.

use crate::archive::ArchiveError;
use crate::inference::InferenceError;
use uplift_core::error::UpliftError;

/// Errors from the analysis pipeline boundary.
///
/// Classification itself is total and never fails; only boundary
/// conditions produce errors, and each kind stays distinguishable so the
/// API can map them to distinct status codes.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
    #[error("archive failed: {0}")]
    Archive(#[from] ArchiveError),
}

impl From<AnalysisError> for UpliftError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyMessage | AnalysisError::MessageTooLong(_) => {
                UpliftError::Validation(err.to_string())
            }
            AnalysisError::SessionNotFound(_) => UpliftError::Session(err.to_string()),
            AnalysisError::Inference(_) => UpliftError::Inference(err.to_string()),
            AnalysisError::Archive(_) => UpliftError::Archive(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AnalysisError::EmptyMessage.to_string(),
            "message cannot be empty"
        );
        assert_eq!(
            AnalysisError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 characters"
        );
        let id = Uuid::nil();
        assert_eq!(
            AnalysisError::SessionNotFound(id).to_string(),
            format!("session not found: {}", id)
        );
    }

    #[test]
    fn test_inference_error_converts() {
        let err: AnalysisError = InferenceError::Unavailable("model offline".to_string()).into();
        assert!(matches!(err, AnalysisError::Inference(_)));
        assert!(err.to_string().contains("model offline"));
    }

    #[test]
    fn test_maps_to_uplift_error_kinds() {
        let err: UpliftError = AnalysisError::EmptyMessage.into();
        assert!(matches!(err, UpliftError::Validation(_)));

        let err: UpliftError = AnalysisError::SessionNotFound(Uuid::new_v4()).into();
        assert!(matches!(err, UpliftError::Session(_)));

        let err: UpliftError =
            AnalysisError::Inference(InferenceError::Unavailable("x".to_string())).into();
        assert!(matches!(err, UpliftError::Inference(_)));
    }
}
