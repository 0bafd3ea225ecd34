//! Best-effort analysis archival seam.
//!
//! Archival is the one path allowed to degrade silently: the analyzer logs
//! failures and the response proceeds untouched.

use std::sync::Mutex;

use uplift_core::types::AnalysisResult;

/// Failure while forwarding an analysis record.
#[derive(Debug, thiserror::Error)]
#[error("archive write failed: {0}")]
pub struct ArchiveError(pub String);

/// Durable persistence collaborator. Best-effort by contract.
pub trait AnalysisArchive: Send + Sync {
    fn record(
        &self,
        user_id: Option<&str>,
        text: &str,
        result: &AnalysisResult,
    ) -> Result<(), ArchiveError>;
}

/// Used when no store is configured.
pub struct NoopArchive;

impl AnalysisArchive for NoopArchive {
    fn record(
        &self,
        _user_id: Option<&str>,
        _text: &str,
        _result: &AnalysisResult,
    ) -> Result<(), ArchiveError> {
        Ok(())
    }
}

/// One archived record, as handed to the collaborator.
#[derive(Debug, Clone)]
pub struct ArchivedAnalysis {
    pub user_id: Option<String>,
    pub text: String,
    pub result: AnalysisResult,
}

/// In-memory archive for tests and local runs.
#[derive(Default)]
pub struct MemoryArchive {
    records: Mutex<Vec<ArchivedAnalysis>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ArchivedAnalysis> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl AnalysisArchive for MemoryArchive {
    fn record(
        &self,
        user_id: Option<&str>,
        text: &str,
        result: &AnalysisResult,
    ) -> Result<(), ArchiveError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| ArchiveError(format!("records lock poisoned: {}", e)))?;
        records.push(ArchivedAnalysis {
            user_id: user_id.map(|s| s.to_string()),
            text: text.to_string(),
            result: result.clone(),
        });
        Ok(())
    }
}
