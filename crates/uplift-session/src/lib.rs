//! Session layer for Uplift.
//!
//! Owns the bounded per-session conversation memory, the collaborator
//! seams (emotion inference, analysis archival), and the analyzer that
//! wires validation, classification, composition, and session state into
//! the operations the API exposes.

pub mod analyzer;
pub mod archive;
pub mod error;
pub mod inference;
pub mod store;

pub use analyzer::{Analyzer, MessageOutcome};
pub use archive::{AnalysisArchive, ArchiveError, MemoryArchive, NoopArchive};
pub use error::AnalysisError;
pub use inference::{EmotionInference, FixedInference, InferenceError, LexiconInference};
pub use store::SessionStore;
