//! Classification engine for Uplift.
//!
//! Pure, total rule evaluators: emotion-to-stress mapping, the
//! academic-stress keyword classifier, the self-harm risk detector, the
//! status fusion cascade, the technique recommender, and the response
//! composer. Nothing in this crate holds state or performs I/O.

pub mod compose;
pub mod fusion;
pub mod rules;
pub mod techniques;

pub use compose::{compose, compose_adaptive, AdaptiveReply};
pub use fusion::fuse;
pub use rules::{classify_academic, detect_risk, stress_tier};
pub use techniques::recommend;
