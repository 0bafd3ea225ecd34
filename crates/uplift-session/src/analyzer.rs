//! Analysis orchestrator: validation, inference, classification, response
//! composition, and session bookkeeping, in that order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use uplift_core::config::UpliftConfig;
use uplift_core::types::{
    AcademicStressCategory, AnalysisResult, EmotionLabel, OverallStatus, RiskTier, StressTier,
    Turn,
};
use uplift_engine::{
    classify_academic, compose, compose_adaptive, detect_risk, fuse, recommend, stress_tier,
};

use crate::archive::AnalysisArchive;
use crate::error::AnalysisError;
use crate::inference::EmotionInference;
use crate::store::SessionStore;

/// Outcome of one session message exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageOutcome {
    pub session_id: Uuid,
    pub bot_message: String,
    pub emotion: EmotionLabel,
    pub stress_level: StressTier,
    pub academic_stress_category: AcademicStressCategory,
    pub risk_level: RiskTier,
    pub overall_status: OverallStatus,
    pub techniques: Vec<String>,
}

/// Central coordinator for the classification-and-response pipeline.
///
/// The classifiers it calls are pure; the only mutable state it touches is
/// the injected [`SessionStore`]. Collaborator failures never corrupt
/// session state: the session append happens only after inference
/// succeeds, and archive failures are logged, never surfaced.
pub struct Analyzer {
    inference: Arc<dyn EmotionInference>,
    archive: Arc<dyn AnalysisArchive>,
    store: SessionStore,
    max_message_length: usize,
    max_techniques: usize,
}

impl Analyzer {
    pub fn new(
        config: &UpliftConfig,
        inference: Arc<dyn EmotionInference>,
        archive: Arc<dyn AnalysisArchive>,
    ) -> Self {
        Self {
            inference,
            archive,
            store: SessionStore::new(
                config.session.context_turns,
                config.session.idle_timeout_minutes,
            ),
            max_message_length: config.engine.max_message_length,
            max_techniques: config.engine.max_techniques,
        }
    }

    /// Single-shot analysis: classify one message and compose the fixed
    /// per-status reply. Stateless apart from the best-effort archive write.
    pub fn analyze(
        &self,
        text: &str,
        user_id: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.validate(text)?;
        let emotion = self.inference.infer(text)?;

        let stress = stress_tier(emotion);
        let academic = classify_academic(text, emotion);
        let risk = detect_risk(text);
        let status = fuse(stress, academic, risk);

        let result = AnalysisResult {
            emotion,
            stress_level: stress,
            academic_stress_category: academic,
            risk_level: risk,
            overall_status: status,
            response: compose(status).to_string(),
        };

        // Archival is best-effort: log and move on.
        if let Err(e) = self.archive.record(user_id, text, &result) {
            tracing::warn!(error = %e, "Analysis archive write failed");
        }

        Ok(result)
    }

    /// Open a new conversation session.
    pub fn start_session(&self) -> Uuid {
        self.store.start()
    }

    /// Handle one message within a session: classify, compose the adaptive
    /// reply, and append the exchange to the session history.
    pub fn send_message(
        &self,
        session_id: Uuid,
        text: &str,
    ) -> Result<MessageOutcome, AnalysisError> {
        self.validate(text)?;
        if !self.store.contains(session_id) {
            return Err(AnalysisError::SessionNotFound(session_id));
        }

        let emotion = self.inference.infer(text)?;

        let stress = stress_tier(emotion);
        let academic = classify_academic(text, emotion);
        let risk = detect_risk(text);
        let status = fuse(stress, academic, risk);

        let recommended = recommend(emotion, academic, self.max_techniques);
        let reply = compose_adaptive(risk, stress, academic, &recommended);

        self.store
            .append_exchange(session_id, text, &reply.message)?;

        Ok(MessageOutcome {
            session_id,
            bot_message: reply.message,
            emotion,
            stress_level: stress,
            academic_stress_category: academic,
            risk_level: risk,
            overall_status: status,
            techniques: reply.techniques,
        })
    }

    /// Read-only ordered history of a session.
    pub fn history(&self, session_id: Uuid) -> Result<Vec<Turn>, AnalysisError> {
        self.store.history(session_id)
    }

    fn validate(&self, text: &str) -> Result<(), AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyMessage);
        }
        // The limit is in characters, not bytes.
        if text.chars().count() > self.max_message_length {
            return Err(AnalysisError::MessageTooLong(self.max_message_length));
        }
        Ok(())
    }
}
