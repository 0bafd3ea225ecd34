//! Emotion inference collaborator seam.
//!
//! The real model runs outside this process; the core only sees
//! `text -> EmotionLabel`. Anything outside the seven-label set is a
//! contract violation and surfaces as an error, never a default label.

use uplift_core::types::{EmotionLabel, UnknownEmotion};

/// Failures at the inference boundary.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference backend unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    UnknownLabel(#[from] UnknownEmotion),
}

/// External emotion inference: text in, exactly one closed-set label out.
///
/// Implementations may block on I/O; callers impose their own timeouts.
pub trait EmotionInference: Send + Sync {
    fn infer(&self, text: &str) -> Result<EmotionLabel, InferenceError>;
}

/// Deterministic keyword-lexicon inference.
///
/// Stands in for the hosted model in local runs and tests, the same way a
/// mock embedding stands in for a real encoder. First matching lexicon
/// entry wins; anything else reads as neutral.
pub struct LexiconInference;

static LEXICON: &[(&str, EmotionLabel)] = &[
    ("furious", EmotionLabel::Anger),
    ("angry", EmotionLabel::Anger),
    ("hate", EmotionLabel::Anger),
    ("disgust", EmotionLabel::Disgust),
    ("gross", EmotionLabel::Disgust),
    ("afraid", EmotionLabel::Fear),
    ("scared", EmotionLabel::Fear),
    ("terrified", EmotionLabel::Fear),
    ("nervous", EmotionLabel::Fear),
    ("worried", EmotionLabel::Fear),
    ("happy", EmotionLabel::Joy),
    ("great", EmotionLabel::Joy),
    ("glad", EmotionLabel::Joy),
    ("excited", EmotionLabel::Joy),
    ("sad", EmotionLabel::Sadness),
    ("depressed", EmotionLabel::Sadness),
    ("miserable", EmotionLabel::Sadness),
    ("crying", EmotionLabel::Sadness),
    ("hopeless", EmotionLabel::Sadness),
    ("exhausted", EmotionLabel::Sadness),
    ("surprised", EmotionLabel::Surprise),
    ("unexpected", EmotionLabel::Surprise),
];

impl EmotionInference for LexiconInference {
    fn infer(&self, text: &str) -> Result<EmotionLabel, InferenceError> {
        let lower = text.to_lowercase();
        for (phrase, label) in LEXICON {
            if lower.contains(phrase) {
                return Ok(*label);
            }
        }
        Ok(EmotionLabel::Neutral)
    }
}

/// Inference that always returns one label. Used by tests that need to pin
/// the emotion independently of the text.
pub struct FixedInference(pub EmotionLabel);

impl EmotionInference for FixedInference {
    fn infer(&self, _text: &str) -> Result<EmotionLabel, InferenceError> {
        Ok(self.0)
    }
}
