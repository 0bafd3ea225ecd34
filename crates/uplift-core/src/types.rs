//! Shared domain types for the Uplift pipeline.
//!
//! All classification enums are closed sets with fixed snake_case wire
//! representations. They are plain `Copy` values so the engine stays a
//! pure function of its inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Emotion label produced by the external inference collaborator.
///
/// This is the only value that enters the system from outside the rule
/// tables; anything not in this set is a contract violation at the
/// inference boundary (see [`UnknownEmotion`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Anger,
    Disgust,
    Fear,
    Joy,
    Neutral,
    Sadness,
    Surprise,
}

impl EmotionLabel {
    /// All seven labels, in wire order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Anger,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Joy,
        EmotionLabel::Neutral,
        EmotionLabel::Sadness,
        EmotionLabel::Surprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anger => "anger",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Joy => "joy",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Surprise => "surprise",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a collaborator hands back a label outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion label: {0}")]
pub struct UnknownEmotion(pub String);

impl FromStr for EmotionLabel {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Model outputs are sometimes capitalized; normalize before matching.
        match s.trim().to_lowercase().as_str() {
            "anger" => Ok(EmotionLabel::Anger),
            "disgust" => Ok(EmotionLabel::Disgust),
            "fear" => Ok(EmotionLabel::Fear),
            "joy" => Ok(EmotionLabel::Joy),
            "neutral" => Ok(EmotionLabel::Neutral),
            "sadness" => Ok(EmotionLabel::Sadness),
            "surprise" => Ok(EmotionLabel::Surprise),
            _ => Err(UnknownEmotion(s.to_string())),
        }
    }
}

/// Coarse stress tier derived directly from the emotion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressTier {
    Low,
    Medium,
    High,
}

impl StressTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressTier::Low => "low",
            StressTier::Medium => "medium",
            StressTier::High => "high",
        }
    }
}

impl fmt::Display for StressTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-specific severity bucket derived from message text and emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcademicStressCategory {
    AcademicStressLow,
    AcademicStressMedium,
    AcademicStressHigh,
    Burnout,
}

impl AcademicStressCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicStressCategory::AcademicStressLow => "academic_stress_low",
            AcademicStressCategory::AcademicStressMedium => "academic_stress_medium",
            AcademicStressCategory::AcademicStressHigh => "academic_stress_high",
            AcademicStressCategory::Burnout => "burnout",
        }
    }
}

impl fmt::Display for AcademicStressCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-harm/crisis tier derived purely from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Safe,
    ModerateRisk,
    HighRisk,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::ModerateRisk => "moderate_risk",
            RiskTier::HighRisk => "high_risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final fused severity verdict driving the response tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Critical,
    HighStress,
    ModerateStress,
    LowStress,
    Normal,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Critical => "critical",
            OverallStatus::HighStress => "high_stress",
            OverallStatus::ModerateStress => "moderate_stress",
            OverallStatus::LowStress => "low_stress",
            OverallStatus::Normal => "normal",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable aggregate produced once per analyzed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion: EmotionLabel,
    pub stress_level: StressTier,
    pub academic_stress_category: AcademicStressCategory,
    pub risk_level: RiskTier,
    pub overall_status: OverallStatus,
    pub response: String,
}

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Turn {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Turn {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
