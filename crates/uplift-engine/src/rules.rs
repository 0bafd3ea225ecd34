//! Ordered keyword-rule evaluators.
//!
//! The academic classifier and the risk detector are both "first match
//! wins" cascades over static phrase tables. The tables are data, not code
//! order, so the precedence is inspectable and testable on its own. All
//! matching is case-insensitive substring containment.

use uplift_core::types::{AcademicStressCategory, EmotionLabel, RiskTier, StressTier};

/// One step of a keyword cascade: if any phrase is contained in the
/// (lowercased) text, the outcome applies and no later rule is evaluated.
pub struct KeywordRule<T: 'static> {
    pub phrases: &'static [&'static str],
    pub outcome: T,
}

// =============================================================================
// Emotion -> stress tier
// =============================================================================

/// Map an emotion label to its coarse stress tier.
///
/// Total over the seven-label set: fear/sadness/anger/disgust are high,
/// surprise is medium, joy and neutral are low.
pub fn stress_tier(emotion: EmotionLabel) -> StressTier {
    match emotion {
        EmotionLabel::Fear | EmotionLabel::Sadness | EmotionLabel::Anger | EmotionLabel::Disgust => {
            StressTier::High
        }
        EmotionLabel::Surprise => StressTier::Medium,
        EmotionLabel::Joy | EmotionLabel::Neutral => StressTier::Low,
    }
}

// =============================================================================
// Academic-stress classifier
// =============================================================================

/// Phrase cascade evaluated before the academic-context and fallback rules.
pub static ACADEMIC_RULES: &[KeywordRule<AcademicStressCategory>] = &[
    KeywordRule {
        phrases: &[
            "overwhelmed",
            "can't handle",
            "cannot handle",
            "suicidal",
            "hopeless",
            "panic",
            "breakdown",
            "can't go on",
            "giving up",
            "i'm done",
            "end it",
        ],
        outcome: AcademicStressCategory::AcademicStressHigh,
    },
    KeywordRule {
        phrases: &[
            "burnout",
            "burnt out",
            "exhausted",
            "drained",
            "no energy",
            "empty",
            "fatigued",
        ],
        outcome: AcademicStressCategory::Burnout,
    },
    KeywordRule {
        phrases: &[
            "stressed",
            "pressure",
            "anxious",
            "worried",
            "tired",
            "frustrated",
            "scared",
            "fear",
            "nervous",
        ],
        outcome: AcademicStressCategory::AcademicStressMedium,
    },
];

/// Academic-context phrases. On a match the outcome is sub-decided by the
/// emotion rather than fixed.
pub static ACADEMIC_CONTEXT: &[&str] = &[
    "exams",
    "exam",
    "assignments",
    "assignment",
    "university",
    "deadlines",
    "studies",
    "lectures",
    "tests",
    "school",
    "projects",
];

/// Classify a message into an academic-stress category.
///
/// Precedence: severity phrase tables first (high, burnout, medium), then
/// academic-context phrases sub-decided by emotion, then an emotion-only
/// fallback. Rule order guarantees totality; this never fails.
pub fn classify_academic(text: &str, emotion: EmotionLabel) -> AcademicStressCategory {
    let lower = text.to_lowercase();

    for rule in ACADEMIC_RULES {
        if rule.phrases.iter().any(|p| lower.contains(p)) {
            return rule.outcome;
        }
    }

    if ACADEMIC_CONTEXT.iter().any(|p| lower.contains(p)) {
        return match emotion {
            EmotionLabel::Fear | EmotionLabel::Sadness | EmotionLabel::Anger => {
                AcademicStressCategory::AcademicStressHigh
            }
            EmotionLabel::Surprise => AcademicStressCategory::AcademicStressMedium,
            _ => AcademicStressCategory::AcademicStressLow,
        };
    }

    match emotion {
        EmotionLabel::Fear | EmotionLabel::Sadness | EmotionLabel::Anger => {
            AcademicStressCategory::AcademicStressMedium
        }
        _ => AcademicStressCategory::AcademicStressLow,
    }
}

// =============================================================================
// Risk detector
// =============================================================================

/// Risk cascade. Independent of the academic tables above: the two share no
/// state and no ordering, so a phrase may legitimately appear in both.
pub static RISK_RULES: &[KeywordRule<RiskTier>] = &[
    KeywordRule {
        phrases: &[
            "kill myself",
            "end my life",
            "i want to die",
            "suicide",
            "suicidal",
            "can't go on",
            "cannot go on",
            "better off dead",
            "hurt myself",
        ],
        outcome: RiskTier::HighRisk,
    },
    KeywordRule {
        phrases: &[
            "hopeless",
            "worthless",
            "nothing matters",
            "empty inside",
            "no point anymore",
        ],
        outcome: RiskTier::ModerateRisk,
    },
];

/// Detect the self-harm/crisis tier of a message from text alone.
pub fn detect_risk(text: &str) -> RiskTier {
    let lower = text.to_lowercase();
    for rule in RISK_RULES {
        if rule.phrases.iter().any(|p| lower.contains(p)) {
            return rule.outcome;
        }
    }
    RiskTier::Safe
}
