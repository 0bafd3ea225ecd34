//! Response composition.
//!
//! Two modes: a fixed per-status message table for stateless analysis, and
//! an adaptive composer for session conversations that weaves recommended
//! techniques into a templated reply. Adding a tone variant only touches
//! the tables here, never the classifiers.

use uplift_core::types::{AcademicStressCategory, OverallStatus, RiskTier, StressTier};

// =============================================================================
// Stateless mode
// =============================================================================

/// Fixed message per overall status. The critical entry carries an explicit
/// crisis-resource directive.
pub static STATUS_TEMPLATES: &[(OverallStatus, &str)] = &[
    (
        OverallStatus::Critical,
        "I'm really concerned about what you've shared. You don't have to face this alone — \
         please contact a crisis line right now (call or text 988 in the US, or your local \
         emergency number) or reach out to someone you trust immediately.",
    ),
    (
        OverallStatus::HighStress,
        "It sounds like you're under a lot of strain right now. That's a heavy load to carry, \
         and it's okay to step back and ask for support.",
    ),
    (
        OverallStatus::ModerateStress,
        "It sounds like things have been demanding lately. A short break and one small next \
         step can make the day feel more manageable.",
    ),
    (
        OverallStatus::LowStress,
        "You seem to be managing well. Keeping up the routines that work for you is worth it.",
    ),
    (
        OverallStatus::Normal,
        "Thanks for checking in. I'm here whenever you want to talk something through.",
    ),
];

/// Select the fixed response for a status. Total: every status has a row.
pub fn compose(status: OverallStatus) -> &'static str {
    STATUS_TEMPLATES
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, msg)| *msg)
        .unwrap_or(STATUS_TEMPLATES[STATUS_TEMPLATES.len() - 1].1)
}

// =============================================================================
// Adaptive/session mode
// =============================================================================

/// Emergency actions returned instead of coping techniques when a message
/// is high risk.
pub static EMERGENCY_ACTIONS: &[&str] = &[
    "contact a crisis line now (call or text 988 in the US)",
    "reach out to someone you trust and tell them how you feel",
    "if you are in immediate danger, call your local emergency number",
];

const CRISIS_MESSAGE: &str =
    "What you're describing sounds really serious, and I'm glad you told me. Please don't \
     carry this alone: contact a crisis line right now (call or text 988 in the US, or your \
     local emergency number), or reach out to someone you trust. You deserve support \
     immediately.";

const ACKNOWLEDGMENT: &str = "Thank you for sharing how you're feeling.";
const PRESSURE_TONE: &str = "It sounds like you're carrying a lot of pressure right now.";
const CHALLENGE_TONE: &str = "It sounds like things have been a bit challenging lately.";
const SUPPORTIVE_TONE: &str = "It sounds like you're holding up, and that's worth noticing.";
const ACADEMIC_HINT: &str =
    "With coursework in the mix, it can help to pick one small task and give it just a few \
     minutes to get moving.";
const CLOSING_QUESTION: &str = "What feels like the heaviest part for you right now?";

/// An adaptive reply: the composed message plus the technique list that was
/// actually surfaced (which differs from the recommender output when the
/// crisis short-circuit fires).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveReply {
    pub message: String,
    pub techniques: Vec<String>,
}

/// Compose a session-mode reply.
///
/// High risk short-circuits to the fixed crisis message and emergency
/// actions, ignoring every other input. Otherwise the reply is a fixed
/// sequence of clauses parameterized only by the technique list:
/// acknowledgment, tone, technique line, optional academic hint, closing
/// question.
pub fn compose_adaptive(
    risk: RiskTier,
    stress: StressTier,
    academic: AcademicStressCategory,
    techniques: &[String],
) -> AdaptiveReply {
    if risk == RiskTier::HighRisk {
        return AdaptiveReply {
            message: CRISIS_MESSAGE.to_string(),
            techniques: EMERGENCY_ACTIONS.iter().map(|a| a.to_string()).collect(),
        };
    }

    let tone = if stress == StressTier::High
        || matches!(
            academic,
            AcademicStressCategory::AcademicStressHigh | AcademicStressCategory::Burnout
        ) {
        PRESSURE_TONE
    } else if stress == StressTier::Medium {
        CHALLENGE_TONE
    } else {
        SUPPORTIVE_TONE
    };

    let mut parts = vec![ACKNOWLEDGMENT.to_string(), tone.to_string()];

    if !techniques.is_empty() {
        parts.push(format!(
            "A couple of things that might help: {}.",
            techniques.join(", ")
        ));
    }

    if academic != AcademicStressCategory::AcademicStressLow {
        parts.push(ACADEMIC_HINT.to_string());
    }

    parts.push(CLOSING_QUESTION.to_string());

    AdaptiveReply {
        message: parts.join(" "),
        techniques: techniques.to_vec(),
    }
}
