//! Coping-technique recommendation.

use uplift_core::types::{AcademicStressCategory, EmotionLabel};

/// Default cap on techniques surfaced in a single reply
/// (`engine.max_techniques` in config).
pub const MAX_TECHNIQUES: usize = 4;

/// Offered when no rule matched, so the list is never empty.
pub const FALLBACK_TECHNIQUE: &str = "mindful breathing";

/// Recommend a short, ordered list of coping techniques.
///
/// Technique groups are appended in a fixed sequence (emotion groups first,
/// then burnout, then academic) and the result is truncated to
/// `max_techniques`. Group disjointness is the only deduplication.
pub fn recommend(
    emotion: EmotionLabel,
    academic: AcademicStressCategory,
    max_techniques: usize,
) -> Vec<String> {
    let mut techniques: Vec<String> = Vec::new();
    let mut push = |names: &[&str]| {
        for name in names {
            techniques.push((*name).to_string());
        }
    };

    match emotion {
        EmotionLabel::Fear | EmotionLabel::Surprise => push(&["grounding", "box breathing"]),
        EmotionLabel::Sadness => push(&["self-compassion break", "small activation step"]),
        EmotionLabel::Anger => push(&["paced breathing", "cognitive defusion"]),
        _ => {}
    }

    match academic {
        AcademicStressCategory::Burnout => push(&["micro-break", "energy audit"]),
        AcademicStressCategory::AcademicStressMedium
        | AcademicStressCategory::AcademicStressHigh => {
            push(&["task chunking", "two-minute start"])
        }
        // Low is the no-signal fallback category, not an academic finding.
        AcademicStressCategory::AcademicStressLow => {}
    }

    techniques.truncate(max_techniques);
    if techniques.is_empty() {
        techniques.push(FALLBACK_TECHNIQUE.to_string());
    }
    techniques
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_empty_never_over_cap() {
        for emotion in EmotionLabel::ALL {
            for academic in [
                AcademicStressCategory::AcademicStressLow,
                AcademicStressCategory::AcademicStressMedium,
                AcademicStressCategory::AcademicStressHigh,
                AcademicStressCategory::Burnout,
            ] {
                let t = recommend(emotion, academic, MAX_TECHNIQUES);
                assert!(!t.is_empty());
                assert!(t.len() <= MAX_TECHNIQUES);
            }
        }
    }

    #[test]
    fn test_configured_cap_respected() {
        // Fear + academic high would yield four techniques at the default cap.
        let t = recommend(
            EmotionLabel::Fear,
            AcademicStressCategory::AcademicStressHigh,
            1,
        );
        assert_eq!(t, vec!["grounding"]);

        let t = recommend(
            EmotionLabel::Sadness,
            AcademicStressCategory::Burnout,
            3,
        );
        assert_eq!(
            t,
            vec!["self-compassion break", "small activation step", "micro-break"]
        );
    }

    #[test]
    fn test_fear_gets_grounding_first() {
        let t = recommend(
            EmotionLabel::Fear,
            AcademicStressCategory::AcademicStressMedium,
            MAX_TECHNIQUES,
        );
        assert_eq!(t[0], "grounding");
        assert_eq!(t[1], "box breathing");
    }

    #[test]
    fn test_surprise_shares_fear_group() {
        let t = recommend(
            EmotionLabel::Surprise,
            AcademicStressCategory::AcademicStressLow,
            MAX_TECHNIQUES,
        );
        assert!(t.contains(&"grounding".to_string()));
    }

    #[test]
    fn test_sadness_group() {
        let t = recommend(
            EmotionLabel::Sadness,
            AcademicStressCategory::AcademicStressLow,
            MAX_TECHNIQUES,
        );
        assert_eq!(t[0], "self-compassion break");
        assert_eq!(t[1], "small activation step");
    }

    #[test]
    fn test_anger_group() {
        let t = recommend(
            EmotionLabel::Anger,
            AcademicStressCategory::AcademicStressLow,
            MAX_TECHNIQUES,
        );
        assert_eq!(t[0], "paced breathing");
        assert_eq!(t[1], "cognitive defusion");
    }

    #[test]
    fn test_burnout_group_appended_after_emotion() {
        let t = recommend(
            EmotionLabel::Sadness,
            AcademicStressCategory::Burnout,
            MAX_TECHNIQUES,
        );
        assert_eq!(
            t,
            vec![
                "self-compassion break",
                "small activation step",
                "micro-break",
                "energy audit"
            ]
        );
    }

    #[test]
    fn test_academic_group_appended_after_emotion() {
        let t = recommend(
            EmotionLabel::Fear,
            AcademicStressCategory::AcademicStressHigh,
            MAX_TECHNIQUES,
        );
        assert_eq!(
            t,
            vec!["grounding", "box breathing", "task chunking", "two-minute start"]
        );
    }

    #[test]
    fn test_neutral_emotion_still_gets_academic_group() {
        let t = recommend(
            EmotionLabel::Neutral,
            AcademicStressCategory::AcademicStressMedium,
            MAX_TECHNIQUES,
        );
        assert_eq!(t, vec!["task chunking", "two-minute start"]);
    }

    #[test]
    fn test_no_signal_falls_back_to_mindful_breathing() {
        for emotion in [EmotionLabel::Joy, EmotionLabel::Neutral, EmotionLabel::Disgust] {
            let t = recommend(emotion, AcademicStressCategory::AcademicStressLow, MAX_TECHNIQUES);
            assert_eq!(t, vec![FALLBACK_TECHNIQUE.to_string()]);
        }
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let a = recommend(EmotionLabel::Anger, AcademicStressCategory::Burnout, MAX_TECHNIQUES);
        let b = recommend(EmotionLabel::Anger, AcademicStressCategory::Burnout, MAX_TECHNIQUES);
        assert_eq!(a, b);
    }
}
