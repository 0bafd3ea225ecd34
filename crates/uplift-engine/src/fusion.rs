//! Status fusion: the single source of truth for severity ordering.

use uplift_core::types::{AcademicStressCategory, OverallStatus, RiskTier, StressTier};

/// Merge the three classifier outputs into one overall status.
///
/// Priority cascade, first matching rule wins; risk dominates academic
/// signals, which dominate raw emotion-derived stress. Pure and total:
/// the same triple always yields the same status.
pub fn fuse(
    stress: StressTier,
    academic: AcademicStressCategory,
    risk: RiskTier,
) -> OverallStatus {
    if risk == RiskTier::HighRisk {
        return OverallStatus::Critical;
    }
    if risk == RiskTier::ModerateRisk {
        return OverallStatus::HighStress;
    }
    if matches!(
        academic,
        AcademicStressCategory::AcademicStressHigh | AcademicStressCategory::Burnout
    ) {
        return OverallStatus::HighStress;
    }
    if academic == AcademicStressCategory::AcademicStressMedium || stress == StressTier::Medium {
        return OverallStatus::ModerateStress;
    }
    if stress == StressTier::Low && academic == AcademicStressCategory::AcademicStressLow {
        return OverallStatus::LowStress;
    }
    OverallStatus::Normal
}
