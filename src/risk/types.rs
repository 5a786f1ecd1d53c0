//! Risk categories, triggers, and the classification record.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Recurrence-risk tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RiskCategory {
    Low,
    #[cfg_attr(feature = "serde", serde(rename = "Low-Intermediate"))]
    LowIntermediate,
    #[cfg_attr(feature = "serde", serde(rename = "High-Intermediate"))]
    HighIntermediate,
    High,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Low,
        RiskCategory::LowIntermediate,
        RiskCategory::HighIntermediate,
        RiskCategory::High,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::LowIntermediate => "Low-Intermediate",
            RiskCategory::HighIntermediate => "High-Intermediate",
            RiskCategory::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A condition counted toward the Low-Intermediate factor tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskFactor {
    /// N1a with a deposit >2 mm or >5 nodes.
    N1aMajor,
    /// Unilateral PTC multifocality.
    UnilateralMultifocality,
    /// Microscopic extrathyroidal extension, at any T group.
    MicroscopicEte,
    /// Microscopic residual at the posterior margin.
    R1Posterior,
    /// FTC/OTC angioinvasion of fewer than 4 vessels.
    LimitedAngioinvasion,
}

impl RiskFactor {
    /// Rationale line for this factor.
    pub const fn reason(self) -> &'static str {
        match self {
            RiskFactor::N1aMajor => "N1a >2 mm or >5 LNs → Low-Intermediate risk factor",
            RiskFactor::UnilateralMultifocality => {
                "PTC unilateral multifocality → Low-Intermediate risk factor"
            }
            RiskFactor::MicroscopicEte => "Microscopic ETE → Low-Intermediate risk factor",
            RiskFactor::R1Posterior => {
                "Microscopic + posterior margin (R1 posterior) → Low-Intermediate risk factor"
            }
            RiskFactor::LimitedAngioinvasion => {
                "FTC/OTC limited angioinvasion (<4 vessels) → Low-Intermediate risk factor"
            }
        }
    }
}

/// A cascade rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    // High
    DistantMetastasis,
    GrossEte,
    BulkyN1b,
    GrossResidual,
    PoorlyDifferentiated,
    ExtensiveAngioinvasion,
    /// T3a with microscopic ETE escalates to High although each alone
    /// is only Low-Intermediate.
    T3aMicroscopicEte,

    // High-Intermediate
    BilateralMultifocality,
    ClinicalN1b,
    AggressiveHistology,
    PtcVascularInvasion,
    /// Two or more Low-Intermediate factors.
    MultipleFactors { count: usize },

    // Low-Intermediate
    T3aAlone,
    /// At least one Low-Intermediate factor.
    AnyFactor { count: usize },
}

impl Trigger {
    /// Tier this trigger promotes to.
    pub const fn category(&self) -> RiskCategory {
        match self {
            Trigger::DistantMetastasis
            | Trigger::GrossEte
            | Trigger::BulkyN1b
            | Trigger::GrossResidual
            | Trigger::PoorlyDifferentiated
            | Trigger::ExtensiveAngioinvasion
            | Trigger::T3aMicroscopicEte => RiskCategory::High,
            Trigger::BilateralMultifocality
            | Trigger::ClinicalN1b
            | Trigger::AggressiveHistology
            | Trigger::PtcVascularInvasion
            | Trigger::MultipleFactors { .. } => RiskCategory::HighIntermediate,
            Trigger::T3aAlone | Trigger::AnyFactor { .. } => RiskCategory::LowIntermediate,
        }
    }

    /// Human-readable description, without the tier prefix.
    pub fn description(&self) -> String {
        match self {
            Trigger::DistantMetastasis => "Distant metastasis (M1)".into(),
            Trigger::GrossEte => "Gross ETE (T3b–T4 group)".into(),
            Trigger::BulkyN1b => "Bulky N1b (≥3 cm) or ENE+".into(),
            Trigger::GrossResidual => "Gross incomplete resection (R2)".into(),
            Trigger::PoorlyDifferentiated => "Poor differentiation / high grade".into(),
            Trigger::ExtensiveAngioinvasion => {
                "FTC/OTC: Extensive angioinvasion or widely invasive".into()
            }
            Trigger::T3aMicroscopicEte => "T3a + microscopic ETE → High".into(),
            Trigger::BilateralMultifocality => "PTC bilateral multifocality ≥1 cm".into(),
            Trigger::ClinicalN1b => "Clinically evident lateral LN mets (cN1b) <3 cm".into(),
            Trigger::AggressiveHistology => "Aggressive histology subtype".into(),
            Trigger::PtcVascularInvasion => "PTC vascular invasion present".into(),
            Trigger::MultipleFactors { count } => {
                format!("2+ Low-Intermediate risk factors (count={count})")
            }
            Trigger::T3aAlone => "T3a alone → Low-Intermediate".into(),
            Trigger::AnyFactor { count } => {
                format!("≥1 Low-Intermediate risk factor (count={count})")
            }
        }
    }
}

/// Renders as a rationale line, e.g. `High trigger: Distant metastasis (M1)`.
impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} trigger: {}", self.category(), self.description())
    }
}

/// Rationale line emitted when no tier fires.
pub const NO_TRIGGERS: &str = "No triggers met → Low";

/// Result of classifying one case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Classification {
    pub category: RiskCategory,
    /// Ordered, display-ready explanation of which rules fired.
    pub rationale: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "recommendedRAI"))]
    pub recommended_rai: String,
}
