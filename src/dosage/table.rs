//! RAI activity table.

use crate::case::Metastasis;
use crate::error::ClassifyError;
use crate::risk::RiskCategory;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const LOW_RAI: &str = "RAI generally not given; if considered: ~30–50 mCi (1.1–1.85 GBq).";
pub const INTERMEDIATE_RAI: &str = "30–100 mCi (1.1–3.7 GBq).";
pub const HIGH_RAI: &str = "100–150 mCi (3.7–5.55 GBq).";
pub const METASTATIC_RAI: &str = "100–200 mCi (3.7–7.4 GBq) or consider dosimetry (M1).";

/// Recommended activity text per risk tier, plus the M1 override.
///
/// Both intermediate tiers share one entry.
///
/// # Examples
///
/// ```
/// use ata_risk::dosage::DosageTable;
///
/// let table = DosageTable::default()
///     .with_high("100–150 mCi; dosimetry if renal impairment.");
/// assert!(table.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DosageTable {
    pub low: String,
    pub intermediate: String,
    pub high: String,
    /// Returned for every M1 case, whatever its category.
    pub metastatic: String,
}

impl Default for DosageTable {
    fn default() -> Self {
        Self {
            low: LOW_RAI.into(),
            intermediate: INTERMEDIATE_RAI.into(),
            high: HIGH_RAI.into(),
            metastatic: METASTATIC_RAI.into(),
        }
    }
}

impl DosageTable {
    pub fn with_low(mut self, text: impl Into<String>) -> Self {
        self.low = text.into();
        self
    }

    pub fn with_intermediate(mut self, text: impl Into<String>) -> Self {
        self.intermediate = text.into();
        self
    }

    pub fn with_high(mut self, text: impl Into<String>) -> Self {
        self.high = text.into();
        self
    }

    pub fn with_metastatic(mut self, text: impl Into<String>) -> Self {
        self.metastatic = text.into();
        self
    }

    /// Rejects blank entries.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        let entries = [
            ("low", &self.low),
            ("intermediate", &self.intermediate),
            ("high", &self.high),
            ("metastatic", &self.metastatic),
        ];
        for (entry, text) in entries {
            if text.trim().is_empty() {
                return Err(ClassifyError::InvalidDosageTable { entry });
            }
        }
        Ok(())
    }

    /// Activity text for a category. M1 overrides the category.
    pub fn recommend(&self, category: RiskCategory, metastasis: Metastasis) -> &str {
        if metastasis == Metastasis::M1 {
            return &self.metastatic;
        }
        match category {
            RiskCategory::Low => &self.low,
            RiskCategory::LowIntermediate | RiskCategory::HighIntermediate => &self.intermediate,
            RiskCategory::High => &self.high,
        }
    }
}
