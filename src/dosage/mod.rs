//! Radioactive-iodine activity recommendation.
//!
//! A pure lookup from risk tier to an activity range. Distant metastasis
//! (M1) overrides the tier: the category is still reported, but the
//! activity text is always the metastatic one.

mod table;

pub use table::{DosageTable, HIGH_RAI, INTERMEDIATE_RAI, LOW_RAI, METASTATIC_RAI};

use crate::case::{CaseInputs, Metastasis};
use crate::risk::RiskCategory;

/// Activity text for a category using the default table.
///
/// Only `case.metastasis` is read from the case.
pub fn recommend_rai(category: RiskCategory, case: &CaseInputs) -> &'static str {
    if case.metastasis == Metastasis::M1 {
        return METASTATIC_RAI;
    }
    match category {
        RiskCategory::Low => LOW_RAI,
        RiskCategory::LowIntermediate | RiskCategory::HighIntermediate => INTERMEDIATE_RAI,
        RiskCategory::High => HIGH_RAI,
    }
}
