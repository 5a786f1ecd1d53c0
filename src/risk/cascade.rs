//! Strict-priority trigger cascade.
//!
//! Groups are evaluated from the most to the least severe. Every trigger
//! of a group is collected, and the first group with any trigger decides
//! the category. A case that fires nothing is Low.

use super::tally::{tally_factors, FactorTally};
use super::types::{RiskCategory, RiskFactor, Trigger, NO_TRIGGERS};
use crate::case::{
    CaseInputs, FollicularInvasion, Histology, Margin, Metastasis, Multifocality, Nodal,
    PtcVascularInvasion, TGroup,
};
use std::fmt;

/// A named tier of the cascade.
#[derive(Clone, Copy)]
pub struct TriggerGroup {
    pub name: &'static str,
    pub category: RiskCategory,
    /// Whether the factor tally's reasons follow this group's triggers
    /// in the rationale.
    pub echoes_factors: bool,
    evaluate: fn(&CaseInputs, &FactorTally) -> Vec<Trigger>,
}

impl fmt::Debug for TriggerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerGroup")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("echoes_factors", &self.echoes_factors)
            .finish_non_exhaustive()
    }
}

impl TriggerGroup {
    /// Every trigger of this group that holds for the case, in rule order.
    pub fn evaluate(&self, case: &CaseInputs, tally: &FactorTally) -> Vec<Trigger> {
        (self.evaluate)(case, tally)
    }
}

/// The cascade, in priority order.
pub const CASCADE: [TriggerGroup; 3] = [
    TriggerGroup {
        name: "high",
        category: RiskCategory::High,
        echoes_factors: false,
        evaluate: high_triggers,
    },
    TriggerGroup {
        name: "high-intermediate",
        category: RiskCategory::HighIntermediate,
        echoes_factors: true,
        evaluate: high_intermediate_triggers,
    },
    TriggerGroup {
        name: "low-intermediate",
        category: RiskCategory::LowIntermediate,
        echoes_factors: true,
        evaluate: low_intermediate_triggers,
    },
];

fn high_triggers(case: &CaseInputs, _tally: &FactorTally) -> Vec<Trigger> {
    let mut fired = Vec::new();

    if case.metastasis == Metastasis::M1 {
        fired.push(Trigger::DistantMetastasis);
    }
    if case.t_group == TGroup::T3bT4 {
        fired.push(Trigger::GrossEte);
    }
    if case.nodal == Nodal::BulkyN1b {
        fired.push(Trigger::BulkyN1b);
    }
    if case.margin == Margin::R2 {
        fired.push(Trigger::GrossResidual);
    }
    if case.poor_diff_high_grade {
        fired.push(Trigger::PoorlyDifferentiated);
    }
    if let Histology::Follicular(f) = &case.histology {
        if matches!(
            f.invasion,
            FollicularInvasion::ExtensiveAngioinvasive | FollicularInvasion::WidelyInvasive
        ) {
            fired.push(Trigger::ExtensiveAngioinvasion);
        }
    }
    if case.t_group == TGroup::T3a && case.microscopic_ete {
        fired.push(Trigger::T3aMicroscopicEte);
    }

    fired
}

fn high_intermediate_triggers(case: &CaseInputs, tally: &FactorTally) -> Vec<Trigger> {
    let mut fired = Vec::new();

    if let Histology::Papillary(ptc) = &case.histology {
        if ptc.multifocality == Multifocality::Bilateral {
            fired.push(Trigger::BilateralMultifocality);
        }
    }
    if case.nodal == Nodal::ClinicalN1b {
        fired.push(Trigger::ClinicalN1b);
    }
    if case.aggressive_histology {
        fired.push(Trigger::AggressiveHistology);
    }
    if let Histology::Papillary(ptc) = &case.histology {
        if ptc.vascular_invasion == PtcVascularInvasion::Present {
            fired.push(Trigger::PtcVascularInvasion);
        }
    }
    if tally.count() >= 2 {
        fired.push(Trigger::MultipleFactors {
            count: tally.count(),
        });
    }

    fired
}

fn low_intermediate_triggers(case: &CaseInputs, tally: &FactorTally) -> Vec<Trigger> {
    let mut fired = Vec::new();

    if case.t_group == TGroup::T3a {
        fired.push(Trigger::T3aAlone);
    }
    if tally.count() >= 1 {
        fired.push(Trigger::AnyFactor {
            count: tally.count(),
        });
    }

    fired
}

/// Outcome of running the cascade on one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub category: RiskCategory,
    /// Triggers of the committed group. Empty for Low.
    pub triggers: Vec<Trigger>,
    /// Factors echoed into the rationale after the triggers.
    pub echoed_factors: Vec<RiskFactor>,
    /// The full factor tally, whether or not it was echoed.
    pub tally: FactorTally,
}

impl Assessment {
    /// Rationale lines: triggers, then echoed factor reasons.
    pub fn rationale(&self) -> Vec<String> {
        if self.triggers.is_empty() {
            return vec![NO_TRIGGERS.to_string()];
        }
        self.triggers
            .iter()
            .map(ToString::to_string)
            .chain(self.echoed_factors.iter().map(|f| f.reason().to_string()))
            .collect()
    }
}

/// Tallies factors, then commits to the first group that fires.
pub fn assess(case: &CaseInputs) -> Assessment {
    let tally = tally_factors(case);

    for group in &CASCADE {
        let triggers = group.evaluate(case, &tally);
        if triggers.is_empty() {
            continue;
        }
        let echoed_factors = if group.echoes_factors {
            tally.factors().to_vec()
        } else {
            Vec::new()
        };
        return Assessment {
            category: group.category,
            triggers,
            echoed_factors,
            tally,
        };
    }

    Assessment {
        category: RiskCategory::Low,
        triggers: Vec::new(),
        echoed_factors: Vec::new(),
        tally,
    }
}
