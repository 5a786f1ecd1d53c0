//! Low-Intermediate risk factor tally.

use super::types::RiskFactor;
use crate::case::{CaseInputs, FollicularInvasion, Histology, Margin, Multifocality, Nodal};

/// Low-Intermediate factors present in a case, in evaluation order.
///
/// The count feeds two tiers: two or more promotes to High-Intermediate,
/// one or more to Low-Intermediate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FactorTally {
    factors: Vec<RiskFactor>,
}

impl FactorTally {
    /// Number of factors present, in `0..=5`.
    pub fn count(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn factors(&self) -> &[RiskFactor] {
        &self.factors
    }

    /// Rationale lines, one per factor.
    pub fn reasons(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factors.iter().map(|f| f.reason())
    }

    pub fn contains(&self, factor: RiskFactor) -> bool {
        self.factors.contains(&factor)
    }
}

/// Scans the five Low-Intermediate conditions.
///
/// Microscopic ETE counts here even when T3a turns it into a High trigger;
/// the High tier then short-circuits before the count is used. Anterior R1
/// margins do not count.
pub fn tally_factors(case: &CaseInputs) -> FactorTally {
    let mut factors = Vec::with_capacity(5);

    if case.nodal == Nodal::N1aMajor {
        factors.push(RiskFactor::N1aMajor);
    }

    if let Histology::Papillary(ptc) = &case.histology {
        if ptc.multifocality == Multifocality::Unilateral {
            factors.push(RiskFactor::UnilateralMultifocality);
        }
    }

    if case.microscopic_ete {
        factors.push(RiskFactor::MicroscopicEte);
    }

    if case.margin == Margin::R1Posterior {
        factors.push(RiskFactor::R1Posterior);
    }

    if let Histology::Follicular(f) = &case.histology {
        if f.invasion == FollicularInvasion::LimitedAngioinvasive {
            factors.push(RiskFactor::LimitedAngioinvasion);
        }
    }

    FactorTally { factors }
}
