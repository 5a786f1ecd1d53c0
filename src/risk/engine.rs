//! Classification entry points.

use super::cascade::{assess, Assessment, CASCADE};
use super::types::Classification;
use crate::case::CaseInputs;
use crate::dosage::DosageTable;
use crate::error::ClassifyError;

/// Classifies cases against a dosage table.
///
/// Stateless apart from the table; a single engine can be shared across
/// threads and called concurrently.
///
/// # Examples
///
/// ```
/// use ata_risk::case::{CaseInputs, TGroup};
/// use ata_risk::risk::{RiskCategory, RiskEngine};
///
/// let engine = RiskEngine::new();
/// let result = engine.classify(&CaseInputs::default().with_t_group(TGroup::T3a));
/// assert_eq!(result.category, RiskCategory::LowIntermediate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    dosage: DosageTable,
}

impl RiskEngine {
    /// Creates an engine with the default dosage table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom dosage table.
    pub fn with_dosage(dosage: DosageTable) -> Result<Self, ClassifyError> {
        dosage.validate()?;
        Ok(Self { dosage })
    }

    pub fn dosage(&self) -> &DosageTable {
        &self.dosage
    }

    /// Names of the trigger groups, in evaluation order.
    pub fn group_names(&self) -> Vec<&'static str> {
        CASCADE.iter().map(|g| g.name).collect()
    }

    /// Runs the cascade without rendering.
    pub fn assess(&self, case: &CaseInputs) -> Assessment {
        assess(case)
    }

    /// Classifies a case and attaches the activity recommendation.
    pub fn classify(&self, case: &CaseInputs) -> Classification {
        let assessment = assess(case);
        tracing::debug!(
            category = %assessment.category,
            triggers = assessment.triggers.len(),
            factors = assessment.tally.count(),
            "case classified"
        );

        Classification {
            category: assessment.category,
            rationale: assessment.rationale(),
            recommended_rai: self
                .dosage
                .recommend(assessment.category, case.metastasis)
                .to_string(),
        }
    }
}

/// Classifies a case with the default dosage table.
pub fn classify(case: &CaseInputs) -> Classification {
    RiskEngine::new().classify(case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{
        CaseRecord, FlagValue, FollicularInvasion, FollicularSubtype, Histology, Margin,
        Metastasis, Multifocality, Nodal, OptionValue, PtcVascularInvasion, TGroup,
    };
    use crate::case::strategies::{case_inputs, follicular, papillary, with_histology};
    use crate::dosage::{HIGH_RAI, INTERMEDIATE_RAI, LOW_RAI, METASTATIC_RAI};
    use crate::risk::{tally_factors, RiskCategory};
    use proptest::prelude::*;
    use proptest::sample::select;

    #[test]
    fn test_with_dosage_rejects_blank_table() {
        let err = RiskEngine::with_dosage(DosageTable::default().with_low("")).unwrap_err();
        assert_eq!(err, ClassifyError::InvalidDosageTable { entry: "low" });
    }

    #[test]
    fn test_custom_dosage_flows_into_result() {
        let engine = RiskEngine::with_dosage(DosageTable::default().with_low("observe")).unwrap();
        assert_eq!(engine.classify(&CaseInputs::default()).recommended_rai, "observe");
        assert_eq!(engine.dosage().low, "observe");
    }

    #[test]
    fn test_group_names() {
        assert_eq!(
            RiskEngine::new().group_names(),
            vec!["high", "high-intermediate", "low-intermediate"]
        );
    }

    // ---- Reference scenarios ----

    #[test]
    fn test_baseline_ptc_is_low() {
        let result = classify(&CaseInputs::default());
        assert_eq!(result.category, RiskCategory::Low);
        assert_eq!(result.rationale, vec!["No triggers met → Low"]);
        assert_eq!(result.recommended_rai, LOW_RAI);
    }

    #[test]
    fn test_m1_adds_high_trigger_and_metastatic_dosage() {
        let result = classify(&CaseInputs::default().with_metastasis(Metastasis::M1));
        assert_eq!(result.category, RiskCategory::High);
        assert_eq!(result.rationale, vec!["High trigger: Distant metastasis (M1)"]);
        assert_eq!(result.recommended_rai, METASTATIC_RAI);
    }

    #[test]
    fn test_t3a_microscopic_ete_scenario() {
        let result = classify(
            &CaseInputs::default()
                .with_t_group(TGroup::T3a)
                .with_microscopic_ete(true),
        );
        assert_eq!(result.category, RiskCategory::High);
        assert_eq!(
            result.rationale,
            vec!["High trigger: T3a + microscopic ETE → High"]
        );
        assert_eq!(result.recommended_rai, HIGH_RAI);
    }

    #[test]
    fn test_ftc_limited_angioinvasion_with_posterior_margin() {
        let case = CaseInputs::new(Histology::follicular(
            FollicularSubtype::FtcIefvptc,
            FollicularInvasion::LimitedAngioinvasive,
        ))
        .with_margin(Margin::R1Posterior);

        assert_eq!(tally_factors(&case).count(), 2);
        let result = classify(&case);
        assert_eq!(result.category, RiskCategory::HighIntermediate);
        assert_eq!(result.recommended_rai, INTERMEDIATE_RAI);
    }

    #[test]
    fn test_t3a_alone_scenario() {
        let case = CaseInputs::default().with_t_group(TGroup::T3a);
        assert_eq!(tally_factors(&case).count(), 0);
        let result = classify(&case);
        assert_eq!(result.category, RiskCategory::LowIntermediate);
        assert_eq!(
            result.rationale,
            vec!["Low-Intermediate trigger: T3a alone → Low-Intermediate"]
        );
        assert_eq!(result.recommended_rai, INTERMEDIATE_RAI);
    }

    #[test]
    fn test_ftc_extensive_angioinvasion_scenario() {
        let case = CaseInputs::new(Histology::follicular(
            FollicularSubtype::FtcIefvptc,
            FollicularInvasion::ExtensiveAngioinvasive,
        ))
        .with_nodal(Nodal::N1aMajor)
        .with_margin(Margin::R1Posterior);

        let result = classify(&case);
        assert_eq!(result.category, RiskCategory::High);
        assert_eq!(
            result.rationale,
            vec!["High trigger: FTC/OTC: Extensive angioinvasion or widely invasive"]
        );
    }

    // ---- Properties ----

    fn record_for(case: &CaseInputs) -> CaseRecord {
        let text = |s: &str| Some(s.to_string());
        let mut record = CaseRecord {
            histology: text(case.histology.group().label()),
            t_group: text(case.t_group.label()),
            nodal: text(case.nodal.label()),
            m: text(case.metastasis.label()),
            margin: text(case.margin.label()),
            aggressive_histology: Some(case.aggressive_histology.into()),
            poor_diff_high_grade: Some(case.poor_diff_high_grade.into()),
            microscopic_ete: Some(case.microscopic_ete.into()),
            ..CaseRecord::default()
        };
        match &case.histology {
            Histology::Papillary(p) => {
                record.multifocality_ptc = text(p.multifocality.label());
                record.vi_ptc = text(p.vascular_invasion.label());
            }
            Histology::Follicular(f) => {
                record.vi_ftc_otc = text(f.invasion.label());
                record.encapsulated_angioinvasive_ftc_otc = Some(f.encapsulated_angioinvasive.into());
            }
        }
        record
    }

    fn has_high_trigger(case: &CaseInputs) -> bool {
        !CASCADE[0].evaluate(case, &tally_factors(case)).is_empty()
    }

    proptest! {
        #[test]
        fn prop_deterministic(case in case_inputs()) {
            prop_assert_eq!(classify(&case), classify(&case));
        }

        #[test]
        fn prop_high_trigger_wins(case in case_inputs()) {
            if has_high_trigger(&case) {
                prop_assert_eq!(classify(&case).category, RiskCategory::High);
            }
        }

        #[test]
        fn prop_tally_bounds_and_promotion(case in case_inputs()) {
            let count = tally_factors(&case).count();
            prop_assert!(count <= 5);
            if !has_high_trigger(&case) {
                let category = classify(&case).category;
                if count >= 2 {
                    prop_assert_eq!(category, RiskCategory::HighIntermediate);
                } else if count == 1 {
                    prop_assert!(category >= RiskCategory::LowIntermediate);
                }
            }
        }

        #[test]
        fn prop_m1_always_metastatic_dosage(case in case_inputs()) {
            let case = case.with_metastasis(Metastasis::M1);
            prop_assert_eq!(classify(&case).recommended_rai, METASTATIC_RAI);
        }

        #[test]
        fn prop_subtype_and_encapsulated_flag_do_not_matter(
            case in with_histology(follicular().prop_map(Histology::Follicular)),
            subtype in prop_oneof![Just(FollicularSubtype::FtcIefvptc), Just(FollicularSubtype::Oncocytic)],
            encapsulated in any::<bool>(),
        ) {
            let Histology::Follicular(mut f) = case.histology else { unreachable!() };
            f.subtype = subtype;
            f.encapsulated_angioinvasive = encapsulated;
            let varied = case.with_histology(Histology::Follicular(f));
            prop_assert_eq!(classify(&case), classify(&varied));
        }

        #[test]
        fn prop_record_ignores_ptc_fields_for_follicular(
            case in with_histology(follicular().prop_map(Histology::Follicular)),
            multifocality in proptest::option::of(select(Multifocality::ALL)),
            vi in proptest::option::of(select(PtcVascularInvasion::ALL)),
        ) {
            let record = CaseRecord {
                multifocality_ptc: multifocality.map(|m| m.label().to_string()),
                vi_ptc: vi.map(|v| v.label().to_string()),
                ..record_for(&case)
            };
            let parsed = record.into_inputs().unwrap();
            prop_assert_eq!(classify(&parsed), classify(&case));
        }

        #[test]
        fn prop_record_ignores_follicular_fields_for_ptc(
            case in with_histology(papillary().prop_map(Histology::Papillary)),
            invasion in proptest::option::of(select(FollicularInvasion::ALL)),
            encapsulated in proptest::option::of(any::<bool>()),
        ) {
            let record = CaseRecord {
                vi_ftc_otc: invasion.map(|i| i.label().to_string()),
                encapsulated_angioinvasive_ftc_otc: encapsulated.map(FlagValue::from),
                ..record_for(&case)
            };
            let parsed = record.into_inputs().unwrap();
            prop_assert_eq!(classify(&parsed), classify(&case));
        }
    }
}
