//! Typed case inputs.

use super::options::{
    FollicularInvasion, HistologyGroup, Margin, Metastasis, Multifocality, Nodal,
    PtcVascularInvasion, TGroup,
};

/// Fields that only exist for papillary carcinoma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PapillaryFeatures {
    pub multifocality: Multifocality,
    pub vascular_invasion: PtcVascularInvasion,
}

/// Follicular-group subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FollicularSubtype {
    /// FTC or invasive encapsulated follicular-variant PTC.
    #[default]
    FtcIefvptc,
    /// Oncocytic carcinoma.
    Oncocytic,
}

/// Fields that only exist for the follicular group (FTC, IEFVPTC, OTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FollicularFeatures {
    pub subtype: FollicularSubtype,
    pub invasion: FollicularInvasion,
    /// Accepted for record compatibility; no rule reads it.
    pub encapsulated_angioinvasive: bool,
}

/// Histology with the fields that are meaningful for it.
///
/// PTC-only inputs (multifocality, PTC vascular invasion) cannot be
/// expressed for a follicular-group tumor, and the FTC/OTC invasion
/// pattern cannot be expressed for PTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Histology {
    Papillary(PapillaryFeatures),
    Follicular(FollicularFeatures),
}

impl Histology {
    /// Papillary histology with the given PTC features.
    pub fn papillary(multifocality: Multifocality, vascular_invasion: PtcVascularInvasion) -> Self {
        Histology::Papillary(PapillaryFeatures {
            multifocality,
            vascular_invasion,
        })
    }

    /// Follicular-group histology with the given invasion pattern.
    pub fn follicular(subtype: FollicularSubtype, invasion: FollicularInvasion) -> Self {
        Histology::Follicular(FollicularFeatures {
            subtype,
            invasion,
            encapsulated_angioinvasive: false,
        })
    }

    /// The flat option this histology corresponds to.
    pub fn group(&self) -> HistologyGroup {
        match self {
            Histology::Papillary(_) => HistologyGroup::Ptc,
            Histology::Follicular(f) => match f.subtype {
                FollicularSubtype::FtcIefvptc => HistologyGroup::FtcIefvptc,
                FollicularSubtype::Oncocytic => HistologyGroup::Oncocytic,
            },
        }
    }

    pub fn is_papillary(&self) -> bool {
        matches!(self, Histology::Papillary(_))
    }

    /// PTC features, if papillary.
    pub fn papillary_features(&self) -> Option<&PapillaryFeatures> {
        match self {
            Histology::Papillary(p) => Some(p),
            Histology::Follicular(_) => None,
        }
    }

    /// FTC/OTC features, if follicular-group.
    pub fn follicular_features(&self) -> Option<&FollicularFeatures> {
        match self {
            Histology::Papillary(_) => None,
            Histology::Follicular(f) => Some(f),
        }
    }
}

impl Default for Histology {
    fn default() -> Self {
        Histology::Papillary(PapillaryFeatures::default())
    }
}

/// A complete, validated set of case inputs.
///
/// The default is the intake form's initial state: PTC, T1–T2, N0, M0,
/// negative margin, every flag off.
///
/// # Examples
///
/// ```
/// use ata_risk::case::{CaseInputs, TGroup};
///
/// let case = CaseInputs::default()
///     .with_t_group(TGroup::T3a)
///     .with_microscopic_ete(true);
/// assert!(case.microscopic_ete);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CaseInputs {
    pub histology: Histology,
    pub t_group: TGroup,
    pub nodal: Nodal,
    pub metastasis: Metastasis,
    pub margin: Margin,
    /// Tall cell, hobnail, columnar and similar subtypes.
    pub aggressive_histology: bool,
    pub poor_diff_high_grade: bool,
    pub microscopic_ete: bool,
}

impl CaseInputs {
    /// Baseline inputs for the given histology.
    pub fn new(histology: Histology) -> Self {
        Self {
            histology,
            ..Self::default()
        }
    }

    pub fn with_histology(mut self, histology: Histology) -> Self {
        self.histology = histology;
        self
    }

    pub fn with_t_group(mut self, t_group: TGroup) -> Self {
        self.t_group = t_group;
        self
    }

    pub fn with_nodal(mut self, nodal: Nodal) -> Self {
        self.nodal = nodal;
        self
    }

    pub fn with_metastasis(mut self, metastasis: Metastasis) -> Self {
        self.metastasis = metastasis;
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_aggressive_histology(mut self, yes: bool) -> Self {
        self.aggressive_histology = yes;
        self
    }

    pub fn with_poor_diff_high_grade(mut self, yes: bool) -> Self {
        self.poor_diff_high_grade = yes;
        self
    }

    pub fn with_microscopic_ete(mut self, yes: bool) -> Self {
        self.microscopic_ete = yes;
        self
    }

    /// True for M1 disease.
    pub fn is_metastatic(&self) -> bool {
        self.metastasis == Metastasis::M1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_form_initial_state() {
        let case = CaseInputs::default();
        assert_eq!(case.histology.group(), HistologyGroup::Ptc);
        assert_eq!(case.t_group, TGroup::T1T2);
        assert_eq!(case.nodal, Nodal::N0OrMinorN1a);
        assert_eq!(case.metastasis, Metastasis::M0);
        assert_eq!(case.margin, Margin::R0);
        assert!(!case.aggressive_histology);
        assert!(!case.poor_diff_high_grade);
        assert!(!case.microscopic_ete);
        assert_eq!(
            case.histology.papillary_features(),
            Some(&PapillaryFeatures::default())
        );
    }

    #[test]
    fn test_histology_group() {
        let ftc = Histology::follicular(
            FollicularSubtype::FtcIefvptc,
            FollicularInvasion::LimitedAngioinvasive,
        );
        let otc = Histology::follicular(
            FollicularSubtype::Oncocytic,
            FollicularInvasion::MinimallyInvasive,
        );
        assert_eq!(ftc.group(), HistologyGroup::FtcIefvptc);
        assert_eq!(otc.group(), HistologyGroup::Oncocytic);
        assert!(!ftc.is_papillary());
        assert!(ftc.papillary_features().is_none());
        assert_eq!(
            ftc.follicular_features().map(|f| f.invasion),
            Some(FollicularInvasion::LimitedAngioinvasive)
        );
    }

    #[test]
    fn test_builders() {
        let case = CaseInputs::new(Histology::papillary(
            Multifocality::Unilateral,
            PtcVascularInvasion::Present,
        ))
        .with_nodal(Nodal::ClinicalN1b)
        .with_metastasis(Metastasis::M1)
        .with_margin(Margin::R1Posterior)
        .with_aggressive_histology(true)
        .with_poor_diff_high_grade(true);

        assert_eq!(case.nodal, Nodal::ClinicalN1b);
        assert!(case.is_metastatic());
        assert_eq!(case.margin, Margin::R1Posterior);
        assert!(case.aggressive_histology);
        assert!(case.poor_diff_high_grade);
        assert_eq!(
            case.histology.papillary_features().map(|p| p.multifocality),
            Some(Multifocality::Unilateral)
        );
    }
}
