//! Flat case record as exchanged with form, CLI and file collaborators.

use super::inputs::{
    CaseInputs, FollicularFeatures, FollicularSubtype, Histology, PapillaryFeatures,
};
use super::options::{
    parse_flag, FollicularInvasion, HistologyGroup, Margin, Metastasis, Multifocality, Nodal,
    OptionValue, PtcVascularInvasion, TGroup,
};
use crate::error::ClassifyError;
use crate::risk::normalize_margin;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const AGGRESSIVE_HISTOLOGY: &str = "aggressiveHistology";
pub const POOR_DIFF_HIGH_GRADE: &str = "poorDiffHighGrade";
pub const MICROSCOPIC_ETE: &str = "microscopicETE";
pub const ENCAPSULATED_ANGIOINVASIVE: &str = "encapsulatedAngioinvasive_FtcOtc";

/// A yes/no flag as it arrives on the wire: a boolean or a label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    fn resolve(&self, field: &'static str) -> Result<bool, ClassifyError> {
        match self {
            FlagValue::Bool(b) => Ok(*b),
            FlagValue::Text(s) => parse_flag(field, s),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Text(value.to_string())
    }
}

/// Untyped case record, one optional string per form field.
///
/// Field names follow the intake form (`tGroup`, `multifocalityPTC`, ...).
/// Convert with [`CaseRecord::into_inputs`]:
///
/// - shared fields, and the branch fields of the selected histology, are
///   required;
/// - branch fields of the other histology are ignored;
/// - values outside their option set are rejected, except the margin,
///   which falls back to lenient normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CaseRecord {
    pub histology: Option<String>,
    pub t_group: Option<String>,
    pub nodal: Option<String>,
    pub m: Option<String>,
    pub margin: Option<String>,
    pub aggressive_histology: Option<FlagValue>,
    pub poor_diff_high_grade: Option<FlagValue>,
    #[cfg_attr(feature = "serde", serde(rename = "multifocalityPTC"))]
    pub multifocality_ptc: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "microscopicETE"))]
    pub microscopic_ete: Option<FlagValue>,
    #[cfg_attr(feature = "serde", serde(rename = "viPTC"))]
    pub vi_ptc: Option<String>,
    pub vi_ftc_otc: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "encapsulatedAngioinvasive_FtcOtc"))]
    pub encapsulated_angioinvasive_ftc_otc: Option<FlagValue>,
}

impl CaseRecord {
    /// Validates the record into typed inputs.
    pub fn into_inputs(self) -> Result<CaseInputs, ClassifyError> {
        CaseInputs::try_from(&self)
    }

    /// Fills every unset field from `other`.
    pub fn or(self, other: CaseRecord) -> CaseRecord {
        CaseRecord {
            histology: self.histology.or(other.histology),
            t_group: self.t_group.or(other.t_group),
            nodal: self.nodal.or(other.nodal),
            m: self.m.or(other.m),
            margin: self.margin.or(other.margin),
            aggressive_histology: self.aggressive_histology.or(other.aggressive_histology),
            poor_diff_high_grade: self.poor_diff_high_grade.or(other.poor_diff_high_grade),
            multifocality_ptc: self.multifocality_ptc.or(other.multifocality_ptc),
            microscopic_ete: self.microscopic_ete.or(other.microscopic_ete),
            vi_ptc: self.vi_ptc.or(other.vi_ptc),
            vi_ftc_otc: self.vi_ftc_otc.or(other.vi_ftc_otc),
            encapsulated_angioinvasive_ftc_otc: self
                .encapsulated_angioinvasive_ftc_otc
                .or(other.encapsulated_angioinvasive_ftc_otc),
        }
    }
}

fn required<T: OptionValue>(value: &Option<String>) -> Result<T, ClassifyError> {
    match value {
        Some(raw) => T::parse(raw),
        None => Err(ClassifyError::MissingField { field: T::FIELD }),
    }
}

fn required_flag(field: &'static str, value: &Option<FlagValue>) -> Result<bool, ClassifyError> {
    value
        .as_ref()
        .ok_or(ClassifyError::MissingField { field })?
        .resolve(field)
}

fn resolve_margin(value: &Option<String>) -> Result<Margin, ClassifyError> {
    let raw = value.as_deref().ok_or(ClassifyError::MissingField {
        field: Margin::FIELD,
    })?;
    if let Ok(margin) = Margin::parse(raw) {
        return Ok(margin);
    }
    let margin = normalize_margin(raw);
    if margin == Margin::Other {
        tracing::warn!(margin = raw, "unrecognized margin label, contributes to no trigger");
    }
    Ok(margin)
}

impl TryFrom<&CaseRecord> for CaseInputs {
    type Error = ClassifyError;

    fn try_from(record: &CaseRecord) -> Result<Self, Self::Error> {
        let group: HistologyGroup = required(&record.histology)?;
        let histology = match group {
            HistologyGroup::Ptc => Histology::Papillary(PapillaryFeatures {
                multifocality: required::<Multifocality>(&record.multifocality_ptc)?,
                vascular_invasion: required::<PtcVascularInvasion>(&record.vi_ptc)?,
            }),
            HistologyGroup::FtcIefvptc | HistologyGroup::Oncocytic => {
                let subtype = if group == HistologyGroup::Oncocytic {
                    FollicularSubtype::Oncocytic
                } else {
                    FollicularSubtype::FtcIefvptc
                };
                Histology::Follicular(FollicularFeatures {
                    subtype,
                    invasion: required::<FollicularInvasion>(&record.vi_ftc_otc)?,
                    encapsulated_angioinvasive: required_flag(
                        ENCAPSULATED_ANGIOINVASIVE,
                        &record.encapsulated_angioinvasive_ftc_otc,
                    )?,
                })
            }
        };

        Ok(CaseInputs {
            histology,
            t_group: required::<TGroup>(&record.t_group)?,
            nodal: required::<Nodal>(&record.nodal)?,
            metastasis: required::<Metastasis>(&record.m)?,
            margin: resolve_margin(&record.margin)?,
            aggressive_histology: required_flag(AGGRESSIVE_HISTOLOGY, &record.aggressive_histology)?,
            poor_diff_high_grade: required_flag(POOR_DIFF_HIGH_GRADE, &record.poor_diff_high_grade)?,
            microscopic_ete: required_flag(MICROSCOPIC_ETE, &record.microscopic_ete)?,
        })
    }
}
