//! Option catalogue for collaborators that render an intake form.

use super::options::{
    FollicularInvasion, HistologyGroup, Margin, Metastasis, Multifocality, Nodal, OptionValue,
    PtcVascularInvasion, TGroup, FLAG_LABELS,
};
use super::record::{
    AGGRESSIVE_HISTOLOGY, ENCAPSULATED_ANGIOINVASIVE, MICROSCOPIC_ETE, POOR_DIFF_HIGH_GRADE,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Which histologies a field is meaningful for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Applicability {
    All,
    PapillaryOnly,
    FollicularOnly,
}

/// One selectable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OptionEntry {
    pub tag: &'static str,
    pub label: &'static str,
}

/// A form field and its options, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FieldOptions {
    /// Record field name.
    pub field: &'static str,
    pub title: &'static str,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub subtitle: Option<&'static str>,
    pub applies_to: Applicability,
    pub options: Vec<OptionEntry>,
}

fn field<T: OptionValue>(title: &'static str, applies_to: Applicability) -> FieldOptions {
    FieldOptions {
        field: T::FIELD,
        title,
        subtitle: None,
        applies_to,
        options: T::ALL
            .iter()
            .map(|v| OptionEntry {
                tag: v.tag(),
                label: v.label(),
            })
            .collect(),
    }
}

fn flag(field: &'static str, title: &'static str, applies_to: Applicability) -> FieldOptions {
    FieldOptions {
        field,
        title,
        subtitle: None,
        applies_to,
        options: FLAG_LABELS
            .iter()
            .map(|&label| OptionEntry {
                tag: if label == "Yes" { "yes" } else { "no" },
                label,
            })
            .collect(),
    }
}

/// Every input field with its options, in form order.
pub fn catalogue() -> Vec<FieldOptions> {
    use Applicability::*;

    vec![
        field::<HistologyGroup>("Histology", All),
        field::<TGroup>("Primary tumor extent (T)", All),
        field::<Nodal>("Nodal status", All),
        field::<Metastasis>("Distant metastasis (M)", All),
        field::<Margin>("Resection / margin status", All),
        FieldOptions {
            subtitle: Some("tall / hobnail / columnar etc."),
            ..flag(AGGRESSIVE_HISTOLOGY, "Aggressive histology", All)
        },
        flag(POOR_DIFF_HIGH_GRADE, "Poor differentiation / high grade", All),
        flag(MICROSCOPIC_ETE, "Microscopic ETE", All),
        field::<Multifocality>("Multifocality (PTC)", PapillaryOnly),
        field::<PtcVascularInvasion>("Vascular invasion (PTC)", PapillaryOnly),
        field::<FollicularInvasion>("Vascular invasion (FTC/OTC)", FollicularOnly),
        flag(
            ENCAPSULATED_ANGIOINVASIVE,
            "Encapsulated angioinvasive?",
            FollicularOnly,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_covers_every_record_field() {
        let fields: Vec<&str> = catalogue().iter().map(|f| f.field).collect();
        assert_eq!(
            fields,
            vec![
                "histology",
                "tGroup",
                "nodal",
                "m",
                "margin",
                "aggressiveHistology",
                "poorDiffHighGrade",
                "microscopicETE",
                "multifocalityPTC",
                "viPTC",
                "viFtcOtc",
                "encapsulatedAngioinvasive_FtcOtc",
            ]
        );
    }

    #[test]
    fn test_margin_options_exclude_other() {
        let margin = catalogue()
            .into_iter()
            .find(|f| f.field == "margin")
            .unwrap();
        assert_eq!(margin.options.len(), 4);
        assert!(margin.options.iter().all(|o| o.tag != "other"));
    }

    #[test]
    fn test_branch_fields_are_marked() {
        let cat = catalogue();
        let applies = |name: &str| cat.iter().find(|f| f.field == name).unwrap().applies_to;
        assert_eq!(applies("viPTC"), Applicability::PapillaryOnly);
        assert_eq!(applies("viFtcOtc"), Applicability::FollicularOnly);
        assert_eq!(applies("nodal"), Applicability::All);
    }

    #[test]
    fn test_flag_options() {
        let cat = catalogue();
        let ete = cat.iter().find(|f| f.field == "microscopicETE").unwrap();
        assert_eq!(
            ete.options,
            vec![
                OptionEntry {
                    tag: "no",
                    label: "No"
                },
                OptionEntry {
                    tag: "yes",
                    label: "Yes"
                },
            ]
        );
    }
}
