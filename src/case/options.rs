//! Closed option sets for every categorical input.
//!
//! Each option carries the display label shown by the intake form and a
//! short machine tag. Either spelling parses, ASCII-case-insensitively.

use crate::error::ClassifyError;
use std::fmt;
use std::str::FromStr;

/// A value drawn from a fixed, named option set.
pub trait OptionValue: Sized + Copy + 'static {
    /// Record field this option set belongs to.
    const FIELD: &'static str;

    /// Every selectable value, in display order.
    const ALL: &'static [Self];

    /// Display label, as rendered by the intake form.
    fn label(self) -> &'static str;

    /// Short machine tag, suitable for command-line flags.
    fn tag(self) -> &'static str;

    /// Parses a label or tag. Values outside [`Self::ALL`] are rejected.
    fn parse(raw: &str) -> Result<Self, ClassifyError> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(needle) || v.tag().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ClassifyError::UnknownValue {
                field: Self::FIELD,
                value: raw.to_string(),
            })
    }
}

macro_rules! option_value_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = ClassifyError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as OptionValue>::parse(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

/// Histologic group as offered by the form.
///
/// The engine works on [`Histology`](super::Histology), which carries the
/// group-specific fields; this flat enum exists for labels and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistologyGroup {
    /// Papillary thyroid carcinoma and its variants.
    #[default]
    Ptc,
    /// Follicular carcinoma and invasive encapsulated follicular-variant PTC.
    FtcIefvptc,
    /// Oncocytic carcinoma.
    Oncocytic,
}

impl OptionValue for HistologyGroup {
    const FIELD: &'static str = "histology";
    const ALL: &'static [Self] = &[Self::Ptc, Self::FtcIefvptc, Self::Oncocytic];

    fn label(self) -> &'static str {
        match self {
            Self::Ptc => "PTC and variants",
            Self::FtcIefvptc => "FTC + IEFVPTC",
            Self::Oncocytic => "Oncocytic (OTC)",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Ptc => "ptc",
            Self::FtcIefvptc => "ftc",
            Self::Oncocytic => "otc",
        }
    }
}

/// Primary tumor extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TGroup {
    /// T1–T2, intrathyroidal.
    #[default]
    T1T2,
    /// T3a, intrathyroidal.
    T3a,
    /// T3b–T4, gross extrathyroidal extension.
    T3bT4,
}

impl OptionValue for TGroup {
    const FIELD: &'static str = "tGroup";
    const ALL: &'static [Self] = &[Self::T1T2, Self::T3a, Self::T3bT4];

    fn label(self) -> &'static str {
        match self {
            Self::T1T2 => "T1–T2 (intrathyroidal)",
            Self::T3a => "T3a (intrathyroidal)",
            Self::T3bT4 => "T3b–T4 (gross ETE)",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::T1T2 => "t1-t2",
            Self::T3a => "t3a",
            Self::T3bT4 => "t3b-t4",
        }
    }
}

/// Lymph-node category. A discrete tag set, not an ordinal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nodal {
    /// N0/Nx, or N1a with all nodes ≤2 mm and ≤5 nodes involved.
    #[default]
    N0OrMinorN1a,
    /// N1a with a deposit >2 mm or >5 nodes involved.
    N1aMajor,
    /// Clinically evident lateral neck nodes, all <3 cm.
    ClinicalN1b,
    /// N1b with a node ≥3 cm, or extranodal extension.
    BulkyN1b,
}

impl OptionValue for Nodal {
    const FIELD: &'static str = "nodal";
    const ALL: &'static [Self] = &[
        Self::N0OrMinorN1a,
        Self::N1aMajor,
        Self::ClinicalN1b,
        Self::BulkyN1b,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::N0OrMinorN1a => "N0/Nx OR N1a (≤2 mm and all ≤5 LNs)",
            Self::N1aMajor => "N1a >2 mm OR >5 LNs",
            Self::ClinicalN1b => "cN1b <3 cm",
            Self::BulkyN1b => "N1b ≥3 cm OR ENE+",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::N0OrMinorN1a => "n0",
            Self::N1aMajor => "n1a-major",
            Self::ClinicalN1b => "cn1b",
            Self::BulkyN1b => "n1b-bulky",
        }
    }
}

/// Distant metastasis status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metastasis {
    #[default]
    M0,
    M1,
}

impl OptionValue for Metastasis {
    const FIELD: &'static str = "m";
    const ALL: &'static [Self] = &[Self::M0, Self::M1];

    fn label(self) -> &'static str {
        match self {
            Self::M0 => "M0",
            Self::M1 => "M1",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::M0 => "m0",
            Self::M1 => "m1",
        }
    }
}

/// Canonical resection-margin tag.
///
/// `Other` is not selectable; it is what an unrecognized free-text label
/// normalizes to (see [`normalize_margin`](crate::risk::normalize_margin))
/// and contributes to no trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Margin {
    /// Negative margin.
    #[default]
    R0,
    /// Microscopic residual at the anterior margin.
    R1Anterior,
    /// Microscopic residual at the posterior margin.
    R1Posterior,
    /// Gross residual disease.
    R2,
    /// Unrecognized label.
    Other,
}

impl OptionValue for Margin {
    const FIELD: &'static str = "margin";
    const ALL: &'static [Self] = &[Self::R0, Self::R1Anterior, Self::R1Posterior, Self::R2];

    fn label(self) -> &'static str {
        match self {
            Self::R0 => "R0 / Negative",
            Self::R1Anterior => "R1 / Microscopic (anterior)",
            Self::R1Posterior => "R1 / Microscopic (posterior)",
            Self::R2 => "R2 / Gross positive margin",
            Self::Other => "Unrecognized margin",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::R0 => "r0",
            Self::R1Anterior => "r1-anterior",
            Self::R1Posterior => "r1-posterior",
            Self::R2 => "r2",
            Self::Other => "other",
        }
    }
}

/// PTC multifocality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Multifocality {
    #[default]
    Absent,
    Unilateral,
    /// Bilateral foci, at least one ≥1 cm.
    Bilateral,
}

impl OptionValue for Multifocality {
    const FIELD: &'static str = "multifocalityPTC";
    const ALL: &'static [Self] = &[Self::Absent, Self::Unilateral, Self::Bilateral];

    fn label(self) -> &'static str {
        match self {
            Self::Absent => "None",
            Self::Unilateral => "Unilateral",
            Self::Bilateral => "Bilateral ≥1 cm",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Absent => "none",
            Self::Unilateral => "unilateral",
            Self::Bilateral => "bilateral",
        }
    }
}

/// PTC vascular invasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PtcVascularInvasion {
    #[default]
    Absent,
    Present,
}

impl OptionValue for PtcVascularInvasion {
    const FIELD: &'static str = "viPTC";
    const ALL: &'static [Self] = &[Self::Absent, Self::Present];

    fn label(self) -> &'static str {
        match self {
            Self::Absent => "None",
            Self::Present => "Present (Yes)",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Absent => "none",
            Self::Present => "present",
        }
    }
}

/// FTC/OTC invasion pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FollicularInvasion {
    /// Capsular invasion only.
    #[default]
    MinimallyInvasive,
    /// Angioinvasion of fewer than 4 vessels.
    LimitedAngioinvasive,
    /// Angioinvasion of 4 or more vessels.
    ExtensiveAngioinvasive,
    /// Extracapsular spread.
    WidelyInvasive,
}

impl OptionValue for FollicularInvasion {
    const FIELD: &'static str = "viFtcOtc";
    const ALL: &'static [Self] = &[
        Self::MinimallyInvasive,
        Self::LimitedAngioinvasive,
        Self::ExtensiveAngioinvasive,
        Self::WidelyInvasive,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::MinimallyInvasive => "Minimally invasive (capsular only)",
            Self::LimitedAngioinvasive => "Limited angioinvasive (<4 vessels)",
            Self::ExtensiveAngioinvasive => "Extensive angioinvasive (≥4 vessels)",
            Self::WidelyInvasive => "Widely invasive (extracapsular)",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::MinimallyInvasive => "minimal",
            Self::LimitedAngioinvasive => "limited",
            Self::ExtensiveAngioinvasive => "extensive",
            Self::WidelyInvasive => "widely",
        }
    }
}

option_value_impls!(
    HistologyGroup,
    TGroup,
    Nodal,
    Metastasis,
    Margin,
    Multifocality,
    PtcVascularInvasion,
    FollicularInvasion,
);

/// Labels for yes/no flags, in display order.
pub const FLAG_LABELS: [&str; 2] = ["No", "Yes"];

/// Parses a yes/no flag. Accepts `Yes`/`No`, `true`/`false` and `y`/`n`.
pub fn parse_flag(field: &'static str, raw: &str) -> Result<bool, ClassifyError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(ClassifyError::UnknownValue {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Renders a flag the way the form does.
pub fn flag_label(value: bool) -> &'static str {
    FLAG_LABELS[usize::from(value)]
}
