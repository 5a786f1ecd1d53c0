//! Case input model.
//!
//! All inputs are closed enumerations. Histology-specific fields live in
//! the [`Histology`] tagged union, so a papillary case cannot carry a
//! follicular invasion pattern and vice versa.
//!
//! # Key Components
//!
//! - **Options**: one enum per categorical field, each implementing
//!   [`OptionValue`] (display label, short tag, strict parsing)
//! - **Inputs**: [`CaseInputs`], the typed record the engine classifies
//! - **Record**: [`CaseRecord`], the flat form-shaped record, validated
//!   into [`CaseInputs`]
//! - **Catalogue**: [`catalogue`], option lists for form builders

mod catalogue;
mod inputs;
mod options;
mod record;

pub use catalogue::{catalogue, Applicability, FieldOptions, OptionEntry};
pub use inputs::{CaseInputs, FollicularFeatures, FollicularSubtype, Histology, PapillaryFeatures};
pub use options::{
    flag_label, parse_flag, FollicularInvasion, HistologyGroup, Margin, Metastasis, Multifocality,
    Nodal, OptionValue, PtcVascularInvasion, TGroup, FLAG_LABELS,
};
pub use record::{CaseRecord, FlagValue};

#[cfg(test)]
pub(crate) mod strategies {
    //! proptest strategies over the full input space.

    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;

    pub fn papillary() -> impl Strategy<Value = PapillaryFeatures> {
        (
            select(Multifocality::ALL),
            select(PtcVascularInvasion::ALL),
        )
            .prop_map(|(multifocality, vascular_invasion)| PapillaryFeatures {
                multifocality,
                vascular_invasion,
            })
    }

    pub fn follicular() -> impl Strategy<Value = FollicularFeatures> {
        (
            prop_oneof![
                Just(FollicularSubtype::FtcIefvptc),
                Just(FollicularSubtype::Oncocytic)
            ],
            select(FollicularInvasion::ALL),
            any::<bool>(),
        )
            .prop_map(|(subtype, invasion, encapsulated_angioinvasive)| {
                FollicularFeatures {
                    subtype,
                    invasion,
                    encapsulated_angioinvasive,
                }
            })
    }

    pub fn histology() -> impl Strategy<Value = Histology> {
        prop_oneof![
            papillary().prop_map(Histology::Papillary),
            follicular().prop_map(Histology::Follicular),
        ]
    }

    pub fn margin() -> impl Strategy<Value = Margin> {
        prop_oneof![select(Margin::ALL), Just(Margin::Other)]
    }

    /// Every field except histology.
    pub fn with_histology(histology: impl Strategy<Value = Histology>) -> impl Strategy<Value = CaseInputs> {
        (
            histology,
            select(TGroup::ALL),
            select(Nodal::ALL),
            select(Metastasis::ALL),
            margin(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(
                |(
                    histology,
                    t_group,
                    nodal,
                    metastasis,
                    margin,
                    aggressive_histology,
                    poor_diff_high_grade,
                    microscopic_ete,
                )| CaseInputs {
                    histology,
                    t_group,
                    nodal,
                    metastasis,
                    margin,
                    aggressive_histology,
                    poor_diff_high_grade,
                    microscopic_ete,
                },
            )
    }

    pub fn case_inputs() -> impl Strategy<Value = CaseInputs> {
        with_histology(histology())
    }
}
