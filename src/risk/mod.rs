//! Recurrence-risk classification.
//!
//! Classifies a differentiated thyroid cancer case into one of four
//! recurrence-risk tiers with a strict-priority cascade:
//!
//! 1. **High**: distant metastasis, gross ETE, bulky/ENE+ N1b, R2 resection,
//!    poor differentiation, extensive FTC/OTC angioinvasion, T3a with
//!    microscopic ETE.
//! 2. **High-Intermediate**: bilateral PTC multifocality, cN1b <3 cm,
//!    aggressive histology, PTC vascular invasion, or two or more
//!    Low-Intermediate factors.
//! 3. **Low-Intermediate**: T3a, or at least one Low-Intermediate factor.
//! 4. **Low**: nothing above fired.
//!
//! Every trigger of the committed tier is reported; lower tiers are never
//! evaluated once a higher one fires.
//!
//! # Design
//!
//! Pure and total over [`CaseInputs`](crate::case::CaseInputs): no I/O, no
//! shared state, a fixed number of comparisons per call.

mod cascade;
mod engine;
mod margin;
mod tally;
mod types;

pub use cascade::{assess, Assessment, TriggerGroup, CASCADE};
pub use engine::{classify, RiskEngine};
pub use margin::normalize_margin;
pub use tally::{tally_factors, FactorTally};
pub use types::{Classification, RiskCategory, RiskFactor, Trigger, NO_TRIGGERS};
