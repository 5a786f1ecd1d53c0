//! Differentiated thyroid cancer recurrence-risk classification.
//!
//! Classifies a thyroid cancer case into one of four recurrence-risk tiers
//! and maps the tier to a recommended radioactive-iodine (RAI) activity:
//!
//! - **Case model**: closed option sets for every staging input, with
//!   histology-specific fields carried by a tagged union so PTC-only and
//!   FTC/OTC-only inputs cannot leak into the other branch.
//! - **Risk engine**: a strict-priority cascade (High → High-Intermediate
//!   → Low-Intermediate → Low) fed by a Low-Intermediate factor tally,
//!   producing an ordered, display-ready rationale.
//! - **Dosage**: a lookup from tier to activity range, with a
//!   metastatic-disease override.
//!
//! # Examples
//!
//! ```
//! use ata_risk::case::{CaseInputs, Margin, TGroup};
//! use ata_risk::risk::{classify, RiskCategory};
//!
//! let case = CaseInputs::default()
//!     .with_t_group(TGroup::T3a)
//!     .with_margin(Margin::R1Anterior);
//!
//! let result = classify(&case);
//! assert_eq!(result.category, RiskCategory::LowIntermediate);
//! assert_eq!(result.recommended_rai, "30–100 mCi (1.1–3.7 GBq).");
//! ```
//!
//! # Architecture
//!
//! The engine is a pure function of its input. Parsing collaborator data
//! ([`case::CaseRecord`]) is the only fallible step; classifying a typed
//! [`case::CaseInputs`] always succeeds.

pub mod case;
pub mod dosage;
pub mod error;
pub mod risk;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::ClassifyError;
