//! Margin label normalization.

use crate::case::Margin;

/// Maps a free-text margin label onto its canonical tag.
///
/// Exact option labels and tags should go through
/// [`OptionValue::parse`](crate::case::OptionValue::parse); this is the
/// lenient fallback for wording that has drifted from the option list.
/// Matching is case-insensitive and the first rule that applies wins:
///
/// 1. contains `r2` → [`Margin::R2`]
/// 2. `r1` or `microscopic`, together with `posterior` → [`Margin::R1Posterior`]
/// 3. `r1` or `microscopic`, together with `anterior` → [`Margin::R1Anterior`]
/// 4. contains `r0` or `negative` → [`Margin::R0`]
/// 5. anything else → [`Margin::Other`]
pub fn normalize_margin(raw: &str) -> Margin {
    let s = raw.to_lowercase();
    let microscopic = s.contains("r1") || s.contains("microscopic");

    if s.contains("r2") {
        Margin::R2
    } else if microscopic && s.contains("posterior") {
        Margin::R1Posterior
    } else if microscopic && s.contains("anterior") {
        Margin::R1Anterior
    } else if s.contains("r0") || s.contains("negative") {
        Margin::R0
    } else {
        Margin::Other
    }
}
