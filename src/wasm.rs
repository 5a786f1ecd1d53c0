//! Browser bindings.
//!
//! Accepts the same flat record the intake form holds and returns the
//! classification record, both as plain JS objects.

use crate::case::{catalogue, CaseRecord};
use crate::risk::classify as classify_case;
use wasm_bindgen::prelude::*;

/// Classifies a form record.
///
/// Throws with the validation message when a field is missing or out of
/// its option set.
#[wasm_bindgen]
pub fn classify(record: JsValue) -> Result<JsValue, JsValue> {
    let record: CaseRecord = serde_wasm_bindgen::from_value(record)?;
    let inputs = record
        .into_inputs()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&classify_case(&inputs))?)
}

/// Returns the option catalogue for building the form.
#[wasm_bindgen]
pub fn options() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&catalogue())?)
}
