//! Formula engine and reference tables for the calculator widgets.
//!
//! Each calculator is a pure function of a loaded [`ReferenceTables`] and a
//! plain input struct. The [`engine`] module wraps them behind a single
//! tagged [`engine::Calculation`] request, and [`CalculatorSuite`] exposes
//! that to JavaScript.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

pub mod cooldown;
pub mod engine;
pub mod fishing_line;
pub mod pond;
pub mod recipe;
pub mod tables;
pub mod wedding;

pub use engine::{compute, Calculation, Outcome};
pub use tables::ReferenceTables;

/// Non-fatal notes attached to a result (caps hit, inputs clamped, …).
pub type Warnings = Vec<String>;

/// Failure while parsing an embedded reference table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read reference table: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid row in {table} table at line {line}: {reason}")]
    InvalidRow {
        table: &'static str,
        line: usize,
        reason: String,
    },
}

/// Failure of a single calculation. Always recoverable from the form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unknown {table} '{key}'")]
    UnknownKey { table: &'static str, key: String },
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("requested {requested:.0} yd but the spool only holds {capacity:.0} yd of that line")]
    ExceedsCapacity { requested: f64, capacity: f64 },
}

impl CalcError {
    pub fn unknown(table: &'static str, key: impl Into<String>) -> Self {
        CalcError::UnknownKey {
            table,
            key: key.into(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// What JavaScript receives from [`CalculatorSuite::compute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResponse {
    pub error: bool,
    pub message: Option<String>,
    pub result: Option<Outcome>,
}

impl From<Result<Outcome, CalcError>> for CalcResponse {
    fn from(result: Result<Outcome, CalcError>) -> Self {
        match result {
            Ok(outcome) => CalcResponse {
                error: false,
                message: None,
                result: Some(outcome),
            },
            Err(e) => CalcResponse {
                error: true,
                message: Some(e.to_string()),
                result: None,
            },
        }
    }
}

/// Run `calculation` and wrap the result for the JavaScript boundary.
pub fn respond(tables: &ReferenceTables, calculation: &Calculation) -> CalcResponse {
    let result = compute(tables, calculation);
    if let Err(e) = &result {
        log::warn!("calculation failed: {}", e);
    }
    result.into()
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        log::warn!("could not serialize response: {}", e);
        JsValue::NULL
    })
}

/// JavaScript handle owning the loaded reference tables.
#[wasm_bindgen]
pub struct CalculatorSuite {
    tables: ReferenceTables,
}

#[wasm_bindgen]
impl CalculatorSuite {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CalculatorSuite, JsValue> {
        ReferenceTables::load()
            .map(|tables| CalculatorSuite { tables })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Takes a `Calculation` object, returns a `CalcResponse` object.
    pub fn compute(&self, request: JsValue) -> JsValue {
        let response = match serde_wasm_bindgen::from_value::<Calculation>(request) {
            Ok(calculation) => respond(&self.tables, &calculation),
            Err(e) => CalcResponse {
                error: true,
                message: Some(format!("Failed to read calculation request: {}", e)),
                result: None,
            },
        };
        to_js(&response)
    }

    pub fn games(&self) -> JsValue {
        to_js(&self.tables.games)
    }

    pub fn ingredients(&self) -> JsValue {
        to_js(&self.tables.ingredients)
    }

    pub fn reels(&self) -> JsValue {
        to_js(&self.tables.reels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{ConversionInput, Unit};

    #[test]
    fn error_response_carries_flag_and_message() {
        let tables = ReferenceTables::load().unwrap();
        let request = Calculation::Convert(ConversionInput {
            ingredient: "moon-dust".into(),
            amount: 1.0,
            from: Unit::Cup,
            to: Unit::Gram,
        });
        let json = serde_json::to_value(respond(&tables, &request)).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], "unknown ingredient 'moon-dust'");
        assert!(json["result"].is_null());
    }

    #[test]
    fn ok_response_is_tagged_by_calculator() {
        let tables = ReferenceTables::load().unwrap();
        let request = Calculation::Convert(ConversionInput {
            ingredient: "all-purpose-flour".into(),
            amount: 2.0,
            from: Unit::Cup,
            to: Unit::Gram,
        });
        let json = serde_json::to_value(respond(&tables, &request)).unwrap();
        assert_eq!(json["error"], false);
        assert_eq!(json["result"]["calculator"], "convert");
        assert_eq!(json["result"]["amount"], 250.0);
    }

    #[test]
    fn capacity_error_message_is_readable() {
        let e = CalcError::ExceedsCapacity {
            requested: 300.0,
            capacity: 130.0,
        };
        assert_eq!(
            e.to_string(),
            "requested 300 yd but the spool only holds 130 yd of that line"
        );
    }
}
