//! Save/restore of the engine's five fields
//!
//! The snapshot is a flat key/value map of strings so hosts can drop it into
//! whatever bundle or preferences store they have. An absent operand is
//! written as the `NaN` sentinel.
//!
//! A running operand that is itself NaN (for example after
//! `Infinity - Infinity`) is written the same way, so it restores as no
//! operand at all. The pending operator survives; the next operator press
//! then stores the typed value instead of folding into NaN.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::format::{format_number, parse_number};
use crate::core::{EngineState, Operator};

/// Key for the input buffer
pub const KEY_CURRENT_INPUT: &str = "currentInput";
/// Key for the expression log
pub const KEY_FULL_EXPRESSION: &str = "fullExpression";
/// Key for the running operand
pub const KEY_OPERAND: &str = "operand";
/// Key for the pending operator
pub const KEY_PENDING_OP: &str = "pendingOp";
/// Key for the reset-input flag
pub const KEY_RESET_INPUT: &str = "resetInput";

const NAN_SENTINEL: &str = "NaN";

/// Errors raised while restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot text is not a JSON object of strings
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A field holds a value the engine cannot accept
    #[error("Invalid value for {key}: {value:?}")]
    InvalidField {
        /// Offending key
        key: &'static str,
        /// Offending value
        value: String,
    },
}

/// Flat key/value image of an [`EngineState`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, String>,
}

impl Snapshot {
    /// Captures the state, one entry per field
    #[must_use]
    pub fn capture(state: &EngineState) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            KEY_CURRENT_INPUT.to_string(),
            state.current_input().to_string(),
        );
        entries.insert(
            KEY_FULL_EXPRESSION.to_string(),
            state.full_expression().to_string(),
        );
        entries.insert(
            KEY_OPERAND.to_string(),
            state
                .operand()
                .map_or_else(|| NAN_SENTINEL.to_string(), format_number),
        );
        if let Some(op) = state.pending_op() {
            entries.insert(KEY_PENDING_OP.to_string(), op.symbol().to_string());
        }
        entries.insert(
            KEY_RESET_INPUT.to_string(),
            state.reset_input().to_string(),
        );
        Self { entries }
    }

    /// Rebuilds the engine state.
    ///
    /// Missing keys fall back to their initial values, so an empty snapshot
    /// restores a fresh engine.
    pub fn restore(&self) -> Result<EngineState, SnapshotError> {
        let current_input = self.get(KEY_CURRENT_INPUT).unwrap_or_default().to_string();
        if current_input.matches('.').count() > 1 {
            return Err(SnapshotError::InvalidField {
                key: KEY_CURRENT_INPUT,
                value: current_input,
            });
        }

        let full_expression = self
            .get(KEY_FULL_EXPRESSION)
            .unwrap_or_default()
            .to_string();

        let operand = match self.get(KEY_OPERAND) {
            None => None,
            Some(raw) => {
                let value = parse_number(raw).ok_or_else(|| SnapshotError::InvalidField {
                    key: KEY_OPERAND,
                    value: raw.to_string(),
                })?;
                (!value.is_nan()).then_some(value)
            }
        };

        let pending_op = self
            .get(KEY_PENDING_OP)
            .map(|raw| {
                raw.parse::<Operator>()
                    .map_err(|_| SnapshotError::InvalidField {
                        key: KEY_PENDING_OP,
                        value: raw.to_string(),
                    })
            })
            .transpose()?;

        let reset_input = match self.get(KEY_RESET_INPUT) {
            None => false,
            Some(raw) => raw.parse::<bool>().map_err(|_| SnapshotError::InvalidField {
                key: KEY_RESET_INPUT,
                value: raw.to_string(),
            })?,
        };

        Ok(EngineState::from_parts(
            current_input,
            full_expression,
            operand,
            pending_op,
            reset_input,
        ))
    }

    /// Returns the raw entry for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Sets a raw entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the snapshot to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
