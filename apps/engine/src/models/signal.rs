//! Signal model and the stored-signal document schema.
//!
//! Signals are the only artifact that survives an assessment: qualitative,
//! privacy-safe tags, never raw scores. Persisted documents come back from
//! the profile store as untrusted JSON, so parsing here is defensive.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::EngineError;

/// Current version of the persisted signal document schema.
pub const SIGNAL_SCHEMA_VERSION: u64 = 1;

/// Discrete strength band of a workstyle signal.
///
/// Ordered: `Low < Medium < High`. The ordinal distance between two bands
/// drives the team-fit classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Low,
    Medium,
    High,
}

impl Strength {
    /// Ordinal distance between two bands (0, 1, or 2).
    pub fn band_distance(self, other: Strength) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }
}

/// Which assessment family produced a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Disc,
    Holland,
}

/// Provenance of a signal: test family plus catalog version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTest {
    #[serde(rename = "type")]
    pub test_type: TestType,
    pub version: String,
}

/// A qualitative workstyle tag derived from assessment answers.
///
/// Immutable once derived. `dimension_id` is an internal axis name and is
/// never surfaced verbatim in insight text; `label` is a curated tag such as
/// `decisive` or `resultsOriented` — never a numeric score or a standardized
/// psychometric code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub dimension_id: String,
    pub label: String,
    pub strength: Strength,
    pub source_test: SourceTest,
}

/// Versioned envelope written by the caller's profile store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignalEnvelope {
    schema_version: u64,
    signals: Vec<Signal>,
}

/// Strict parse of a persisted signal document.
///
/// Accepts the current versioned envelope and, for documents written before
/// the envelope existed, a bare signal array (the legacy shape). Anything
/// else is a typed error.
pub fn parse_stored_signals(raw: &str) -> Result<Vec<Signal>, EngineError> {
    let value: Value = serde_json::from_str(raw)?;
    if value.is_array() {
        // Legacy shape: bare array, pre-envelope.
        return Ok(serde_json::from_value(value)?);
    }
    if !value.is_object() {
        return Err(EngineError::UnrecognizedSignalShape);
    }
    let version = value
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .ok_or(EngineError::UnrecognizedSignalShape)?;
    if version != SIGNAL_SCHEMA_VERSION {
        return Err(EngineError::UnsupportedSchemaVersion(version));
    }
    let envelope: SignalEnvelope = serde_json::from_value(value)?;
    Ok(envelope.signals)
}

/// Lenient read of a persisted signal document.
///
/// Malformed, unrecognized, or wrong-version documents degrade to "no
/// signals" with a warning rather than an error — a profile with a corrupt
/// blob behaves like an un-assessed profile.
pub fn signals_from_store(raw: &str) -> Vec<Signal> {
    match parse_stored_signals(raw) {
        Ok(signals) => signals,
        Err(e) => {
            tracing::warn!("discarding stored signal document: {e}");
            Vec::new()
        }
    }
}

/// Serializes signals into the current versioned envelope for persistence.
pub fn stored_signal_document(signals: &[Signal]) -> Value {
    serde_json::json!({
        "schemaVersion": SIGNAL_SCHEMA_VERSION,
        "signals": signals,
    })
}
