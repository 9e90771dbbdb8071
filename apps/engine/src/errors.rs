use thiserror::Error;

/// Errors surfaced by the engine's strict APIs.
///
/// Expected data-sparsity conditions (insufficient answers, undersized teams,
/// no matching evidence) are deliberately NOT here — they are encoded in
/// result shapes so callers can tell "nothing to say" from "something went
/// wrong". Only the strict stored-signal parser returns these; the lenient
/// reader degrades to an empty signal set instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("stored signal document is not valid JSON: {0}")]
    MalformedStoredSignals(#[from] serde_json::Error),

    #[error("stored signal document has unsupported schema version {0}")]
    UnsupportedSchemaVersion(u64),

    #[error("stored signal document is neither a versioned envelope nor a signal array")]
    UnrecognizedSignalShape,
}
