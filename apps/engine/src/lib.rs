//! Signal-based matching and insight engine.
//!
//! The core of the platform's matching surface: derives qualitative workstyle
//! Signals from assessment answers, scores job/candidate/team fit from
//! signals plus skill overlap, and redacts results to the consuming company's
//! subscription depth.
//!
//! Everything here is a synchronous pure function over its arguments: no I/O,
//! no shared state, no clock. Profile loading, persistence, tier lookup, and
//! the HTTP surface live in the host service; it assembles the view structs,
//! calls in, and persists or serves what comes back.

pub mod assessment;
pub mod config;
pub mod errors;
pub mod insights;
pub mod matching;
pub mod models;

pub use assessment::{analyze, AnalysisIssue, AnalysisOutcome, AnalysisStatus, Answer, TestResult};
pub use config::EngineConfig;
pub use errors::EngineError;
pub use insights::{filter_candidate_insights, filter_team_fit_insights};
pub use matching::{analyze_team_fit, match_candidate, match_job};
pub use models::context::{CandidateContext, CompanySize, JobContext, LocationType, TeamMemberSignals};
pub use models::fit::{FitResult, FitTier, InsightDepth, TeamInsightDepth};
pub use models::signal::{
    parse_stored_signals, signals_from_store, stored_signal_document, Signal, SourceTest,
    Strength, TestType,
};
