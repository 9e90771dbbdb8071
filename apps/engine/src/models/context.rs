//! Read-only view structs assembled by the caller from job, company, and
//! profile records. The engine never persists or mutates these.

use serde::{Deserialize, Serialize};

use crate::models::signal::Signal;

/// Where the work happens, as advertised on the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Remote,
    Hybrid,
    Onsite,
}

/// Coarse company-size band from the company record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

/// Job-side view for fit scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobContext {
    pub title: String,
    pub location_type: Option<LocationType>,
    pub company_size: Option<CompanySize>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}

/// Candidate-side view for the hiring perspective.
///
/// `signals` is `None` for anonymous or un-assessed candidates.
/// `has_cover_message` is a flag only: the message text itself never enters
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateContext {
    pub signals: Option<Vec<Signal>>,
    pub skills: Vec<String>,
    pub has_cover_message: bool,
}

/// One team member's signals, stripped of identity.
///
/// The type intentionally has no member id, name, or role field: aggregation
/// is the privacy boundary, and nothing that isn't in the input can leak
/// into the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberSignals {
    pub signals: Vec<Signal>,
}
