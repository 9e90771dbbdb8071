//! Fit result model shared by the job, candidate, and team scorers.
//!
//! `insights` serializes as a plain array of strings (the platform contract),
//! but each insight privately carries the evidence category it came from so
//! the depth filter can redact per category without re-ranking anything.

use serde::{Deserialize, Serialize, Serializer};

/// Evidence category behind an insight. Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightSource {
    RequiredSkill,
    PreferredSkill,
    Signal,
    JobContext,
    CoverMessage,
    TeamOverview,
    TeamAligned,
    TeamComplementary,
    TeamGap,
}

/// A single ranked, human-readable reason. Serializes as its text alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub text: String,
    pub source: InsightSource,
}

impl Insight {
    pub fn new(text: impl Into<String>, source: InsightSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

impl Serialize for Insight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Qualitative band for the comparison as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    Strong,
    Moderate,
    Low,
    /// Neither skills nor signals produced anything; a valid result, not an
    /// error.
    NoEvidence,
    /// Team fit only: the privacy gate refused to aggregate.
    InsufficientData,
}

/// Subscription-tier depth for candidate-fit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightDepth {
    Basic,
    Summary,
    Full,
}

impl InsightDepth {
    pub fn is_limited(self) -> bool {
        self != InsightDepth::Full
    }
}

/// Subscription-tier depth for team-fit results.
///
/// A distinct enum because team fit has no `basic` depth; the type makes the
/// narrower contract unrepresentable rather than documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamInsightDepth {
    Summary,
    Full,
}

impl From<TeamInsightDepth> for InsightDepth {
    fn from(depth: TeamInsightDepth) -> Self {
        match depth {
            TeamInsightDepth::Summary => InsightDepth::Summary,
            TeamInsightDepth::Full => InsightDepth::Full,
        }
    }
}

/// Result metadata: applied depth plus redaction markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitMeta {
    pub depth: InsightDepth,
    pub is_premium_limited: bool,
    /// Present only when `matchingSkills` detail was redacted to a count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_skill_count: Option<usize>,
}

impl FitMeta {
    /// Metadata for a freshly computed, unfiltered result.
    pub fn unfiltered() -> Self {
        Self {
            depth: InsightDepth::Full,
            is_premium_limited: false,
            matching_skill_count: None,
        }
    }
}

/// The engine's output for one job/candidate/team comparison.
///
/// Ephemeral: computed per request, never stored. `insights` is ordered most
/// significant first. In the team-fit case the result never contains any
/// individual member's signal data; only the aggregate is phrased.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitResult {
    pub insights: Vec<Insight>,
    pub matching_skills: Vec<String>,
    pub tier: FitTier,
    pub meta: FitMeta,
}

impl FitResult {
    /// A valid "no strong evidence" result, distinct from a failure.
    pub fn no_evidence(matching_skills: Vec<String>) -> Self {
        Self {
            insights: Vec::new(),
            matching_skills,
            tier: FitTier::NoEvidence,
            meta: FitMeta::unfiltered(),
        }
    }

    /// Insight texts in rank order. Mostly for tests and callers that do not
    /// care about categories.
    pub fn insight_texts(&self) -> Vec<&str> {
        self.insights.iter().map(|i| i.text.as_str()).collect()
    }
}
