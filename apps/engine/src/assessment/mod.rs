//! Signal derivation: turns a completed assessment into qualitative Signals.
//!
//! Pure function of its input. Raw answers are consumed here and are not
//! recoverable from the output; only banded, labeled Signals leave.

pub mod catalog;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::signal::{Signal, SourceTest, Strength, TestType};

use self::catalog::{catalog_for, TestCatalog};

/// One answered question. The value domain depends on the test: `a`/`b` for
/// DISC-lite, a category id for Holland.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: String,
}

/// A completed assessment as submitted by the caller. Consumed once; never
/// retained past derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub test_type: TestType,
    pub test_version: String,
    pub answers: Vec<Answer>,
    /// Carried for the caller's records; never used in scoring.
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Ok,
    Error,
}

/// Recoverable reasons a submission could not be scored. Reported to the
/// caller in the outcome, never thrown.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnalysisIssue {
    #[error("{test_type:?} submission has {answered} valid answers, needs {required}")]
    InsufficientAnswers {
        test_type: TestType,
        answered: usize,
        required: usize,
    },
    #[error("no catalog for {test_type:?} version '{version}'")]
    UnsupportedTestVersion { test_type: TestType, version: String },
}

/// Result of signal derivation. On `Error`, `signals` is always empty and
/// `issues` explains why.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub status: AnalysisStatus,
    pub signals: Vec<Signal>,
    pub issues: Vec<AnalysisIssue>,
}

/// Derives Signals from one or more completed assessments.
///
/// Deterministic: identical answers and test versions always yield identical
/// Signals. Dimensions that do not clear the signal floor are omitted rather
/// than reported as neutral.
pub fn analyze(
    session_id: Uuid,
    results: &[TestResult],
    config: &EngineConfig,
) -> AnalysisOutcome {
    let mut issues = Vec::new();
    let mut signals = Vec::new();

    for result in results {
        let Some(catalog) = catalog_for(result.test_type, &result.test_version) else {
            issues.push(AnalysisIssue::UnsupportedTestVersion {
                test_type: result.test_type,
                version: result.test_version.clone(),
            });
            continue;
        };

        match derive_from_test(result, catalog, config) {
            Ok(mut derived) => signals.append(&mut derived),
            Err(issue) => issues.push(issue),
        }
    }

    if !issues.is_empty() {
        tracing::debug!(session = %session_id, issues = issues.len(), "assessment rejected");
        return AnalysisOutcome {
            status: AnalysisStatus::Error,
            signals: Vec::new(),
            issues,
        };
    }

    tracing::debug!(session = %session_id, signals = signals.len(), "signals derived");
    AnalysisOutcome {
        status: AnalysisStatus::Ok,
        signals,
        issues,
    }
}

/// Scores one submission against its catalog.
fn derive_from_test(
    result: &TestResult,
    catalog: &TestCatalog,
    config: &EngineConfig,
) -> Result<Vec<Signal>, AnalysisIssue> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut answered = 0usize;

    for answer in &result.answers {
        // Unknown question ids and values are ignored; duplicates keep the
        // first answer only.
        let Some(question) = catalog.question(&answer.question_id) else {
            continue;
        };
        let Some(option) = question.option(&answer.value) else {
            continue;
        };
        if !seen.insert(question.id.as_str()) {
            continue;
        }
        answered += 1;
        for (dimension, weight) in &option.weights {
            *totals.entry(*dimension).or_insert(0.0) += *weight;
        }
    }

    if answered < catalog.min_answered {
        return Err(AnalysisIssue::InsufficientAnswers {
            test_type: result.test_type,
            answered,
            required: catalog.min_answered,
        });
    }

    // Catalog dimension order keeps output deterministic; HashMap iteration
    // order never reaches the result.
    let mut signals = Vec::new();
    for dim in catalog.dimensions {
        let total = totals.get(dim.id).copied().unwrap_or(0.0);
        let max = catalog.max_contribution(dim.id);
        if max <= 0.0 {
            continue;
        }
        let intensity = (total / max).clamp(0.0, 1.0);
        if intensity <= config.signal_floor {
            continue;
        }
        let band = strength_band(intensity, config);
        signals.push(Signal {
            dimension_id: dim.id.to_string(),
            label: dim.labels.for_band(band).to_string(),
            strength: band,
            source_test: SourceTest {
                test_type: result.test_type,
                version: result.test_version.clone(),
            },
        });
    }

    Ok(signals)
}

/// Maps a 0..=1 intensity to a strength band. Boundary values band downward:
/// exactly `high_threshold` is still medium.
fn strength_band(intensity: f64, config: &EngineConfig) -> Strength {
    if intensity > config.high_threshold {
        Strength::High
    } else if intensity >= config.medium_threshold {
        Strength::Medium
    } else {
        Strength::Low
    }
}
