//! Subscription-depth redaction for fit results.
//!
//! Both public filters are thin wrappers over one ordered-list redaction
//! policy, so candidate-fit and team-fit truncation cannot drift apart.
//! Filtering never rewrites retained insight text; it only drops entries and
//! reduces skill detail to a count.

use std::collections::HashMap;

use crate::models::fit::{
    FitResult, Insight, InsightDepth, InsightSource, TeamInsightDepth,
};

/// An order-preserving truncation of a fit result.
#[derive(Debug, Clone, Default)]
struct RedactionPolicy {
    /// Keep at most this many insights overall.
    total_cap: Option<usize>,
    /// Keep at most this many insights per source category.
    per_source_cap: Option<usize>,
    /// When set, only these categories survive at all.
    retain_sources: Option<Vec<InsightSource>>,
    /// Replace `matchingSkills` with a count in the meta block.
    redact_skills_to_count: bool,
}

impl RedactionPolicy {
    fn apply(&self, mut result: FitResult, depth: InsightDepth) -> FitResult {
        let mut kept: Vec<Insight> = Vec::new();
        let mut per_source: HashMap<InsightSource, usize> = HashMap::new();

        for insight in result.insights {
            if let Some(cap) = self.total_cap {
                if kept.len() >= cap {
                    break;
                }
            }
            if let Some(sources) = &self.retain_sources {
                if !sources.contains(&insight.source) {
                    continue;
                }
            }
            let seen = per_source.entry(insight.source).or_insert(0);
            if let Some(cap) = self.per_source_cap {
                if *seen >= cap {
                    continue;
                }
            }
            *seen += 1;
            kept.push(insight);
        }

        result.insights = kept;
        if self.redact_skills_to_count {
            result.meta.matching_skill_count = Some(result.matching_skills.len());
            result.matching_skills = Vec::new();
        }
        result.meta.depth = depth;
        result.meta.is_premium_limited = depth.is_limited();
        result
    }
}

/// Applies a company's subscription depth to a job-fit or candidate-fit
/// result. `full` is a pass-through; `summary` keeps the top insight per
/// evidence category; `basic` keeps one insight total and reduces the skill
/// list to a count.
pub fn filter_candidate_insights(result: FitResult, depth: InsightDepth) -> FitResult {
    let policy = match depth {
        InsightDepth::Full => RedactionPolicy::default(),
        InsightDepth::Summary => RedactionPolicy {
            per_source_cap: Some(1),
            ..Default::default()
        },
        InsightDepth::Basic => RedactionPolicy {
            total_cap: Some(1),
            redact_skills_to_count: true,
            ..Default::default()
        },
    };
    policy.apply(result, depth)
}

/// Applies a company's subscription depth to a team-fit result. `summary`
/// retains the overview (classification counts) and drops per-dimension
/// wording; team fit has no `basic`.
pub fn filter_team_fit_insights(result: FitResult, depth: TeamInsightDepth) -> FitResult {
    let policy = match depth {
        TeamInsightDepth::Full => RedactionPolicy::default(),
        TeamInsightDepth::Summary => RedactionPolicy {
            retain_sources: Some(vec![InsightSource::TeamOverview]),
            ..Default::default()
        },
    };
    policy.apply(result, depth.into())
}
