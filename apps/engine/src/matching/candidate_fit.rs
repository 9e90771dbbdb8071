//! "Why this candidate" — the hiring-side mirror of job fit.

use crate::models::context::{CandidateContext, JobContext};
use crate::models::fit::{FitMeta, FitResult, Insight, InsightSource};
use crate::models::signal::{Signal, Strength};

use super::job_fit::fit_tier;
use super::skills::matched_job_skills;

/// Scores one candidate for one job, from the hiring side.
///
/// A supplied cover message contributes exactly one categorical insight; the
/// message text itself never enters the engine, so nothing content-derived
/// can leak into the result.
pub fn match_candidate(candidate: &CandidateContext, job: &JobContext) -> FitResult {
    let required_matched = matched_job_skills(&job.required_skills, &candidate.skills);
    let preferred_matched = matched_job_skills(&job.preferred_skills, &candidate.skills);

    let mut insights = Vec::new();

    for skill in &required_matched {
        insights.push(Insight::new(
            format!("Brings {skill}, one of your must-have skills."),
            InsightSource::RequiredSkill,
        ));
    }
    for skill in &preferred_matched {
        if required_matched
            .iter()
            .any(|r| r.eq_ignore_ascii_case(skill))
        {
            continue;
        }
        insights.push(Insight::new(
            format!("Also covers {skill} from your nice-to-have list."),
            InsightSource::PreferredSkill,
        ));
    }

    if let Some(signals) = candidate.signals.as_deref() {
        let mut ranked: Vec<&Signal> = signals.iter().collect();
        ranked.sort_by_key(|s| std::cmp::Reverse(s.strength));
        for signal in ranked {
            insights.push(Insight::new(
                hiring_signal_phrase(signal),
                InsightSource::Signal,
            ));
        }
    }

    // Categorical only; additive, never a substitute for skill or signal
    // evidence, which is why it ranks last and does not affect the tier.
    if candidate.has_cover_message {
        insights.push(Insight::new(
            "Took the time to add context to their application.",
            InsightSource::CoverMessage,
        ));
    }

    let mut matching_skills = required_matched.clone();
    for skill in preferred_matched {
        if !matching_skills
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&skill))
        {
            matching_skills.push(skill);
        }
    }

    let tier = fit_tier(&insights, job.required_skills.len(), required_matched.len());

    FitResult {
        insights,
        matching_skills,
        tier,
        meta: FitMeta::unfiltered(),
    }
}

/// Phrases one signal about the candidate. Labels always sit inside a
/// sentence; no raw tags, no dimension ids, no scores.
fn hiring_signal_phrase(signal: &Signal) -> String {
    match signal.strength {
        Strength::High => format!(
            "Shows a distinctly {} working style in their assessment.",
            signal.label
        ),
        Strength::Medium => format!("Tends toward a {} way of working.", signal.label),
        Strength::Low => format!("Brings a touch of a {} style to the mix.", signal.label),
    }
}
