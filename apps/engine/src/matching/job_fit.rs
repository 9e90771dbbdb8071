//! "Why this job" — scores a job against a candidate's signals and skills
//! and explains the fit in ranked, qualitative terms.

use crate::models::context::{CompanySize, JobContext, LocationType};
use crate::models::fit::{FitMeta, FitResult, FitTier, Insight, InsightSource};
use crate::models::signal::{Signal, Strength};

use super::skills::matched_job_skills;

/// Scores one job for one candidate.
///
/// `signals` is `None` for anonymous or un-assessed users; the result is then
/// built solely from skill overlap and job metadata — no signal-based insight
/// is ever fabricated. Empty insights is a valid "no strong evidence" result.
pub fn match_job(
    signals: Option<&[Signal]>,
    job: &JobContext,
    candidate_skills: Option<&[String]>,
) -> FitResult {
    let no_skills: Vec<String> = Vec::new();
    let candidate_skills = candidate_skills.unwrap_or(&no_skills);

    let required_matched = matched_job_skills(&job.required_skills, candidate_skills);
    let preferred_matched = matched_job_skills(&job.preferred_skills, candidate_skills);

    let mut insights = Vec::new();

    // Required-skill evidence outranks everything; job's own skill order is
    // the tie-break.
    for skill in &required_matched {
        insights.push(Insight::new(
            format!("You already bring {skill}, listed as a must-have for this role."),
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
            format!("Your {skill} experience matches their nice-to-have list."),
            InsightSource::PreferredSkill,
        ));
    }

    if let Some(signals) = signals {
        let mut ranked: Vec<&Signal> = signals.iter().collect();
        ranked.sort_by_key(|s| std::cmp::Reverse(s.strength));
        for signal in ranked {
            insights.push(Insight::new(
                seeker_signal_phrase(signal, job),
                InsightSource::Signal,
            ));
        }
    }

    insights.extend(job_context_insights(job));

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

/// Phrases one signal for the job seeker. The label always appears inside a
/// sentence, never bare.
fn seeker_signal_phrase(signal: &Signal, job: &JobContext) -> String {
    match signal.strength {
        Strength::High => format!(
            "A strongly {} working style tends to thrive in roles like {}.",
            signal.label, job.title
        ),
        Strength::Medium => format!(
            "Your {} tendencies fit the day-to-day of this role.",
            signal.label
        ),
        Strength::Low => format!(
            "Your {} side adds useful balance in a role like this.",
            signal.label
        ),
    }
}

/// Generic insights from job metadata alone; these are the only insights an
/// anonymous user can receive beyond skill overlap.
fn job_context_insights(job: &JobContext) -> Vec<Insight> {
    let mut insights = Vec::new();

    match job.location_type {
        Some(LocationType::Remote) => insights.push(Insight::new(
            "Fully remote, so location won't get in the way.",
            InsightSource::JobContext,
        )),
        Some(LocationType::Hybrid) => insights.push(Insight::new(
            "Hybrid schedule: some office time, plenty of flexibility.",
            InsightSource::JobContext,
        )),
        Some(LocationType::Onsite) | None => {}
    }

    match job.company_size {
        Some(CompanySize::Startup) | Some(CompanySize::Small) => insights.push(Insight::new(
            "Smaller team, which usually means broad ownership from day one.",
            InsightSource::JobContext,
        )),
        Some(CompanySize::Large) | Some(CompanySize::Enterprise) => insights.push(Insight::new(
            "An established organization with room to specialize.",
            InsightSource::JobContext,
        )),
        Some(CompanySize::Medium) | None => {}
    }

    insights
}

/// Shared tier banding for both fit scorers.
pub(super) fn fit_tier(
    insights: &[Insight],
    required_total: usize,
    required_matched: usize,
) -> FitTier {
    let has_evidence = insights.iter().any(|i| {
        matches!(
            i.source,
            InsightSource::RequiredSkill | InsightSource::PreferredSkill | InsightSource::Signal
        )
    });

    if required_total > 0 && required_matched > 0 && required_matched * 2 >= required_total {
        FitTier::Strong
    } else if has_evidence {
        FitTier::Moderate
    } else if !insights.is_empty() {
        FitTier::Low
    } else {
        FitTier::NoEvidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::signal::{SourceTest, TestType};

    fn make_signal(dimension: &str, label: &str, strength: Strength) -> Signal {
        Signal {
            dimension_id: dimension.to_string(),
            label: label.to_string(),
            strength,
            source_test: SourceTest {
                test_type: TestType::Disc,
                version: "1".to_string(),
            },
        }
    }

    fn make_job(required: &[&str], preferred: &[&str]) -> JobContext {
        JobContext {
            title: "Backend Engineer".to_string(),
            location_type: Some(LocationType::Remote),
            company_size: Some(CompanySize::Startup),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_required_matches_outrank_preferred_and_signals() {
        let signals = vec![make_signal("dominance", "decisive", Strength::High)];
        let job = make_job(&["Rust"], &["GraphQL"]);
        let candidate = skills(&["rust", "graphql"]);

        let result = match_job(Some(&signals), &job, Some(&candidate));
        let sources: Vec<InsightSource> = result.insights.iter().map(|i| i.source).collect();

        assert_eq!(sources[0], InsightSource::RequiredSkill);
        assert_eq!(sources[1], InsightSource::PreferredSkill);
        assert_eq!(sources[2], InsightSource::Signal);
        assert_eq!(result.tier, FitTier::Strong);
    }

    #[test]
    fn test_anonymous_user_gets_no_signal_insights() {
        let job = make_job(&["React", "Node"], &[]);
        let result = match_job(None, &job, Some(&skills(&[])));

        assert!(result
            .insights
            .iter()
            .all(|i| i.source != InsightSource::Signal));
        assert!(result.matching_skills.is_empty());
        // Only generic job-context insights survive.
        assert!(result
            .insights
            .iter()
            .all(|i| i.source == InsightSource::JobContext));
        assert_eq!(result.tier, FitTier::Low);
    }

    #[test]
    fn test_no_skills_no_signals_no_context_is_no_evidence() {
        let job = JobContext {
            title: "Engineer".to_string(),
            location_type: None,
            company_size: None,
            required_skills: vec!["Rust".to_string()],
            preferred_skills: vec![],
        };
        let result = match_job(None, &job, None);

        assert!(result.insights.is_empty());
        assert_eq!(result.tier, FitTier::NoEvidence);
    }

    #[test]
    fn test_skill_evidence_is_monotonic() {
        let job = make_job(&["Rust", "Kubernetes"], &["AWS"]);
        let fewer = skills(&["rust"]);
        let more = skills(&["rust", "aws"]);

        let skill_insights = |result: &FitResult| {
            result
                .insights
                .iter()
                .filter(|i| {
                    matches!(
                        i.source,
                        InsightSource::RequiredSkill | InsightSource::PreferredSkill
                    )
                })
                .count()
        };

        let before = match_job(None, &job, Some(&fewer));
        let after = match_job(None, &job, Some(&more));
        assert!(skill_insights(&after) >= skill_insights(&before));
    }

    #[test]
    fn test_matching_skills_lists_required_first() {
        let job = make_job(&["Rust"], &["AWS"]);
        let result = match_job(None, &job, Some(&skills(&["aws", "rust"])));
        assert_eq!(result.matching_skills, vec!["Rust", "AWS"]);
    }

    #[test]
    fn test_signal_insights_rank_high_strength_first() {
        let signals = vec![
            make_signal("steadiness", "dependable", Strength::Medium),
            make_signal("dominance", "decisive", Strength::High),
        ];
        let job = make_job(&[], &[]);
        let result = match_job(Some(&signals), &job, None);

        let signal_texts: Vec<&str> = result
            .insights
            .iter()
            .filter(|i| i.source == InsightSource::Signal)
            .map(|i| i.text.as_str())
            .collect();
        assert!(signal_texts[0].contains("decisive"));
        assert!(signal_texts[1].contains("dependable"));
    }

    #[test]
    fn test_labels_never_appear_bare() {
        let signals = vec![make_signal("dominance", "decisive", Strength::High)];
        let job = make_job(&[], &[]);
        let result = match_job(Some(&signals), &job, None);

        for insight in &result.insights {
            assert_ne!(insight.text, "decisive");
            assert!(insight.text.split_whitespace().count() > 1);
        }
    }

    #[test]
    fn test_skill_matched_as_both_required_and_preferred_phrased_once() {
        let job = make_job(&["React"], &["React"]);
        let result = match_job(None, &job, Some(&skills(&["React Native"])));

        let skill_insights = result
            .insights
            .iter()
            .filter(|i| i.source != InsightSource::JobContext)
            .count();
        assert_eq!(skill_insights, 1);
        assert_eq!(result.matching_skills, vec!["React"]);
    }
}
