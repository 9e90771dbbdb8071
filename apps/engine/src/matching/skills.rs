//! The skill-matching rule, isolated behind one named function.
//!
//! Both fit scorers share this rule, so swapping it for a stricter matcher
//! (alias tables, edit distance) touches nothing in the ranking logic.

/// Returns true when either skill string contains the other,
/// case-insensitively.
///
/// Known policy, not a bug: compound skill names over-match ("React" matches
/// "React Native"). Product accepted the false positives in exchange for
/// zero-maintenance matching.
pub fn skills_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Job-side skills (in the job's own order) that at least one candidate
/// skill matches. Deduplicated case-insensitively, first spelling wins.
pub fn matched_job_skills(job_skills: &[String], candidate_skills: &[String]) -> Vec<String> {
    let mut matched = Vec::new();
    for job_skill in job_skills {
        if candidate_skills.iter().any(|c| skills_match(c, job_skill))
            && !matched
                .iter()
                .any(|m: &String| m.eq_ignore_ascii_case(job_skill))
        {
            matched.push(job_skill.clone());
        }
    }
    matched
}
