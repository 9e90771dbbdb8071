//! Candidate-vs-team comparison over aggregated signals.
//!
//! Aggregation is the privacy boundary: the composite is only computed once
//! enough members carry signals, and no output field refers to an individual
//! member. The minimum-size gate is checked before any aggregation and does
//! not depend on the aggregation strategy in use.

use std::collections::HashMap;

use crate::assessment::catalog::dimension_display;
use crate::config::EngineConfig;
use crate::models::context::{JobContext, TeamMemberSignals};
use crate::models::fit::{FitMeta, FitResult, FitTier, Insight, InsightSource};
use crate::models::signal::{Signal, Strength};

/// How a shared dimension compares between candidate and team composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Aligned,
    Complementary,
    Gap,
}

/// Pluggable per-dimension aggregation over member strength bands.
///
/// Swapping the strategy (median band, tenure-weighted, ...) never touches
/// the privacy gate, which runs before any strategy is consulted.
pub trait CompositeStrategy: Send + Sync {
    fn label(&self) -> &'static str;
    /// Composite band for one dimension given every covering member's band.
    /// `None` excludes the dimension from the composite.
    fn composite(&self, bands: &[Strength]) -> Option<Strength>;
}

/// Default strategy: the most common band among covering members; a tie goes
/// to the higher band.
pub struct ModeComposite;

impl CompositeStrategy for ModeComposite {
    fn label(&self) -> &'static str {
        "mode"
    }

    fn composite(&self, bands: &[Strength]) -> Option<Strength> {
        if bands.is_empty() {
            return None;
        }
        let count = |band: Strength| bands.iter().filter(|b| **b == band).count();
        [Strength::High, Strength::Medium, Strength::Low]
            .into_iter()
            .max_by_key(|band| (count(*band), *band))
    }
}

/// Compares a candidate against the team composite with the default
/// mode-band strategy.
pub fn analyze_team_fit(
    candidate_signals: &[Signal],
    team: &[TeamMemberSignals],
    job: &JobContext,
    config: &EngineConfig,
) -> FitResult {
    analyze_team_fit_with_strategy(candidate_signals, team, job, config, &ModeComposite)
}

/// Strategy-parameterized variant. The privacy gate is evaluated first and
/// refuses to aggregate below `config.min_team_size` signal-carrying members,
/// whatever the strategy would have produced.
pub fn analyze_team_fit_with_strategy(
    candidate_signals: &[Signal],
    team: &[TeamMemberSignals],
    job: &JobContext,
    config: &EngineConfig,
    strategy: &dyn CompositeStrategy,
) -> FitResult {
    let covered_members = team.iter().filter(|m| !m.signals.is_empty()).count();
    if covered_members < config.min_team_size {
        tracing::debug!(
            job = %job.title,
            strategy = strategy.label(),
            covered = covered_members,
            required = config.min_team_size,
            "team below privacy threshold, refusing to aggregate"
        );
        return insufficient_data_result();
    }

    // Per dimension, every covering member contributes their strongest band.
    let mut member_bands: HashMap<&str, Vec<Strength>> = HashMap::new();
    for member in team {
        for (dimension, band) in strongest_per_dimension(&member.signals) {
            member_bands.entry(dimension).or_default().push(band);
        }
    }

    let composite: HashMap<&str, Strength> = member_bands
        .into_iter()
        .filter_map(|(dimension, bands)| {
            strategy.composite(&bands).map(|band| (dimension, band))
        })
        .collect();

    // Candidate signal order drives output order; dimensions absent from
    // either side stay silent.
    let mut classified: Vec<(&str, Alignment)> = Vec::new();
    for (dimension, candidate_band) in strongest_per_dimension(candidate_signals) {
        let Some(team_band) = composite.get(dimension) else {
            continue;
        };
        let alignment = match candidate_band.band_distance(*team_band) {
            0 => Alignment::Aligned,
            1 => Alignment::Complementary,
            _ => Alignment::Gap,
        };
        classified.push((dimension, alignment));
    }

    if classified.is_empty() {
        return FitResult::no_evidence(Vec::new());
    }

    let count_of = |alignment: Alignment| {
        classified.iter().filter(|(_, a)| *a == alignment).count()
    };
    let aligned = count_of(Alignment::Aligned);
    let complementary = count_of(Alignment::Complementary);
    let gaps = count_of(Alignment::Gap);

    let mut insights = vec![Insight::new(
        format!(
            "Compared with the team overall: {aligned} working-style match{}, \
             {complementary} complementary, {gaps} worth a conversation.",
            if aligned == 1 { "" } else { "es" }
        ),
        InsightSource::TeamOverview,
    )];

    for alignment in [Alignment::Aligned, Alignment::Complementary, Alignment::Gap] {
        for (dimension, _) in classified.iter().filter(|(_, a)| *a == alignment) {
            insights.push(dimension_insight(dimension, alignment));
        }
    }

    let tier = if gaps == 0 && aligned > 0 {
        FitTier::Strong
    } else if aligned + complementary >= gaps {
        FitTier::Moderate
    } else {
        FitTier::Low
    };

    FitResult {
        insights,
        matching_skills: Vec::new(),
        tier,
        meta: FitMeta::unfiltered(),
    }
}

/// The explicit no-aggregate result. Carries a single notice that compares
/// nothing and aggregates nothing.
fn insufficient_data_result() -> FitResult {
    FitResult {
        insights: vec![Insight::new(
            "Not enough of the team has completed an assessment to compare working styles yet.",
            InsightSource::TeamOverview,
        )],
        matching_skills: Vec::new(),
        tier: FitTier::InsufficientData,
        meta: FitMeta::unfiltered(),
    }
}

/// One band per dimension, strongest wins (re-tests may stack strengths);
/// first-seen order is preserved.
fn strongest_per_dimension(signals: &[Signal]) -> Vec<(&str, Strength)> {
    let mut per_dimension: Vec<(&str, Strength)> = Vec::new();
    for signal in signals {
        match per_dimension
            .iter_mut()
            .find(|(dimension, _)| *dimension == signal.dimension_id)
        {
            Some((_, band)) => *band = (*band).max(signal.strength),
            None => per_dimension.push((signal.dimension_id.as_str(), signal.strength)),
        }
    }
    per_dimension
}

/// Phrases one classified dimension. Uses the dimension's display phrase,
/// never any label, so no party's signal vocabulary leaks across.
fn dimension_insight(dimension: &str, alignment: Alignment) -> Insight {
    let display = dimension_display(dimension).unwrap_or("working style");
    match alignment {
        Alignment::Aligned => Insight::new(
            format!("Matches the team's usual {display}."),
            InsightSource::TeamAligned,
        ),
        Alignment::Complementary => Insight::new(
            format!("Brings a slightly different {display} that can round the team out."),
            InsightSource::TeamComplementary,
        ),
        Alignment::Gap => Insight::new(
            format!(
                "Approaches {display} differently from the team as a whole; \
                 worth exploring in conversation."
            ),
            InsightSource::TeamGap,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::signal::{SourceTest, TestType};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("engine=debug")
            .with_test_writer()
            .try_init();
    }

    fn make_signal(dimension: &str, strength: Strength) -> Signal {
        Signal {
            dimension_id: dimension.to_string(),
            label: "decisive".to_string(),
            strength,
            source_test: SourceTest {
                test_type: TestType::Disc,
                version: "1".to_string(),
            },
        }
    }

    fn member(signals: Vec<Signal>) -> TeamMemberSignals {
        TeamMemberSignals { signals }
    }

    fn make_job() -> JobContext {
        JobContext {
            title: "Staff Engineer".to_string(),
            location_type: None,
            company_size: None,
            required_skills: vec![],
            preferred_skills: vec![],
        }
    }

    fn three_member_team(band: Strength) -> Vec<TeamMemberSignals> {
        (0..3)
            .map(|_| member(vec![make_signal("dominance", band)]))
            .collect()
    }

    #[test]
    fn test_two_members_get_insufficient_data_not_an_aggregate() {
        init_tracing();
        let candidate = vec![make_signal("dominance", Strength::High)];
        let team = vec![
            member(vec![make_signal("dominance", Strength::High)]),
            member(vec![make_signal("dominance", Strength::High)]),
        ];
        let result =
            analyze_team_fit(&candidate, &team, &make_job(), &EngineConfig::default());

        assert_eq!(result.tier, FitTier::InsufficientData);
        assert!(result.insights.iter().all(|i| {
            !matches!(
                i.source,
                InsightSource::TeamAligned
                    | InsightSource::TeamComplementary
                    | InsightSource::TeamGap
            )
        }));
        // The notice compares nothing.
        assert_eq!(result.insights.len(), 1);
        assert!(result.insights[0].text.contains("Not enough"));
    }

    #[test]
    fn test_members_without_signals_do_not_count_toward_threshold() {
        let candidate = vec![make_signal("dominance", Strength::High)];
        let mut team = vec![
            member(vec![make_signal("dominance", Strength::High)]),
            member(vec![make_signal("dominance", Strength::High)]),
        ];
        team.push(member(vec![])); // completed nothing; must not unlock the gate
        let result =
            analyze_team_fit(&candidate, &team, &make_job(), &EngineConfig::default());

        assert_eq!(result.tier, FitTier::InsufficientData);
    }

    #[test]
    fn test_privacy_gate_is_independent_of_strategy() {
        struct AlwaysHigh;
        impl CompositeStrategy for AlwaysHigh {
            fn label(&self) -> &'static str {
                "always_high"
            }
            fn composite(&self, _bands: &[Strength]) -> Option<Strength> {
                Some(Strength::High)
            }
        }

        let candidate = vec![make_signal("dominance", Strength::High)];
        let team = vec![member(vec![make_signal("dominance", Strength::High)])];
        let result = analyze_team_fit_with_strategy(
            &candidate,
            &team,
            &make_job(),
            &EngineConfig::default(),
            &AlwaysHigh,
        );

        assert_eq!(result.tier, FitTier::InsufficientData);
    }

    #[test]
    fn test_aligned_dimension_yields_aligned_insight() {
        let candidate = vec![make_signal("dominance", Strength::High)];
        let result = analyze_team_fit(
            &candidate,
            &three_member_team(Strength::High),
            &make_job(),
            &EngineConfig::default(),
        );

        assert_eq!(result.tier, FitTier::Strong);
        assert_eq!(result.insights[0].source, InsightSource::TeamOverview);
        assert!(result.insights[0].text.contains("1 working-style match"));
        assert_eq!(result.insights[1].source, InsightSource::TeamAligned);
        assert!(result.insights[1].text.contains("decision-making pace"));
    }

    #[test]
    fn test_adjacent_band_is_complementary_two_apart_is_gap() {
        let candidate = vec![
            make_signal("dominance", Strength::Medium), // team high → adjacent
            make_signal("steadiness", Strength::Low),   // team high → gap
        ];
        let team: Vec<TeamMemberSignals> = (0..3)
            .map(|_| {
                member(vec![
                    make_signal("dominance", Strength::High),
                    make_signal("steadiness", Strength::High),
                ])
            })
            .collect();
        let result =
            analyze_team_fit(&candidate, &team, &make_job(), &EngineConfig::default());

        let sources: Vec<InsightSource> = result.insights.iter().map(|i| i.source).collect();
        assert_eq!(
            sources,
            vec![
                InsightSource::TeamOverview,
                InsightSource::TeamComplementary,
                InsightSource::TeamGap,
            ]
        );
        // Gap framing is a conversation topic, never a rejection.
        let gap_text = &result.insights[2].text;
        assert!(gap_text.contains("worth exploring"));
        assert!(!gap_text.to_lowercase().contains("reject"));
    }

    #[test]
    fn test_disjoint_dimensions_stay_silent() {
        let candidate = vec![make_signal("investigative", Strength::High)];
        let result = analyze_team_fit(
            &candidate,
            &three_member_team(Strength::High), // dominance only
            &make_job(),
            &EngineConfig::default(),
        );

        assert!(result.insights.is_empty());
        assert_eq!(result.tier, FitTier::NoEvidence);
    }

    #[test]
    fn test_no_member_labels_or_identities_in_output() {
        let candidate = vec![make_signal("dominance", Strength::High)];
        let mut team = three_member_team(Strength::High);
        // A member with a distinctive label that must never surface.
        team[0].signals[0].label = "hyperfocused".to_string();
        let result =
            analyze_team_fit(&candidate, &team, &make_job(), &EngineConfig::default());

        for insight in &result.insights {
            assert!(!insight.text.contains("hyperfocused"));
            assert!(!insight.text.contains("decisive"));
        }
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("hyperfocused"));
    }

    #[test]
    fn test_mode_composite_takes_most_common_band() {
        let bands = vec![Strength::Low, Strength::Medium, Strength::Medium];
        assert_eq!(ModeComposite.composite(&bands), Some(Strength::Medium));
        assert_eq!(ModeComposite.label(), "mode");
    }

    #[test]
    fn test_mode_composite_tie_goes_to_higher_band() {
        let bands = vec![Strength::Low, Strength::High];
        assert_eq!(ModeComposite.composite(&bands), Some(Strength::High));
        assert_eq!(ModeComposite.composite(&[]), None);
    }

    #[test]
    fn test_retested_member_counts_strongest_band_once() {
        // One member has two dominance signals (re-test); only the strongest
        // contributes, so the mode is High (2 high vs 1 medium), and the
        // high-band candidate aligns.
        let candidate = vec![make_signal("dominance", Strength::High)];
        let team = vec![
            member(vec![
                make_signal("dominance", Strength::Low),
                make_signal("dominance", Strength::High),
            ]),
            member(vec![make_signal("dominance", Strength::High)]),
            member(vec![make_signal("dominance", Strength::Medium)]),
        ];
        let result =
            analyze_team_fit(&candidate, &team, &make_job(), &EngineConfig::default());

        assert_eq!(result.insights[1].source, InsightSource::TeamAligned);
    }
}
