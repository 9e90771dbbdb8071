//! Static assessment catalogs: questions, weight tables, and the curated
//! dimension labels for each supported test version.
//!
//! Labels are the only vocabulary that ever leaves the engine. They are
//! qualitative tags, one per strength band per dimension; raw intensities and
//! dimension ids stay internal.

use std::sync::LazyLock;

use crate::models::signal::{Strength, TestType};

/// Curated labels for one dimension, one per strength band.
#[derive(Debug, Clone, Copy)]
pub struct BandLabels {
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

impl BandLabels {
    pub fn for_band(&self, band: Strength) -> &'static str {
        match band {
            Strength::Low => self.low,
            Strength::Medium => self.medium,
            Strength::High => self.high,
        }
    }
}

/// One internal axis of workstyle measurement.
#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub id: &'static str,
    /// Human phrase used when an insight talks about this axis without
    /// naming a label ("decision-making pace").
    pub display: &'static str,
    pub labels: BandLabels,
}

/// One selectable answer value and the dimension weights it contributes.
#[derive(Debug, Clone)]
pub struct QuestionOption {
    pub value: &'static str,
    pub weights: Vec<(&'static str, f64)>,
}

/// One catalog question.
#[derive(Debug, Clone)]
pub struct QuestionDef {
    pub id: String,
    pub options: Vec<QuestionOption>,
}

impl QuestionDef {
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Everything the derivation needs to score one test version.
#[derive(Debug, Clone)]
pub struct TestCatalog {
    pub test_type: TestType,
    pub version: &'static str,
    /// Minimum number of validly answered questions; below this the whole
    /// submission is rejected as recoverable error.
    pub min_answered: usize,
    pub dimensions: &'static [DimensionDef],
    pub questions: Vec<QuestionDef>,
}

impl TestCatalog {
    pub fn question(&self, id: &str) -> Option<&QuestionDef> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Maximum total weight any answer set could contribute to `dimension`.
    /// Normalizing by this puts every dimension on the same 0..=1 scale.
    pub fn max_contribution(&self, dimension: &str) -> f64 {
        self.questions
            .iter()
            .map(|q| {
                q.options
                    .iter()
                    .flat_map(|o| o.weights.iter())
                    .filter(|(dim, _)| *dim == dimension)
                    .map(|(_, w)| *w)
                    .fold(0.0_f64, f64::max)
            })
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DISC-lite v1
// ────────────────────────────────────────────────────────────────────────────

pub const DISC_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        id: "dominance",
        display: "decision-making pace",
        labels: BandLabels {
            low: "measured",
            medium: "driven",
            high: "decisive",
        },
    },
    DimensionDef {
        id: "influence",
        display: "communication energy",
        labels: BandLabels {
            low: "approachable",
            medium: "outgoing",
            high: "persuasive",
        },
    },
    DimensionDef {
        id: "steadiness",
        display: "work rhythm",
        labels: BandLabels {
            low: "adaptable",
            medium: "dependable",
            high: "steadfast",
        },
    },
    DimensionDef {
        id: "conscientiousness",
        display: "attention to structure",
        labels: BandLabels {
            low: "flexible",
            medium: "organized",
            high: "methodical",
        },
    },
];

const DISC_QUESTION_COUNT: usize = 20;
const DISC_ALTERNATING: &[&str] = &["influence", "steadiness", "conscientiousness"];

/// DISC-lite v1: 20 forced-choice items. Option `a` is always the
/// direct/results-focused choice (dominance); option `b` cycles through the
/// other three styles.
static DISC_V1: LazyLock<TestCatalog> = LazyLock::new(|| {
    let questions = (0..DISC_QUESTION_COUNT)
        .map(|i| QuestionDef {
            id: format!("d{:02}", i + 1),
            options: vec![
                QuestionOption {
                    value: "a",
                    weights: vec![("dominance", 1.0)],
                },
                QuestionOption {
                    value: "b",
                    weights: vec![(DISC_ALTERNATING[i % DISC_ALTERNATING.len()], 1.0)],
                },
            ],
        })
        .collect();

    TestCatalog {
        test_type: TestType::Disc,
        version: "1",
        min_answered: 12,
        dimensions: DISC_DIMENSIONS,
        questions,
    }
});

// ────────────────────────────────────────────────────────────────────────────
// Holland v1
// ────────────────────────────────────────────────────────────────────────────

pub const HOLLAND_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef {
        id: "realistic",
        display: "preference for hands-on work",
        labels: BandLabels {
            low: "practical",
            medium: "handsOn",
            high: "builderMinded",
        },
    },
    DimensionDef {
        id: "investigative",
        display: "analytical bent",
        labels: BandLabels {
            low: "curious",
            medium: "analytical",
            high: "researchDriven",
        },
    },
    DimensionDef {
        id: "artistic",
        display: "creative expression",
        labels: BandLabels {
            low: "openMinded",
            medium: "creative",
            high: "originalThinker",
        },
    },
    DimensionDef {
        id: "social",
        display: "people orientation",
        labels: BandLabels {
            low: "supportive",
            medium: "peopleFocused",
            high: "teamBuilder",
        },
    },
    DimensionDef {
        id: "enterprising",
        display: "drive to lead",
        labels: BandLabels {
            low: "ambitious",
            medium: "resultsOriented",
            high: "leadershipLeaning",
        },
    },
    DimensionDef {
        id: "conventional",
        display: "preference for structure",
        labels: BandLabels {
            low: "orderly",
            medium: "systematic",
            high: "detailFocused",
        },
    },
];

const HOLLAND_QUESTION_COUNT: usize = 12;

/// Holland v1: 12 items; each answer value is one of the six category ids.
static HOLLAND_V1: LazyLock<TestCatalog> = LazyLock::new(|| {
    let questions = (0..HOLLAND_QUESTION_COUNT)
        .map(|i| QuestionDef {
            id: format!("h{:02}", i + 1),
            options: HOLLAND_DIMENSIONS
                .iter()
                .map(|dim| QuestionOption {
                    value: dim.id,
                    weights: vec![(dim.id, 1.0)],
                })
                .collect(),
        })
        .collect();

    TestCatalog {
        test_type: TestType::Holland,
        version: "1",
        min_answered: 8,
        dimensions: HOLLAND_DIMENSIONS,
        questions,
    }
});

/// Looks up the catalog for a submitted test; `None` means the engine has no
/// scoring tables for that version and must refuse rather than guess.
pub fn catalog_for(test_type: TestType, version: &str) -> Option<&'static TestCatalog> {
    match (test_type, version) {
        (TestType::Disc, "1") => Some(&DISC_V1),
        (TestType::Holland, "1") => Some(&HOLLAND_V1),
        _ => None,
    }
}

/// Display phrase for a dimension, across all known catalogs.
pub fn dimension_display(dimension_id: &str) -> Option<&'static str> {
    DISC_DIMENSIONS
        .iter()
        .chain(HOLLAND_DIMENSIONS.iter())
        .find(|d| d.id == dimension_id)
        .map(|d| d.display)
}
