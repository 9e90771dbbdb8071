pub mod candidate_fit;
pub mod job_fit;
pub mod skills;
pub mod team_fit;

pub use candidate_fit::match_candidate;
pub use job_fit::match_job;
pub use team_fit::{analyze_team_fit, analyze_team_fit_with_strategy, CompositeStrategy, ModeComposite};
