pub mod depth;

pub use depth::{filter_candidate_insights, filter_team_fit_insights};
