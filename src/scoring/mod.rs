pub mod config;
pub mod engine;
pub mod explain;
pub mod factors;
pub mod normalize;
pub mod validation;

pub use config::ScoringConfig;
pub use engine::{rank_accounts, score_account, BuyerInterestLabel, ScoreBreakdown, ScoreResult};
pub use explain::build_explanation;
pub use validation::validate_scoring;
