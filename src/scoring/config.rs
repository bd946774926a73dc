use serde::{Deserialize, Serialize};

/// Scoring configuration.
///
/// Holds the weight each sub-score contributes to the final 0-100 score,
/// plus the recommendation policy knobs the CLI consumes. Every field is
/// optional in the config file and falls back to its default individually.
///
/// Weights are applied exactly as configured. They are not rescaled to sum
/// to 1, so a book can be deliberately over- or under-weighted; the final
/// score still clamps to 0-100.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   profitability_weight: 0.3
///   servicing_weight: 0.25
///   strategic_fit_weight: 0.2
///   compliance_weight: 0.1
///   buyer_interest_weight: 0.15
///   recommendation_threshold: 80
///   recommend_count: 5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight on the profitability sub-score (default 0.3)
    #[serde(default = "default_profitability_weight")]
    pub profitability_weight: f64,

    /// Weight on the servicing-burden sub-score (default 0.25)
    #[serde(default = "default_servicing_weight")]
    pub servicing_weight: f64,

    /// Weight on the inverted strategic-fit sub-score (default 0.2)
    #[serde(default = "default_strategic_fit_weight")]
    pub strategic_fit_weight: f64,

    /// Weight on the compliance-overhead sub-score (default 0.1)
    #[serde(default = "default_compliance_weight")]
    pub compliance_weight: f64,

    /// Weight on the buyer-interest sub-score (default 0.15)
    #[serde(default = "default_buyer_interest_weight")]
    pub buyer_interest_weight: f64,

    /// Final scores at or above this are flagged as transition candidates
    /// (default 80)
    #[serde(default = "default_recommendation_threshold")]
    pub recommendation_threshold: u8,

    /// How many candidates `recommend` surfaces at most (default 5)
    #[serde(default = "default_recommend_count")]
    pub recommend_count: usize,
}

fn default_profitability_weight() -> f64 {
    0.3
}

fn default_servicing_weight() -> f64 {
    0.25
}

fn default_strategic_fit_weight() -> f64 {
    0.2
}

fn default_compliance_weight() -> f64 {
    0.1
}

fn default_buyer_interest_weight() -> f64 {
    0.15
}

fn default_recommendation_threshold() -> u8 {
    80
}

fn default_recommend_count() -> usize {
    5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            profitability_weight: default_profitability_weight(),
            servicing_weight: default_servicing_weight(),
            strategic_fit_weight: default_strategic_fit_weight(),
            compliance_weight: default_compliance_weight(),
            buyer_interest_weight: default_buyer_interest_weight(),
            recommendation_threshold: default_recommendation_threshold(),
            recommend_count: default_recommend_count(),
        }
    }
}
