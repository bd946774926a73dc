use serde::Serialize;
use std::fmt;

use super::config::ScoringConfig;
use super::explain::build_explanation;
use super::factors;
use crate::accounts::Account;

/// The five sub-scores behind one final score, each already on the 0-100
/// scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub profitability: f64,
    pub servicing: f64,
    pub strategic_fit: f64,
    pub compliance: f64,
    pub buyer_interest: f64,
}

/// Coarse buyer-demand band. Derived from the buyer-interest sub-score
/// alone, never from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuyerInterestLabel {
    Low,
    Medium,
    High,
}

impl BuyerInterestLabel {
    /// Bands are checked high to low; boundaries belong to the upper band.
    pub fn from_score(buyer_interest: f64) -> Self {
        if buyer_interest >= 70.0 {
            BuyerInterestLabel::High
        } else if buyer_interest >= 40.0 {
            BuyerInterestLabel::Medium
        } else {
            BuyerInterestLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuyerInterestLabel::Low => "Low",
            BuyerInterestLabel::Medium => "Medium",
            BuyerInterestLabel::High => "High",
        }
    }
}

impl fmt::Display for BuyerInterestLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully scored account, ready for display or serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub account_id: String,
    /// Weighted, rounded, clamped combination of the sub-scores
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub buyer_interest_label: BuyerInterestLabel,
    pub explanation: String,
}

/// Weighted combination of the sub-scores, rounded half away from zero and
/// clamped onto 0-100.
fn aggregate(breakdown: &ScoreBreakdown, config: &ScoringConfig) -> u8 {
    let raw = config.profitability_weight * breakdown.profitability
        + config.servicing_weight * breakdown.servicing
        + config.strategic_fit_weight * breakdown.strategic_fit
        + config.compliance_weight * breakdown.compliance
        + config.buyer_interest_weight * breakdown.buyer_interest;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Score a single account: compute the five sub-scores, combine them under
/// the configured weights, band the buyer interest, and attach the
/// explanation. Never fails; out-of-range inputs clamp during
/// normalization.
pub fn score_account(account: &Account, config: &ScoringConfig) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        profitability: factors::profitability_score(account),
        servicing: factors::servicing_score(account),
        strategic_fit: factors::strategic_fit_score(account),
        compliance: factors::compliance_score(account),
        buyer_interest: factors::buyer_interest_score(account),
    };

    let score = aggregate(&breakdown, config);
    let buyer_interest_label = BuyerInterestLabel::from_score(breakdown.buyer_interest);
    let explanation = build_explanation(&breakdown, score);

    ScoreResult {
        account_id: account.account_id.clone(),
        score,
        breakdown,
        buyer_interest_label,
        explanation,
    }
}

/// Score every account and sort best sell candidates first. The sort is
/// stable, so accounts with equal scores keep their input order. A `top_n`
/// of 0 returns the whole ranking; anything else truncates to that many.
pub fn rank_accounts(
    accounts: &[Account],
    top_n: usize,
    config: &ScoringConfig,
) -> Vec<ScoreResult> {
    let mut results: Vec<ScoreResult> = accounts
        .iter()
        .map(|account| score_account(account, config))
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));

    if top_n > 0 {
        results.truncate(top_n);
    }
    results
}
