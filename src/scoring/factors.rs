//! The five sub-score calculators. Each maps an account onto 0-100 where
//! higher always means "more reason to sell".

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::normalize::{normalize, scale_to_100};
use crate::accounts::Account;

// Normalization caps for monetary and activity inputs. Values past a cap
// saturate instead of erroring.
const AUM_CAP: Decimal = dec!(2000000);
const REVENUE_CAP: Decimal = dec!(100000);
const BUYER_AUM_CAP: Decimal = dec!(1000000);
const TICKETS_CAP: Decimal = dec!(50);
const MEETINGS_CAP: Decimal = dec!(24);

// Target client profile the advisor wants to keep: at least $500k AUM and
// aged 40 through 65, both ends inclusive.
const TARGET_AUM: Decimal = dec!(500000);
const TARGET_AGE_MIN: u32 = 40;
const TARGET_AGE_MAX: u32 = 65;

const ADVISORY_BOOST: Decimal = dec!(1.1);
const NON_ADVISORY_BOOST: Decimal = dec!(0.9);

/// Profitability: 60% AUM, 40% revenue, boosted 1.1x for advisory fee
/// accounts and cut to 0.9x for everything else. The boost can push the
/// combined fraction past 1; scaling clamps it back to 100.
pub fn profitability_score(account: &Account) -> f64 {
    let aum_frac = normalize(account.aum, Decimal::ZERO, AUM_CAP);
    let revenue_frac = normalize(account.annual_revenue, Decimal::ZERO, REVENUE_CAP);
    let fee_boost = if account.is_advisory() {
        ADVISORY_BOOST
    } else {
        NON_ADVISORY_BOOST
    };
    scale_to_100((dec!(0.6) * aum_frac + dec!(0.4) * revenue_frac) * fee_boost)
}

/// Servicing burden: 50% ticket volume, 40% meeting cadence, 10% holdings
/// complexity.
pub fn servicing_score(account: &Account) -> f64 {
    let tickets_frac = normalize(
        Decimal::from(account.service_tickets_per_year),
        Decimal::ZERO,
        TICKETS_CAP,
    );
    let meetings_frac = normalize(
        Decimal::from(account.meetings_per_year),
        Decimal::ZERO,
        MEETINGS_CAP,
    );
    let complexity = if account.has_complex_holdings {
        Decimal::ONE
    } else {
        Decimal::ZERO
    };
    scale_to_100(dec!(0.5) * tickets_frac + dec!(0.4) * meetings_frac + dec!(0.1) * complexity)
}

/// Strategic fit, inverted: an account matching the target profile scores 0,
/// one missing both criteria scores 100. The AUM miss weighs 70%, age 30%.
pub fn strategic_fit_score(account: &Account) -> f64 {
    let aum_miss = if account.aum >= TARGET_AUM {
        Decimal::ZERO
    } else {
        Decimal::ONE
    };
    let age_miss = if (TARGET_AGE_MIN..=TARGET_AGE_MAX).contains(&account.age) {
        Decimal::ZERO
    } else {
        Decimal::ONE
    };
    scale_to_100(dec!(0.7) * aum_miss + dec!(0.3) * age_miss)
}

/// Compliance overhead, driven entirely by holdings complexity: 100 for
/// complex holdings, 0 otherwise.
pub fn compliance_score(account: &Account) -> f64 {
    let risk = if account.has_complex_holdings {
        Decimal::ONE
    } else {
        Decimal::ZERO
    };
    scale_to_100(risk)
}

/// Predicted buyer interest: buyers prefer larger books (80%) with simple
/// holdings (20%).
pub fn buyer_interest_score(account: &Account) -> f64 {
    let aum_frac = normalize(account.aum, Decimal::ZERO, BUYER_AUM_CAP);
    let simplicity = if account.has_complex_holdings {
        Decimal::ZERO
    } else {
        Decimal::ONE
    };
    scale_to_100(dec!(0.8) * aum_frac + dec!(0.2) * simplicity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        // The sizable complex account from the starter book
        Account {
            account_id: "A2".to_string(),
            advisor_id: "ADV1".to_string(),
            aum: dec!(450000),
            annual_revenue: dec!(6000),
            fee_type: "advisory".to_string(),
            meetings_per_year: 6,
            service_tickets_per_year: 10,
            age: 72,
            has_complex_holdings: true,
            region: "CA".to_string(),
        }
    }

    #[test]
    fn test_profitability_known_value() {
        // 0.6 * (450000/2000000) + 0.4 * (6000/100000) = 0.159, then x1.1
        let score = profitability_score(&sample_account());
        assert!((score - 17.49).abs() < 1e-9);
    }

    #[test]
    fn test_profitability_fee_boost_direction() {
        let advisory = sample_account();
        let mut commission = sample_account();
        commission.fee_type = "commission".to_string();

        assert!(profitability_score(&advisory) > profitability_score(&commission));
        // Same base fraction, 0.9x instead of 1.1x
        assert!((profitability_score(&commission) - 14.31).abs() < 1e-9);
    }

    #[test]
    fn test_profitability_unknown_fee_type_treated_as_non_advisory() {
        let mut account = sample_account();
        account.fee_type = "performance".to_string();
        assert!((profitability_score(&account) - 14.31).abs() < 1e-9);
    }

    #[test]
    fn test_profitability_boost_clamps_at_100() {
        let mut account = sample_account();
        // Both fractions saturate; 1.0 * 1.1 must still cap at 100
        account.aum = dec!(99000000);
        account.annual_revenue = dec!(5000000);
        assert_eq!(profitability_score(&account), 100.0);
    }

    #[test]
    fn test_profitability_negative_inputs_clamp_to_zero() {
        let mut account = sample_account();
        account.aum = dec!(-50000);
        account.annual_revenue = dec!(-100);
        assert_eq!(profitability_score(&account), 0.0);
    }

    #[test]
    fn test_servicing_known_value() {
        // 0.5 * (10/50) + 0.4 * (6/24) + 0.1 * 1 = 0.3
        assert_eq!(servicing_score(&sample_account()), 30.0);
    }

    #[test]
    fn test_servicing_saturates_on_heavy_accounts() {
        let mut account = sample_account();
        account.service_tickets_per_year = 500;
        account.meetings_per_year = 52;
        assert_eq!(servicing_score(&account), 100.0);
    }

    #[test]
    fn test_strategic_fit_both_criteria_missed() {
        // $450k is under target and age 72 is outside 40-65
        assert_eq!(strategic_fit_score(&sample_account()), 100.0);
    }

    #[test]
    fn test_strategic_fit_target_account_scores_zero() {
        let mut account = sample_account();
        account.aum = dec!(500000);
        account.age = 40;
        assert_eq!(strategic_fit_score(&account), 0.0);

        account.age = 65;
        assert_eq!(strategic_fit_score(&account), 0.0);
    }

    #[test]
    fn test_strategic_fit_partial_misses() {
        let mut aum_only = sample_account();
        aum_only.aum = dec!(499999);
        aum_only.age = 50;
        assert_eq!(strategic_fit_score(&aum_only), 70.0);

        let mut age_only = sample_account();
        age_only.aum = dec!(800000);
        age_only.age = 39;
        assert_eq!(strategic_fit_score(&age_only), 30.0);
    }

    #[test]
    fn test_compliance_is_binary() {
        let complex = sample_account();
        assert_eq!(compliance_score(&complex), 100.0);

        let mut simple = sample_account();
        simple.has_complex_holdings = false;
        assert_eq!(compliance_score(&simple), 0.0);
    }

    #[test]
    fn test_buyer_interest_known_value() {
        // 0.8 * (450000/1000000) + 0.2 * 0 = exactly 0.36
        assert_eq!(buyer_interest_score(&sample_account()), 36.0);
    }

    #[test]
    fn test_buyer_interest_rewards_simplicity() {
        let mut simple = sample_account();
        simple.has_complex_holdings = false;
        assert_eq!(buyer_interest_score(&simple), 56.0);
    }

    #[test]
    fn test_profitability_monotonic_in_aum() {
        let mut account = sample_account();
        let mut last = -1.0;
        for aum in [0i64, 100000, 250000, 500000, 1000000, 3000000] {
            account.aum = Decimal::from(aum);
            let score = profitability_score(&account);
            assert!(score >= last, "profitability dropped as AUM rose");
            last = score;
        }
    }

    #[test]
    fn test_buyer_interest_monotonic_in_aum() {
        let mut account = sample_account();
        let mut last = -1.0;
        for aum in [0i64, 100000, 250000, 500000, 1000000, 3000000] {
            account.aum = Decimal::from(aum);
            let score = buyer_interest_score(&account);
            assert!(score >= last, "buyer interest dropped as AUM rose");
            last = score;
        }
    }

    #[test]
    fn test_all_factors_stay_in_range() {
        let extremes = [
            (dec!(-1000000), dec!(-50000), 0u32, 0u32, 0u32, false),
            (Decimal::ZERO, Decimal::ZERO, 0, 0, 30, false),
            (dec!(99000000), dec!(9000000), 400, 400, 200, true),
        ];
        for (aum, revenue, meetings, tickets, age, complex) in extremes {
            let account = Account {
                aum,
                annual_revenue: revenue,
                meetings_per_year: meetings,
                service_tickets_per_year: tickets,
                age,
                has_complex_holdings: complex,
                ..Default::default()
            };
            for score in [
                profitability_score(&account),
                servicing_score(&account),
                strategic_fit_score(&account),
                compliance_score(&account),
                buyer_interest_score(&account),
            ] {
                assert!(
                    (0.0..=100.0).contains(&score),
                    "sub-score {} out of range",
                    score
                );
            }
        }
    }
}
