use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = [
        ("scoring.profitability_weight", config.profitability_weight),
        ("scoring.servicing_weight", config.servicing_weight),
        ("scoring.strategic_fit_weight", config.strategic_fit_weight),
        ("scoring.compliance_weight", config.compliance_weight),
        (
            "scoring.buyer_interest_weight",
            config.buyer_interest_weight,
        ),
    ];
    for (field, weight) in weights {
        if !weight.is_finite() {
            errors.push(format!("{}: must be a finite number", field));
        } else if weight < 0.0 {
            errors.push(format!("{}: must be non-negative", field));
        }
    }

    // Weights are deliberately not required to sum to 1; the final score
    // clamps instead. Only the threshold has a hard ceiling.
    if config.recommendation_threshold > 100 {
        errors.push("scoring.recommendation_threshold: must be at most 100".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_weights_not_summing_to_one_are_valid() {
        let config = ScoringConfig {
            profitability_weight: 1.0,
            servicing_weight: 1.0,
            strategic_fit_weight: 1.0,
            compliance_weight: 1.0,
            buyer_interest_weight: 1.0,
            ..Default::default()
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_zero_weights_are_valid() {
        let config = ScoringConfig {
            profitability_weight: 0.0,
            servicing_weight: 0.0,
            strategic_fit_weight: 0.0,
            compliance_weight: 0.0,
            buyer_interest_weight: 0.0,
            ..Default::default()
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let config = ScoringConfig {
            servicing_weight: -0.25,
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.servicing_weight"));
        assert!(errors[0].contains("non-negative"));
    }

    #[test]
    fn test_non_finite_weight() {
        let config = ScoringConfig {
            compliance_weight: f64::NAN,
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.compliance_weight"));
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_threshold_over_100() {
        let config = ScoringConfig {
            recommendation_threshold: 101,
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("recommendation_threshold"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            profitability_weight: -0.3,
            buyer_interest_weight: f64::INFINITY,
            recommendation_threshold: 200,
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
