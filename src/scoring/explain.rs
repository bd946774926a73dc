use super::engine::ScoreBreakdown;

/// Assemble the human-readable rationale for a scored account.
///
/// Each sub-score is checked against a fixed threshold in a fixed order, so
/// identical breakdowns always produce the identical sentence. When nothing
/// trips a threshold a stock keep-the-account line is used instead.
pub fn build_explanation(breakdown: &ScoreBreakdown, final_score: u8) -> String {
    let mut reasons: Vec<&str> = Vec::new();

    if breakdown.profitability < 30.0 {
        reasons.push("Low profitability (low AUM / revenue).");
    } else if breakdown.profitability >= 70.0 {
        reasons.push("High profitability — consider keeping unless servicing burden is high.");
    }

    if breakdown.servicing >= 50.0 {
        reasons.push("High servicing requirements (tickets/meetings/complex holdings).");
    }

    if breakdown.strategic_fit >= 50.0 {
        reasons.push("Low strategic fit with advisor target client profile.");
    }

    if breakdown.compliance >= 50.0 {
        reasons.push("Complex holdings may cause compliance overhead.");
    }

    if breakdown.buyer_interest >= 70.0 {
        reasons.push("Strong buyer interest predicted.");
    }

    if reasons.is_empty() {
        reasons.push("No major reasons flagged; keep account under current servicing.");
    }

    format!("Score {}: {}", final_score, reasons.join(" "))
}
