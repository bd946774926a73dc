use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::history::ScoreRecord;
use crate::scoring::{BuyerInterestLabel, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a final score, appending `*` when it clears the recommendation
/// threshold so the marker survives plain-text output.
pub fn format_score(score: u8, recommended: bool) -> String {
    if recommended {
        format!("{}*", score)
    } else {
        score.to_string()
    }
}

/// Detailed multi-line output for a single scored account (the `score`
/// command). Shows the previous persisted score when one exists.
pub fn format_result_detail(
    result: &ScoreResult,
    previous: Option<&ScoreRecord>,
    use_colors: bool,
) -> String {
    let b = &result.breakdown;
    let mut out = String::new();

    if use_colors {
        out.push_str(&format!("{}\n", result.account_id.bold()));
        out.push_str(&format!("  Score: {}\n", result.score.bold()));
    } else {
        out.push_str(&format!("{}\n", result.account_id));
        out.push_str(&format!("  Score: {}\n", result.score));
    }

    out.push_str(&format!("  Profitability: {:.1}\n", b.profitability));
    out.push_str(&format!("  Servicing: {:.1}\n", b.servicing));
    out.push_str(&format!("  Strategic fit: {:.1}\n", b.strategic_fit));
    out.push_str(&format!("  Compliance: {:.1}\n", b.compliance));

    let label = if use_colors {
        colorize_label(result.buyer_interest_label)
    } else {
        result.buyer_interest_label.to_string()
    };
    out.push_str(&format!(
        "  Buyer interest: {:.1} ({})\n",
        b.buyer_interest, label
    ));

    if let Some(prev) = previous {
        out.push_str(&format!(
            "  Previous score: {} ({})\n",
            prev.score,
            prev.recorded_at.format("%Y-%m-%d")
        ));
    }

    out.push_str(&format!("  {}", result.explanation));
    out
}

fn colorize_label(label: BuyerInterestLabel) -> String {
    match label {
        BuyerInterestLabel::High => label.green().to_string(),
        BuyerInterestLabel::Medium => label.yellow().to_string(),
        BuyerInterestLabel::Low => label.dimmed().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate the rationale to fit available width, accounting for Unicode
fn truncate_rationale(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// The rationale without its "Score N:" prefix; the table already has a
/// score column.
fn rationale(result: &ScoreResult) -> &str {
    result
        .explanation
        .split_once(": ")
        .map(|(_, reasons)| reasons)
        .unwrap_or(&result.explanation)
}

/// Format ranked results as a table with columns: Index, Score, Label,
/// Account, Rationale. No headers (minimal format); the index is 1-based
/// and scores at or above `threshold` carry the recommendation marker.
/// Score column: 4 chars (fits "100*"), right-aligned.
pub fn format_ranked_table(results: &[ScoreResult], threshold: u8, use_colors: bool) -> String {
    if results.is_empty() {
        return "No accounts found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 4;
    let label_width = 6; // fits "Medium"
    let separator = "  ";

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let recommended = result.score >= threshold;
            let score_str = format_score(result.score, recommended);
            let score_padded = format!("{:>width$}", score_str, width = score_width);
            let label_padded = format!(
                "{:<width$}",
                result.buyer_interest_label.as_str(),
                width = label_width
            );

            // Calculate available rationale width (accounting for the fixed columns)
            let fixed_width = index_width
                + 1
                + score_width
                + label_width
                + result.account_id.len()
                + separator.len() * 3;

            let reasons = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_rationale(rationale(result), width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_rationale(rationale(result), 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                rationale(result).to_string()
            };

            if use_colors {
                let score_cell = if recommended {
                    score_padded.green().bold().to_string()
                } else {
                    score_padded.bold().to_string()
                };
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_cell,
                    separator,
                    label_padded,
                    separator,
                    result.account_id.cyan(),
                    separator,
                    reasons
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str,
                    score_padded,
                    separator,
                    label_padded,
                    separator,
                    result.account_id,
                    separator,
                    reasons
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked results as tab-separated values for scripting
/// Columns: score, account_id, label, explanation (no headers, no colors,
/// no recommendation marker)
pub fn format_tsv(results: &[ScoreResult]) -> String {
    if results.is_empty() {
        return String::new();
    }

    results
        .iter()
        .map(|result| {
            format!(
                "{}\t{}\t{}\t{}",
                result.score,
                result.account_id,
                result.buyer_interest_label.as_str(),
                result.explanation
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
