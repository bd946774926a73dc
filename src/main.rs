use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use book_scout::accounts::Account;
use book_scout::scoring::ScoreResult;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_DATA: i32 = 2;

/// Cap on how many ranked results get written to history per run.
const HISTORY_PERSIST_LIMIT: usize = 20;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank accounts by sell-suitability (default if no subcommand)
    Rank {
        /// Only rank accounts serviced by this advisor id
        #[arg(long)]
        advisor: Option<String>,

        /// Keep only the top N results (0 = all)
        #[arg(long, default_value_t = 0)]
        top: usize,

        /// Tab-separated output for scripting
        #[arg(long, conflicts_with = "json")]
        tsv: bool,

        /// JSON output with full breakdowns
        #[arg(long)]
        json: bool,

        /// Read the account book as a JSON array from stdin
        #[arg(long)]
        stdin: bool,
    },
    /// Score a single account and show the full breakdown
    Score {
        /// Account id to look up in the accounts file
        #[arg(required_unless_present = "stdin")]
        account_id: Option<String>,

        /// Read one account as JSON from stdin instead
        #[arg(long)]
        stdin: bool,
    },
    /// List transition candidates at or above the recommendation threshold
    Recommend {
        /// Only consider accounts serviced by this advisor id
        #[arg(long)]
        advisor: Option<String>,
    },
    /// Write a starter config and sample accounts file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "book-scout")]
#[command(about = "Sell-suitability scoring for advisor books of business", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/book-scout/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the accounts JSON file (overrides the config file setting)
    #[arg(short, long, global = true)]
    accounts: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Rank {
        advisor: None,
        top: 0,
        tsv: false,
        json: false,
        stdin: false,
    });
    let start_time = Instant::now();

    let config_flag = cli.config.map(PathBuf::from);
    let accounts_flag = cli.accounts.map(PathBuf::from);

    // Init runs before config load; nothing is expected to exist yet
    if let Commands::Init = command {
        let config_path = config_flag.unwrap_or_else(book_scout::config::get_config_path);
        let accounts_path = accounts_flag.unwrap_or_else(|| PathBuf::from("accounts.json"));
        if let Err(e) = book_scout::config::run_init(&config_path, &accounts_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match book_scout::config::load_config(config_flag) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = book_scout::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let accounts_path = accounts_flag
        .or_else(|| config.accounts_file.clone())
        .unwrap_or_else(|| PathBuf::from("accounts.json"));
    let history_path = config
        .history_file
        .clone()
        .unwrap_or_else(book_scout::history::get_history_path);

    if cli.verbose {
        eprintln!("Accounts file: {}", accounts_path.display());
        eprintln!("History file: {}", history_path.display());
    }

    match command {
        Commands::Rank {
            advisor,
            top,
            tsv,
            json,
            stdin,
        } => {
            let accounts = match load_book(stdin, &accounts_path) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Accounts error: {}", e);
                    std::process::exit(EXIT_DATA);
                }
            };
            let accounts = match advisor {
                Some(ref advisor_id) => {
                    book_scout::accounts::filter_by_advisor(accounts, advisor_id)
                }
                None => accounts,
            };

            if cli.verbose {
                eprintln!("Ranking {} accounts", accounts.len());
            }

            let results = book_scout::scoring::rank_accounts(&accounts, top, &scoring);

            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {}", e);
                        std::process::exit(EXIT_DATA);
                    }
                }
            } else if tsv {
                println!("{}", book_scout::output::format_tsv(&results));
            } else {
                let use_colors = book_scout::output::should_use_colors();
                println!(
                    "{}",
                    book_scout::output::format_ranked_table(
                        &results,
                        scoring.recommendation_threshold,
                        use_colors
                    )
                );
            }

            persist_scores(&history_path, &results, cli.verbose);

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Ranked {} accounts in {:?}",
                    results.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Score { account_id, stdin } => {
            let account = if stdin {
                match read_account_from_stdin() {
                    Ok(a) => a,
                    Err(e) => {
                        eprintln!("Accounts error: {}", e);
                        std::process::exit(EXIT_DATA);
                    }
                }
            } else {
                let Some(ref id) = account_id else {
                    eprintln!("An account id is required unless --stdin is used.");
                    std::process::exit(EXIT_DATA);
                };
                let accounts = match book_scout::accounts::load_accounts(&accounts_path) {
                    Ok(a) => a,
                    Err(e) => {
                        eprintln!("Accounts error: {}", e);
                        std::process::exit(EXIT_DATA);
                    }
                };
                match book_scout::accounts::find_account(&accounts, id) {
                    Some(a) => a.clone(),
                    None => {
                        eprintln!("Account '{}' not found in {}", id, accounts_path.display());
                        std::process::exit(EXIT_DATA);
                    }
                }
            };

            let history = match book_scout::history::load_history(&history_path) {
                Ok(h) => Some(h),
                Err(e) => {
                    eprintln!("Warning: failed to load score history: {}", e);
                    None
                }
            };
            let previous = history
                .as_ref()
                .and_then(|h| h.last_record(&account.account_id))
                .cloned();

            let result = book_scout::scoring::score_account(&account, &scoring);
            let use_colors = book_scout::output::should_use_colors();
            println!(
                "{}",
                book_scout::output::format_result_detail(&result, previous.as_ref(), use_colors)
            );

            // An unreadable history file stays untouched
            if let Some(mut history) = history {
                history.record(result.account_id.clone(), result.score);
                if let Err(e) = book_scout::history::save_history(&history_path, &history) {
                    eprintln!("Warning: failed to save score history: {}", e);
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Scored {} in {:?}", account.short_ref(), start_time.elapsed());
            }
        }
        Commands::Recommend { advisor } => {
            let accounts = match book_scout::accounts::load_accounts(&accounts_path) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Accounts error: {}", e);
                    std::process::exit(EXIT_DATA);
                }
            };
            let accounts = match advisor {
                Some(ref advisor_id) => {
                    book_scout::accounts::filter_by_advisor(accounts, advisor_id)
                }
                None => accounts,
            };

            let results = book_scout::scoring::rank_accounts(&accounts, 0, &scoring);
            let candidates: Vec<ScoreResult> = results
                .into_iter()
                .filter(|r| r.score >= scoring.recommendation_threshold)
                .take(scoring.recommend_count)
                .collect();

            if candidates.is_empty() {
                println!(
                    "No transition candidates at or above threshold {}.",
                    scoring.recommendation_threshold
                );
            } else {
                let use_colors = book_scout::output::should_use_colors();
                println!(
                    "{}",
                    book_scout::output::format_ranked_table(
                        &candidates,
                        scoring.recommendation_threshold,
                        use_colors
                    )
                );
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Checked {} accounts in {:?}",
                    accounts.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Init => unreachable!(),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_book(from_stdin: bool, path: &Path) -> anyhow::Result<Vec<Account>> {
    if from_stdin {
        read_book_from_stdin()
    } else {
        book_scout::accounts::load_accounts(path)
    }
}

fn read_account_from_stdin() -> anyhow::Result<Account> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read account JSON from stdin")?;
    book_scout::accounts::parse_inline_account(&input)
}

fn read_book_from_stdin() -> anyhow::Result<Vec<Account>> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read accounts JSON from stdin")?;
    serde_json::from_str(&input).context("Failed to parse accounts JSON from stdin")
}

/// Best-effort persistence of the leading ranked scores. History problems
/// warn on stderr and never fail the run; an unreadable history file is
/// left untouched.
fn persist_scores(path: &Path, results: &[ScoreResult], verbose: bool) {
    let outcome = book_scout::history::update_history(path, |history| {
        for result in results.iter().take(HISTORY_PERSIST_LIMIT) {
            history.record(result.account_id.clone(), result.score);
        }
    });
    match outcome {
        Ok(()) => {
            if verbose {
                eprintln!(
                    "Persisted {} scores to {}",
                    results.len().min(HISTORY_PERSIST_LIMIT),
                    path.display()
                );
            }
        }
        Err(e) => eprintln!("Warning: failed to update score history: {}", e),
    }
}
