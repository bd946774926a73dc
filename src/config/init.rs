use anyhow::{Context, Result};
use std::path::Path;

use crate::accounts;
use crate::config::Config;
use crate::scoring::ScoringConfig;

/// Write a starter config file and a three-account sample book.
///
/// Refuses to overwrite either file; point it at a clean location or remove
/// the old files first.
pub fn run_init(config_path: &Path, accounts_path: &Path) -> Result<()> {
    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }
    if accounts_path.exists() {
        anyhow::bail!("Accounts file already exists at {}", accounts_path.display());
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
        accounts_file: Some(accounts_path.to_path_buf()),
        history_file: None,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    std::fs::write(config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    accounts::save_accounts(accounts_path, &accounts::sample_book())?;

    println!("Config written to {}", config_path.display());
    println!("Sample accounts written to {}", accounts_path.display());
    println!("Run `book-scout rank` to see the sample book ranked.");

    Ok(())
}
