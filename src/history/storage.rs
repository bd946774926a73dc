use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// On-disk record of the most recent score per account.
///
/// Persistence is best-effort: callers warn and carry on when a write
/// fails, so a broken history file never blocks scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreHistory {
    pub version: u32,
    #[serde(default)]
    pub scores: HashMap<String, ScoreRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u8,
    pub recorded_at: DateTime<Utc>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self {
            version: 1,
            scores: HashMap::new(),
        }
    }

    /// Record the latest score for an account, replacing any earlier one.
    pub fn record(&mut self, account_id: String, score: u8) {
        self.scores.insert(
            account_id,
            ScoreRecord {
                score,
                recorded_at: Utc::now(),
            },
        );
    }

    pub fn last_record(&self, account_id: &str) -> Option<&ScoreRecord> {
        self.scores.get(account_id)
    }
}

impl Default for ScoreHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the default history file path (~/.config/book-scout/history.json)
pub fn get_history_path() -> PathBuf {
    crate::config::get_config_dir().join("history.json")
}

/// Load score history from a JSON file
///
/// If the file doesn't exist, returns a new empty history.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_history(path: &Path) -> Result<ScoreHistory> {
    if !path.exists() {
        return Ok(ScoreHistory::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open history file at {}", path.display()))?;

    let history: ScoreHistory =
        serde_json::from_reader(file).context("Failed to load score history")?;

    // Version check
    if history.version != 1 {
        anyhow::bail!("Unsupported history version: {}", history.version);
    }

    Ok(history)
}

/// Load the history at `path`, apply `apply`, and save the result
/// atomically. A file that exists but cannot be loaded (corrupt, or written
/// by a newer version) is left untouched and the load error is returned.
pub fn update_history<F>(path: &Path, apply: F) -> Result<()>
where
    F: FnOnce(&mut ScoreHistory),
{
    let mut history = load_history(path)?;
    apply(&mut history);
    save_history(path, &history)
}

/// Save score history to a JSON file atomically
///
/// Uses atomic-write-file so the file is never left half-written. Creates
/// the parent directory if it doesn't exist.
pub fn save_history(path: &Path, history: &ScoreHistory) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, history).context("Failed to serialize score history")?;

    file.commit().context("Failed to save score history")?;

    Ok(())
}
