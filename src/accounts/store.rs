use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use rust_decimal_macros::dec;
use std::fs::File;
use std::path::Path;

use super::types::Account;

/// Load accounts from a JSON array file.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open accounts file at {}", path.display()))?;
    let accounts: Vec<Account> = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse accounts file at {}", path.display()))?;
    Ok(accounts)
}

/// Parse one account supplied inline as JSON. An inline payload must name
/// its account; an empty `account_id` is rejected.
pub fn parse_inline_account(input: &str) -> Result<Account> {
    let account: Account =
        serde_json::from_str(input).context("Failed to parse account JSON")?;
    if account.account_id.is_empty() {
        anyhow::bail!("Inline account JSON must include an account_id");
    }
    Ok(account)
}

/// Save accounts to disk as pretty-printed JSON, using an atomic write to
/// avoid corrupting the file on interrupted writes.
pub fn save_accounts(path: &Path, accounts: &[Account]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create accounts directory at {}", parent.display())
            })?;
        }
    }
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open accounts file for writing at {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, accounts).context("Failed to serialize accounts")?;
    file.commit()
        .with_context(|| format!("Failed to write accounts file at {}", path.display()))?;
    Ok(())
}

/// Keep only the accounts serviced by the given advisor (exact id match).
pub fn filter_by_advisor(accounts: Vec<Account>, advisor_id: &str) -> Vec<Account> {
    accounts
        .into_iter()
        .filter(|account| account.advisor_id == advisor_id)
        .collect()
}

/// Find a single account by id.
pub fn find_account<'a>(accounts: &'a [Account], account_id: &str) -> Option<&'a Account> {
    accounts.iter().find(|account| account.account_id == account_id)
}

/// Three-account starter book written by `init`: one small simple account,
/// one sizable complex one, and one tiny commission account.
pub fn sample_book() -> Vec<Account> {
    vec![
        Account {
            account_id: "A1".to_string(),
            advisor_id: "ADV1".to_string(),
            aum: dec!(120000),
            annual_revenue: dec!(1800),
            fee_type: "advisory".to_string(),
            meetings_per_year: 2,
            service_tickets_per_year: 1,
            age: 35,
            has_complex_holdings: false,
            region: "NE".to_string(),
        },
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
        },
        Account {
            account_id: "A3".to_string(),
            advisor_id: "ADV1".to_string(),
            aum: dec!(25000),
            annual_revenue: dec!(200),
            fee_type: "commission".to_string(),
            meetings_per_year: 1,
            service_tickets_per_year: 0,
            age: 28,
            has_complex_holdings: false,
            region: "TX".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_sample_book_shape() {
        let book = sample_book();
        assert_eq!(book.len(), 3);
        assert!(book.iter().all(|a| a.advisor_id == "ADV1"));
        assert_eq!(book[1].account_id, "A2");
        assert!(book[1].has_complex_holdings);
    }

    #[test]
    fn test_filter_by_advisor() {
        let mut book = sample_book();
        book[2].advisor_id = "ADV2".to_string();

        let filtered = filter_by_advisor(book.clone(), "ADV1");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|a| a.advisor_id == "ADV1"));

        let none = filter_by_advisor(book, "ADV9");
        assert!(none.is_empty());
    }

    #[test]
    fn test_find_account() {
        let book = sample_book();
        assert_eq!(find_account(&book, "A2").map(|a| a.age), Some(72));
        assert!(find_account(&book, "A9").is_none());
    }

    #[test]
    fn test_parse_inline_account() {
        let account = parse_inline_account(r#"{"account_id": "A7", "aum": 250000}"#).unwrap();
        assert_eq!(account.account_id, "A7");
        assert_eq!(account.aum, dec!(250000));
        // Omitted fields still fall back to their defaults
        assert_eq!(account.fee_type, "advisory");
    }

    #[test]
    fn test_parse_inline_account_requires_id() {
        let result = parse_inline_account("{}");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("account_id"));
    }

    #[test]
    fn test_parse_inline_account_rejects_bad_json() {
        assert!(parse_inline_account("not json").is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = env::temp_dir().join("book_scout_test_accounts.json");
        let _ = std::fs::remove_file(&path);

        let book = sample_book();
        save_accounts(&path, &book).unwrap();
        let loaded = load_accounts(&path).unwrap();
        assert_eq!(loaded, book);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let path = env::temp_dir().join("book_scout_test_no_such_accounts.json");
        let _ = std::fs::remove_file(&path);
        assert!(load_accounts(&path).is_err());
    }
}
