pub mod store;
pub mod types;

pub use store::{
    filter_by_advisor, find_account, load_accounts, parse_inline_account, sample_book,
    save_accounts,
};
pub use types::Account;
