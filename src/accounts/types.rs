use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A client account as it appears in the accounts file.
///
/// Monetary amounts are decimals, not floats, so values read from JSON keep
/// their exact magnitude through normalization. Every field is optional in
/// the file; anything missing falls back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub account_id: String,
    /// Id of the advisor who currently services this account
    pub advisor_id: String,
    /// Assets under management, in dollars
    pub aum: Decimal,
    /// Trailing twelve-month revenue, in dollars
    pub annual_revenue: Decimal,
    /// Fee arrangement label, e.g. "advisory" or "commission". Unrecognized
    /// labels are tolerated and simply treated as non-advisory.
    pub fee_type: String,
    pub meetings_per_year: u32,
    pub service_tickets_per_year: u32,
    /// Client age in years
    pub age: u32,
    pub has_complex_holdings: bool,
    pub region: String,
}

impl Account {
    /// True when the account bills advisory fees. The label match is
    /// case-insensitive; anything else counts as non-advisory.
    pub fn is_advisory(&self) -> bool {
        self.fee_type.eq_ignore_ascii_case("advisory")
    }

    /// Short reference like "ADV1/A2" for log lines
    pub fn short_ref(&self) -> String {
        format!("{}/{}", self.advisor_id, self.account_id)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            advisor_id: String::new(),
            aum: Decimal::ZERO,
            annual_revenue: Decimal::ZERO,
            fee_type: "advisory".to_string(),
            meetings_per_year: 0,
            service_tickets_per_year: 0,
            age: 0,
            has_complex_holdings: false,
            region: "unknown".to_string(),
        }
    }
}
