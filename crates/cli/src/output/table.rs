//! Table formatting for APR reports.

use rust_decimal::Decimal;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::report::AprReport;

#[derive(Tabled)]
struct AprRow {
    #[tabled(rename = "Vault")]
    vault: String,
    #[tabled(rename = "Chain")]
    chain: u64,
    #[tabled(rename = "APR")]
    apr: String,
    #[tabled(rename = "Valid")]
    valid: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub(crate) fn truncate_address(addr: &str) -> String {
    if addr.len() > 10 {
        format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
    } else {
        addr.to_string()
    }
}

pub(crate) fn format_apr(apr: Decimal) -> String {
    format!("{:.2}%", apr * Decimal::ONE_HUNDRED)
}

pub fn format_apr_table(reports: &[AprReport]) -> String {
    if reports.is_empty() {
        return "No vaults found.".to_string();
    }

    let rows: Vec<AprRow> = reports
        .iter()
        .map(|r| AprRow {
            vault: truncate_address(&format!("{}", r.vault)),
            chain: r.chain,
            apr: if r.valid {
                format_apr(r.apr)
            } else {
                "-".to_string()
            },
            valid: if r.valid { "Yes" } else { "No" }.to_string(),
            status: r.status.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}
