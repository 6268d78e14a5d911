//! Detailed output formatting for a single APR report.

use colored::Colorize;

use super::report::AprReport;
use super::table::format_apr;

pub fn format_apr_detail(report: &AprReport) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", format!("{}", report.vault).bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    output.push_str(&format!("{}\n", "Staking APR".cyan().bold()));
    output.push_str(&format!("  Chain:  {}\n", report.chain));
    if report.valid {
        output.push_str(&format!("  APR:    {}\n", format_apr(report.apr).green()));
    } else {
        output.push_str(&format!("  APR:    {}\n", "-".dimmed()));
    }
    output.push_str(&format!("  Valid:  {}\n", if report.valid { "Yes" } else { "No" }));
    output.push_str(&format!("  Status: {}\n", report.status));

    if let (Some(rate), Some(supply), Some(per_token)) =
        (report.reward_rate, report.total_supply, report.per_token_rate)
    {
        output.push_str(&format!("\n{}\n", "Pool".cyan().bold()));
        output.push_str(&format!("  Reward Rate:    {} / s\n", rate));
        output.push_str(&format!("  Total Staked:   {}\n", supply));
        output.push_str(&format!("  Per-Token Rate: {} / s\n", per_token));
    }

    if let (Some(reward), Some(vault)) = (report.reward_price, report.vault_price) {
        output.push_str(&format!("\n{}\n", "Prices (USD)".cyan().bold()));
        output.push_str(&format!("  Reward Token: ${}\n", reward));
        output.push_str(&format!("  Vault Token:  ${}\n", vault));
    }

    output
}
