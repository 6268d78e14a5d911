//! Output formatting for CLI results.

pub mod detail;
pub mod report;
pub mod table;

pub use detail::format_apr_detail;
pub use report::AprReport;
pub use table::format_apr_table;
