//! Bulk issue creation: parse a templated ISSUES.md into ticket records
//! and post them to a code-hosting REST API, one by one, best-effort.

pub mod client;
pub mod parser;

pub use client::{CreateSummary, IssueClient};
pub use parser::{parse_issues, parse_issues_file, IssueSpec};
