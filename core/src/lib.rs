//! Handler Diff: compare per-node handler functions between two grammar
//! formatter sources.
//!
//! This crate provides functionality for:
//! - Extracting top-level `fn` signatures from source text
//! - Reporting signatures present on only one side (symmetric difference)
//! - Capturing handler bodies and computing line-level diffs between matched
//!   handlers
//! - Rendering the resulting report as plain text or JSON
//!
//! # Quick Start
//!
//! ```ignore
//! use handler_diff::{CompareConfig, SourceText, compare_sources};
//!
//! let a = SourceText::load("src/c_ast.rs")?;
//! let b = SourceText::load("src/cpp_ast.rs")?;
//! let report = compare_sources(&a, &b, &CompareConfig::default());
//!
//! for sig in &report.missing {
//!     println!("{}", sig);
//! }
//! ```

mod body;
mod config;
mod error;
mod line_diff;
mod matching;
mod output;
mod report;
mod set_diff;
mod signature;
mod source;

pub use body::{FunctionBody, extract_bodies};
pub use config::CompareConfig;
pub use error::CompareError;
pub use line_diff::{ChangeTag, DiffLine, diff_lines};
pub use matching::{find_body, match_signatures};
pub use output::json::serialize_report;
pub use report::{ComparisonReport, DiffEntry, compare_sources, write_report};
pub use set_diff::symmetric_diff;
pub use signature::{ExclusionSet, Signature, extract_signatures};
pub use source::SourceText;
