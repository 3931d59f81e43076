//! Persistence and post-crawl audit
//!
//! Records land as one flat six-line text file per abstract, under
//! `<root>/<year>/<identifier>`. After the crawl, the audit re-parses the
//! whole tree and asserts every record invariant; it repairs nothing.

mod audit;
mod store;

pub use audit::{audit_tree, AuditReport};
pub use store::AbstractStore;
