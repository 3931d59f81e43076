//! Crawl driver for the meeting site
//!
//! This module contains the crawl pipeline:
//! - HTTP client construction and page fetching
//! - Session and abstract link discovery
//! - The coordinator that walks years, sessions, and abstracts in order,
//!   cross-validates, and persists records

mod coordinator;
mod fetcher;
mod links;

pub use coordinator::{run_harvest, Harvester};
pub use fetcher::{build_http_client, fetch_html};
pub use links::{abstract_links, session_links, AbstractLink};
