//! Harvest coordinator - main crawl orchestration logic
//!
//! Walks years (outer), sessions within a year (middle), and abstracts
//! within a session (inner), strictly in sequence: one fetch in flight at
//! a time, each consumed before the next begins. Cross-checks every
//! abstract page against its session's already-extracted fields and
//! persists the richer record, degrading to the session-derived one when
//! the abstract page itself is structurally broken.

use crate::config::{Config, MeetingEntry};
use crate::crawler::fetcher::{build_http_client, fetch_html};
use crate::crawler::links::{abstract_links, session_links, AbstractLink};
use crate::extract::{extract_abstract, extract_session};
use crate::output::AbstractStore;
use crate::record::{AbstractRecord, SessionContext};
use crate::{HarvestError, Result};
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Main harvester structure
pub struct Harvester {
    config: Config,
    client: Client,
    store: AbstractStore,
}

impl Harvester {
    /// Creates a new harvester for the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client()?;
        let store = AbstractStore::new(&config.output.root_dir);
        Ok(Self {
            config,
            client,
            store,
        })
    }

    /// Runs the full crawl across every configured meeting
    ///
    /// Meetings are visited in ascending year order. The first unhandled
    /// error aborts the whole run; there is no per-item isolation beyond
    /// the degraded-record fallback.
    pub async fn run(&self) -> Result<()> {
        let start_time = std::time::Instant::now();
        let mut saved = 0usize;

        let mut meetings = self.config.meetings.clone();
        meetings.sort_by_key(|meeting| meeting.year);

        for meeting in &meetings {
            saved += self.harvest_meeting(meeting).await?;
        }

        tracing::info!(
            "Harvest completed: {} abstracts from {} meetings in {:?}",
            saved,
            meetings.len(),
            start_time.elapsed()
        );

        Ok(())
    }

    /// Harvests one meeting: epitome page, then every session on it
    async fn harvest_meeting(&self, meeting: &MeetingEntry) -> Result<usize> {
        let epitome_url = self.config.epitome_url(&meeting.code)?;
        tracing::info!("Meeting {} ({})", meeting.year, meeting.code);

        let body = fetch_html(&self.client, &epitome_url).await?;
        let sessions = {
            let document = Html::parse_document(&body);
            session_links(&document, &epitome_url)
        };
        tracing::info!("Discovered {} session pages", sessions.len());

        let mut saved = 0;
        for session_url in &sessions {
            saved += self.harvest_session(meeting, session_url).await?;
        }
        Ok(saved)
    }

    /// Harvests one session: context extraction, then every abstract on it
    async fn harvest_session(&self, meeting: &MeetingEntry, session_url: &Url) -> Result<usize> {
        let body = fetch_html(&self.client, session_url).await?;

        let (context, links) = {
            let document = Html::parse_document(&body);
            let context =
                extract_session(&document).map_err(|source| HarvestError::Extract {
                    url: session_url.to_string(),
                    source,
                })?;
            let links =
                abstract_links(&document, session_url).map_err(|source| HarvestError::Extract {
                    url: session_url.to_string(),
                    source,
                })?;
            (context, links)
        };

        tracing::info!(
            "{} on {}: {} abstracts",
            context.name.trim(),
            context.date,
            links.len()
        );

        for link in &links {
            self.harvest_abstract(meeting, &context, link).await?;
        }
        Ok(links.len())
    }

    /// Harvests one abstract
    ///
    /// The session-derived degraded record is built first (a pure function
    /// of context + link), then the abstract's own page is extracted
    /// independently. The two must agree on date, identifier, and session
    /// before the richer page-derived record is persisted. A structural
    /// extraction failure on the abstract page degrades to the
    /// session-derived record; any other failure aborts the run.
    async fn harvest_abstract(
        &self,
        meeting: &MeetingEntry,
        context: &SessionContext,
        link: &AbstractLink,
    ) -> Result<()> {
        let degraded = context.degraded_record(&link.identifier, &link.title);

        let body = fetch_html(&self.client, &link.url).await?;
        let extracted = {
            let document = Html::parse_document(&body);
            extract_abstract(&document)
        };

        match extracted {
            Ok(record) => {
                cross_validate(&degraded, &record, &link.url)?;
                let path = self.store.save(meeting.year, &record)?;
                tracing::debug!("Saved {}", path.display());
            }
            Err(e) => {
                tracing::warn!(
                    "Abstract page {} failed extraction ({}); persisting session-derived record",
                    link.url,
                    e
                );
                let path = self.store.save(meeting.year, &degraded)?;
                tracing::debug!("Saved degraded {}", path.display());
            }
        }

        Ok(())
    }
}

/// Asserts field-for-field agreement between the session-derived and
/// abstract-derived records
///
/// Both extractions succeeded here, so a mismatch is a layout-assumption
/// violation and fatal for the whole run.
fn cross_validate(expected: &AbstractRecord, found: &AbstractRecord, url: &Url) -> Result<()> {
    let checks = [
        ("date", &expected.date, &found.date),
        ("identifier", &expected.identifier, &found.identifier),
        ("session", &expected.session, &found.session),
    ];

    for (field, expected, found) in checks {
        if expected != found {
            return Err(HarvestError::Validation {
                url: url.to_string(),
                field,
                expected: expected.clone(),
                found: found.clone(),
            });
        }
    }

    Ok(())
}

/// Runs the full harvest for a configuration
pub async fn run_harvest(config: Config) -> Result<()> {
    Harvester::new(config)?.run().await
}
