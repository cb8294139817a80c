//! The article source loader
//!
//! [`ArticleSource`] drives the whole extraction: it builds request URLs,
//! resolves how many pages to fetch from the API's reported hit count,
//! fetches and flattens articles page by page, and yields them to the
//! caller in fixed-size batches.
//!
//! Control flow is strictly sequential: one request at a time, one page
//! at a time. The batch stream is lazy: nothing is fetched until the
//! caller pulls the next batch.

mod types;

pub use types::{PageResponse, API_PAGE_SIZE, STATUS_OK};

use crate::config::LoaderConfig;
use crate::error::{Error, Result};
use crate::flatten::flatten;
use crate::http::{HttpClient, HttpClientConfig};
use crate::schema;
use crate::types::Batch;
use async_stream::try_stream;
use futures::Stream;
use std::time::Duration;
use tracing::{debug, warn};

/// A data loader for a paginated article search API
pub struct ArticleSource {
    config: LoaderConfig,
    client: HttpClient,
    /// Current page cursor. Advances as pages are consumed; reset only by
    /// reconstructing the source.
    page: u64,
    /// Resolved page count. Zero until [`resolve_page_count`] finds a hit
    /// count, and left unchanged when it does not.
    ///
    /// [`resolve_page_count`]: ArticleSource::resolve_page_count
    num_pages: u64,
}

impl ArticleSource {
    /// Create a new source from a validated configuration
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate()?;

        let mut builder =
            HttpClientConfig::builder().timeout(Duration::from_secs(config.timeout_seconds));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent);
        }
        let client = HttpClient::with_config(builder.build());

        Ok(Self {
            config,
            client,
            page: 0,
            num_pages: 0,
        })
    }

    /// Get the loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Validate a connection request.
    ///
    /// Requesting incremental loading fails unconditionally: the source
    /// only supports full extraction.
    pub fn connect(&self, incremental_column: Option<&str>) -> Result<()> {
        debug!(incremental_column, "connect requested");
        if let Some(column) = incremental_column {
            return Err(Error::incremental(column));
        }
        Ok(())
    }

    /// Disconnect from the source. Nothing to release.
    pub fn disconnect(&self) {}

    /// Build the request URL for the current page cursor.
    ///
    /// The query is embedded verbatim; no percent-encoding is applied to
    /// any parameter.
    pub fn request_url(&self) -> String {
        format!(
            "{}{}?api-key={}&q={}&page={}",
            self.config.base_url,
            self.config.response_format,
            self.config.api_key,
            self.config.query,
            self.page
        )
    }

    /// Resolve the number of pages to fetch from the API's hit count.
    ///
    /// Issues one request at the current page cursor and reads
    /// `response.meta.hits`. The count resolves to
    /// `ceil(hits / page_size) - 1`, clamped to the configured page
    /// limit; a trailing partial page still counts toward it. When the
    /// field is absent the page count keeps its previous value, so a
    /// fresh source resolves zero pages; callers cannot distinguish
    /// "no data" from "field missing".
    pub async fn resolve_page_count(&mut self) -> Result<()> {
        let url = self.request_url();
        let response: PageResponse = self.client.get_json(&url).await?;

        let Some(hits) = response.hits() else {
            debug!(num_pages = self.num_pages, "hit count missing, keeping page count");
            return Ok(());
        };

        self.num_pages = hits
            .div_ceil(API_PAGE_SIZE)
            .saturating_sub(1)
            .min(self.config.page_limit);
        debug!(hits, num_pages = self.num_pages, "resolved page count");
        Ok(())
    }

    /// Stream flattened articles in batches of `batch_size`.
    ///
    /// Each call produces a fresh stream; the page cursor lives on the
    /// source instance. For every resolved page the articles are
    /// flattened and accumulated, a full batch is yielded whenever the
    /// accumulator reaches `batch_size`, and a non-empty remainder is
    /// flushed at the page boundary. The last batch of a page may be
    /// shorter than `batch_size`, but is never empty.
    ///
    /// A page whose status is not [`STATUS_OK`] or whose article array is
    /// missing is skipped entirely: it contributes no records and no
    /// error, only a warning event. Transport failures and malformed JSON
    /// end the stream with an `Err` item.
    pub fn batches(&mut self, batch_size: usize) -> impl Stream<Item = Result<Batch>> + '_ {
        try_stream! {
            self.resolve_page_count().await?;

            while self.page < self.num_pages {
                let url = self.request_url();
                debug!(page = self.page, "fetching page");
                let response: PageResponse = self.client.get_json(&url).await?;

                if !response.is_ok() {
                    warn!(
                        page = self.page,
                        status = response.status().unwrap_or("<missing>"),
                        "skipping page with unexpected status"
                    );
                    self.page += 1;
                    continue;
                }

                let Some(docs) = response.docs() else {
                    warn!(page = self.page, "skipping page without docs");
                    self.page += 1;
                    continue;
                };

                let mut batch = Batch::new();
                for article in docs {
                    let Some(fields) = article.as_object() else {
                        warn!(page = self.page, "skipping non-object article");
                        continue;
                    };
                    batch.push(flatten(fields));
                    if batch.len() >= batch_size {
                        yield std::mem::take(&mut batch);
                    }
                }

                // Flush the page's partial remainder before advancing
                if !batch.is_empty() {
                    yield batch;
                }

                self.page += 1;
            }
        }
    }

    /// The expected field paths of a flattened article record.
    ///
    /// A static, hand-authored contract, not derived from data and not
    /// authoritative for every record.
    pub fn schema(&self) -> &'static [&'static str] {
        schema::article_fields()
    }
}

impl std::fmt::Debug for ArticleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleSource")
            .field("config", &self.config)
            .field("page", &self.page)
            .field("num_pages", &self.num_pages)
            .finish_non_exhaustive()
    }
}
