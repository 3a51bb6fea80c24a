use std::time::Duration;

use kuchiki::NodeRef;
use kuchiki::traits::*;
use url::Url;

use jibiki_extract::DictionaryEntry;

use crate::error::FetchError;

const DEFAULT_BASE_URL: &str = "https://www.weblio.jp/content/";
const HEAD_SELECTOR: &str = "div.NetDicHead";
const BODY_SELECTOR: &str = "div.NetDicBody";

/// Client for Weblio content pages.
#[derive(Clone)]
pub struct WeblioClient {
    base_url: String,
    client: reqwest::Client,
}

impl WeblioClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Client with a per-request timeout applied.
    pub fn with_options(base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// Content page URL for one word, percent-encoded as a path segment.
    fn word_url(&self, word: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    /// Fetch the raw document for one word.
    pub async fn fetch_document(&self, word: &str) -> Result<String, FetchError> {
        let url = self.word_url(word)?;
        tracing::debug!("fetching definition page: {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }

    /// Build one entry per NetDicHead/NetDicBody pair in the document,
    /// zipped pairwise in document order. A page without a single pair is an
    /// error; everything below that degrades inside the extraction itself.
    pub fn parse_entries(
        &self,
        word: &str,
        html: &str,
    ) -> Result<Vec<DictionaryEntry>, FetchError> {
        let document = kuchiki::parse_html().one(html.to_string());
        let heads = collect(&document, HEAD_SELECTOR);
        let bodies = collect(&document, BODY_SELECTOR);
        if heads.is_empty() || bodies.is_empty() {
            return Err(FetchError::NoEntries {
                word: word.to_string(),
            });
        }
        Ok(heads
            .iter()
            .zip(bodies.iter())
            .map(|(head, body)| DictionaryEntry::build(word, head, body))
            .collect())
    }

    /// Fetch and extract all entries for one word.
    pub async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, FetchError> {
        let html = self.fetch_document(word).await?;
        let entries = self.parse_entries(word, &html)?;
        tracing::info!("extracted {} entries for {}", entries.len(), word);
        Ok(entries)
    }

    /// Look up several words concurrently, one fetch per word. The output
    /// has exactly one element per input word, in input order. A task that
    /// dies still yields its word, paired with a `TaskFailed` error.
    pub async fn lookup_all(
        &self,
        words: &[String],
    ) -> Vec<(String, Result<Vec<DictionaryEntry>, FetchError>)> {
        let mut tasks = Vec::with_capacity(words.len());
        for word in words {
            let client = self.clone();
            let lookup_word = word.clone();
            tasks.push((
                word.clone(),
                tokio::spawn(async move { client.lookup(&lookup_word).await }),
            ));
        }

        let mut results = Vec::with_capacity(tasks.len());
        for (word, task) in tasks {
            let result = match task.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("lookup task for {} panicked: {}", word, e);
                    Err(FetchError::TaskFailed(e.to_string()))
                }
            };
            results.push((word, result));
        }
        results
    }
}

impl Default for WeblioClient {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(document: &NodeRef, selector: &str) -> Vec<NodeRef> {
    document
        .select(selector)
        .map(|hits| hits.map(|hit| hit.as_node().clone()).collect())
        .unwrap_or_default()
}
