//! Publisher URLs and request descriptions.

use chrono::NaiveDate;

use crate::decode::DATE_FORMAT;

/// Default publisher host.
pub const DEFAULT_BASE_URL: &str = "https://www.nytimes.com";

/// Header the daily crossword endpoint requires.
pub const AUTH_BYPASS_HEADER: (&str, &str) = ("x-games-auth-bypass", "true");

/// A single GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Absolute URL.
    pub url: String,
    /// Extra headers sent with the request.
    pub headers: Vec<(&'static str, &'static str)>,
}

impl Request {
    /// Plain GET without extra headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Add a header to the request.
    pub fn with_header(mut self, header: (&'static str, &'static str)) -> Self {
        self.headers.push(header);
        self
    }
}

/// URL builder rooted at the publisher host.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    /// Build endpoints for the given host, e.g. `https://www.nytimes.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Host the endpoints point at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Versioned date-addressed service URL: `<host>/svc/<slug>/v<version>/<yyyy-MM-dd>.json`.
    pub fn svc(&self, slug: &str, version: u32, date: NaiveDate) -> String {
        format!(
            "{}/svc/{slug}/v{version}/{}.json",
            self.base_url,
            date.format(DATE_FORMAT)
        )
    }

    /// Sports Edition connections asset for a date.
    pub fn sports_connections(&self, date: NaiveDate) -> String {
        format!(
            "{}/games-assets/sports-connections/{}.json",
            self.base_url,
            date.format(DATE_FORMAT)
        )
    }

    /// Crossword puzzle endpoint for a named puzzle (`mini`, `daily`).
    pub fn crossword(&self, puzzle: &str) -> String {
        format!("{}/svc/crosswords/v6/puzzle/{puzzle}.json", self.base_url)
    }

    /// Rendered puzzle page, e.g. `letter-boxed`.
    pub fn page(&self, name: &str) -> String {
        format!("{}/puzzles/{name}", self.base_url)
    }
}
