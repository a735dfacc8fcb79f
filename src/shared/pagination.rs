//! Limit/Offset Pagination
//!
//! Listing endpoints that support pagination return a plain JSON array unless
//! the client asks for a page with `?limit=`. A page carries the total count
//! and links to the neighbouring pages:
//!
//! ```json
//! {
//!   "count": 123,
//!   "next": "http://host/api/v1/posts/?limit=10&offset=20",
//!   "previous": "http://host/api/v1/posts/?limit=10",
//!   "results": []
//! }
//! ```
//!
//! Query parsing is lenient: an unusable `limit` disables pagination and an
//! unusable `offset` means the first page. Query strings are decoded and
//! re-encoded as `application/x-www-form-urlencoded`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const LIMIT_PARAM: &str = "limit";
pub const OFFSET_PARAM: &str = "offset";

/// A requested page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    /// Maximum number of items on the page, always positive
    pub limit: i64,
    /// Number of items skipped, never negative
    pub offset: i64,
}

impl LimitOffset {
    /// Read the window from a raw query string
    ///
    /// Returns `None` when no valid `limit` is present, in which case the
    /// listing is not paginated.
    pub fn from_query(query: Option<&str>) -> Option<Self> {
        let pairs = query_pairs(query.unwrap_or_default());
        let limit = last_value(&pairs, LIMIT_PARAM).and_then(|v| parse_count(v, true))?;
        let offset = last_value(&pairs, OFFSET_PARAM)
            .and_then(|v| parse_count(v, false))
            .unwrap_or(0);
        Some(Self { limit, offset })
    }

    /// Link to the next page, if any items remain after this one
    pub fn next_link(&self, url: &RequestUrl, count: i64) -> Option<String> {
        let next_offset = self.offset.saturating_add(self.limit);
        if next_offset >= count {
            return None;
        }
        Some(url.with_params(
            &[
                (LIMIT_PARAM, self.limit.to_string()),
                (OFFSET_PARAM, next_offset.to_string()),
            ],
            &[],
        ))
    }

    /// Link to the previous page, if this is not the first one
    pub fn previous_link(&self, url: &RequestUrl) -> Option<String> {
        if self.offset <= 0 {
            return None;
        }
        let limit = (LIMIT_PARAM, self.limit.to_string());
        if self.offset - self.limit <= 0 {
            return Some(url.with_params(&[limit], &[OFFSET_PARAM]));
        }
        Some(url.with_params(
            &[limit, (OFFSET_PARAM, (self.offset - self.limit).to_string())],
            &[],
        ))
    }

    /// Build the page for `results`, taken from a listing of `count` items
    pub fn page<T>(&self, url: &RequestUrl, count: i64, results: Vec<T>) -> Page<T> {
        Page {
            count,
            next: self.next_link(url, count),
            previous: self.previous_link(url),
            results,
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A listing response: a bare array, or a page when pagination was requested
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

/// The URL a listing was requested at, used to derive page links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    base: String,
    query: Option<String>,
}

impl RequestUrl {
    /// `base` is everything before `?`, `query` everything after it
    pub fn new(base: impl Into<String>, query: Option<String>) -> Self {
        Self {
            base: base.into(),
            query,
        }
    }

    /// Absolute URL when the host is known, path-relative otherwise
    pub fn from_parts(host: Option<&str>, path: &str, query: Option<String>) -> Self {
        let base = match host {
            Some(host) => format!("http://{host}{path}"),
            None => path.to_string(),
        };
        Self::new(base, query)
    }

    /// Rebuild the URL with some parameters replaced and others removed
    ///
    /// Parameters come out sorted by name, repeated ones in their original
    /// order.
    pub fn with_params(&self, set: &[(&str, String)], remove: &[&str]) -> String {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in query_pairs(self.query.as_deref().unwrap_or_default()) {
            params.entry(key).or_default().push(value);
        }
        for (key, value) in set {
            params.insert(key.to_string(), vec![value.clone()]);
        }
        for key in remove {
            params.remove(*key);
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &params {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        let query = serializer.finish();

        if query.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{}", self.base, query)
        }
    }
}

/// Decoded `(key, value)` pairs in request order
fn query_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// The value of the last occurrence of `key`
fn last_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
}

fn parse_count(value: &str, strict: bool) -> Option<i64> {
    let parsed: i64 = value.trim().parse().ok()?;
    if parsed < 0 || (strict && parsed == 0) {
        return None;
    }
    Some(parsed)
}
