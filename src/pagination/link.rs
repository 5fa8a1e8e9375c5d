//! Link header parsing (RFC 5988)
//!
//! The API paginates its collections with a `Link` response header:
//! `Link: <https://api.example.com/...?page=2>; rel="next", <...>; rel="last"`.
//! Only the `next` relation drives the walker; everything else is ignored.

use reqwest::header::HeaderMap;

/// Pagination links extracted from one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// URL of the next page, absent when the collection is exhausted.
    pub next: Option<String>,
}

impl PageLinks {
    /// Parse pagination links from response headers.
    ///
    /// A missing or malformed `Link` header yields no links, which the
    /// walker treats as the end of the collection.
    pub fn parse(headers: &HeaderMap) -> Self {
        let next = headers
            .get("link")
            .and_then(|v| v.to_str().ok())
            .and_then(|header| parse_link_header(header, "next"));

        Self { next }
    }

    /// Check whether the server offered a further page.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Parse a Link header and extract the URL for the given rel
fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // Link header format: <url>; rel="next", <url>; rel="prev"
    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                let rel_value = stripped.trim_matches('"').trim_matches('\'');
                rel = Some(rel_value);
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r == target_rel {
                return Some(u.to_string());
            }
        }
    }

    None
}
