//! Pagination module
//!
//! Two pieces cooperate here:
//!
//! - [`PageLinks`] parses the RFC 5988 `Link` response header and reports
//!   whether the server offered a next page.
//! - [`collect_all`] is the page walker: starting from a collection endpoint,
//!   it fetches page after page, following the server-supplied next URL
//!   verbatim, until no further page is indicated. Records from every page
//!   are concatenated in arrival order into one `Vec`.
//!
//! The walker is generic over the page wrapper via [`CollectionPage`], so one
//! loop serves every resource kind in the API.

mod link;
mod walker;

pub use link::PageLinks;
pub use walker::{collect_all, CollectionPage, WalkerConfig};
