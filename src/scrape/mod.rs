//! Extraction stage: page fetching, per-entry parsing, catalog traversal
//!
//! The fetcher is the only transport boundary; the extractor and walker
//! never see a transport error, only absent content.

mod extract;
mod fetcher;
mod walker;

pub use extract::{extract_product, parse_page, ParsedPage};
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use walker::{page_url, walk, MAX_PAGES};
