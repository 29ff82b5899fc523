//! Catalog walker
//!
//! Drives the page-by-page traversal: fetch a page, extract its entries,
//! move to the next page. The walk ends when a fetch comes back empty,
//! a page has no catalog entries, or the page counter passes the upper
//! bound. It always returns whatever records were collected.

use crate::scrape::extract::parse_page;
use crate::scrape::fetcher::PageFetcher;
use crate::transform::RawRecord;
use std::time::Duration;
use tracing::{info, warn};

/// Fixed upper bound on the page counter
pub const MAX_PAGES: u32 = 50;

/// Maps a page number to its URL
///
/// Pure function: page 1 is the bare base URL, every later page appends
/// `page{N}`.
pub fn page_url(base_url: &str, page: u32) -> String {
    if page == 1 {
        base_url.to_string()
    } else {
        format!("{}page{}", base_url, page)
    }
}

/// Walks the catalog from `start_page` to a terminal condition
///
/// Per-entry extraction faults are logged and skipped inside
/// [`parse_page`]; a transport fault ends the walk gracefully, keeping the
/// records collected so far. The inter-page delay is the only suspension
/// point in the pipeline.
pub async fn walk<F: PageFetcher>(
    fetcher: &F,
    base_url: &str,
    start_page: u32,
    delay: Duration,
) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut page = start_page;

    while page <= MAX_PAGES {
        let url = page_url(base_url, page);
        info!("Scraping page: {}", url);

        let Some(body) = fetcher.fetch(&url).await else {
            warn!("No content for page {}, stopping walk", page);
            break;
        };

        let parsed = parse_page(&body);
        if parsed.card_count == 0 {
            info!("No catalog entries on page {}, stopping walk", page);
            break;
        }

        info!(
            "Collected {} of {} entries from page {}",
            parsed.records.len(),
            parsed.card_count,
            page
        );
        records.extend(parsed.records);

        page += 1;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    if records.is_empty() {
        warn!("Walk finished without collecting any records");
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted fetcher: serves canned bodies keyed by URL, counting calls
    struct ScriptedFetcher {
        pages: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl ScriptedFetcher {
        fn new(pages: Vec<(&str, String)>) -> Self {
            Self {
                pages: pages
                    .into_iter()
                    .map(|(url, body)| (url.to_string(), body))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PageFetcher for ScriptedFetcher {
        async fn fetch(&self, url: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.pages.get(url).cloned()
        }
    }

    fn card(title: &str) -> String {
        format!(
            r#"<div class="collection-card">
                <h3 class="product-title">{}</h3>
                <span class="price">$10.00</span>
                <p>Rating: 4.0 / 5</p>
                <p>2 Colors</p>
                <p>Size: M</p>
                <p>Gender: Men</p>
            </div>"#,
            title
        )
    }

    #[test]
    fn test_page_url_mapping() {
        let base = "https://catalog.example.com/";
        assert_eq!(page_url(base, 1), "https://catalog.example.com/");
        assert_eq!(page_url(base, 2), "https://catalog.example.com/page2");
        assert_eq!(page_url(base, 50), "https://catalog.example.com/page50");
    }

    #[tokio::test]
    async fn test_walk_stops_when_fetch_returns_absence() {
        let base = "https://c.test/";
        let fetcher = ScriptedFetcher::new(vec![
            ("https://c.test/", card("A")),
            ("https://c.test/page2", card("B")),
            // page3 missing: fetch returns None
        ]);

        let records = walk(&fetcher, base, 1, Duration::ZERO).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title.as_deref(), Some("A"));
        assert_eq!(records[1].title.as_deref(), Some("B"));
        // pages 1, 2, and the failed attempt at 3
        assert_eq!(fetcher.call_count(), 3);
    }

    #[tokio::test]
    async fn test_walk_stops_on_page_without_entries() {
        let base = "https://c.test/";
        let fetcher = ScriptedFetcher::new(vec![
            ("https://c.test/", card("A")),
            ("https://c.test/page2", "<html><body>empty</body></html>".to_string()),
            ("https://c.test/page3", card("never reached")),
        ]);

        let records = walk(&fetcher, base, 1, Duration::ZERO).await;

        assert_eq!(records.len(), 1);
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_walk_start_page_beyond_bound_never_fetches() {
        let fetcher = ScriptedFetcher::new(vec![("https://c.test/", card("A"))]);

        let records = walk(&fetcher, "https://c.test/", 100, Duration::ZERO).await;

        assert!(records.is_empty());
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_walk_skips_broken_entries_without_aborting_page() {
        let broken = r#"<div class="collection-card"><p>only one paragraph</p></div>"#;
        let body = format!("{}{}", broken, card("Survivor"));
        let fetcher = ScriptedFetcher::new(vec![("https://c.test/", body)]);

        let records = walk(&fetcher, "https://c.test/", 1, Duration::ZERO).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Survivor"));
    }

    #[tokio::test]
    async fn test_walk_respects_start_page() {
        let fetcher = ScriptedFetcher::new(vec![
            ("https://c.test/", card("page one")),
            ("https://c.test/page2", card("page two")),
        ]);

        let records = walk(&fetcher, "https://c.test/", 2, Duration::ZERO).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("page two"));
    }
}
