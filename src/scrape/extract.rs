//! Per-entry record extraction
//!
//! Parses one catalog page into `collection-card` fragments and each
//! fragment into a raw record. A structurally broken card is logged and
//! skipped; it never aborts the page.

use crate::transform::{RawRecord, PRICE_UNAVAILABLE, TIMESTAMP_FORMAT};
use chrono::Local;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Result of parsing one catalog page
///
/// `card_count` is the number of entry fragments found, including ones
/// whose extraction failed; the walker stops on a page with zero cards,
/// not on a page whose cards were all malformed.
#[derive(Debug, Default)]
pub struct ParsedPage {
    pub card_count: usize,
    pub records: Vec<RawRecord>,
}

/// Parses a catalog page body into raw records
pub fn parse_page(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    let Ok(card_selector) = Selector::parse("div.collection-card") else {
        return ParsedPage::default();
    };

    let cards: Vec<ElementRef> = document.select(&card_selector).collect();
    let card_count = cards.len();

    let records = cards
        .into_iter()
        .filter_map(extract_product)
        .collect();

    ParsedPage {
        card_count,
        records,
    }
}

/// Extracts one catalog-entry fragment into a raw record
///
/// Title is mandatory; a missing title or missing positional paragraph is
/// a structural failure for the whole record (`None`, after a diagnostic).
/// A missing price maps to the literal sentinel so the price normalizer
/// applies its rule uniformly downstream.
pub fn extract_product(card: ElementRef) -> Option<RawRecord> {
    let title_selector = Selector::parse("h3.product-title").ok()?;
    let price_selector = Selector::parse("span.price").ok()?;
    let paragraph_selector = Selector::parse("p").ok()?;

    let title = match card.select(&title_selector).next() {
        Some(element) => element_text(element),
        None => {
            warn!("Skipping catalog entry: missing product title");
            return None;
        }
    };

    let price = card
        .select(&price_selector)
        .next()
        .map(element_text)
        .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string());

    let paragraphs: Vec<String> = card.select(&paragraph_selector).map(element_text).collect();
    if paragraphs.len() < 4 {
        warn!(
            "Skipping catalog entry '{}': expected 4 detail paragraphs, found {}",
            title,
            paragraphs.len()
        );
        return None;
    }

    // Positional order: 0=rating, 1=color, 2=size, 3=gender
    let rating = strip_rating_label(&paragraphs[0]);
    let color = paragraphs[1].clone();
    let size = paragraphs[2].replace("Size:", "");
    let gender = paragraphs[3].replace("Gender:", "");

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

    Some(RawRecord {
        title: Some(title),
        price: Some(price),
        rating: Some(rating),
        color: Some(color),
        size: Some(size),
        gender: Some(gender),
        timestamp: Some(timestamp),
    })
}

/// Strips the "Rating:" label and star glyph, keeping the text before the
/// first "/" (the rating normalizer parses the remainder)
fn strip_rating_label(text: &str) -> String {
    let cleaned = text.replace("Rating:", "").replace('⭐', "");
    cleaned
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
