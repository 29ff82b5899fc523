//! Field normalizers
//!
//! Each normalizer converts one raw string field into a typed value or an
//! explicit absence. Malformed input always yields `None`; nothing here
//! panics or returns an error.

use regex::Regex;
use std::sync::OnceLock;

/// Default USD conversion rate applied to prices
pub const DEFAULT_EXCHANGE_RATE: f64 = 16000.0;

/// Sentinel emitted by the extractor when a catalog entry has no price
pub const PRICE_UNAVAILABLE: &str = "Price Unavailable";

/// Converts a `$`-prefixed USD price into the output currency
///
/// Valid input starts with `$` followed by a parseable decimal. The
/// sentinel, text without the `$` marker, and unparsable amounts are all
/// absence. One-way conversion: must not be re-applied to its own output.
pub fn clean_price(price: Option<&str>, exchange_rate: f64) -> Option<f64> {
    let price = price?;

    if price == PRICE_UNAVAILABLE {
        return None;
    }

    let amount = price.strip_prefix('$')?.trim();
    let usd: f64 = amount.parse().ok()?;

    Some(usd * exchange_rate)
}

/// Parses a rating into a decimal value
///
/// Strips the decorative star glyph, takes the portion before the first
/// `/` (e.g. "4.8 / 5" → 4.8), and rejects the known invalid sentinels.
pub fn clean_rating(rating: Option<&str>) -> Option<f64> {
    let rating = rating?;

    if rating == PRICE_UNAVAILABLE
        || rating.contains("Invalid Rating")
        || rating.contains("Not Rated")
    {
        return None;
    }

    let mut text = rating.replace('⭐', "");
    if let Some(slash) = text.find('/') {
        text.truncate(slash);
    }

    text.trim().parse().ok()
}

/// Extracts the leading integer from "<N> Color" / "<N> Colors"
pub fn clean_colors(colors: Option<&str>) -> Option<i64> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"(\d+)\s*Colors?").unwrap());

    let colors = colors?;
    let captures = pattern.captures(colors)?;

    captures[1].parse().ok()
}

/// Strips a literal "Size:" prefix and surrounding whitespace
///
/// Idempotent: re-applying to its own output returns the same value.
pub fn clean_size(size: Option<&str>) -> Option<String> {
    Some(strip_label(size?, "Size:"))
}

/// Strips a literal "Gender:" prefix and surrounding whitespace
///
/// Idempotent: re-applying to its own output returns the same value.
pub fn clean_gender(gender: Option<&str>) -> Option<String> {
    Some(strip_label(gender?, "Gender:"))
}

/// Removes every leading occurrence of `label` plus surrounding whitespace,
/// so the result never starts with the label again
fn strip_label(text: &str, label: &str) -> String {
    let mut value = text.trim();
    while let Some(rest) = value.strip_prefix(label) {
        value = rest.trim_start();
    }
    value.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(text: &str) -> Option<f64> {
        clean_price(Some(text), DEFAULT_EXCHANGE_RATE)
    }

    #[test]
    fn test_clean_price_converts_dollars() {
        assert_eq!(price("$100.00"), Some(1_600_000.0));
        assert_eq!(price("$0.00"), Some(0.0));
        assert_eq!(price("$10.00"), Some(160_000.0));
    }

    #[test]
    fn test_clean_price_sentinel_is_absent() {
        assert_eq!(price("Price Unavailable"), None);
    }

    #[test]
    fn test_clean_price_requires_dollar_marker() {
        assert_eq!(price("100.00"), None);
        assert_eq!(price("Rp100"), None);
        assert_eq!(price("free"), None);
    }

    #[test]
    fn test_clean_price_unparsable_is_absent() {
        assert_eq!(price("$abc"), None);
        assert_eq!(price("$"), None);
    }

    #[test]
    fn test_clean_price_absent_input() {
        assert_eq!(clean_price(None, DEFAULT_EXCHANGE_RATE), None);
    }

    #[test]
    fn test_clean_price_respects_exchange_rate() {
        assert_eq!(clean_price(Some("$2.00"), 15000.0), Some(30_000.0));
    }

    #[test]
    fn test_clean_rating_plain_and_fraction() {
        assert_eq!(clean_rating(Some("4.8 / 5")), Some(4.8));
        assert_eq!(clean_rating(Some("3")), Some(3.0));
        assert_eq!(clean_rating(Some("4.5")), Some(4.5));
    }

    #[test]
    fn test_clean_rating_strips_star_glyph() {
        assert_eq!(clean_rating(Some("⭐ 4.8 / 5")), Some(4.8));
    }

    #[test]
    fn test_clean_rating_sentinels_are_absent() {
        assert_eq!(clean_rating(Some("Not Rated")), None);
        assert_eq!(clean_rating(Some("Rating: Not Rated")), None);
        assert_eq!(clean_rating(Some("Invalid Rating / 5")), None);
        assert_eq!(clean_rating(Some("Price Unavailable")), None);
    }

    #[test]
    fn test_clean_rating_unparsable_is_absent() {
        assert_eq!(clean_rating(Some("great")), None);
        assert_eq!(clean_rating(Some("")), None);
        assert_eq!(clean_rating(None), None);
    }

    #[test]
    fn test_clean_colors_extracts_count() {
        assert_eq!(clean_colors(Some("3 Colors")), Some(3));
        assert_eq!(clean_colors(Some("1 Color")), Some(1));
        assert_eq!(clean_colors(Some("12Colors")), Some(12));
    }

    #[test]
    fn test_clean_colors_no_match_is_absent() {
        assert_eq!(clean_colors(Some("Colors")), None);
        assert_eq!(clean_colors(Some("three Colors")), None);
        assert_eq!(clean_colors(Some("3 colours")), None);
        assert_eq!(clean_colors(None), None);
    }

    #[test]
    fn test_clean_size_strips_prefix() {
        assert_eq!(clean_size(Some("Size: M")), Some("M".to_string()));
        assert_eq!(clean_size(Some("M")), Some("M".to_string()));
        assert_eq!(clean_size(Some("  Size: XL  ")), Some("XL".to_string()));
    }

    #[test]
    fn test_clean_gender_strips_prefix() {
        assert_eq!(clean_gender(Some("Gender: Men")), Some("Men".to_string()));
        assert_eq!(clean_gender(Some("Women")), Some("Women".to_string()));
    }

    #[test]
    fn test_size_and_gender_idempotent() {
        for input in ["Size: M", "M", "  Unisex ", "Size:Size: M"] {
            let once = clean_size(Some(input)).unwrap();
            let twice = clean_size(Some(&once)).unwrap();
            assert_eq!(once, twice, "clean_size not idempotent for {:?}", input);
        }
        for input in ["Gender: Men", "Men", " Women "] {
            let once = clean_gender(Some(input)).unwrap();
            let twice = clean_gender(Some(&once)).unwrap();
            assert_eq!(once, twice, "clean_gender not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_size_and_gender_absent_only_on_missing_input() {
        assert_eq!(clean_size(None), None);
        assert_eq!(clean_gender(None), None);
        assert_eq!(clean_size(Some("")), Some(String::new()));
    }
}
