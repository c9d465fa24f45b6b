//! Pure display formatting.
//!
//! Every string the pages render from listing data is produced here, so the
//! exact UI wording is covered by plain unit tests instead of DOM assertions.

// =========================================================
// Fixed wording
// =========================================================

/// Check-in time shown on every detail page.
pub const CHECK_IN: &str = "3:00 PM";
/// Check-out time shown on every detail page.
pub const CHECK_OUT: &str = "11:00 AM";
/// Placeholder for listings without amenity data.
pub const NO_AMENITIES: &str = "No amenities listed";
/// Placeholder for listings without a description.
pub const NO_DESCRIPTION: &str = "No description available";
/// Empty state for a review section.
pub const NO_REVIEWS: &str = "No reviews yet. Be the first to review this place!";
/// Card illustration when a listing carries no icon of its own.
pub const FALLBACK_ICON: &str = "🏠";
/// Host line when the API omits the host name.
pub const UNKNOWN_HOST: &str = "Unknown";

// =========================================================
// Helpers
// =========================================================

/// Price line for cards and detail headers, e.g. `$150 per night`.
///
/// Whole-dollar prices drop the cents so the common case reads the way the
/// listings were originally authored; fractional prices keep two digits.
pub fn price_label(price_per_night: f64) -> String {
    if price_per_night.fract() == 0.0 {
        format!("${price_per_night:.0} per night")
    } else {
        format!("${price_per_night:.2} per night")
    }
}

/// Star string for a rating, e.g. `⭐⭐⭐⭐` for 4.
pub fn stars(rating: u8) -> String {
    "⭐".repeat(usize::from(rating.min(5)))
}

/// Pluralized count, e.g. `1 guest` / `4 guests`.
pub fn count_label(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Description text with the empty case replaced by its placeholder.
pub fn description_text(description: &str) -> &str {
    if description.trim().is_empty() {
        NO_DESCRIPTION
    } else {
        description
    }
}

// =========================================================
// Price filter
// =========================================================

/// Price ceiling selected in the index page filter.
///
/// Built from the raw `<select>` value; anything that does not parse as a
/// number (the `all` sentinel included) turns the filter off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Max(u32),
}

impl PriceFilter {
    pub fn from_value(value: &str) -> Self {
        match value.parse::<u32>() {
            Ok(max) => Self::Max(max),
            Err(_) => Self::All,
        }
    }

    /// Whether a listing at this nightly price stays visible.
    pub fn admits(&self, price_per_night: f64) -> bool {
        match self {
            Self::All => true,
            Self::Max(max) => price_per_night <= f64::from(*max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_label_drops_cents_for_whole_dollars() {
        assert_eq!(price_label(150.0), "$150 per night");
    }

    #[test]
    fn price_label_keeps_cents_for_fractional_prices() {
        assert_eq!(price_label(99.5), "$99.50 per night");
    }

    #[test]
    fn stars_repeat_per_rating() {
        assert_eq!(stars(4), "⭐⭐⭐⭐");
        assert_eq!(stars(1), "⭐");
    }

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(stars(9), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(1, "guest"), "1 guest");
        assert_eq!(count_label(6, "guest"), "6 guests");
        assert_eq!(count_label(0, "bedroom"), "0 bedrooms");
    }

    #[test]
    fn description_text_substitutes_placeholder_when_blank() {
        assert_eq!(description_text(""), NO_DESCRIPTION);
        assert_eq!(description_text("  "), NO_DESCRIPTION);
        assert_eq!(description_text("A lovely stay"), "A lovely stay");
    }

    #[test]
    fn filter_from_numeric_value() {
        assert_eq!(PriceFilter::from_value("100"), PriceFilter::Max(100));
    }

    #[test]
    fn filter_from_all_or_unknown_value_is_off() {
        assert_eq!(PriceFilter::from_value("all"), PriceFilter::All);
        assert_eq!(PriceFilter::from_value(""), PriceFilter::All);
        assert_eq!(PriceFilter::from_value("cheap"), PriceFilter::All);
    }

    #[test]
    fn filter_admits_prices_up_to_the_ceiling() {
        let filter = PriceFilter::Max(100);
        assert!(filter.admits(99.99));
        assert!(filter.admits(100.0));
        assert!(!filter.admits(100.01));
        assert!(!filter.admits(150.0));
    }

    #[test]
    fn filter_all_admits_everything() {
        assert!(PriceFilter::All.admits(0.0));
        assert!(PriceFilter::All.admits(10_000.0));
    }
}
