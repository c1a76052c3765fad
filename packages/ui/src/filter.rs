//! # Price filter
//!
//! Works on what is already rendered, not on the fetched data: the price of a
//! card is read back from its displayed line (`"Price: 80€"`) and compared with
//! the selected threshold.
//!
//! The selection is converted to a number before comparing. `"All"` shows
//! everything; any other non-numeric selection, like a price line that does
//! not parse, compares false and hides the card.

use crate::render::{CURRENCY, PRICE_PREFIX};

/// Selection value that disables filtering.
pub const ALL: &str = "All";

/// The current filter selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PriceFilter {
    #[default]
    All,
    /// Show cards priced at or below the threshold.
    AtMost(f64),
    /// A selection that is neither `All` nor a number.
    Invalid(String),
}

impl PriceFilter {
    /// Interpret the raw value of the filter's `<select>`.
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL {
            return Self::All;
        }
        match selection.trim().parse::<f64>() {
            Ok(threshold) if threshold.is_finite() => Self::AtMost(threshold),
            _ => Self::Invalid(selection.to_string()),
        }
    }

    /// The `<select>` value this filter corresponds to.
    pub fn selection(&self) -> String {
        match self {
            Self::All => ALL.to_string(),
            Self::AtMost(threshold) => crate::render::format_number(*threshold),
            Self::Invalid(raw) => raw.clone(),
        }
    }

    /// Whether a card with the given parsed price is shown.
    pub fn admits(&self, price: Option<f64>) -> bool {
        match (self, price) {
            (Self::All, _) => true,
            (Self::AtMost(threshold), Some(price)) => price <= *threshold,
            _ => false,
        }
    }

    /// Whether a card whose price line reads `price_line` is shown.
    pub fn shows(&self, price_line: &str) -> bool {
        self.admits(parse_displayed_price(price_line))
    }
}

/// Recover the number from a displayed price line such as `"Price: 80€"`.
pub fn parse_displayed_price(price_line: &str) -> Option<f64> {
    let number = price_line
        .replace(PRICE_PREFIX, "")
        .replace(CURRENCY, "");
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// CSS `display` value for a card.
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
