//! # Renderer: places to view models
//!
//! Pure functions from API data to the declarative view models the Dioxus
//! components mount. Keeping the text here (rather than in `rsx!`) lets the
//! exact displayed strings be tested without a browser.
//!
//! | View model | Mounted by | Shows |
//! |------------|------------|-------|
//! | [`PlaceCard`] | [`crate::PlaceCardView`] inside `#places-list` | title, `Description: …`, `Price: {price}€`, `Latitude: …`, `Longitude: …` |
//! | [`PlaceDetailsView`] | [`crate::DetailPage`] inside `#place-details` | title heading plus labeled Description, Price (`{price}€`), Latitude, Longitude |
//!
//! Numbers are formatted the way the browser would print them: integral values
//! without a fractional part (`80`, not `80.0`), exponent notation only for
//! very large or very small magnitudes.

use api::Place;

/// Currency symbol appended to every displayed price.
pub const CURRENCY: &str = "€";

/// Prefix of the price line on list items. The filter strips it again.
pub const PRICE_PREFIX: &str = "Price: ";

/// One rendered entry of the places list.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Displayed price line, e.g. `"Price: 80€"`.
    pub price: String,
    pub latitude: String,
    pub longitude: String,
    /// Detail page link for the whole card.
    pub href: String,
}

/// A labeled field of the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// The rendered detail view of one place.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceDetailsView {
    pub title: String,
    pub fields: Vec<DetailField>,
}

/// Format a number like JavaScript's default string conversion: plain decimal
/// between `1e-6` and `1e21`, exponent notation (`1e+21`, `1.5e-7`) outside.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 too.
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }
    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

/// Displayed price without prefix, e.g. `"80€"`.
pub fn price_with_currency(price: f64) -> String {
    format!("{}{CURRENCY}", format_number(price))
}

/// Relative link to the detail page of `id`, e.g. `place.html?id=42`.
pub fn detail_href(detail_page: &str, id: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("{detail_page}?id={encoded}")
}

/// Render one list item.
pub fn place_card(place: &Place, detail_page: &str) -> PlaceCard {
    PlaceCard {
        id: place.id.clone(),
        title: place.title.clone(),
        description: format!("Description: {}", place.description),
        price: format!("{PRICE_PREFIX}{}", price_with_currency(place.price)),
        latitude: format!("Latitude: {}", format_number(place.latitude)),
        longitude: format!("Longitude: {}", format_number(place.longitude)),
        href: detail_href(detail_page, &place.id),
    }
}

/// Render the whole list, one card per place, in the given order.
pub fn place_cards(places: &[Place], detail_page: &str) -> Vec<PlaceCard> {
    places
        .iter()
        .map(|place| place_card(place, detail_page))
        .collect()
}

/// Render the detail view.
pub fn place_details(place: &Place) -> PlaceDetailsView {
    PlaceDetailsView {
        title: place.title.clone(),
        fields: vec![
            DetailField {
                label: "Description",
                value: place.description.clone(),
            },
            DetailField {
                label: "Price",
                value: price_with_currency(place.price),
            },
            DetailField {
                label: "Latitude",
                value: format_number(place.latitude),
            },
            DetailField {
                label: "Longitude",
                value: format_number(place.longitude),
            },
        ],
    }
}
