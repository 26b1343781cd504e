use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::{ConversionTable, Currency};
use crate::domain::trip::Trip;

/// Shown when an expense carries neither a city nor a country.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Categorises a spend for charts and budgeting.
///
/// Stored data written by older clients used localized and legacy English
/// labels for the same concepts; those are collapsed into this single
/// canonical set at the serde boundary and never leak further in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Accommodation,
    Food,
    Transport,
    Activity,
    Shopping,
    #[default]
    Other,
}

impl Category {
    /// Canonical display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Accommodation => "Accommodation",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Activity => "Activity",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    /// Maps a canonical or legacy label to its category.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Accommodation" | "Konaklama" => Some(Category::Accommodation),
            "Food" | "Food & Drink" | "Yeme-İçme" => Some(Category::Food),
            "Transport" | "Ulaşım" => Some(Category::Transport),
            "Activity" | "Aktivite" => Some(Category::Activity),
            "Shopping" | "Alışveriş" => Some(Category::Shopping),
            "Other" | "Diğer" => Some(Category::Other),
            _ => None,
        }
    }

    /// All categories, in form/display order.
    pub const ALL: [Category; 6] = [
        Category::Accommodation,
        Category::Food,
        Category::Transport,
        Category::Activity,
        Category::Shopping,
        Category::Other,
    ];
}

impl From<String> for Category {
    /// Unrecognised labels degrade to [`Category::Other`] instead of
    /// failing the surrounding document.
    fn from(label: String) -> Self {
        Category::from_label(&label).unwrap_or_default()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single spend record attached to a trip.
///
/// Expenses are created client-side with a fresh id, persisted once, and
/// deleted by id; there is no in-place update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    /// Join-code of the owning trip. Integrity is a client convention:
    /// every write sets it, every read filters by it, nothing validates
    /// it at the store.
    pub trip_id: String,
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    /// Derived display string, `"{city}, {country}"` when both are set.
    pub location: String,
    /// Conversion into the trip's base currency, captured at insert time.
    /// Advisory only: aggregation always reconverts from `amount` and
    /// `currency`, because this snapshot is never refreshed when rates
    /// change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_base_currency: Option<f64>,
}

impl Expense {
    /// Builds a new expense for `trip`, minting its id and filling the
    /// derived location and base-currency fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trip: &Trip,
        table: &ConversionTable,
        description: impl Into<String>,
        amount: f64,
        currency: Currency,
        category: Category,
        date: NaiveDate,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        let country = country.into();
        let city = city.into();
        let amount_in_base = table.convert(amount, currency, trip.base_currency);
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id: trip.id.clone(),
            description: description.into(),
            amount,
            currency,
            category,
            date,
            location: location_label(&city, &country),
            country,
            city,
            amount_in_base_currency: Some(amount_in_base),
        }
    }
}

/// Combines the optional city and country into one display label.
#[must_use]
pub fn location_label(city: &str, country: &str) -> String {
    match (city.is_empty(), country.is_empty()) {
        (false, false) => format!("{city}, {country}"),
        (false, true) => city.to_string(),
        (true, false) => country.to_string(),
        (true, true) => UNKNOWN_LOCATION.to_string(),
    }
}
