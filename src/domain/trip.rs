use chrono::NaiveDate;
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Constant prefix of every shareable join code.
pub const CODE_PREFIX: &str = "TRIP-";

const CODE_SUFFIX_LEN: usize = 4;

/// A budgeted travel event shared between companions via its join code.
///
/// The `id` doubles as the join code and the remote document key. Trips
/// are created once and read-only afterwards; leaving a trip only clears
/// the local session pointer, never the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Divisor for per-person cost. Not validated against zero here;
    /// consumers must treat anything below 1 as 1.
    pub people_count: u32,
    /// Canonical accounting currency; the daily budget limit is
    /// denominated in it.
    pub base_currency: Currency,
    /// Target spend per day in `base_currency`. Zero or absent means no
    /// target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget_limit: Option<f64>,
}

impl Trip {
    /// Assembles a trip from a draft and a freshly minted join code.
    pub fn from_draft(draft: TripDraft, code: String) -> Self {
        Self {
            id: code,
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            people_count: draft.people_count,
            base_currency: draft.base_currency,
            daily_budget_limit: draft.daily_budget_limit,
        }
    }

    /// The daily target, defaulting the unset case to zero.
    #[must_use]
    pub fn daily_limit_or_zero(&self) -> f64 {
        self.daily_budget_limit.unwrap_or(0.0)
    }
}

/// Everything a trip needs except its join code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: u32,
    pub base_currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget_limit: Option<f64>,
}

/// Mints a short human-shareable join code, e.g. `TRIP-X9Y2`.
///
/// Uniqueness is not checked against existing trips; at the expected
/// scale (a handful of trips per group) the collision risk is accepted.
#[must_use]
pub fn new_trip_code() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_SUFFIX_LEN)
        .map(|byte| (byte as char).to_ascii_uppercase())
        .collect();
    format!("{CODE_PREFIX}{suffix}")
}
