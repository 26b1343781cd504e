//! Chart-ready groupings of expenses.
//!
//! Each builder is a pure function over the expense slice: inputs are
//! never mutated and every call returns a fresh row sequence in the
//! `{label, value}` shape the chart layer consumes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::currency::{ConversionTable, Currency};
use crate::domain::{Expense, UNKNOWN_LOCATION};

/// One slice or bar of a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub value: f64,
}

/// Converted spend per category, one row per distinct category present.
/// Row order is not significant; labels come out sorted for determinism.
#[must_use]
pub fn by_category(
    expenses: &[Expense],
    table: &ConversionTable,
    display_currency: Currency,
) -> Vec<ChartRow> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for expense in expenses {
        let amount = table.convert(expense.amount, expense.currency, display_currency);
        *sums.entry(expense.category.label()).or_insert(0.0) += amount;
    }
    sums.into_iter()
        .map(|(label, value)| ChartRow {
            label: label.to_string(),
            value,
        })
        .collect()
}

/// Converted spend per location: the city when present, else the country,
/// else the "unknown" placeholder.
#[must_use]
pub fn by_location(
    expenses: &[Expense],
    table: &ConversionTable,
    display_currency: Currency,
) -> Vec<ChartRow> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for expense in expenses {
        let amount = table.convert(expense.amount, expense.currency, display_currency);
        let label = if !expense.city.is_empty() {
            expense.city.as_str()
        } else if !expense.country.is_empty() {
            expense.country.as_str()
        } else {
            UNKNOWN_LOCATION
        };
        *sums.entry(label).or_insert(0.0) += amount;
    }
    sums.into_iter()
        .map(|(label, value)| ChartRow {
            label: label.to_string(),
            value,
        })
        .collect()
}

/// Converted spend per calendar day, sorted ascending by date. The
/// ordering is by actual date, not label text, as time-series charts
/// require.
#[must_use]
pub fn by_date(
    expenses: &[Expense],
    table: &ConversionTable,
    display_currency: Currency,
) -> Vec<ChartRow> {
    let mut sums: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for expense in expenses {
        let amount = table.convert(expense.amount, expense.currency, display_currency);
        *sums.entry(expense.date).or_insert(0.0) += amount;
    }
    sums.into_iter()
        .map(|(date, value)| ChartRow {
            label: date.format("%Y-%m-%d").to_string(),
            value,
        })
        .collect()
}
