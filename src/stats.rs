//! Budget aggregation: totals, burn rates, and budget health.
//!
//! All derived values are recomputed fresh on every call from the raw
//! expense amounts; the cached `amount_in_base_currency` snapshot is never
//! consulted. The contract is "never throw, always render something":
//! missing budgets default to zero, missing rates to 1:1, and a zero
//! people count to one person.

use chrono::NaiveDate;
use serde::Serialize;

use crate::currency::{ConversionTable, Currency};
use crate::domain::{Expense, Trip};

/// Warning threshold, in percent of the daily target.
const WARN_PERCENT: f64 = 85.0;

/// Three-state classification of the actual daily spend against the
/// planned daily target. No hysteresis: the state is derived fresh from
/// the current numbers on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    /// No daily target configured.
    Neutral,
    /// At or under 85% of the target.
    Success,
    /// Between 85% and 100% of the target.
    Warning,
    /// Over the target.
    Danger,
}

/// Health classification plus a ready-to-display message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetReport {
    pub health: BudgetHealth,
    pub message: String,
}

/// Aggregate view of a trip's spending in a chosen display currency.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStats {
    pub display_currency: Currency,
    /// Sum of all expenses converted into the display currency.
    pub total_spent: f64,
    /// Planned duration in whole days, at least 1.
    pub total_days: i64,
    /// Elapsed whole days used for the actual burn rate: 0 before the
    /// trip starts, the full duration once it is over.
    pub days_passed: i64,
    /// Actual spend per elapsed day.
    pub daily_average: f64,
    pub cost_per_person: f64,
    /// The trip's daily target converted into the display currency.
    pub daily_limit: f64,
    pub budget: BudgetReport,
}

impl TripStats {
    /// Derives the full aggregate view.
    ///
    /// `expenses` are presumed to belong to `trip` (the caller filters);
    /// their order is irrelevant. `today` is injected so reports are
    /// reproducible in tests.
    #[must_use]
    pub fn compute(
        trip: &Trip,
        expenses: &[Expense],
        table: &ConversionTable,
        display_currency: Currency,
        today: NaiveDate,
    ) -> Self {
        let total_spent: f64 = expenses
            .iter()
            .map(|e| table.convert(e.amount, e.currency, display_currency))
            .sum();

        let total_days = (trip.end_date - trip.start_date).num_days().max(0) + 1;

        let days_passed = if today < trip.start_date {
            0
        } else if today > trip.end_date {
            total_days
        } else {
            ((today - trip.start_date).num_days() + 1).max(1)
        };

        let daily_average = if days_passed > 0 {
            total_spent / days_passed as f64
        } else {
            0.0
        };
        let cost_per_person = total_spent / f64::from(trip.people_count.max(1));
        let daily_limit = table.convert(
            trip.daily_limit_or_zero(),
            trip.base_currency,
            display_currency,
        );

        let budget = budget_report(daily_limit, daily_average, display_currency);

        Self {
            display_currency,
            total_spent,
            total_days,
            days_passed,
            daily_average,
            cost_per_person,
            daily_limit,
            budget,
        }
    }
}

fn budget_report(daily_limit: f64, daily_average: f64, currency: Currency) -> BudgetReport {
    if daily_limit == 0.0 {
        return BudgetReport {
            health: BudgetHealth::Neutral,
            message: "No daily budget target set.".to_string(),
        };
    }

    let percent = daily_average / daily_limit * 100.0;
    let symbol = currency.symbol();

    if percent > 100.0 {
        let overage = (daily_limit - daily_average).abs();
        BudgetReport {
            health: BudgetHealth::Danger,
            message: format!(
                "Over budget: spending {overage:.0} {symbol} more per day than planned."
            ),
        }
    } else if percent > WARN_PERCENT {
        BudgetReport {
            health: BudgetHealth::Warning,
            message: format!("Approaching the daily limit ({percent:.0}%)."),
        }
    } else {
        BudgetReport {
            health: BudgetHealth::Success,
            message: format!("Under budget ({percent:.0}%)."),
        }
    }
}
