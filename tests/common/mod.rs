#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use trip_core::currency::Currency;
use trip_core::domain::{location_label, Category, Expense, Trip};
use trip_core::errors::{Result, TripError};
use trip_core::storage::TripStore;

/// In-memory store standing in for the remote backend in gateway tests.
#[derive(Default)]
pub struct MemStore {
    trips: Mutex<HashMap<String, Trip>>,
    expenses: Mutex<Vec<Expense>>,
}

#[async_trait]
impl TripStore for MemStore {
    async fn put_trip(&self, trip: &Trip) -> Result<()> {
        self.trips
            .lock()
            .unwrap()
            .insert(trip.id.clone(), trip.clone());
        Ok(())
    }

    async fn fetch_trip(&self, id: &str) -> Result<Option<Trip>> {
        Ok(self.trips.lock().unwrap().get(id).cloned())
    }

    async fn fetch_expenses(&self, trip_id: &str) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|expense| expense.trip_id == trip_id)
            .cloned()
            .collect())
    }

    async fn put_expense(&self, expense: &Expense) -> Result<()> {
        let mut expenses = self.expenses.lock().unwrap();
        expenses.retain(|existing| existing.id != expense.id);
        expenses.push(expense.clone());
        Ok(())
    }

    async fn remove_expense(&self, trip_id: &str, expense_id: &str) -> Result<()> {
        self.expenses
            .lock()
            .unwrap()
            .retain(|expense| !(expense.trip_id == trip_id && expense.id == expense_id));
        Ok(())
    }
}

/// A store whose every operation fails, simulating an unreachable remote.
pub struct FailingStore;

fn unavailable() -> TripError {
    TripError::Io(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "remote unavailable",
    ))
}

#[async_trait]
impl TripStore for FailingStore {
    async fn put_trip(&self, _trip: &Trip) -> Result<()> {
        Err(unavailable())
    }

    async fn fetch_trip(&self, _id: &str) -> Result<Option<Trip>> {
        Err(unavailable())
    }

    async fn fetch_expenses(&self, _trip_id: &str) -> Result<Vec<Expense>> {
        Err(unavailable())
    }

    async fn put_expense(&self, _expense: &Expense) -> Result<()> {
        Err(unavailable())
    }

    async fn remove_expense(&self, _trip_id: &str, _expense_id: &str) -> Result<()> {
        Err(unavailable())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_trip(id: &str, base_currency: Currency) -> Trip {
    Trip {
        id: id.to_string(),
        name: "Balkan Tour".into(),
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 7),
        people_count: 2,
        base_currency,
        daily_budget_limit: None,
    }
}

pub fn sample_expense(
    id: &str,
    trip_id: &str,
    amount: f64,
    currency: Currency,
    on: NaiveDate,
) -> Expense {
    located_expense(id, trip_id, amount, currency, on, "", "")
}

pub fn located_expense(
    id: &str,
    trip_id: &str,
    amount: f64,
    currency: Currency,
    on: NaiveDate,
    country: &str,
    city: &str,
) -> Expense {
    Expense {
        id: id.to_string(),
        trip_id: trip_id.to_string(),
        description: format!("expense {id}"),
        amount,
        currency,
        category: Category::Food,
        date: on,
        country: country.to_string(),
        city: city.to_string(),
        location: location_label(city, country),
        amount_in_base_currency: None,
    }
}
