//! Domain types: trips, expenses, and spending categories.

pub mod expense;
pub mod trip;

pub use expense::{location_label, Category, Expense, UNKNOWN_LOCATION};
pub use trip::{new_trip_code, Trip, TripDraft, CODE_PREFIX};
