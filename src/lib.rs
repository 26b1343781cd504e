#![doc(test(attr(deny(warnings))))]

//! Trip Core is the budgeting and persistence engine behind a shared trip
//! expense tracker: trips with shareable join codes, expenses in arbitrary
//! currencies, aggregate budget views, chart-ready groupings, and a
//! remote-first document store with an automatic local fallback.

pub mod charts;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod stats;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use errors::{Result, TripError};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Trip Core tracing initialized.");
    });
}
