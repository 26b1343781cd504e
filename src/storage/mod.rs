//! Persistence: a remote document store with a local fallback.
//!
//! The [`Gateway`] composes two [`TripStore`] implementations: it always
//! tries the primary (remote) store first and degrades to the fallback
//! (local) store on any remote failure, without reconciliation or retry.
//! A record written during an outage exists only locally until some later
//! successful remote write. Callers never see remote errors; they do see
//! which backend served them via [`Stored`].

pub mod local;
pub mod remote;

use async_trait::async_trait;

use crate::config::Config;
use crate::domain::{new_trip_code, Expense, Trip, TripDraft};
use crate::errors::{Result, TripError};

pub use local::{LocalStore, RecentLocations};
pub use remote::MongoStore;

/// Abstraction over a backing store for trips and their expenses.
#[async_trait]
pub trait TripStore: Send + Sync {
    async fn put_trip(&self, trip: &Trip) -> Result<()>;
    async fn fetch_trip(&self, id: &str) -> Result<Option<Trip>>;
    /// Returns every expense whose `tripId` matches, in no particular
    /// order.
    async fn fetch_expenses(&self, trip_id: &str) -> Result<Vec<Expense>>;
    async fn put_expense(&self, expense: &Expense) -> Result<()>;
    async fn remove_expense(&self, trip_id: &str, expense_id: &str) -> Result<()>;
}

/// Which store ended up serving an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Remote,
    Local,
}

/// An operation result tagged with the backend that produced it, so
/// callers and tests can assert the path taken instead of guessing from
/// logs.
#[derive(Clone, Debug, PartialEq)]
pub struct Stored<T> {
    pub value: T,
    pub backend: Backend,
}

impl<T> Stored<T> {
    fn remote(value: T) -> Self {
        Self {
            value,
            backend: Backend::Remote,
        }
    }

    fn local(value: T) -> Self {
        Self {
            value,
            backend: Backend::Local,
        }
    }
}

/// Remote-first, local-fallback persistence gateway.
pub struct Gateway<P, F> {
    primary: P,
    fallback: F,
}

impl Gateway<MongoStore, LocalStore> {
    /// Assembles the default pairing: a Mongo-backed remote store and the
    /// on-device JSON store, both resolved from `config`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let primary = MongoStore::connect(&config.remote_uri, &config.database).await?;
        let fallback = LocalStore::open(config.data_dir.clone())?;
        Ok(Self::new(primary, fallback))
    }
}

impl<P, F> Gateway<P, F>
where
    P: TripStore,
    F: TripStore,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Mints a join code, assembles the trip, and persists it. A remote
    /// failure degrades to the local store; the caller gets a valid trip
    /// either way.
    ///
    /// Join codes are not checked for collisions; at this scale the risk
    /// is accepted.
    pub async fn create_trip(&self, draft: TripDraft) -> Result<Stored<Trip>> {
        let trip = Trip::from_draft(draft, new_trip_code());
        match self.primary.put_trip(&trip).await {
            Ok(()) => Ok(Stored::remote(trip)),
            Err(err) => {
                warn_fallback("create_trip", &err);
                self.fallback.put_trip(&trip).await?;
                Ok(Stored::local(trip))
            }
        }
    }

    /// Looks a trip up by its join code, consulting the local store when
    /// the remote store errors or has no such document. `Ok(None)` means
    /// the code is absent from both.
    pub async fn trip(&self, id: &str) -> Result<Option<Stored<Trip>>> {
        match self.primary.fetch_trip(id).await {
            Ok(Some(trip)) => return Ok(Some(Stored::remote(trip))),
            Ok(None) => {}
            Err(err) => warn_fallback("trip", &err),
        }
        Ok(self.fallback.fetch_trip(id).await?.map(Stored::local))
    }

    /// All expenses of a trip, newest first. An empty remote result set
    /// falls through to the local store; an empty answer from both is a
    /// plain empty list, indistinguishable from "remote unreachable" by
    /// design.
    pub async fn expenses(&self, trip_id: &str) -> Result<Stored<Vec<Expense>>> {
        match self.primary.fetch_expenses(trip_id).await {
            Ok(expenses) if !expenses.is_empty() => {
                return Ok(Stored::remote(sorted_newest_first(expenses)));
            }
            Ok(_) => {}
            Err(err) => warn_fallback("expenses", &err),
        }
        let expenses = self.fallback.fetch_expenses(trip_id).await?;
        Ok(Stored::local(sorted_newest_first(expenses)))
    }

    /// Persists an expense keyed by its client-generated id, locally when
    /// the remote write fails. The input expense is always handed back.
    pub async fn add_expense(&self, expense: Expense) -> Result<Stored<Expense>> {
        match self.primary.put_expense(&expense).await {
            Ok(()) => Ok(Stored::remote(expense)),
            Err(err) => {
                warn_fallback("add_expense", &err);
                self.fallback.put_expense(&expense).await?;
                Ok(Stored::local(expense))
            }
        }
    }

    /// Deletes an expense by id. The trip id is only needed by the local
    /// store's lookup; remote deletion is by expense id alone.
    pub async fn delete_expense(&self, trip_id: &str, expense_id: &str) -> Result<Stored<()>> {
        match self.primary.remove_expense(trip_id, expense_id).await {
            Ok(()) => Ok(Stored::remote(())),
            Err(err) => {
                warn_fallback("delete_expense", &err);
                self.fallback.remove_expense(trip_id, expense_id).await?;
                Ok(Stored::local(()))
            }
        }
    }

    /// Join/resume flow: resolves a join code to its trip and expense
    /// list. The only user-surfaced error in the core:
    /// [`TripError::TripNotFound`] when the code is unknown to both
    /// stores.
    pub async fn load_trip(&self, code: &str) -> Result<(Stored<Trip>, Stored<Vec<Expense>>)> {
        let trip = self
            .trip(code)
            .await?
            .ok_or_else(|| TripError::TripNotFound(code.to_string()))?;
        let expenses = self.expenses(code).await?;
        Ok((trip, expenses))
    }
}

fn warn_fallback(operation: &str, err: &TripError) {
    tracing::warn!(%operation, error = %err, "remote store failed; using local fallback");
}

fn sorted_newest_first(mut expenses: Vec<Expense>) -> Vec<Expense> {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    expenses
}
