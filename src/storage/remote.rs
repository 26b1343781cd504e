//! Remote document store backed by MongoDB.
//!
//! Documents are the serde shapes of [`Trip`] and [`Expense`] verbatim,
//! in two collections keyed by their `id` field; expenses additionally
//! carry the filterable `tripId` field. No schema migrations exist.

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::options::ReplaceOptions;
use mongodb::{Client, Collection};

use crate::domain::{Expense, Trip};
use crate::errors::Result;
use crate::storage::TripStore;

const TRIPS_COLLECTION: &str = "trips";
const EXPENSES_COLLECTION: &str = "expenses";

/// Mongo-backed implementation of [`TripStore`].
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: String,
}

impl MongoStore {
    /// Connects lazily to the given deployment. The URI is only validated
    /// here; actual I/O happens per operation.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        tracing::debug!(%database, "connected remote document store");
        Ok(Self {
            client,
            database: database.to_string(),
        })
    }

    fn trips(&self) -> Collection<Trip> {
        self.client
            .database(&self.database)
            .collection(TRIPS_COLLECTION)
    }

    fn expenses(&self) -> Collection<Expense> {
        self.client
            .database(&self.database)
            .collection(EXPENSES_COLLECTION)
    }
}

#[async_trait]
impl TripStore for MongoStore {
    async fn put_trip(&self, trip: &Trip) -> Result<()> {
        self.trips().insert_one(trip, None).await?;
        Ok(())
    }

    async fn fetch_trip(&self, id: &str) -> Result<Option<Trip>> {
        Ok(self.trips().find_one(doc! { "id": id }, None).await?)
    }

    async fn fetch_expenses(&self, trip_id: &str) -> Result<Vec<Expense>> {
        let cursor = self
            .expenses()
            .find(doc! { "tripId": trip_id }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn put_expense(&self, expense: &Expense) -> Result<()> {
        // Keyed by the client-generated id, so re-sending an expense
        // replaces rather than duplicates it.
        let options = ReplaceOptions::builder().upsert(true).build();
        self.expenses()
            .replace_one(doc! { "id": &expense.id }, expense, options)
            .await?;
        Ok(())
    }

    async fn remove_expense(&self, _trip_id: &str, expense_id: &str) -> Result<()> {
        // Remote deletion needs only the expense id.
        self.expenses()
            .delete_one(doc! { "id": expense_id }, None)
            .await?;
        Ok(())
    }
}
