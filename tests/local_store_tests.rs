mod common;

use common::{date, sample_expense, sample_trip};
use tempfile::tempdir;
use trip_core::currency::Currency;
use trip_core::storage::{LocalStore, TripStore};

#[tokio::test]
async fn trips_survive_reopening_the_store() {
    let dir = tempdir().unwrap();
    let trip = sample_trip("TRIP-KEEP", Currency::Eur);

    {
        let store = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();
        store.put_trip(&trip).await.unwrap();
    }

    let reopened = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();
    let found = reopened.fetch_trip("TRIP-KEEP").await.unwrap();
    assert_eq!(found, Some(trip));
}

#[tokio::test]
async fn expenses_filter_by_trip() {
    let dir = tempdir().unwrap();
    let store = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();

    store
        .put_expense(&sample_expense(
            "e1",
            "TRIP-A",
            10.0,
            Currency::Try,
            date(2024, 6, 1),
        ))
        .await
        .unwrap();
    store
        .put_expense(&sample_expense(
            "e2",
            "TRIP-B",
            20.0,
            Currency::Try,
            date(2024, 6, 1),
        ))
        .await
        .unwrap();

    let for_a = store.fetch_expenses("TRIP-A").await.unwrap();
    assert_eq!(for_a.len(), 1);
    assert_eq!(for_a[0].id, "e1");

    // A trip with nothing recorded reads as empty, not as an error.
    assert!(store.fetch_expenses("TRIP-C").await.unwrap().is_empty());
}

#[tokio::test]
async fn rewriting_an_expense_id_replaces_it() {
    let dir = tempdir().unwrap();
    let store = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();

    let mut expense = sample_expense("e1", "TRIP-A", 10.0, Currency::Try, date(2024, 6, 1));
    store.put_expense(&expense).await.unwrap();
    expense.amount = 25.0;
    store.put_expense(&expense).await.unwrap();

    let stored = store.fetch_expenses("TRIP-A").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount, 25.0);
}

#[tokio::test]
async fn delete_requires_matching_trip_and_id() {
    let dir = tempdir().unwrap();
    let store = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();

    store
        .put_expense(&sample_expense(
            "e1",
            "TRIP-A",
            10.0,
            Currency::Try,
            date(2024, 6, 1),
        ))
        .await
        .unwrap();

    // Wrong trip id leaves the record alone.
    store.remove_expense("TRIP-B", "e1").await.unwrap();
    assert_eq!(store.fetch_expenses("TRIP-A").await.unwrap().len(), 1);

    store.remove_expense("TRIP-A", "e1").await.unwrap();
    assert!(store.fetch_expenses("TRIP-A").await.unwrap().is_empty());
}

#[test]
fn session_pointer_round_trips_and_clears() {
    let dir = tempdir().unwrap();
    let store = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();

    assert_eq!(store.active_trip().unwrap(), None);
    store.set_active_trip(Some("TRIP-NOW")).unwrap();
    assert_eq!(store.active_trip().unwrap(), Some("TRIP-NOW".to_string()));

    // Exiting a trip clears the pointer but never the records.
    store.set_active_trip(None).unwrap();
    assert_eq!(store.active_trip().unwrap(), None);
}

#[test]
fn recent_locations_persist_across_instances() {
    let dir = tempdir().unwrap();

    {
        let store = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();
        store.record_location("Italy", "Rome").unwrap();
        store.record_location("Serbia", "Belgrade").unwrap();
    }

    let reopened = LocalStore::open(Some(dir.path().to_path_buf())).unwrap();
    let recents = reopened.recent_locations().unwrap();
    assert_eq!(recents.countries, vec!["Serbia", "Italy"]);
    assert_eq!(recents.cities, vec!["Belgrade", "Rome"]);
}
