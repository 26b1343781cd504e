//! Durable on-device fallback store.
//!
//! Everything lives in one JSON state file under the data directory: the
//! trip bucket (keyed by join code), the flat expense list (filtered by
//! trip on read), the active-session pointer, and the recent-location
//! suggestions. Each operation is a read-modify-write of that file.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Expense, Trip};
use crate::errors::Result;
use crate::storage::TripStore;
use crate::utils::ensure_dir;

const STATE_FILE: &str = "wallet.json";
const TMP_SUFFIX: &str = "tmp";

/// How many recently used countries/cities are remembered for form
/// suggestions.
pub const RECENT_CAP: usize = 3;

/// Most-recently-used country and city names, deduplicated, newest first.
/// Suggestion data only, not part of the trip/expense model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentLocations {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl RecentLocations {
    /// Records a use of `country` and `city`; empty strings are ignored.
    pub fn record(&mut self, country: &str, city: &str) {
        remember(&mut self.countries, country);
        remember(&mut self.cities, city);
    }
}

fn remember(list: &mut Vec<String>, value: &str) {
    if value.is_empty() {
        return;
    }
    list.retain(|existing| existing != value);
    list.insert(0, value.to_string());
    list.truncate(RECENT_CAP);
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WalletState {
    #[serde(default)]
    trips: HashMap<String, Trip>,
    #[serde(default)]
    expenses: Vec<Expense>,
    /// Join code of the trip the device last had open, read at startup to
    /// auto-resume.
    #[serde(default)]
    active_trip: Option<String>,
    #[serde(default)]
    recent_locations: RecentLocations,
}

/// JSON-file-backed [`TripStore`] plus the session and suggestion state
/// that only exists on-device.
pub struct LocalStore {
    state_file: PathBuf,
}

impl LocalStore {
    /// Opens (creating if needed) the store under `root`, or under the
    /// default application data directory when `root` is `None`.
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(crate::utils::app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            state_file: root.join(STATE_FILE),
        })
    }

    /// The join code of the currently active trip, if any.
    pub fn active_trip(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.active_trip)
    }

    /// Remembers (or with `None`, clears) the active trip. Clearing ends
    /// the session only; the trip record itself is never deleted.
    pub fn set_active_trip(&self, id: Option<&str>) -> Result<()> {
        let mut state = self.read_state()?;
        state.active_trip = id.map(str::to_string);
        self.write_state(&state)
    }

    pub fn recent_locations(&self) -> Result<RecentLocations> {
        Ok(self.read_state()?.recent_locations)
    }

    /// Pushes a country/city pair onto the suggestion lists.
    pub fn record_location(&self, country: &str, city: &str) -> Result<()> {
        let mut state = self.read_state()?;
        state.recent_locations.record(country, city);
        self.write_state(&state)
    }

    fn read_state(&self) -> Result<WalletState> {
        if self.state_file.exists() {
            let data = fs::read_to_string(&self.state_file)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(WalletState::default())
        }
    }

    fn write_state(&self, state: &WalletState) -> Result<()> {
        let data = serde_json::to_string_pretty(state)?;
        write_atomic(&self.state_file, &data)?;
        Ok(())
    }
}

#[async_trait]
impl TripStore for LocalStore {
    async fn put_trip(&self, trip: &Trip) -> Result<()> {
        let mut state = self.read_state()?;
        state.trips.insert(trip.id.clone(), trip.clone());
        self.write_state(&state)
    }

    async fn fetch_trip(&self, id: &str) -> Result<Option<Trip>> {
        Ok(self.read_state()?.trips.get(id).cloned())
    }

    async fn fetch_expenses(&self, trip_id: &str) -> Result<Vec<Expense>> {
        Ok(self
            .read_state()?
            .expenses
            .into_iter()
            .filter(|expense| expense.trip_id == trip_id)
            .collect())
    }

    async fn put_expense(&self, expense: &Expense) -> Result<()> {
        let mut state = self.read_state()?;
        // Keyed by id, so a re-write of the same expense replaces it.
        state.expenses.retain(|existing| existing.id != expense.id);
        state.expenses.push(expense.clone());
        self.write_state(&state)
    }

    async fn remove_expense(&self, trip_id: &str, expense_id: &str) -> Result<()> {
        let mut state = self.read_state()?;
        state
            .expenses
            .retain(|expense| !(expense.trip_id == trip_id && expense.id == expense_id));
        self.write_state(&state)
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp_path = path.with_extension(TMP_SUFFIX);
    let mut file = File::create(&tmp_path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
