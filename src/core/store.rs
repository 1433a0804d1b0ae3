//! Today's check-ins and the day-rollover rule.
//!
//! The store keeps the list in memory and mirrors it to a single durable
//! slot after every mutation. Storage failures never reach the caller: a
//! bad read starts the day fresh, a failed write is logged and the
//! in-memory state stays authoritative for the rest of the session.

use crate::core::clock::{Clock, SystemClock};
use crate::core::stats;
use crate::models::day_record::DayRecordRef;
use crate::models::{CheckIn, DayRecord, DayStats};
use crate::storage::KeyValueStore;
use crate::utils::date;

/// Key of the durable slot holding the current [`DayRecord`].
pub const STORAGE_KEY: &str = "waterTrackerData";

/// What `initialize` found in the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet; an empty record for today was written.
    FirstRun,
    /// The stored record belongs to today and was loaded as is.
    Restored { count: usize },
    /// The stored record was from another day and has been replaced.
    Rollover { previous: String },
    /// The slot could not be read or decoded; starting empty without writing.
    Unreadable { reason: String },
}

/// Result of a `clear` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing to clear; the confirmer was not consulted.
    Empty,
    Cancelled,
    Cleared { removed: usize },
}

pub struct DailyRecordStore<S: KeyValueStore, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    current_date: String,
    records: Vec<CheckIn>,
}

impl<S: KeyValueStore> DailyRecordStore<S, SystemClock> {
    /// Build and initialize a store on the local system clock.
    pub fn open(storage: S) -> (Self, LoadOutcome) {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> DailyRecordStore<S, C> {
    /// Build a store without touching the slot. Call [`initialize`] before use.
    ///
    /// [`initialize`]: Self::initialize
    pub fn new(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            current_date: String::new(),
            records: Vec::new(),
        }
    }

    pub fn open_with_clock(storage: S, clock: C) -> (Self, LoadOutcome) {
        let mut store = Self::new(storage, clock);
        let outcome = store.initialize();
        (store, outcome)
    }

    /// Load today's record from the slot, rolling over to an empty record
    /// when the stored day key is not today's.
    ///
    /// The day check happens here only: a session that stays open past
    /// midnight keeps appending under the day key it loaded with.
    pub fn initialize(&mut self) -> LoadOutcome {
        let today = date::day_key(&self.clock.now());
        self.current_date = today.clone();
        self.records.clear();

        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored records, starting empty");
                return LoadOutcome::Unreadable {
                    reason: e.to_string(),
                };
            }
        };

        let Some(raw) = raw else {
            self.persist();
            tracing::debug!(date = %today, "No stored records, created today's record");
            return LoadOutcome::FirstRun;
        };

        match DayRecord::from_payload(&raw) {
            Ok(stored) if stored.date == today => {
                self.records = stored.records;
                tracing::debug!(date = %today, count = self.records.len(), "Restored today's records");
                LoadOutcome::Restored {
                    count: self.records.len(),
                }
            }
            Ok(stored) => {
                self.persist();
                tracing::info!(previous = %stored.date, date = %today, "Day rollover, records reset");
                LoadOutcome::Rollover {
                    previous: stored.date,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored records are corrupt, starting empty");
                LoadOutcome::Unreadable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Record one glass of water at the current instant.
    pub fn check_in(&mut self) -> CheckIn {
        let entry = CheckIn::at(self.clock.now());
        self.records.push(entry.clone());
        self.persist();
        entry
    }

    /// Empty today's list once `confirm` agrees.
    ///
    /// On an empty list this returns immediately: `confirm` is not called
    /// and nothing is written.
    pub fn clear<F>(&mut self, confirm: F) -> ClearOutcome
    where
        F: FnOnce() -> bool,
    {
        if self.records.is_empty() {
            return ClearOutcome::Empty;
        }

        if !confirm() {
            return ClearOutcome::Cancelled;
        }

        let removed = self.records.len();
        self.records.clear();
        self.persist();
        ClearOutcome::Cleared { removed }
    }

    pub fn stats(&self) -> DayStats {
        stats::day_stats(self.records.len())
    }

    /// Copy of today's check-ins, newest first. Equal timestamps keep their
    /// insertion order.
    pub fn records_descending(&self) -> Vec<CheckIn> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    /// Check-ins in insertion order.
    pub fn records(&self) -> &[CheckIn] {
        &self.records
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let record = DayRecordRef {
            date: &self.current_date,
            records: &self.records,
        };

        let payload = match serde_json::to_string(&record) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode records, not saved");
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &payload) {
            tracing::warn!(error = %e, "Failed to save records, keeping them in memory only");
        }
    }
}

