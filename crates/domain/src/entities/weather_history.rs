//! Weather history store
//!
//! Chronologically ordered daily records, most recent last. Prediction
//! models borrow windows of this store, so it must be fully loaded before
//! any model is built.

use serde::Serialize;

use super::WeatherRecord;

/// Ordered collection of historical weather records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeatherHistory {
    records: Vec<WeatherRecord>,
}

impl WeatherHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a history from records already in chronological order
    #[must_use]
    pub const fn from_records(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    /// Append the next (most recent) day
    pub fn push(&mut self, record: WeatherRecord) {
        self.records.push(record);
    }

    /// The `n` most recent records, oldest first
    ///
    /// Returns every record when `n` exceeds the number held.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[WeatherRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Most recent record, if any
    #[must_use]
    pub fn latest(&self) -> Option<&WeatherRecord> {
        self.records.last()
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<WeatherRecord> for WeatherHistory {
    fn from_iter<I: IntoIterator<Item = WeatherRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl Extend<WeatherRecord> for WeatherHistory {
    fn extend<I: IntoIterator<Item = WeatherRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
