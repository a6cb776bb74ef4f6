use crate::model::offer::Keyed;
use std::collections::HashSet;

/// Ordered, append-only collection of offer records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset<T> {
    records: Vec<T>,
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> Dataset<T> {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }
}

impl<T: Keyed> Dataset<T> {
    /// Removes records whose URL was already seen
    ///
    /// The first occurrence of each URL is kept in its original position; later
    /// duplicates are discarded. Returns the number of records removed.
    pub fn dedup_by_url(&mut self) -> usize {
        let before = self.records.len();
        let mut seen = HashSet::new();
        self.records.retain(|record| seen.insert(record.key().to_string()));
        before - self.records.len()
    }

    /// Returns true when every URL occurs once
    pub fn is_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.records.iter().all(|record| seen.insert(record.key()))
    }
}

impl<T> From<Vec<T>> for Dataset<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Extend<T> for Dataset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<T> FromIterator<T> for Dataset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Dataset<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
