//! Sparse colour-change setup table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Colour;

/// One row of a setup table: switching from `from` to `to` takes `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetupEntry {
    /// Colour the machine is set up for.
    pub from: Colour,
    /// Colour of the next order.
    pub to: Colour,
    /// Setup time for the change.
    pub time: f64,
}

/// Setup times for colour changes, keyed by `(from, to)` colour codes.
///
/// Transitions without an entry are free: [`get`](Self::get) returns 0.
/// Serialized as a list of [`SetupEntry`] rows.
///
/// # Examples
///
/// ```
/// use u_sequencing::distance::SetupTable;
///
/// let table = SetupTable::new().with_setup(0, 1, 15.0);
/// assert_eq!(table.get(0, 1), 15.0);
/// assert_eq!(table.get(1, 0), 0.0); // no entry
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<SetupEntry>", into = "Vec<SetupEntry>")]
pub struct SetupTable {
    times: HashMap<(Colour, Colour), f64>,
}

impl SetupTable {
    /// Creates an empty table (every change is free).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the setup time for changing `from` → `to`.
    pub fn with_setup(mut self, from: Colour, to: Colour, time: f64) -> Self {
        self.insert(from, to, time);
        self
    }

    /// Sets the setup time for changing `from` → `to`.
    pub fn insert(&mut self, from: Colour, to: Colour, time: f64) {
        self.times.insert((from, to), time);
    }

    /// Setup time for changing `from` → `to`, or 0 when no entry exists.
    pub fn get(&self, from: Colour, to: Colour) -> f64 {
        self.times.get(&(from, to)).copied().unwrap_or(0.0)
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl From<Vec<SetupEntry>> for SetupTable {
    fn from(entries: Vec<SetupEntry>) -> Self {
        let mut table = Self::new();
        for e in entries {
            table.insert(e.from, e.to, e.time);
        }
        table
    }
}

impl From<SetupTable> for Vec<SetupEntry> {
    fn from(table: SetupTable) -> Self {
        let mut entries: Vec<SetupEntry> = table
            .times
            .into_iter()
            .map(|((from, to), time)| SetupEntry { from, to, time })
            .collect();
        entries.sort_by_key(|e| (e.from, e.to));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_is_free() {
        let table = SetupTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(3, 4), 0.0);
    }

    #[test]
    fn test_directed_lookup() {
        let table = SetupTable::new()
            .with_setup(0, 1, 10.0)
            .with_setup(1, 0, 4.0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, 1), 10.0);
        assert_eq!(table.get(1, 0), 4.0);
        assert_eq!(table.get(0, 0), 0.0);
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = SetupTable::new().with_setup(2, 3, 1.0);
        table.insert(2, 3, 7.0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(2, 3), 7.0);
    }

    #[test]
    fn test_entries_roundtrip_sorted() {
        let table = SetupTable::new()
            .with_setup(1, 0, 2.0)
            .with_setup(0, 1, 3.0);
        let entries: Vec<SetupEntry> = table.clone().into();
        assert_eq!(entries[0].from, 0);
        assert_eq!(entries[1].from, 1);
        assert_eq!(SetupTable::from(entries), table);
    }

    #[test]
    fn test_deserialize_rows() {
        let json = r#"[{"from": 0, "to": 2, "time": 12.5}]"#;
        let table: SetupTable = serde_json::from_str(json).expect("valid json");
        assert_eq!(table.get(0, 2), 12.5);
    }
}
