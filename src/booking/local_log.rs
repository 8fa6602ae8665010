use crate::booking::error::SinkError;
use crate::booking::models::BookingRecord;
use crate::utils::storage::KeyValueStore;
use serde_json::Value;

/// Append-only list of bookings kept under a single storage key as a JSON
/// array, oldest first.
pub struct BookingLog<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BookingLog<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Raw stored entries. Only a value that is not JSON, or not a JSON
    /// array, counts as empty; odd elements inside the array are kept.
    fn entries(&self) -> Result<Vec<Value>, SinkError> {
        let raw = match self.store.get_item(&self.key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => Ok(entries),
            Ok(_) => {
                log::warn!("Ignoring non-list bookings value under '{}'", self.key);
                Ok(Vec::new())
            }
            Err(e) => {
                log::warn!("Ignoring unreadable bookings under '{}': {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    /// All stored bookings that read as records, oldest first.
    pub fn load(&self) -> Result<Vec<BookingRecord>, SinkError> {
        Ok(self
            .entries()?
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping stored booking #{}: {}", i + 1, e);
                    None
                }
            })
            .collect())
    }

    /// Adds one booking at the end and returns how many entries are stored.
    pub fn append(&self, record: &BookingRecord) -> Result<usize, SinkError> {
        let mut entries = self.entries()?;
        entries.push(serde_json::to_value(record)?);
        let json = serde_json::to_string(&entries)?;
        self.store.set_item(&self.key, &json)?;
        Ok(entries.len())
    }

    pub fn clear(&self) -> Result<(), SinkError> {
        self.store.remove_item(&self.key)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::models::BookingFields;
    use crate::utils::storage::memory::MemoryStorage;

    const KEY: &str = "smasco_bookings";

    fn record(name: &str) -> BookingRecord {
        BookingRecord::new(
            BookingFields {
                name: name.into(),
                phone: "0912345678".into(),
                service: "deep-clean".into(),
                date: "2025-06-01".into(),
                ..Default::default()
            },
            "ts",
        )
    }

    #[test]
    fn missing_key_loads_empty() {
        let log = BookingLog::new(MemoryStorage::default(), KEY);
        assert!(log.load().unwrap().is_empty());
    }

    #[test]
    fn appends_keep_submission_order() {
        let log = BookingLog::new(MemoryStorage::default(), KEY);
        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            assert_eq!(log.append(&record(name)).unwrap(), i + 1);
        }
        let names: Vec<_> = log.load().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let log = BookingLog::new(MemoryStorage::default(), KEY);
        log.append(&record("a")).unwrap();
        log.append(&record("a")).unwrap();
        assert_eq!(log.load().unwrap().len(), 2);
    }

    #[test]
    fn malformed_value_is_replaced_by_single_entry() {
        let log = BookingLog::new(MemoryStorage::with_item(KEY, "{not json"), KEY);
        assert_eq!(log.append(&record("a")).unwrap(), 1);

        let raw = log.store().raw(KEY).unwrap();
        let stored: Vec<BookingRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec![record("a")]);
    }

    #[test]
    fn non_array_json_counts_as_empty() {
        for raw in ["null", "{}", "42", r#""text""#] {
            let log = BookingLog::new(MemoryStorage::with_item(KEY, raw), KEY);
            assert!(log.load().unwrap().is_empty(), "value {raw} should load empty");
        }
    }

    #[test]
    fn reads_records_written_by_old_page() {
        let raw = r#"[{"name":"Sara","phone":"0123456789","email":"","service":"office-clean","date":"2025-01-02","message":"","timestamp":"٢‏/١‏/٢٠٢٥"}]"#;
        let log = BookingLog::new(MemoryStorage::with_item(KEY, raw), KEY);
        let bookings = log.load().unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].service, "office-clean");
    }

    #[test]
    fn odd_entries_survive_an_append() {
        let raw = r#"[{"name":"Sara","phone":"0123456789"},{"name":"Omar","email":null},7]"#;
        let log = BookingLog::new(MemoryStorage::with_item(KEY, raw), KEY);
        assert_eq!(log.append(&record("New")).unwrap(), 4);

        let names: Vec<_> = log.load().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Sara", "Omar", "New"]);

        let stored: Vec<Value> = serde_json::from_str(&log.store().raw(KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[2], Value::from(7));
    }

    #[test]
    fn failed_read_is_reported() {
        let storage = MemoryStorage::default();
        storage.fail_reads.set(true);
        let log = BookingLog::new(storage, KEY);
        assert!(matches!(log.load(), Err(SinkError::StorageUnavailable)));
        assert!(matches!(
            log.append(&record("a")),
            Err(SinkError::StorageUnavailable)
        ));
    }

    #[test]
    fn failed_write_is_reported() {
        let storage = MemoryStorage::default();
        storage.fail_writes.set(true);
        let log = BookingLog::new(storage, KEY);
        assert!(matches!(
            log.append(&record("a")),
            Err(SinkError::StorageWrite(_))
        ));
    }

    #[test]
    fn clear_removes_everything() {
        let log = BookingLog::new(MemoryStorage::default(), KEY);
        log.append(&record("a")).unwrap();
        log.clear().unwrap();
        assert!(log.load().unwrap().is_empty());
        assert_eq!(log.store().raw(KEY), None);
    }
}
