use std::collections::HashMap;

use crate::core::PackageRecord;

/// All records of a Packages document, grouped by package name.
///
/// Records sharing a name keep their document order, so the first entry of
/// each group is the first stanza that declared that name.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    by_name: HashMap<String, Vec<PackageRecord>>,
    record_count: usize,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = PackageRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Records with an empty name are never stored.
    pub fn insert(&mut self, record: PackageRecord) {
        if record.name.is_empty() {
            return;
        }

        self.record_count += 1;
        self.by_name
            .entry(record.name.clone())
            .or_default()
            .push(record);
    }

    /// Every record for `name`, in document order.
    pub fn records(&self, name: &str) -> &[PackageRecord] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn first(&self, name: &str) -> Option<&PackageRecord> {
        self.records(name).first()
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.records(name).is_empty()
    }

    /// Number of records, counting every version separately.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of distinct package names.
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

impl FromIterator<PackageRecord> for PackageIndex {
    fn from_iter<T: IntoIterator<Item = PackageRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}
