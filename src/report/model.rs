use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// The flattened per-ticker report.
///
/// Keys are always present and always serialized in the same order, no matter
/// how many upstream modules returned data.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialReport {
    entries: Vec<(&'static str, Value)>,
}

impl FinancialReport {
    pub(crate) const fn from_entries(entries: Vec<(&'static str, Value)>) -> Self {
        Self { entries }
    }

    /// Value for an output key such as `"marketCap"`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v))
    }

    /// Output keys in serialization order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of keys in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no keys. Never true for a report built by this crate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FinancialReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
