use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Snapshot returned by `GET /api/realtime`
///
/// Every sub-structure is optional; `null` and a missing key are treated the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    pub cost: Option<CostBreakdown>,
    pub unit_costs: Option<ReadingMap>,
    pub temperature: Option<ReadingMap>,
}

/// Hourly and annualized costs for the baseline and heat recovery scenarios
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub current: Option<ReadingMap>,
    pub recovery: Option<ReadingMap>,
    pub yearly_current: Option<ReadingMap>,
    pub yearly_recovery: Option<ReadingMap>,
}

/// String-keyed readings kept in the order the keys appear in the payload.
///
/// Leaves are numbers or `null`. Numeric strings are accepted; any other
/// leaf is stored as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingMap {
    entries: Vec<(String, Option<f64>)>,
}

impl ReadingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading. A repeated key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<f64>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<f64>)> for ReadingMap {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        let mut map = ReadingMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Convert a JSON leaf to a reading
fn leaf_value(key: &str, value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let parsed = s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
            if parsed.is_none() {
                log::warn!("Ignoring non-numeric reading for '{}': {:?}", key, s);
            }
            parsed
        }
        other => {
            log::warn!("Ignoring non-numeric reading for '{}': {}", key, other);
            None
        }
    }
}

struct ReadingMapVisitor;

impl<'de> Visitor<'de> for ReadingMapVisitor {
    type Value = ReadingMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object of numeric readings")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = ReadingMap::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            let reading = leaf_value(&key, &value);
            map.insert(key, reading);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ReadingMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ReadingMapVisitor)
    }
}

impl Serialize for ReadingMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_full_payload_deserialization() {
        let json = r#"{
            "cost": {
                "current": {"electricity": 120, "gas": 80.5},
                "recovery": {"electricity": 90},
                "yearlyCurrent": {"electricity": 1051200},
                "yearlyRecovery": {"electricity": 788400}
            },
            "unitCosts": {"electricity": 27.5},
            "temperature": {"supply": 45.2, "discharge": 31.0}
        }"#;

        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();
        let cost = snapshot.cost.unwrap();

        assert_eq!(cost.current.unwrap().get("gas"), Some(Some(80.5)));
        assert_eq!(cost.recovery.unwrap().get("electricity"), Some(Some(90.0)));
        assert_eq!(
            cost.yearly_current.unwrap().get("electricity"),
            Some(Some(1051200.0))
        );
        assert!(cost.yearly_recovery.is_some());
        assert_eq!(snapshot.unit_costs.unwrap().len(), 1);
        assert_eq!(snapshot.temperature.unwrap().get("supply"), Some(Some(45.2)));
    }

    #[test]
    fn test_snapshot_preserves_payload_key_order() {
        let json = r#"{"unitCosts": {"kerosene": 1, "electricity": 2, "heavy_oil": 3, "gas": 4}}"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = snapshot.unit_costs.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["kerosene", "electricity", "heavy_oil", "gas"]);
    }

    #[test]
    fn test_snapshot_empty_object() {
        let snapshot: TelemetrySnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, TelemetrySnapshot::default());
    }

    #[test]
    fn test_snapshot_null_sub_structures() {
        let json = r#"{"cost": {"current": null}, "unitCosts": null, "temperature": null}"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();

        assert!(snapshot.cost.unwrap().current.is_none());
        assert!(snapshot.unit_costs.is_none());
        assert!(snapshot.temperature.is_none());
    }

    #[test]
    fn test_snapshot_ignores_unknown_fields() {
        let json = r#"{"yearlySavings": {"365 days": {"electricity": 10}}, "temperature": {"supply": 40}}"#;
        let snapshot: TelemetrySnapshot = serde_json::from_str(json).unwrap();

        assert!(snapshot.cost.is_none());
        assert_eq!(snapshot.temperature.unwrap().len(), 1);
    }

    #[test]
    fn test_reading_leaves_null_and_strings() {
        let json = r#"{"a": null, "b": "12.5", "c": "n/a", "d": true, "e": -3}"#;
        let map: ReadingMap = serde_json::from_str(json).unwrap();

        assert_eq!(map.get("a"), Some(None));
        assert_eq!(map.get("b"), Some(Some(12.5)));
        assert_eq!(map.get("c"), Some(None));
        assert_eq!(map.get("d"), Some(None));
        assert_eq!(map.get("e"), Some(Some(-3.0)));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_reading_map_duplicate_key_keeps_position() {
        let json = r#"{"gas": 1, "electricity": 2, "gas": 3}"#;
        let map: ReadingMap = serde_json::from_str(json).unwrap();

        let entries: Vec<(&str, Option<f64>)> = map.iter().collect();
        assert_eq!(entries, vec![("gas", Some(3.0)), ("electricity", Some(2.0))]);
    }

    #[test]
    fn test_sub_structure_of_wrong_type_is_rejected() {
        let json = r#"{"cost": {"current": [120, 80]}}"#;
        let result: Result<TelemetrySnapshot, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let result: Result<TelemetrySnapshot, _> = serde_json::from_str(r#"{"temperature": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reading_map_serialization_keeps_order() {
        let map: ReadingMap = vec![("gas", Some(1.5)), ("electricity", None)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"gas":1.5,"electricity":null}"#);
    }
}
