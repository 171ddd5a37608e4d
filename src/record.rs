//! Log records and their typed attributes.

use std::borrow::Cow;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::level::Severity;
use crate::source::Source;

/// Attribute key.
pub type Key = Cow<'static, str>;

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    Time(DateTime<Utc>),
    Group(Vec<Attr>),
}

/// A key/value pair attached to a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: Key,
    pub value: Value,
}

impl Attr {
    pub fn string(key: impl Into<Key>, value: impl Into<String>) -> Self {
        Self::new(key, Value::String(value.into()))
    }

    pub fn int(key: impl Into<Key>, value: i64) -> Self {
        Self::new(key, Value::Int(value))
    }

    pub fn uint(key: impl Into<Key>, value: u64) -> Self {
        Self::new(key, Value::Uint(value))
    }

    pub fn float(key: impl Into<Key>, value: f64) -> Self {
        Self::new(key, Value::Float(value))
    }

    pub fn bool(key: impl Into<Key>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    pub fn duration(key: impl Into<Key>, value: Duration) -> Self {
        Self::new(key, Value::Duration(value))
    }

    pub fn time(key: impl Into<Key>, value: DateTime<Utc>) -> Self {
        Self::new(key, Value::Time(value))
    }

    /// Nested group, rendered as a JSON object.
    pub fn group(key: impl Into<Key>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self::new(key, Value::Group(attrs.into_iter().collect()))
    }

    fn new(key: impl Into<Key>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// One log call, assembled by the logger and handed to a sink.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
    pub attrs: Vec<Attr>,
    pub source: Option<Source>,
}

impl Record {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            severity,
            message: message.into(),
            attrs: Vec::new(),
            source: None,
        }
    }

    /// Append attributes after the existing ones, keeping their order.
    pub fn add_attrs(&mut self, attrs: impl IntoIterator<Item = Attr>) {
        self.attrs.extend(attrs);
    }

    /// First attribute with `key`, if any.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.iter().find(|a| a.key == key).map(|a| &a.value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(v) => serializer.serialize_str(v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Uint(v) => serializer.serialize_u64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            // Nanoseconds, saturating at u64::MAX.
            Value::Duration(v) => {
                serializer.serialize_u64(u64::try_from(v.as_nanos()).unwrap_or(u64::MAX))
            }
            Value::Time(v) => {
                serializer.serialize_str(&v.to_rfc3339_opts(SecondsFormat::Nanos, true))
            }
            Value::Group(attrs) => {
                let mut map = serializer.serialize_map(Some(attrs.len()))?;
                for attr in attrs {
                    map.serialize_entry(attr.key.as_ref(), &attr.value)?;
                }
                map.end()
            }
        }
    }
}

/// Renders as a flat JSON object: `time`, `level`, optional `source`, `msg`,
/// then every attribute in order. Duplicate keys are written as they occur.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(
            "time",
            &self.time.to_rfc3339_opts(SecondsFormat::Nanos, true),
        )?;
        map.serialize_entry("level", self.severity.as_str())?;
        if let Some(source) = &self.source {
            map.serialize_entry("source", source)?;
        }
        map.serialize_entry("msg", &self.message)?;
        for attr in &self.attrs {
            map.serialize_entry(attr.key.as_ref(), &attr.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_json_layout() {
        let mut record = Record::new(Severity::Warn, "disk almost full");
        record.time = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        record.add_attrs([
            Attr::string("mount", "/var"),
            Attr::float("used", 0.93),
            Attr::bool("alert", true),
        ]);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"time":"2024-06-21T12:00:00.000000000Z","level":"WARN","msg":"disk almost full","mount":"/var","used":0.93,"alert":true}"#
        );
    }

    #[test]
    fn test_duplicate_keys_are_preserved_in_order() {
        let mut record = Record::new(Severity::Info, "retry");
        record.add_attrs([Attr::int("attempt", 1), Attr::int("attempt", 2)]);

        assert_eq!(record.attrs.len(), 2);
        let json = serde_json::to_string(&record).unwrap();
        let first = json.find(r#""attempt":1"#).unwrap();
        let second = json.find(r#""attempt":2"#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_group_and_duration_values() {
        let attr = Attr::group(
            "request",
            [
                Attr::string("method", "PUT"),
                Attr::duration("elapsed", Duration::from_millis(3)),
                Attr::uint("bytes", 42),
            ],
        );

        let json = serde_json::to_value(&attr.value).unwrap();
        assert_eq!(json["method"], "PUT");
        assert_eq!(json["elapsed"], 3_000_000);
        assert_eq!(json["bytes"], 42);
    }

    #[test]
    fn test_attr_lookup_returns_first_match() {
        let mut record = Record::new(Severity::Debug, "x");
        record.add_attrs([Attr::int("n", -1), Attr::int("n", 2)]);
        assert_eq!(record.attr("n"), Some(&Value::Int(-1)));
        assert_eq!(record.attr("missing"), None);
    }
}
