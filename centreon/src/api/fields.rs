//! Optional-field encoding for outgoing payloads
//!
//! The API distinguishes an omitted field from an explicit zero/empty one,
//! so the write path must keep "not set" physically absent from the JSON
//! body. Two pieces implement that contract: TriState for the 0/1/2 flag
//! fields, and Payload, a sparse field map that only ever holds explicitly
//! set values.

use serde::ser::SerializeMap;
use serde::Serialize;
use serde_json::Value;

/// Tri-valued flag: the platform encodes these as 0 (disabled), 1 (enabled)
/// or 2 (inherit the platform default). The 2 sentinel is a purely local
/// convention for what to omit on write; the platform itself never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    /// Not present in the configuration at all
    #[default]
    Unset,
    /// Present with the inherit-default sentinel
    Default,
    /// Present with an explicit value (0 or 1)
    Explicit(i64),
}

impl TriState {
    /// The reserved "inherit default" wire value
    pub const SENTINEL: i64 = 2;

    /// Interpret a configured attribute value; None means the attribute was
    /// not set
    pub fn from_config(value: Option<i64>) -> Self {
        match value {
            None => TriState::Unset,
            Some(v) if v == Self::SENTINEL => TriState::Default,
            Some(v) => TriState::Explicit(v),
        }
    }

    /// Value to transmit: only explicit values go on the wire
    pub fn wire_value(self) -> Option<i64> {
        match self {
            TriState::Explicit(v) => Some(v),
            TriState::Unset | TriState::Default => None,
        }
    }

    /// Value stored back into Terraform state
    pub fn state_value(self) -> i64 {
        match self {
            TriState::Explicit(v) => v,
            TriState::Unset | TriState::Default => Self::SENTINEL,
        }
    }

    pub fn is_set(self) -> bool {
        !matches!(self, TriState::Unset)
    }
}

/// Sparse field map for request bodies: a field is either explicitly set or
/// physically absent. Inserting `None` is a no-op, so unset local values can
/// never leak onto the wire as zeros, while explicit zeros and empty strings
/// are transmitted verbatim.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    fields: serde_json::Map<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required string field, always transmitted
    pub fn str(&mut self, key: &str, value: &str) -> &mut Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Required integer field, always transmitted
    pub fn int(&mut self, key: &str, value: i64) -> &mut Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    pub fn str_opt(&mut self, key: &str, value: &Option<String>) -> &mut Self {
        if let Some(v) = value {
            self.fields.insert(key.to_string(), Value::from(v.as_str()));
        }
        self
    }

    pub fn int_opt(&mut self, key: &str, value: Option<i64>) -> &mut Self {
        if let Some(v) = value {
            self.fields.insert(key.to_string(), Value::from(v));
        }
        self
    }

    pub fn bool_opt(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        if let Some(v) = value {
            self.fields.insert(key.to_string(), Value::from(v));
        }
        self
    }

    /// Tri-state flag: the sentinel and unset both stay off the wire
    pub fn tri_state(&mut self, key: &str, value: TriState) -> &mut Self {
        self.int_opt(key, value.wire_value())
    }

    /// List field: an empty local list encodes identically to an absent one
    pub fn int_list(&mut self, key: &str, values: &Option<Vec<i64>>) -> &mut Self {
        if let Some(v) = values {
            if !v.is_empty() {
                self.fields.insert(key.to_string(), Value::from(v.clone()));
            }
        }
        self
    }

    pub fn str_list(&mut self, key: &str, values: &Option<Vec<String>>) -> &mut Self {
        if let Some(v) = values {
            if !v.is_empty() {
                self.fields.insert(key.to_string(), Value::from(v.clone()));
            }
        }
        self
    }

    /// Pre-serialized value, always transmitted
    pub fn raw(&mut self, key: &str, value: Value) -> &mut Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tri_state_sentinel_stays_off_the_wire() {
        assert_eq!(TriState::from_config(Some(2)).wire_value(), None);
        assert_eq!(TriState::from_config(None).wire_value(), None);
    }

    #[test]
    fn tri_state_explicit_values_transmit_verbatim() {
        assert_eq!(TriState::from_config(Some(0)).wire_value(), Some(0));
        assert_eq!(TriState::from_config(Some(1)).wire_value(), Some(1));
    }

    #[test]
    fn tri_state_state_value_round_trip() {
        assert_eq!(TriState::from_config(Some(0)).state_value(), 0);
        assert_eq!(TriState::from_config(Some(1)).state_value(), 1);
        assert_eq!(TriState::from_config(Some(2)).state_value(), 2);
        assert_eq!(TriState::from_config(None).state_value(), 2);
    }

    #[test]
    fn payload_omits_unset_fields() {
        let mut payload = Payload::new();
        payload
            .str("name", "web-01")
            .str_opt("alias", &None)
            .int_opt("timezone_id", None)
            .bool_opt("is_activated", None);

        let value = payload.into_value();
        assert_eq!(value, json!({"name": "web-01"}));
    }

    #[test]
    fn payload_transmits_explicit_zero_and_empty_string() {
        let mut payload = Payload::new();
        payload
            .str_opt("snmp_community", &Some(String::new()))
            .int_opt("notification_interval", Some(0));

        let value = payload.into_value();
        assert_eq!(
            value,
            json!({"snmp_community": "", "notification_interval": 0})
        );
    }

    #[test]
    fn payload_empty_list_encodes_as_absent() {
        let mut payload = Payload::new();
        payload
            .int_list("groups", &Some(vec![]))
            .int_list("templates", &Some(vec![3, 5]))
            .str_list("check_command_args", &None);

        let value = payload.into_value();
        assert_eq!(value, json!({"templates": [3, 5]}));
    }

    #[test]
    fn payload_tri_state_fields() {
        let mut payload = Payload::new();
        payload
            .tri_state("active_check_enabled", TriState::Explicit(1))
            .tri_state("passive_check_enabled", TriState::Default)
            .tri_state("notification_enabled", TriState::Unset);

        let value = payload.into_value();
        assert_eq!(value, json!({"active_check_enabled": 1}));
    }

    #[test]
    fn payload_serializes_as_json_object() {
        let mut payload = Payload::new();
        payload.str("address", "10.0.0.1").int("monitoring_server_id", 1);

        let text = serde_json::to_string(&payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({"address": "10.0.0.1", "monitoring_server_id": 1})
        );
    }
}
