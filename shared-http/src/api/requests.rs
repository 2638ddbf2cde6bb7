use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Query for `GET /cache/delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub key: String,
}

impl DeleteRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Query for `GET /cache/insert`
///
/// Every field is forwarded as typed by the operator; the API owns validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertRequest {
    pub key: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    pub ttl: String,
}

impl InsertRequest {
    pub fn new(
        key: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
        ttl: impl ToString,
    ) -> Self {
        Self {
            key: key.into(),
            record_type: record_type.into(),
            value: value.into(),
            ttl: ttl.to_string(),
        }
    }
}

/// Record types the cache API accepts on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter, EnumString)]
pub enum RecordType {
    A,
    #[allow(clippy::upper_case_acronyms)]
    AAAA,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_insert_request_uses_type_on_the_wire() {
        let req = InsertRequest::new("example.com", "A", "1.2.3.4", 300);
        let json = serde_json::to_value(&req).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["key"], "example.com");
        assert_eq!(object["type"], "A");
        assert_eq!(object["value"], "1.2.3.4");
        assert_eq!(object["ttl"], "300");
    }

    #[test]
    fn test_delete_request_only_carries_key() {
        let json = serde_json::to_value(DeleteRequest::new("google.com.A.")).unwrap();
        assert_eq!(json, serde_json::json!({ "key": "google.com.A." }));
    }

    #[test]
    fn test_record_types() {
        let names: Vec<String> = RecordType::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["A", "AAAA"]);
        assert_eq!(RecordType::from_str("AAAA").unwrap(), RecordType::AAAA);
        assert!(RecordType::from_str("MX").is_err());
    }
}
