use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// One record of the `GET /cache/all` listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheEntry {
    pub value: String,
    /// Absolute unix expiry; 0 marks a permanent entry
    #[serde(default)]
    pub ttl: i64,
}

/// The listing body: a JSON object keyed by cache key
pub type CacheListing = BTreeMap<String, CacheEntry>;

/// A listing entry ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub key: String,
    pub value: String,
    pub expires: String,
}

impl EntryRow {
    pub fn from_listing(listing: CacheListing) -> Vec<Self> {
        Self::from_listing_in(listing, &Local)
    }

    pub fn from_listing_in<Tz>(listing: CacheListing, tz: &Tz) -> Vec<Self>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        // BTreeMap iteration keeps rows sorted by key
        listing
            .into_iter()
            .map(|(key, entry)| Self {
                key,
                value: entry.value,
                expires: format_expiry_in(entry.ttl, tz),
            })
            .collect()
    }
}

pub fn parse_listing(body: &str) -> shared::Result<CacheListing> {
    if body.trim() == "null" {
        return Ok(CacheListing::new());
    }
    serde_json::from_str(body).map_err(|e| shared::Error::Decode(e.to_string()))
}

const EXPIRY_FORMAT: &str = "%H:%M:%S %d.%m.%Y";

pub fn format_expiry(timestamp: i64) -> String {
    format_expiry_in(timestamp, &Local)
}

pub fn format_expiry_in<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if timestamp == 0 {
        return "∞".to_string();
    }

    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(tz).format(EXPIRY_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}
