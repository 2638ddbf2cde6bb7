use serde::Deserialize;
use shared_http::api::{DeleteRequest, InsertRequest};

// Markup contract shared by the rendered page and the form handlers
pub const DELETE_BUTTON_CLASS: &str = "delete-button";
pub const DATA_KEY_ATTR: &str = "data-key";
pub const ADD_FORM_ID: &str = "add-form";
pub const ADD_URL_ID: &str = "add-url";
pub const ADD_TYPE_ID: &str = "add-type";
pub const ADD_IP_ID: &str = "add-ip";
pub const ADD_TTL_ID: &str = "add-ttl";

/// Whatever hosts the panel and can show it afresh
pub trait PageControl: Send {
    fn reload(&mut self);
}

/// Records reload requests so the front-end can act on them once the handler returns
#[derive(Debug, Default)]
pub struct ReloadFlag {
    reloads: usize,
}

impl ReloadFlag {
    pub fn requested(&self) -> bool {
        self.reloads > 0
    }

    pub fn count(&self) -> usize {
        self.reloads
    }
}

impl PageControl for ReloadFlag {
    fn reload(&mut self) {
        self.reloads += 1;
    }
}

/// A delete control bound to exactly one cache key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteControl {
    key: String,
}

impl DeleteControl {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// A control without a `data-key` cannot delete anything
    pub fn from_data_key(data_key: Option<&str>) -> Option<Self> {
        data_key.map(Self::new)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn to_request(&self) -> DeleteRequest {
        DeleteRequest::new(self.key.clone())
    }
}

/// Field values of the add form, named by their input ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddForm {
    #[serde(rename = "add-url", default)]
    pub url: String,
    #[serde(rename = "add-type", default)]
    pub record_type: String,
    #[serde(rename = "add-ip", default)]
    pub ip: String,
    #[serde(rename = "add-ttl", default)]
    pub ttl: String,
}

impl AddForm {
    pub fn to_request(&self) -> InsertRequest {
        InsertRequest::new(
            self.url.clone(),
            self.record_type.clone(),
            self.ip.clone(),
            self.ttl.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_without_key_is_rejected() {
        assert_eq!(DeleteControl::from_data_key(None), None);
        assert_eq!(
            DeleteControl::from_data_key(Some("google.com.A."))
                .unwrap()
                .key(),
            "google.com.A."
        );
    }

    #[test]
    fn test_add_form_maps_inputs_to_insert_fields() {
        let form = AddForm {
            url: "example.com".into(),
            record_type: "A".into(),
            ip: "1.2.3.4".into(),
            ttl: "300".into(),
        };

        assert_eq!(
            form.to_request(),
            InsertRequest::new("example.com", "A", "1.2.3.4", "300")
        );
    }

    #[test]
    fn test_reload_flag_counts() {
        let mut page = ReloadFlag::default();
        assert!(!page.requested());
        page.reload();
        assert!(page.requested());
        assert_eq!(page.count(), 1);
    }
}
