//! Form-encoded request bodies for the Galileo-FT API.
//!
//! Every call carries the three authentication fields plus a fresh
//! `transactionId`; the remaining fields depend on the endpoint.

use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::GalileoConfig;

/// Zero-based page index and requested record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationVars {
    pub page: u32,
    pub count: u32,
}

impl PaginationVars {
    pub fn new(page: u32, count: u32) -> Self {
        Self { page, count }
    }
}

/// Fields of one API request.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pub account_no: Option<String>,
    pub group_id: Option<String>,
    pub group_ids: Vec<String>,
    pub account_ids: Vec<String>,
    pub pagination: Option<PaginationVars>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn account_no(mut self, account_no: impl Into<String>) -> Self {
        self.account_no = Some(account_no.into());
        self
    }

    #[must_use]
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    #[must_use]
    pub fn group_ids(mut self, group_ids: &[String]) -> Self {
        self.group_ids.extend_from_slice(group_ids);
        self
    }

    #[must_use]
    pub fn account_ids(mut self, account_ids: &[String]) -> Self {
        self.account_ids.extend_from_slice(account_ids);
        self
    }

    #[must_use]
    pub fn pagination(mut self, vars: PaginationVars) -> Self {
        self.pagination = Some(vars);
        self
    }

    /// Encode into ordered key/value pairs with credentials and a new
    /// transaction id. List fields become repeated keys.
    pub fn encode(&self, config: &GalileoConfig) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("apiLogin", config.api_login.clone()),
            ("apiTransKey", config.api_trans_key.expose_secret().to_string()),
            ("providerId", config.provider_id.clone()),
            ("transactionId", generate_transaction_id()),
        ];

        if let Some(account_no) = self.account_no.as_ref().filter(|a| !a.is_empty()) {
            form.push(("accountNo", account_no.clone()));
        }

        if let Some(group_id) = self.group_id.as_ref().filter(|g| !g.is_empty()) {
            form.push(("groupId", group_id.clone()));
        }

        form.extend(self.group_ids.iter().map(|id| ("groupIds", id.clone())));
        form.extend(self.account_ids.iter().map(|id| ("accountNos", id.clone())));

        if let Some(vars) = self.pagination {
            form.push(("page", vars.page.to_string()));
            form.push(("recordCnt", vars.count.to_string()));
        }

        form
    }
}

fn generate_transaction_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config() -> GalileoConfig {
        GalileoConfig::new("login", "key", "provider")
    }

    fn values<'a>(form: &'a [(&'static str, String)], key: &str) -> Vec<&'a str> {
        form.iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn test_auth_fields_always_present() {
        let form = FormData::new().encode(&config());
        assert_eq!(values(&form, "apiLogin"), vec!["login"]);
        assert_eq!(values(&form, "apiTransKey"), vec!["key"]);
        assert_eq!(values(&form, "providerId"), vec!["provider"]);
        assert_eq!(values(&form, "transactionId").len(), 1);
        assert!(values(&form, "accountNo").is_empty());
        assert!(values(&form, "groupId").is_empty());
        assert!(values(&form, "page").is_empty());
    }

    #[test]
    fn test_transaction_id_unique_per_call() {
        let data = FormData::new();
        let config = config();
        let ids: HashSet<String> = (0..50)
            .map(|_| values(&data.encode(&config), "transactionId")[0].to_string())
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_list_fields_repeat_keys() {
        let form = FormData::new()
            .group_id("root")
            .group_ids(&["g1".to_string(), "g2".to_string()])
            .account_ids(&["a1".to_string()])
            .encode(&config());

        assert_eq!(values(&form, "groupId"), vec!["root"]);
        assert_eq!(values(&form, "groupIds"), vec!["g1", "g2"]);
        assert_eq!(values(&form, "accountNos"), vec!["a1"]);
    }

    #[test]
    fn test_pagination_fields() {
        let form = FormData::new()
            .pagination(PaginationVars::new(3, 50))
            .encode(&config());
        assert_eq!(values(&form, "page"), vec!["3"]);
        assert_eq!(values(&form, "recordCnt"), vec!["50"]);
    }

    #[test]
    fn test_empty_ids_are_skipped() {
        let form = FormData::new().account_no("").group_id("").encode(&config());
        assert!(values(&form, "accountNo").is_empty());
        assert!(values(&form, "groupId").is_empty());
    }
}
