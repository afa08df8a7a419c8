//! Merged secrets bundle

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Flat key/value mapping accumulated from every configured secret
///
/// Values are zeroed on drop or when overwritten, and never shown by `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedSecrets {
    entries: BTreeMap<String, String>,
}

impl MergedSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a secret payload as a flat string-to-string object
    pub fn from_payload(payload: &str) -> Result<Self, serde_json::Error> {
        let entries: BTreeMap<String, String> = serde_json::from_str(payload)?;
        Ok(Self { entries })
    }

    /// Shallow-merge `other` over `self`; keys in `other` win
    pub fn merge(&mut self, mut other: MergedSecrets) {
        for (key, value) in std::mem::take(&mut other.entries) {
            self.insert(key, value);
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if let Some(mut displaced) = self.entries.insert(key.into(), value.into()) {
            displaced.zeroize();
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON form written to the transient secrets file
    pub fn to_json(&self) -> Result<Zeroizing<String>, serde_json::Error> {
        serde_json::to_string(self).map(Zeroizing::new)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MergedSecrets {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Drop for MergedSecrets {
    fn drop(&mut self) {
        for value in self.entries.values_mut() {
            value.zeroize();
        }
    }
}

impl fmt::Debug for MergedSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.keys().map(|k| (k, "[REDACTED]")))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_payload_flat_object() {
        let secrets = MergedSecrets::from_payload(r#"{"DB_USER":"app","DB_PASS":"hunter2"}"#)
            .unwrap();
        assert_eq!(secrets.len(), 2);
        assert_eq!(secrets.get("DB_USER"), Some("app"));
    }

    #[test]
    fn test_from_payload_rejects_nested_and_non_string() {
        assert!(MergedSecrets::from_payload(r#"{"A":{"B":"c"}}"#).is_err());
        assert!(MergedSecrets::from_payload(r#"{"PORT":5432}"#).is_err());
        assert!(MergedSecrets::from_payload(r#"["a","b"]"#).is_err());
        assert!(MergedSecrets::from_payload("not json").is_err());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut acc: MergedSecrets = [("X", "1"), ("Z", "9")].into_iter().collect();
        acc.merge([("X", "2"), ("Y", "3")].into_iter().collect());

        assert_eq!(acc.get("X"), Some("2"));
        assert_eq!(acc.get("Y"), Some("3"));
        assert_eq!(acc.get("Z"), Some("9"));
        assert_eq!(acc.len(), 3);
    }

    #[test]
    fn test_debug_redacts_values() {
        let secrets: MergedSecrets = [("API_KEY", "sensitive")].into_iter().collect();
        let debug_str = format!("{:?}", secrets);

        assert!(debug_str.contains("API_KEY"));
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("sensitive"));
    }

    #[test]
    fn test_to_json_is_flat_object() {
        let secrets: MergedSecrets = [("X", "2"), ("Y", "3")].into_iter().collect();
        assert_eq!(secrets.to_json().unwrap().as_str(), r#"{"X":"2","Y":"3"}"#);
    }

    #[test]
    fn test_merge_overlapping_keys_replaces_every_value() {
        let mut acc: MergedSecrets = [("A", "old-a"), ("B", "old-b")].into_iter().collect();
        let mut other: MergedSecrets = [("A", "new-a")].into_iter().collect();
        other.insert("B", "new-b");
        other.insert("B", "newer-b");

        acc.merge(other);

        let expected: MergedSecrets = [("A", "new-a"), ("B", "newer-b")].into_iter().collect();
        assert_eq!(acc, expected);
        assert!(!acc.to_json().unwrap().contains("old-"));
    }
}
