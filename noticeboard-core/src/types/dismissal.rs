//! Dismissal record type

use serde::{Deserialize, Deserializer, Serialize};

/// Per-user record of dismissed message identifiers.
///
/// Append-only: identifiers are never pruned, including those of
/// messages that have since expired. Serialized as the document
/// `{"dismissed": [...]}`; a stored bare array (written by earlier
/// versions of the widget) is accepted on read.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DismissalRecord {
    pub dismissed: Vec<String>,
}

/// Stored document shape detection (dual-format support).
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Document { dismissed: Vec<String> },
    Bare(Vec<String>),
}

impl<'de> Deserialize<'de> for DismissalRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dismissed = match StoredRecord::deserialize(deserializer)? {
            StoredRecord::Document { dismissed } | StoredRecord::Bare(dismissed) => dismissed,
        };
        Ok(Self { dismissed })
    }
}

impl DismissalRecord {
    /// Whether `id` has been dismissed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.dismissed.iter().any(|d| d == id)
    }

    /// Append an identifier to the record.
    pub fn push(&mut self, id: String) {
        self.dismissed.push(id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dismissed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dismissed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_contains_nothing() {
        let r = DismissalRecord::default();
        assert!(r.is_empty());
        assert!(!r.contains("2025-06-01x"));
    }

    #[test]
    fn push_then_contains() {
        let mut r = DismissalRecord::default();
        r.push("2025-06-01x".to_string());
        assert!(r.contains("2025-06-01x"));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn deserializes_document_shape() {
        let r: DismissalRecord = serde_json::from_str(r#"{"dismissed":["a","b"]}"#).unwrap();
        assert_eq!(r.dismissed, vec!["a", "b"]);
    }

    #[test]
    fn deserializes_bare_array_shape() {
        let r: DismissalRecord = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(r.dismissed, vec!["a", "b"]);
    }

    #[test]
    fn serializes_document_shape() {
        let mut r = DismissalRecord::default();
        r.push("a".to_string());
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"dismissed":["a"]}"#);
    }
}
