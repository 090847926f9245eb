//! Data models for secure-note editing.

use crate::document;
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use std::fmt;

/// Vault scope for every op invocation, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vault {
    Shared,
    Private,
}

impl Vault {
    /// Vault name as op expects it on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vault::Shared => "Shared",
            Vault::Private => "Private",
        }
    }
}

impl fmt::Display for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A secure-note item as returned by `op item list`.
///
/// Identity lives in `id`; op owns and assigns it. Extra fields in the
/// op response are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VaultItem {
    pub id: String,
    pub title: String,
    pub updated_at: String,
}

impl VaultItem {
    /// Render `updated_at` as `YYYY-MM-DD` for the selection menu.
    ///
    /// Accepts RFC 3339 and naive ISO timestamps; anything else is shown
    /// verbatim rather than failing the listing.
    pub fn updated_on(&self) -> String {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.updated_at) {
            return ts.format("%Y-%m-%d").to_string();
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(&self.updated_at, "%Y-%m-%dT%H:%M:%S%.f") {
            return ts.format("%Y-%m-%d").to_string();
        }
        self.updated_at.clone()
    }
}

/// Transient composition of an item's title and plaintext note body.
///
/// Built fresh on each fetch and never persisted; only the derived
/// title/value are written back to the vault.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub title: String,
    pub value: String,
    pub document: String,
}

impl Note {
    /// Assemble a note from its title and already-trimmed body.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        let title = title.into();
        let value = value.into();
        let document = document::assemble(&title, &value);
        Self {
            title,
            value,
            document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(updated_at: &str) -> VaultItem {
        VaultItem {
            id: "abc123".to_string(),
            title: "Recipe".to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    #[test]
    fn test_updated_on_rfc3339() {
        assert_eq!(item("2024-01-02T10:30:00Z").updated_on(), "2024-01-02");
        assert_eq!(
            item("2024-06-15T08:00:00+02:00").updated_on(),
            "2024-06-15"
        );
    }

    #[test]
    fn test_updated_on_naive() {
        assert_eq!(item("2024-01-01T00:00:00").updated_on(), "2024-01-01");
        assert_eq!(item("2024-03-09T23:59:59.123").updated_on(), "2024-03-09");
    }

    #[test]
    fn test_updated_on_unparseable_is_verbatim() {
        assert_eq!(item("last tuesday").updated_on(), "last tuesday");
    }

    #[test]
    fn test_note_document_assembly() {
        let note = Note::new("Recipe", "Flour\nWater");
        assert_eq!(note.document, "# Recipe\n\nFlour\nWater");
    }

    #[test]
    fn test_vault_names() {
        assert_eq!(Vault::Shared.as_str(), "Shared");
        assert_eq!(Vault::Private.to_string(), "Private");
    }
}
