// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::path::Path;

use crate::calendar::STRAND_COUNT;

/// Descriptive metadata for a single strand.
///
/// Field names mirror the catalog file keys. `hidden` keeps the literal
/// "Yes"/"No" string from the file and is matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrandEntry {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Hidden")]
    pub hidden: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Low_Effect")]
    pub low_effect: String,

    #[serde(rename = "Mid_Effect")]
    pub mid_effect: String,

    #[serde(rename = "High_Effect")]
    pub high_effect: String,
}

impl Default for StrandEntry {
    fn default() -> Self {
        StrandEntry {
            name: String::new(),
            hidden: "No".to_string(),
            description: String::new(),
            low_effect: String::new(),
            mid_effect: String::new(),
            high_effect: String::new(),
        }
    }
}

impl StrandEntry {
    /// Hidden entries suppress their name everywhere it would be displayed.
    pub fn is_hidden(&self) -> bool {
        self.hidden.eq_ignore_ascii_case("yes")
    }

    fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.low_effect.is_empty()
            && self.mid_effect.is_empty()
            && self.high_effect.is_empty()
    }
}

/// Read-only lookup table of all 96 strands, loaded once per session.
#[derive(Debug, Clone)]
pub struct StrandCatalog {
    entries: Vec<StrandEntry>,
}

impl StrandCatalog {
    /// A catalog with every strand blank.
    pub fn empty() -> Self {
        StrandCatalog {
            entries: vec![StrandEntry::default(); STRAND_COUNT],
        }
    }

    /// Loads the catalog from a JSON file keyed by strand id strings.
    ///
    /// Never fails: a missing or unreadable file yields the empty catalog,
    /// and ids absent from the file default to blank entries.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "strand catalog unavailable, using empty catalog");
                return Self::empty();
            }
        };

        let mut by_id: HashMap<String, StrandEntry> = match serde_json::from_str(&raw) {
            Ok(by_id) => by_id,
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "strand catalog malformed, using empty catalog");
                return Self::empty();
            }
        };

        let entries = (1..=STRAND_COUNT)
            .map(|id| by_id.remove(&id.to_string()).unwrap_or_default())
            .collect();
        StrandCatalog { entries }
    }

    /// Looks up a strand by its displayed id (1..=96).
    pub fn get(&self, id: usize) -> &StrandEntry {
        &self.entries[id.clamp(1, STRAND_COUNT) - 1]
    }

    /// The name shown in banners: empty when the entry is hidden.
    pub fn visible_name(&self, id: usize) -> &str {
        let entry = self.get(id);
        if entry.is_hidden() {
            ""
        } else {
            entry.name.trim()
        }
    }

    /// Multi-line rendering of a strand's effects.
    ///
    /// Hidden or fully blank entries render as "No Effects.".
    pub fn effect_summary(&self, id: usize) -> String {
        let entry = self.get(id);
        if entry.is_hidden() || entry.is_blank() {
            return "No Effects.".to_string();
        }

        fn or_dash(s: &str) -> &str {
            if s.is_empty() { "—" } else { s }
        }

        format!(
            "Name: {}\nDescription: {}\nLow_Effect: {}\nMid_Effect: {}\nHigh_Effect: {}",
            if entry.name.is_empty() {
                "Unnamed Strand"
            } else {
                &entry.name
            },
            or_dash(&entry.description),
            or_dash(&entry.low_effect),
            or_dash(&entry.mid_effect),
            or_dash(&entry.high_effect),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_catalog(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strands.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = StrandCatalog::load(&dir.path().join("nope.json"));
        assert_eq!(catalog.visible_name(1), "");
        assert_eq!(catalog.effect_summary(1), "No Effects.");
    }

    #[test]
    fn malformed_file_yields_empty_catalog() {
        let (_dir, path) = write_catalog("not json at all");
        let catalog = StrandCatalog::load(&path);
        assert_eq!(catalog.visible_name(42), "");
    }

    #[test]
    fn loads_entries_by_id_and_trims_names() {
        let (_dir, path) = write_catalog(
            r#"{"3": {"Name": "  Vex  ", "Hidden": "No", "Description": "A thread of luck"}}"#,
        );
        let catalog = StrandCatalog::load(&path);
        assert_eq!(catalog.visible_name(3), "Vex");
        assert_eq!(catalog.visible_name(4), "");
    }

    #[test]
    fn hidden_entries_never_expose_a_name() {
        let (_dir, path) = write_catalog(r#"{"5": {"Name": "Secret", "Hidden": "YES"}}"#);
        let catalog = StrandCatalog::load(&path);
        assert_eq!(catalog.visible_name(5), "");
        assert_eq!(catalog.effect_summary(5), "No Effects.");
    }

    #[test]
    fn effect_summary_substitutes_placeholders() {
        let (_dir, path) =
            write_catalog(r#"{"2": {"Name": "Vex", "Hidden": "No", "Low_Effect": "Stumble"}}"#);
        let catalog = StrandCatalog::load(&path);
        assert_eq!(
            catalog.effect_summary(2),
            "Name: Vex\nDescription: —\nLow_Effect: Stumble\nMid_Effect: —\nHigh_Effect: —"
        );
    }

    #[test]
    fn nameless_entry_with_effects_reads_unnamed() {
        let (_dir, path) = write_catalog(r#"{"7": {"Hidden": "No", "Description": "odd"}}"#);
        let catalog = StrandCatalog::load(&path);
        assert!(catalog.effect_summary(7).starts_with("Name: Unnamed Strand"));
    }
}
