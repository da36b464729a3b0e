//! Mapping tables and key collision detection.
pub mod title_case;
pub mod translations;

use crate::types::*;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// A replacement value and the table it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub table: String,
    pub value: String,
}

/// A key bound to more than one distinct replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub key: String,
    pub candidates: Vec<Candidate>,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' maps to ", self.key)?;
        for (i, c) in self.candidates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}' ({})", c.value, c.table)?;
        }
        Ok(())
    }
}

/// A mapping from exact source strings to exact replacements.
///
/// Entries are deduplicated by value, so a key repeated with the same
/// replacement is harmless. A key with several distinct replacements is a
/// [Collision]: it is kept for reporting but never used for substitution.
#[derive(Clone, Debug, Default)]
pub struct MappingTable {
    name: String,
    map: BTreeMap<String, Vec<Candidate>>,
}

impl MappingTable {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            map: BTreeMap::new(),
        }
    }

    /// Builds a table from `(source, replacement)` pairs.
    pub fn from_pairs(name: &str, pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::new(name);
        for (key, value) in pairs {
            table.insert(key, value);
        }
        table
    }

    /// Merges several tables into one, keeping where each value came from.
    pub fn merge(name: &str, tables: &[MappingTable]) -> Self {
        let mut merged = Self::new(name);
        for table in tables {
            for (key, candidates) in table.map.iter() {
                for c in candidates {
                    merged.insert_candidate(key, c.clone());
                }
            }
        }
        merged
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        let candidate = Candidate {
            table: self.name.clone(),
            value: value.to_string(),
        };
        self.insert_candidate(key, candidate);
    }

    fn insert_candidate(&mut self, key: &str, candidate: Candidate) {
        let candidates = self.map.entry(key.to_string()).or_default();
        if !candidates.iter().any(|c| c.value == candidate.value) {
            candidates.push(candidate);
        }
    }

    /// Number of distinct keys, conflicting ones included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the replacement for `key` unless the key is missing or conflicting.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.map.get(key) {
            Some(candidates) if candidates.len() == 1 => Some(candidates[0].value.as_str()),
            _ => None,
        }
    }

    /// Iterates over the unambiguous entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().filter_map(|(key, candidates)| {
            if candidates.len() == 1 {
                Some((key.as_str(), candidates[0].value.as_str()))
            } else {
                None
            }
        })
    }

    /// Returns every key with more than one distinct replacement.
    pub fn collisions(&self) -> Vec<Collision> {
        self.map
            .iter()
            .filter(|(_, candidates)| candidates.len() > 1)
            .map(|(key, candidates)| Collision {
                key: key.clone(),
                candidates: candidates.clone(),
            })
            .collect()
    }

    /// Drops entries whose replacement equals the key.
    pub fn without_identity(mut self) -> Self {
        self.map
            .retain(|key, candidates| !(candidates.len() == 1 && candidates[0].value == *key));
        self
    }
}

/// Builds the translation table for `kind`.
pub fn translation_table(kind: TableKind) -> MappingTable {
    match kind {
        TableKind::Primary => MappingTable::from_pairs("primary", translations::PRIMARY),
        TableKind::Legacy => MappingTable::from_pairs("legacy", translations::LEGACY),
        TableKind::All => MappingTable::merge(
            "all",
            &[
                translation_table(TableKind::Primary),
                translation_table(TableKind::Legacy),
            ],
        ),
    }
}

/// Builds the title case dictionary, without entries that are already correct.
pub fn title_case_table() -> MappingTable {
    MappingTable::from_pairs("title-case", title_case::TITLE_CASE).without_identity()
}

/// Loads a mapping table from a CSV (`source,target` header), JSON or YAML file.
pub fn load_table_file(path: &str) -> Result<MappingTable> {
    let name = Path::new(path)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let ext = Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let mut table = MappingTable::new(&name);
    match ext.as_str() {
        "csv" => {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_path(path)?;
            for result in reader.deserialize() {
                let record: MappingCell = result?;
                if record.source.is_empty() || record.target.is_empty() {
                    continue;
                }
                table.insert(&record.source, &record.target);
            }
        }
        "json" | "yaml" | "yml" => {
            let s = crate::utils::files::read_text(path)?;
            let parsed: ReplacementTable = if ext == "json" {
                serde_json::from_str(&s)?
            } else {
                serde_yaml_ng::from_str(&s)?
            };
            for (key, value) in parsed.entries.iter() {
                table.insert(key, value);
            }
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported mapping table format: {} (expected csv, json or yaml)",
                path
            ));
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_keys_are_collisions() {
        let table = MappingTable::from_pairs(
            "t",
            &[("日", "Day"), ("月", "Month"), ("日", "Sun"), ("年", "Year"), ("年", "Year")],
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("日"), None);
        assert_eq!(table.get("年"), Some("Year"));
        let collisions = table.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].key, "日");
        assert_eq!(collisions[0].to_string(), "'日' maps to 'Day' (t), 'Sun' (t)");
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries, vec![("年", "Year"), ("月", "Month")]);
    }

    #[test]
    fn test_merge_reports_cross_table_collisions() {
        let a = MappingTable::from_pairs("a", &[("月", "Mon"), ("はい", "Yes")]);
        let b = MappingTable::from_pairs("b", &[("月", "Month"), ("はい", "Yes")]);
        let merged = MappingTable::merge("all", &[a, b]);
        assert_eq!(merged.get("はい"), Some("Yes"));
        let collisions = merged.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(
            collisions[0].candidates,
            vec![
                Candidate {
                    table: "a".to_string(),
                    value: "Mon".to_string()
                },
                Candidate {
                    table: "b".to_string(),
                    value: "Month".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_builtin_tables() {
        assert!(translation_table(TableKind::Primary).collisions().is_empty());
        let legacy: Vec<String> = translation_table(TableKind::Legacy)
            .collisions()
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(legacy, vec!["日".to_string(), "月".to_string()]);
        let all = translation_table(TableKind::All);
        assert_eq!(
            all.get("このタスクはできましたか？"),
            Some("Did you complete this task?")
        );
        assert!(all.collisions().len() >= 2);

        let title = title_case_table();
        assert_eq!(title.get("Good morning"), Some("Good Morning"));
        assert_eq!(title.get("Settings"), None);
    }

    #[test]
    fn test_load_table_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("extra.csv");
        std::fs::write(&csv_path, "source,target\nはい,Yes\nいいえ,No\n,Empty\n").unwrap();
        let table = load_table_file(csv_path.to_str().unwrap()).unwrap();
        assert_eq!(table.name(), "extra.csv");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("いいえ"), Some("No"));

        let json_path = dir.path().join("extra.json");
        std::fs::write(&json_path, r#"{"はい": "Yes"}"#).unwrap();
        let table = load_table_file(json_path.to_str().unwrap()).unwrap();
        assert_eq!(table.get("はい"), Some("Yes"));

        let dup_path = dir.path().join("dup.json");
        std::fs::write(&dup_path, r#"{"月": "Mon", "はい": "Yes", "月": "Month"}"#).unwrap();
        let table = load_table_file(dup_path.to_str().unwrap()).unwrap();
        assert_eq!(table.get("月"), None);
        assert_eq!(table.get("はい"), Some("Yes"));
        let collisions = table.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(
            collisions[0].to_string(),
            "'月' maps to 'Mon' (dup.json), 'Month' (dup.json)"
        );

        let yaml_path = dir.path().join("extra.yaml");
        std::fs::write(&yaml_path, "はい: Sure\n").unwrap();
        let table = load_table_file(yaml_path.to_str().unwrap()).unwrap();
        assert_eq!(table.get("はい"), Some("Sure"));

        let txt_path = dir.path().join("extra.txt");
        std::fs::write(&txt_path, "").unwrap();
        assert!(load_table_file(txt_path.to_str().unwrap()).is_err());
    }
}
