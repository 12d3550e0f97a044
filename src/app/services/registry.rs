//! Immutable file-type registry
//!
//! Maps each file-type key to its parsing configuration. Entries are defined
//! once at startup and the registry is passed by reference to the components
//! that need lookups; nothing mutates it afterwards.

use crate::app::models::FileTypeConfig;
use crate::Result;
use std::collections::HashMap;

/// Registry of file-type parsing configurations
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: HashMap<String, FileTypeConfig>,
}

impl TypeRegistry {
    /// Build a registry from explicit (key, config) entries.
    ///
    /// A later entry with the same key replaces an earlier one.
    pub fn from_entries(entries: Vec<(String, FileTypeConfig)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Build the registry of the four real-time ACE telemetry products
    /// published by NOAA SWPC.
    pub fn builtin() -> Result<Self> {
        let columns = |names: &[&str]| -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        };
        let markers = |values: &[&str]| -> Vec<String> {
            values.iter().map(|s| s.to_string()).collect()
        };

        let entries = vec![
            (
                "_ace_epam_5m".to_string(),
                FileTypeConfig::new(
                    "_ace_epam_5m.txt",
                    14,
                    columns(&[
                        "YR",
                        "MO",
                        "DA",
                        "HHMM",
                        "Julian Day",
                        "Seconds of the Day",
                        "Electron S",
                        "38-53",
                        "175-315",
                        "Proton S",
                        "47-68",
                        "115-195",
                        "310-580",
                        "795-1193",
                        "1060-1900",
                        "Anis. Index",
                    ]),
                    markers(&["-1.00e+05", "-1.00"]),
                )?,
            ),
            (
                "_ace_mag_1m".to_string(),
                FileTypeConfig::new(
                    "_ace_mag_1m.txt",
                    12,
                    columns(&[
                        "YR",
                        "MO",
                        "DA",
                        "HHMM",
                        "Julian Day",
                        "Seconds of the Day",
                        "S",
                        "Bx",
                        "By",
                        "Bz",
                        "Bt",
                        "Lat.",
                        "Long.",
                    ]),
                    markers(&["-999.9"]),
                )?,
            ),
            (
                "_ace_sis_5m".to_string(),
                FileTypeConfig::new(
                    "_ace_sis_5m.txt",
                    12,
                    columns(&[
                        "YR",
                        "MO",
                        "DA",
                        "HHMM",
                        "Julian Day",
                        "Seconds of the Day",
                        "S (>10 MeV)",
                        ">10 MeV",
                        "S (>30 MeV)",
                        ">30 MeV",
                    ]),
                    markers(&["-1.00e+05"]),
                )?,
            ),
            (
                "_ace_swepam_1m".to_string(),
                FileTypeConfig::new(
                    "_ace_swepam_1m.txt",
                    12,
                    columns(&[
                        "YR",
                        "MO",
                        "DA",
                        "HHMM",
                        "Julian Day",
                        "Seconds of the Day",
                        "S",
                        "Proton Density",
                        "Bulk Speed",
                        "Ion Temperature",
                    ]),
                    markers(&["-9999.9", "-1.00e+05"]),
                )?,
            ),
        ];

        Ok(Self::from_entries(entries))
    }

    /// Look up the configuration for a file-type key
    pub fn lookup(&self, file_type: &str) -> Option<&FileTypeConfig> {
        self.entries.get(file_type)
    }

    /// Check whether a file-type key is registered
    pub fn contains(&self, file_type: &str) -> bool {
        self.entries.contains_key(file_type)
    }

    /// Number of registered file types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (key, config) pairs sorted by key for stable reporting
    pub fn iter_sorted(&self) -> Vec<(&str, &FileTypeConfig)> {
        let mut pairs: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        pairs.sort_by_key(|(k, _)| *k);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_four_entries() {
        let registry = TypeRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 4);
        assert!(registry.contains("_ace_epam_5m"));
        assert!(registry.contains("_ace_mag_1m"));
        assert!(registry.contains("_ace_sis_5m"));
        assert!(registry.contains("_ace_swepam_1m"));
    }

    #[test]
    fn test_lookup_unknown_key() {
        let registry = TypeRegistry::builtin().unwrap();
        assert!(registry.lookup("_ace_unknown").is_none());
    }

    #[test]
    fn test_builtin_epam_config() {
        let registry = TypeRegistry::builtin().unwrap();
        let config = registry.lookup("_ace_epam_5m").unwrap();

        assert_eq!(config.skip_rows, 14);
        assert_eq!(config.columns.len(), 16);
        assert_eq!(config.columns[0], "YR");
        assert_eq!(config.columns[3], "HHMM");
        assert!(config.is_missing_value("-1.00e+05"));
        assert!(config.is_missing_value("-1.00"));
    }

    #[test]
    fn test_custom_entry_without_touching_other_components() {
        let config = FileTypeConfig::new(
            "_ace_sis_1h.txt",
            12,
            vec!["YR", "MO", "DA", "HHMM", ">10 MeV"]
                .into_iter()
                .map(String::from)
                .collect(),
            vec!["-1.00e+05".to_string()],
        )
        .unwrap();

        let registry = TypeRegistry::from_entries(vec![("_ace_sis_1h".to_string(), config)]);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup("_ace_sis_1h").unwrap().suffix,
            "_ace_sis_1h.txt"
        );
    }

    #[test]
    fn test_iter_sorted_is_stable() {
        let registry = TypeRegistry::builtin().unwrap();
        let keys: Vec<&str> = registry.iter_sorted().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "_ace_epam_5m",
                "_ace_mag_1m",
                "_ace_sis_5m",
                "_ace_swepam_1m"
            ]
        );
    }
}
