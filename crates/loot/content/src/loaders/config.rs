//! Engine configuration loader.

use std::path::Path;

use loot_core::FeatureToggles;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Contents of `loot.toml`.
///
/// ```toml
/// [toggles]
/// parse_chest_loot = true
/// parse_mob_loot = false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LootConfig {
    pub toggles: FeatureToggles,
}

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Omitted toggles default to enabled.
    pub fn load(path: &Path) -> LoadResult<LootConfig> {
        let content = read_file(path)?;
        let config: LootConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<LootConfig> {
        if !path.exists() {
            debug!(
                target: "loot::config",
                path = %path.display(),
                "No config file; all categories enabled"
            );
            return Ok(LootConfig::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loot_core::Category;

    #[test]
    fn partial_toggles_default_to_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loot.toml");
        std::fs::write(&path, "[toggles]\nparse_mob_loot = false\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert!(!config.toggles.is_enabled(Category::Entity));
        assert!(config.toggles.is_enabled(Category::Chest));
        assert!(config.toggles.is_enabled(Category::Archaeology));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("loot.toml")).unwrap();
        assert_eq!(config, LootConfig::default());
        assert!(ConfigLoader::load(&dir.path().join("loot.toml")).is_err());
    }

    #[test]
    fn rejects_unknown_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loot.toml");
        std::fs::write(&path, "[toggels]\nparse_mob_loot = false\n").unwrap();
        assert!(ConfigLoader::load(&path).is_err());
    }
}
