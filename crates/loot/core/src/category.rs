//! Loot context categories and the per-category feature toggles.

/// Triggering situation class that selects which bucket map a definition
/// contributes to.
///
/// Parsing is case-insensitive. Fishing, gift and piglin barter contexts all
/// share the gameplay bucket map, so their names parse to [`Category::Gameplay`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    /// Container loot.
    Chest,
    /// Block drops.
    Block,
    /// Creature drops. Buckets in this category carry a subject entity id.
    Entity,
    /// Passive gameplay rewards.
    #[strum(
        to_string = "gameplay",
        serialize = "fishing",
        serialize = "gift",
        serialize = "barter",
        serialize = "piglin_barter"
    )]
    #[cfg_attr(
        feature = "serde",
        serde(alias = "fishing", alias = "gift", alias = "barter", alias = "piglin_barter")
    )]
    Gameplay,
    /// Excavation loot.
    Archaeology,
}

/// Shape of the pool a category's buckets accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PoolShape {
    /// Weighted entries only.
    Simple,
    /// Weighted entries plus pool-level condition and function lists.
    Complex,
}

impl Category {
    /// Fixed folder-name table used when a definition file does not declare
    /// its category explicitly.
    pub const FOLDERS: [(&'static str, Category); 5] = [
        ("chests", Category::Chest),
        ("blocks", Category::Block),
        ("entities", Category::Entity),
        ("gameplay", Category::Gameplay),
        ("archaeology", Category::Archaeology),
    ];

    /// Maps a discovery folder name to its category.
    pub fn from_folder(folder: &str) -> Option<Self> {
        Self::FOLDERS
            .iter()
            .find(|(name, _)| *name == folder)
            .map(|(_, category)| *category)
    }

    /// Folder name under which definition files of this category live.
    pub const fn folder(self) -> &'static str {
        match self {
            Category::Chest => "chests",
            Category::Block => "blocks",
            Category::Entity => "entities",
            Category::Gameplay => "gameplay",
            Category::Archaeology => "archaeology",
        }
    }

    pub const fn pool_shape(self) -> PoolShape {
        match self {
            Category::Chest | Category::Archaeology => PoolShape::Simple,
            Category::Block | Category::Entity | Category::Gameplay => PoolShape::Complex,
        }
    }

    /// Whether buckets of this category must name the entity they belong to.
    pub const fn requires_subject(self) -> bool {
        matches!(self, Category::Entity)
    }
}

/// Per-category opt-out switches.
///
/// A disabled category silently drops every definition that targets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeatureToggles {
    pub parse_chest_loot: bool,
    pub parse_block_loot: bool,
    pub parse_mob_loot: bool,
    pub parse_gameplay_loot: bool,
    pub parse_archaeology_loot: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl FeatureToggles {
    pub const fn all_enabled() -> Self {
        Self {
            parse_chest_loot: true,
            parse_block_loot: true,
            parse_mob_loot: true,
            parse_gameplay_loot: true,
            parse_archaeology_loot: true,
        }
    }

    pub const fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Chest => self.parse_chest_loot,
            Category::Block => self.parse_block_loot,
            Category::Entity => self.parse_mob_loot,
            Category::Gameplay => self.parse_gameplay_loot,
            Category::Archaeology => self.parse_archaeology_loot,
        }
    }

    /// Returns a copy with `category` switched on or off.
    pub const fn with(mut self, category: Category, enabled: bool) -> Self {
        match category {
            Category::Chest => self.parse_chest_loot = enabled,
            Category::Block => self.parse_block_loot = enabled,
            Category::Entity => self.parse_mob_loot = enabled,
            Category::Gameplay => self.parse_gameplay_loot = enabled,
            Category::Archaeology => self.parse_archaeology_loot = enabled,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("CHEST".parse::<Category>().unwrap(), Category::Chest);
        assert_eq!("entity".parse::<Category>().unwrap(), Category::Entity);
        assert_eq!("Archaeology".parse::<Category>().unwrap(), Category::Archaeology);
        assert!("container".parse::<Category>().is_err());
    }

    #[test]
    fn gameplay_aliases() {
        for alias in ["gameplay", "fishing", "GIFT", "barter", "piglin_barter"] {
            assert_eq!(alias.parse::<Category>().unwrap(), Category::Gameplay, "{alias}");
        }
        assert_eq!(Category::Gameplay.to_string(), "gameplay");
    }

    #[test]
    fn folder_table_round_trips() {
        for category in Category::iter() {
            assert_eq!(Category::from_folder(category.folder()), Some(category));
        }
        assert_eq!(Category::from_folder("chest"), None);
    }

    #[test]
    fn pool_shapes() {
        assert_eq!(Category::Chest.pool_shape(), PoolShape::Simple);
        assert_eq!(Category::Archaeology.pool_shape(), PoolShape::Simple);
        assert_eq!(Category::Entity.pool_shape(), PoolShape::Complex);
    }

    #[test]
    fn toggles_select_one_category() {
        let toggles = FeatureToggles::default().with(Category::Block, false);
        assert!(!toggles.is_enabled(Category::Block));
        assert!(toggles.is_enabled(Category::Chest));
        assert!(toggles.is_enabled(Category::Entity));
    }
}
