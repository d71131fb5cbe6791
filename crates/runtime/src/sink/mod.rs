//! Bucket sinks contributions are merged into.
//!
//! A [`LootSinks`] holds one [`BucketMap`] per category. Hosts seed it with
//! their native buckets before a pass; routing then appends one pool per
//! contributing definition.

mod bucket;

pub use bucket::{BASE_MULTIPLIER, Bucket, LootPool};

use std::collections::BTreeMap;
use std::collections::btree_map;

use loot_core::{Category, ResourceId};

/// Buckets of a single category keyed by target id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BucketMap {
    category: Category,
    buckets: BTreeMap<ResourceId, Bucket>,
}

impl BucketMap {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            buckets: BTreeMap::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Bucket> {
        self.buckets.get(id)
    }

    /// Existing bucket for `id`, or a new empty one.
    ///
    /// `subject` is only used when a bucket is created.
    pub fn get_or_create(&mut self, id: &ResourceId, subject: Option<&ResourceId>) -> &mut Bucket {
        let category = self.category;
        self.buckets
            .entry(id.clone())
            .or_insert_with(|| Bucket::new(id.clone(), category, subject.cloned()))
    }

    /// Seeds a host-native bucket, replacing any bucket with the same id.
    pub fn insert(&mut self, bucket: Bucket) -> Option<Bucket> {
        self.buckets.insert(bucket.id().clone(), bucket)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets sorted by id.
    pub fn iter(&self) -> btree_map::Values<'_, ResourceId, Bucket> {
        self.buckets.values()
    }
}

impl<'a> IntoIterator for &'a BucketMap {
    type Item = &'a Bucket;
    type IntoIter = btree_map::Values<'a, ResourceId, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The five per-category bucket maps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LootSinks {
    chests: BucketMap,
    blocks: BucketMap,
    entities: BucketMap,
    gameplay: BucketMap,
    archaeology: BucketMap,
}

impl Default for LootSinks {
    fn default() -> Self {
        Self::new()
    }
}

impl LootSinks {
    pub fn new() -> Self {
        Self {
            chests: BucketMap::new(Category::Chest),
            blocks: BucketMap::new(Category::Block),
            entities: BucketMap::new(Category::Entity),
            gameplay: BucketMap::new(Category::Gameplay),
            archaeology: BucketMap::new(Category::Archaeology),
        }
    }

    /// Fixed decision table: every category owns exactly one map.
    pub fn map_for(&self, category: Category) -> &BucketMap {
        match category {
            Category::Chest => &self.chests,
            Category::Block => &self.blocks,
            Category::Entity => &self.entities,
            Category::Gameplay => &self.gameplay,
            Category::Archaeology => &self.archaeology,
        }
    }

    pub fn map_for_mut(&mut self, category: Category) -> &mut BucketMap {
        match category {
            Category::Chest => &mut self.chests,
            Category::Block => &mut self.blocks,
            Category::Entity => &mut self.entities,
            Category::Gameplay => &mut self.gameplay,
            Category::Archaeology => &mut self.archaeology,
        }
    }

    /// Looks up a bucket by category and target id.
    pub fn bucket(&self, category: Category, id: &ResourceId) -> Option<&Bucket> {
        self.map_for(category).get(id)
    }

    pub fn maps(&self) -> [&BucketMap; 5] {
        [
            &self.chests,
            &self.blocks,
            &self.entities,
            &self.gameplay,
            &self.archaeology,
        ]
    }

    pub fn bucket_count(&self) -> usize {
        self.maps().iter().map(|map| map.len()).sum()
    }

    pub fn entry_count(&self) -> usize {
        self.maps()
            .iter()
            .flat_map(|map| map.iter())
            .map(Bucket::entry_count)
            .sum()
    }
}
