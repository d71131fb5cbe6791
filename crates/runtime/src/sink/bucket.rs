use loot_core::{Category, ConditionToken, Entry, FunctionToken, PoolShape, ResourceId};

/// Display weight multiplier applied to every contributed pool.
pub const BASE_MULTIPLIER: f32 = 1.0;

/// A weighted pool appended to a bucket.
///
/// Complex pools additionally carry pool-level conditions and functions;
/// contributed pools leave both empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LootPool {
    multiplier: f32,
    shape: PoolShape,
    entries: Vec<Entry>,
    conditions: Vec<ConditionToken>,
    functions: Vec<FunctionToken>,
}

impl LootPool {
    pub fn new(shape: PoolShape, entries: Vec<Entry>) -> Self {
        Self {
            multiplier: BASE_MULTIPLIER,
            shape,
            entries,
            conditions: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn shape(&self) -> PoolShape {
        self.shape
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn conditions(&self) -> &[ConditionToken] {
        &self.conditions
    }

    pub fn functions(&self) -> &[FunctionToken] {
        &self.functions
    }
}

/// Accumulated pools for one `(category, target id)` pair.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bucket {
    id: ResourceId,
    category: Category,
    subject: Option<ResourceId>,
    pools: Vec<LootPool>,
}

impl Bucket {
    pub fn new(id: ResourceId, category: Category, subject: Option<ResourceId>) -> Self {
        Self {
            id,
            category,
            subject,
            pools: Vec::new(),
        }
    }

    /// Host-native bucket that already holds pools.
    pub fn with_pools(mut self, pools: Vec<LootPool>) -> Self {
        self.pools = pools;
        self
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subject(&self) -> Option<&ResourceId> {
        self.subject.as_ref()
    }

    pub fn pools(&self) -> &[LootPool] {
        &self.pools
    }

    /// Appends a pool after every existing one.
    pub fn push_pool(&mut self, pool: LootPool) {
        self.pools.push(pool);
    }

    /// All entries across pools, in pool order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.pools.iter().flat_map(|pool| pool.entries.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.pools.iter().map(|pool| pool.entries.len()).sum()
    }
}
