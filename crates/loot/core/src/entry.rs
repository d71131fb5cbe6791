//! Entry model and the item catalog it resolves against.

use std::collections::HashSet;

use crate::error::EntryError;
use crate::id::ResourceId;
use crate::text::{ConditionToken, FunctionToken};

/// Read-only view of the host's item registry.
///
/// Entries are only constructed for items the catalog knows about.
pub trait ItemCatalog: Send + Sync {
    fn contains(&self, item: &ResourceId) -> bool;
}

/// [`ItemCatalog`] backed by an in-memory set.
#[derive(Clone, Debug, Default)]
pub struct StaticItemCatalog {
    items: HashSet<ResourceId>,
}

impl StaticItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: ResourceId) {
        self.items.insert(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ResourceId> for StaticItemCatalog {
    fn from_iter<I: IntoIterator<Item = ResourceId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl ItemCatalog for StaticItemCatalog {
    fn contains(&self, item: &ResourceId) -> bool {
        self.items.contains(item)
    }
}

/// One weighted reward contribution.
///
/// Invariants: `weight >= 1` and `item` was known to the catalog when the
/// entry was built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    item: ResourceId,
    weight: u32,
    conditions: Vec<ConditionToken>,
    functions: Vec<FunctionToken>,
}

impl Entry {
    pub const DEFAULT_WEIGHT: u32 = 1;

    /// Resolves `item` against `catalog` and validates `weight`.
    pub fn new(
        item: ResourceId,
        weight: u32,
        conditions: Vec<ConditionToken>,
        catalog: &dyn ItemCatalog,
    ) -> Result<Self, EntryError> {
        if weight < 1 {
            return Err(EntryError::InvalidWeight(weight.to_string()));
        }
        if !catalog.contains(&item) {
            return Err(EntryError::UnknownItem(item));
        }

        Ok(Self {
            item,
            weight,
            conditions,
            functions: Vec::new(),
        })
    }

    /// Entry with default weight and no conditions.
    pub fn simple(item: ResourceId, catalog: &dyn ItemCatalog) -> Result<Self, EntryError> {
        Self::new(item, Self::DEFAULT_WEIGHT, Vec::new(), catalog)
    }

    pub fn item(&self) -> &ResourceId {
        &self.item
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn conditions(&self) -> &[ConditionToken] {
        &self.conditions
    }

    pub fn functions(&self) -> &[FunctionToken] {
        &self.functions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticItemCatalog {
        ["minecraft:diamond", "minecraft:emerald"]
            .into_iter()
            .map(|id| ResourceId::parse(id).unwrap())
            .collect()
    }

    #[test]
    fn builds_known_item() {
        let entry = Entry::simple(ResourceId::parse("diamond").unwrap(), &catalog()).unwrap();
        assert_eq!(entry.weight(), 1);
        assert!(entry.conditions().is_empty());
        assert!(entry.functions().is_empty());
    }

    #[test]
    fn rejects_unknown_item() {
        let err = Entry::simple(ResourceId::parse("mymod:ghost").unwrap(), &catalog()).unwrap_err();
        assert!(matches!(err, EntryError::UnknownItem(id) if id.to_string() == "mymod:ghost"));
    }

    #[test]
    fn rejects_zero_weight() {
        let err = Entry::new(ResourceId::parse("emerald").unwrap(), 0, Vec::new(), &catalog())
            .unwrap_err();
        assert!(matches!(err, EntryError::InvalidWeight(_)));
    }
}
