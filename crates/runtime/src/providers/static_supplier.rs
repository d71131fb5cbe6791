//! Fixed-content supplier.

use loot_core::{Category, ConditionToken, Entry, ItemCatalog, LootError, ResourceId};

use super::LootSupplier;

/// Supplier that always returns the same item list.
///
/// Items are resolved against the catalog on every call, so an item removed
/// from the catalog between passes is reported rather than silently kept.
#[derive(Clone, Debug)]
pub struct StaticSupplier {
    target_id: ResourceId,
    category: Category,
    subject_id: Option<ResourceId>,
    items: Vec<(ResourceId, u32, Vec<ConditionToken>)>,
}

impl StaticSupplier {
    pub fn new(target_id: ResourceId, category: Category) -> Self {
        Self {
            target_id,
            category,
            subject_id: None,
            items: Vec::new(),
        }
    }

    pub fn with_subject(mut self, subject_id: ResourceId) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    pub fn with_item(mut self, item: ResourceId, weight: u32) -> Self {
        self.items.push((item, weight, Vec::new()));
        self
    }

    pub fn with_conditional_item(
        mut self,
        item: ResourceId,
        weight: u32,
        conditions: Vec<ConditionToken>,
    ) -> Self {
        self.items.push((item, weight, conditions));
        self
    }
}

impl LootSupplier for StaticSupplier {
    fn target_id(&self) -> ResourceId {
        self.target_id.clone()
    }

    fn category(&self) -> Category {
        self.category
    }

    fn entries(&self, catalog: &dyn ItemCatalog) -> Result<Vec<Entry>, LootError> {
        self.items
            .iter()
            .map(|(item, weight, conditions)| {
                Entry::new(item.clone(), *weight, conditions.clone(), catalog).map_err(Into::into)
            })
            .collect()
    }

    fn subject_id(&self) -> Option<ResourceId> {
        self.subject_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loot_core::{EntryError, StaticItemCatalog};

    #[test]
    fn resolves_items_each_call() {
        let diamond = ResourceId::parse("diamond").unwrap();
        let supplier = StaticSupplier::new(
            ResourceId::parse("mymod:chests/tower").unwrap(),
            Category::Chest,
        )
        .with_item(diamond.clone(), 3);

        let catalog: StaticItemCatalog = [diamond].into_iter().collect();
        let entries = supplier.entries(&catalog).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weight(), 3);

        let err = supplier.entries(&StaticItemCatalog::new()).unwrap_err();
        assert!(matches!(
            err,
            LootError::InvalidEntry(EntryError::UnknownItem(_))
        ));
    }
}
