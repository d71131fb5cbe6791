//! Category routing and bucket merging.
//!
//! Each definition lands in exactly one bucket map, chosen by its category.
//! Contributions to the same target are appended as separate pools so sibling
//! definitions never overwrite each other.

use loot_core::{Definition, FeatureToggles, LootError};
use tracing::{debug, trace};

use crate::sink::{Bucket, LootPool, LootSinks};

/// What [`route`] did with a definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A pool holding `entries` entries was appended to the target bucket.
    Merged { entries: usize },
    /// The definition's category is disabled.
    Skipped,
}

/// Routes `definition` into its category's bucket map.
///
/// # Errors
///
/// Returns `LootError::MissingSubjectId` for an entity definition that has no
/// `subject_id` and whose target has no existing bucket carrying a subject.
/// Nothing is merged in that case.
pub fn route(
    definition: &Definition,
    sinks: &mut LootSinks,
    toggles: &FeatureToggles,
) -> Result<RouteOutcome, LootError> {
    let category = definition.category();
    let target = definition.target_id();

    if !toggles.is_enabled(category) {
        debug!(
            target: "loot::router",
            loot_table = %target,
            category = %category,
            "Category disabled, skipping definition"
        );
        return Ok(RouteOutcome::Skipped);
    }

    let map = sinks.map_for_mut(category);
    let has_subject = definition.subject_id().is_some()
        || map.get(target).and_then(Bucket::subject).is_some();
    if category.requires_subject() && !has_subject {
        return Err(LootError::MissingSubjectId {
            target: target.clone(),
        });
    }

    let entries = definition.entries().to_vec();
    let count = entries.len();
    map.get_or_create(target, definition.subject_id())
        .push_pool(LootPool::new(category.pool_shape(), entries));

    trace!(
        target: "loot::router",
        loot_table = %target,
        category = %category,
        entries = count,
        "Merged pool into bucket"
    );
    Ok(RouteOutcome::Merged { entries: count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use loot_core::{Category, Entry, PoolShape, ResourceId, StaticItemCatalog};

    fn id(raw: &str) -> ResourceId {
        ResourceId::parse(raw).unwrap()
    }

    fn catalog() -> StaticItemCatalog {
        [id("diamond"), id("emerald"), id("bone")].into_iter().collect()
    }

    fn definition(
        target: &str,
        category: Category,
        items: &[&str],
        subject: Option<&str>,
    ) -> Definition {
        let catalog = catalog();
        let entries = items
            .iter()
            .map(|item| Entry::simple(id(item), &catalog).unwrap())
            .collect();
        Definition::new(id(target), category, entries, subject.map(id)).unwrap()
    }

    #[test]
    fn appends_after_existing_pools() {
        let mut sinks = LootSinks::new();
        let toggles = FeatureToggles::default();

        let first = definition("mymod:chests/tower", Category::Chest, &["diamond"], None);
        let second = definition("mymod:chests/tower", Category::Chest, &["emerald", "bone"], None);
        route(&first, &mut sinks, &toggles).unwrap();
        let outcome = route(&second, &mut sinks, &toggles).unwrap();
        assert_eq!(outcome, RouteOutcome::Merged { entries: 2 });

        let bucket = sinks.bucket(Category::Chest, &id("mymod:chests/tower")).unwrap();
        assert_eq!(bucket.pools().len(), 2);
        assert_eq!(bucket.pools()[1].multiplier(), 1.0);
        assert_eq!(bucket.pools()[1].shape(), PoolShape::Simple);
        let items: Vec<String> = bucket.entries().map(|e| e.item().to_string()).collect();
        assert_eq!(
            items,
            vec!["minecraft:diamond", "minecraft:emerald", "minecraft:bone"]
        );
    }

    #[test]
    fn disabled_category_is_skipped() {
        let mut sinks = LootSinks::new();
        let toggles = FeatureToggles::default().with(Category::Block, false);
        let def = definition("minecraft:blocks/stone", Category::Block, &["diamond"], None);

        assert_eq!(route(&def, &mut sinks, &toggles).unwrap(), RouteOutcome::Skipped);
        assert_eq!(sinks.bucket_count(), 0);
    }

    #[test]
    fn entity_without_subject_needs_existing_bucket() {
        let mut sinks = LootSinks::new();
        let toggles = FeatureToggles::default();
        let def = definition("mymod:entities/king", Category::Entity, &["bone"], None);

        let err = route(&def, &mut sinks, &toggles).unwrap_err();
        assert!(matches!(err, LootError::MissingSubjectId { .. }));
        assert_eq!(sinks.bucket_count(), 0);

        sinks.map_for_mut(Category::Entity).insert(Bucket::new(
            id("mymod:entities/king"),
            Category::Entity,
            Some(id("mymod:king")),
        ));
        assert_eq!(
            route(&def, &mut sinks, &toggles).unwrap(),
            RouteOutcome::Merged { entries: 1 }
        );
        let bucket = sinks.bucket(Category::Entity, &id("mymod:entities/king")).unwrap();
        assert_eq!(bucket.subject(), Some(&id("mymod:king")));
        assert_eq!(bucket.pools()[0].shape(), PoolShape::Complex);
    }

    #[test]
    fn subjectless_entity_bucket_does_not_satisfy_subject() {
        let mut sinks = LootSinks::new();
        let toggles = FeatureToggles::default();
        sinks.map_for_mut(Category::Entity).insert(Bucket::new(
            id("mymod:entities/x"),
            Category::Entity,
            None,
        ));
        let def = definition("mymod:entities/x", Category::Entity, &["bone"], None);

        let err = route(&def, &mut sinks, &toggles).unwrap_err();
        assert!(matches!(err, LootError::MissingSubjectId { .. }));
        let bucket = sinks.bucket(Category::Entity, &id("mymod:entities/x")).unwrap();
        assert!(bucket.pools().is_empty());
    }

    #[test]
    fn entity_with_subject_creates_bucket() {
        let mut sinks = LootSinks::new();
        let def = definition(
            "mymod:entities/king",
            Category::Entity,
            &["bone"],
            Some("mymod:king"),
        );
        route(&def, &mut sinks, &FeatureToggles::default()).unwrap();

        let bucket = sinks.bucket(Category::Entity, &id("mymod:entities/king")).unwrap();
        assert_eq!(bucket.subject(), Some(&id("mymod:king")));
    }
}
