//! Validated supplier definitions, prior to merging.

use crate::category::Category;
use crate::entry::Entry;
use crate::error::{LootError, MalformedReason};
use crate::id::ResourceId;

/// One source description of a loot table contribution.
///
/// A definition always holds at least one entry; [`Definition::new`] rejects
/// empty lists so that nothing downstream has to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Definition {
    target_id: ResourceId,
    category: Category,
    entries: Vec<Entry>,
    subject_id: Option<ResourceId>,
}

impl Definition {
    pub fn new(
        target_id: ResourceId,
        category: Category,
        entries: Vec<Entry>,
        subject_id: Option<ResourceId>,
    ) -> Result<Self, LootError> {
        if entries.is_empty() {
            return Err(LootError::malformed(
                target_id.to_string(),
                MalformedReason::EmptyEntries,
            ));
        }

        Ok(Self {
            target_id,
            category,
            entries,
            subject_id,
        })
    }

    pub fn target_id(&self) -> &ResourceId {
        &self.target_id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn subject_id(&self) -> Option<&ResourceId> {
        self.subject_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entries_rejected() {
        let err = Definition::new(
            ResourceId::parse("mymod:chests/empty").unwrap(),
            Category::Chest,
            Vec::new(),
            None,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            LootError::MalformedDefinition {
                reason: MalformedReason::EmptyEntries,
                ..
            }
        ));
    }
}
