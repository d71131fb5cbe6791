//! Error taxonomy for supplier processing.
//!
//! Entry- and definition-level failures are reported through [`LootError`].
//! Condition decoding has its own [`ConditionError`]: it is logged and the
//! condition dropped, so it never reaches the rejection path.

use thiserror::Error;

use crate::id::{InvalidResourceId, ResourceId};

pub type Result<T> = std::result::Result<T, LootError>;

#[derive(Debug, Error)]
pub enum LootError {
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] EntryError),

    #[error("malformed definition for {target}: {reason}")]
    MalformedDefinition {
        /// Target id when it could be read, otherwise the source location.
        target: String,
        #[source]
        reason: MalformedReason,
    },

    #[error("cannot resolve loot category: {detail}")]
    UnresolvableCategory { detail: String },

    #[error("entity loot table {target} has no existing bucket and no mob_id")]
    MissingSubjectId { target: ResourceId },

    #[error(transparent)]
    InvalidResourceId(#[from] InvalidResourceId),

    #[error("supplier {name} is already registered")]
    DuplicateSupplier { name: ResourceId },
}

impl LootError {
    pub fn malformed(target: impl Into<String>, reason: MalformedReason) -> Self {
        LootError::MalformedDefinition {
            target: target.into(),
            reason,
        }
    }

    /// Short machine-readable label used in structured logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            LootError::InvalidEntry(_) => "invalid_entry",
            LootError::MalformedDefinition { .. } => "malformed_definition",
            LootError::UnresolvableCategory { .. } => "unresolvable_category",
            LootError::MissingSubjectId { .. } => "missing_subject_id",
            LootError::InvalidResourceId(_) => "invalid_resource_id",
            LootError::DuplicateSupplier { .. } => "duplicate_supplier",
        }
    }
}

/// Why a single entry could not be constructed.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("item {0} does not resolve to a known item")]
    UnknownItem(ResourceId),

    #[error("invalid item id")]
    InvalidItemId(#[source] InvalidResourceId),

    #[error("weight must be a positive integer, got {0}")]
    InvalidWeight(String),

    #[error("entry is missing required field `item`")]
    MissingItem,

    #[error("entry must be a JSON object")]
    NotAnObject,
}

/// Why a whole definition was rejected.
#[derive(Debug, Error)]
pub enum MalformedReason {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("`entries` is empty")]
    EmptyEntries,

    #[error("field `{field}` is not a valid resource id")]
    InvalidId {
        field: &'static str,
        #[source]
        source: InvalidResourceId,
    },

    #[error("entry {index} rejected")]
    Entry {
        index: usize,
        #[source]
        source: EntryError,
    },
}

/// Non-fatal condition decoding failure.
#[derive(Debug, Error, PartialEq)]
pub enum ConditionError {
    #[error("condition must be a JSON object")]
    NotAnObject,

    #[error("condition is missing `type`")]
    MissingType,

    #[error("unknown condition type `{0}`")]
    UnknownType(String),

    #[error("invalid `{kind}` condition: {detail}")]
    InvalidFields { kind: &'static str, detail: String },

    #[error("chance {0} is outside 0.0..=1.0")]
    ChanceOutOfRange(f64),

    #[error("`{0}` condition has no recognized predicate fields")]
    EmptyPredicate(&'static str),

    #[error("value_check for key `{0}` has neither value_translation nor value_plain")]
    MissingValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn malformed_entry_keeps_cause() {
        let err = LootError::malformed(
            "mymod:chests/custom",
            MalformedReason::Entry {
                index: 2,
                source: EntryError::InvalidWeight("0".into()),
            },
        );
        assert_eq!(err.kind(), "malformed_definition");
        assert_eq!(
            err.to_string(),
            "malformed definition for mymod:chests/custom: entry 2 rejected"
        );
        let reason = err.source().unwrap();
        assert_eq!(
            reason.source().unwrap().to_string(),
            "weight must be a positive integer, got 0"
        );
    }
}
