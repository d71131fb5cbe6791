//! Definition parsing.
//!
//! Converts untyped JSON supplier definitions into validated
//! [`Definition`]s. A definition is accepted whole or not at all: one bad
//! entry rejects every entry it declares.

pub mod conditions;
pub mod location;

pub use conditions::{ConditionDecoder, ConditionKind, RawCondition, format_percent};
pub use location::{Bounds, LocationPredicate, WeatherPredicate};

use loot_core::{
    Category, Definition, Entry, EntryError, ItemCatalog, LootError, MalformedReason, ResourceId,
};
use serde_json::{Map, Value};
use tracing::warn;

/// Label used in errors before `loot_table_id` has been read.
const UNKNOWN_TARGET: &str = "<unknown loot table>";

/// Infers a category from the folder segments of a definition path.
///
/// Accepts either a plain path (`emi_loot_suppliers/chests/tower.json`) or a
/// namespaced location (`mymod:emi_loot_suppliers/chests/tower.json`). The
/// file name itself is never considered.
pub fn infer_category(path: &str) -> Option<Category> {
    let path = path.split_once(':').map_or(path, |(_, rest)| rest);
    let mut segments: Vec<&str> = path.split(['/', '\\']).collect();
    segments.pop();

    segments.into_iter().find_map(Category::from_folder)
}

/// Parses raw definitions against an item catalog.
pub struct DefinitionParser<'a> {
    catalog: &'a dyn ItemCatalog,
    decoder: ConditionDecoder,
}

impl<'a> DefinitionParser<'a> {
    pub fn new(catalog: &'a dyn ItemCatalog) -> Self {
        Self {
            catalog,
            decoder: ConditionDecoder::new(),
        }
    }

    /// Parses one raw definition.
    ///
    /// `category_hint` is the category inferred from the file location; an
    /// explicit `context_type` field takes precedence over it.
    ///
    /// # Errors
    ///
    /// - `MalformedDefinition` for missing or ill-typed `loot_table_id` /
    ///   `entries`, an empty entry list, or any rejected entry
    /// - `UnresolvableCategory` when neither `context_type` nor the hint
    ///   yields a category
    pub fn parse(
        &self,
        raw: &Value,
        category_hint: Option<Category>,
    ) -> Result<Definition, LootError> {
        let object = raw.as_object().ok_or_else(|| {
            LootError::malformed(
                UNKNOWN_TARGET,
                MalformedReason::WrongType {
                    field: "<root>",
                    expected: "a JSON object",
                },
            )
        })?;

        let target_id = read_id(object, "loot_table_id", UNKNOWN_TARGET)?
            .ok_or_else(|| {
                LootError::malformed(UNKNOWN_TARGET, MalformedReason::MissingField("loot_table_id"))
            })?;
        let label = target_id.to_string();

        let category = resolve_category(object, category_hint)?;
        let subject_id = read_id(object, "mob_id", &label)?;

        let raw_entries = match object.get("entries") {
            None => {
                return Err(LootError::malformed(
                    label,
                    MalformedReason::MissingField("entries"),
                ));
            }
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(LootError::malformed(
                    label,
                    MalformedReason::WrongType {
                        field: "entries",
                        expected: "an array",
                    },
                ));
            }
        };
        if raw_entries.is_empty() {
            return Err(LootError::malformed(label, MalformedReason::EmptyEntries));
        }

        let mut entries = Vec::with_capacity(raw_entries.len());
        for (index, raw_entry) in raw_entries.iter().enumerate() {
            let entry = self.parse_entry(raw_entry, &label).map_err(|source| {
                LootError::malformed(&label, MalformedReason::Entry { index, source })
            })?;
            entries.push(entry);
        }

        Definition::new(target_id, category, entries, subject_id)
    }

    fn parse_entry(&self, raw: &Value, target: &str) -> Result<Entry, EntryError> {
        let object = raw.as_object().ok_or(EntryError::NotAnObject)?;

        let item = object
            .get("item")
            .and_then(Value::as_str)
            .ok_or(EntryError::MissingItem)?;
        let item = ResourceId::parse(item).map_err(EntryError::InvalidItemId)?;

        let weight = match object.get("weight") {
            None => Entry::DEFAULT_WEIGHT,
            Some(value) => value
                .as_u64()
                .filter(|weight| *weight >= 1)
                .and_then(|weight| u32::try_from(weight).ok())
                .ok_or_else(|| EntryError::InvalidWeight(value.to_string()))?,
        };

        let conditions = match object.get("conditions") {
            None => Vec::new(),
            Some(Value::Array(raw_conditions)) => raw_conditions
                .iter()
                .filter_map(|condition| self.decoder.decode(condition))
                .collect(),
            Some(other) => {
                warn!(
                    target: "loot::parser",
                    loot_table = target,
                    item = %item,
                    conditions = %other,
                    "Ignoring non-array conditions"
                );
                Vec::new()
            }
        };

        Entry::new(item, weight, conditions, self.catalog)
    }
}

fn resolve_category(
    object: &Map<String, Value>,
    category_hint: Option<Category>,
) -> Result<Category, LootError> {
    match object.get("context_type") {
        Some(Value::String(name)) => name.parse().map_err(|_| LootError::UnresolvableCategory {
            detail: format!("unknown context_type `{name}`"),
        }),
        Some(other) => Err(LootError::UnresolvableCategory {
            detail: format!("context_type must be a string, got {other}"),
        }),
        None => category_hint.ok_or_else(|| LootError::UnresolvableCategory {
            detail: "no context_type field and no recognized category folder".to_string(),
        }),
    }
}

/// Reads an optional identifier field. Absent or `null` yields `None`.
fn read_id(
    object: &Map<String, Value>,
    field: &'static str,
    target: &str,
) -> Result<Option<ResourceId>, LootError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => ResourceId::parse(raw)
            .map(Some)
            .map_err(|source| {
                LootError::malformed(target, MalformedReason::InvalidId { field, source })
            }),
        Some(_) => Err(LootError::malformed(
            target,
            MalformedReason::WrongType {
                field,
                expected: "a string",
            },
        )),
    }
}
