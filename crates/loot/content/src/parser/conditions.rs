//! Condition decoding.
//!
//! Raw condition objects are classified into a closed set of kinds and then
//! deserialized into typed payloads. Anything that cannot be decoded is logged
//! and dropped; the entry that carried it is kept.

use std::str::FromStr;

use loot_core::{ConditionError, ConditionToken, Text, keys};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::location::{LocationPredicate, WeatherPredicate};

/// Condition kinds understood by the decoder.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ConditionKind {
    RandomChance,
    Location,
    Weather,
    ValueCheck,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RandomChance {
    pub chance: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ValueCheck {
    pub key: String,
    #[serde(default)]
    pub value_translation: Option<String>,
    #[serde(default)]
    pub value_plain: Option<String>,
}

/// A raw condition classified by its `type` field.
#[derive(Clone, Debug)]
pub enum RawCondition {
    RandomChance(RandomChance),
    Location(LocationPredicate),
    Weather(WeatherPredicate),
    ValueCheck(ValueCheck),
    /// `type` named a kind this decoder does not know.
    Unknown(String),
}

impl RawCondition {
    pub fn from_json(raw: &Value) -> Result<Self, ConditionError> {
        let object = raw.as_object().ok_or(ConditionError::NotAnObject)?;
        let type_name = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ConditionError::MissingType)?;

        let Ok(kind) = ConditionKind::from_str(type_name) else {
            return Ok(RawCondition::Unknown(type_name.to_string()));
        };

        Ok(match kind {
            ConditionKind::RandomChance => RawCondition::RandomChance(payload(kind, raw)?),
            ConditionKind::Location => RawCondition::Location(payload(kind, raw)?),
            ConditionKind::Weather => RawCondition::Weather(payload(kind, raw)?),
            ConditionKind::ValueCheck => RawCondition::ValueCheck(payload(kind, raw)?),
        })
    }
}

fn payload<T: DeserializeOwned>(kind: ConditionKind, raw: &Value) -> Result<T, ConditionError> {
    T::deserialize(raw).map_err(|e| ConditionError::InvalidFields {
        kind: kind.into(),
        detail: e.to_string(),
    })
}

/// Turns raw condition descriptors into display tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConditionDecoder;

impl ConditionDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Best-effort decode: failures are logged at `warn` and yield `None`.
    pub fn decode(&self, raw: &Value) -> Option<ConditionToken> {
        match self.try_decode(raw) {
            Ok(token) => Some(token),
            Err(error) => {
                warn!(
                    target: "loot::conditions",
                    error = %error,
                    "Dropping undecodable condition"
                );
                None
            }
        }
    }

    pub fn try_decode(&self, raw: &Value) -> Result<ConditionToken, ConditionError> {
        match RawCondition::from_json(raw)? {
            RawCondition::RandomChance(RandomChance { chance }) => {
                if !(0.0..=1.0).contains(&chance) {
                    return Err(ConditionError::ChanceOutOfRange(chance));
                }
                Ok(ConditionToken::new(
                    keys::CHANCE,
                    vec![Text::literal(format_percent(chance))],
                ))
            }
            RawCondition::Location(predicate) => {
                let clauses = predicate.describe();
                if clauses.is_empty() {
                    return Err(ConditionError::EmptyPredicate("location"));
                }
                Ok(ConditionToken::new(keys::LOCATION, clauses))
            }
            RawCondition::Weather(predicate) => {
                let clauses = predicate.describe();
                if clauses.is_empty() {
                    return Err(ConditionError::EmptyPredicate("weather"));
                }
                Ok(ConditionToken::new(keys::WEATHER, clauses))
            }
            RawCondition::ValueCheck(check) => {
                // A literal value wins over a translated one when both are set.
                let value = match (check.value_plain, check.value_translation) {
                    (Some(plain), _) => Text::Literal(plain),
                    (None, Some(translation)) => Text::translatable(translation),
                    (None, None) => return Err(ConditionError::MissingValue(check.key)),
                };
                Ok(ConditionToken::new(
                    keys::VALUE_CHECK,
                    vec![Text::translatable(check.key), value],
                ))
            }
            RawCondition::Unknown(type_name) => Err(ConditionError::UnknownType(type_name)),
        }
    }
}

/// Chance in `0.0..=1.0` as a percentage with one decimal place.
///
/// Rounds half up on the shortest decimal form of the percentage, so `0.0025`
/// becomes `0.3` rather than the `0.2` that float formatting would print.
pub fn format_percent(chance: f64) -> String {
    let shortest = (chance * 100.0).to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let Ok(whole) = whole.parse::<u64>() else {
        return format!("{:.1}", chance * 100.0);
    };

    let mut digits = fraction.bytes().map(|digit| u64::from(digit.saturating_sub(b'0')));
    let mut tenths = whole * 10 + digits.next().unwrap_or(0);
    if digits.next().is_some_and(|digit| digit >= 5) {
        tenths += 1;
    }
    format!("{}.{}", tenths / 10, tenths % 10)
}
