//! Display text and condition tokens.
//!
//! Tokens mirror the renderer's translation-key model: a key plus ordered
//! arguments, each either literal text or another translatable key.

use std::fmt;

/// Translation keys emitted by the condition decoder.
pub mod keys {
    pub const CHANCE: &str = "emi_loot.condition.chance";
    pub const LOCATION: &str = "emi_loot.condition.location";
    pub const WEATHER: &str = "emi_loot.condition.weather";
    pub const VALUE_CHECK: &str = "emi_loot.condition.value_check";

    pub const RAINING: &str = "emi_loot.condition.weather.raining";
    pub const NOT_RAINING: &str = "emi_loot.condition.weather.not_raining";
    pub const THUNDERING: &str = "emi_loot.condition.weather.thundering";
    pub const NOT_THUNDERING: &str = "emi_loot.condition.weather.not_thundering";

    pub const LOCATION_BIOME: &str = "emi_loot.location.biome";
    pub const LOCATION_STRUCTURE: &str = "emi_loot.location.structure";
    pub const LOCATION_DIMENSION: &str = "emi_loot.location.dimension";
    pub const LOCATION_POSITION: &str = "emi_loot.location.position";
    pub const LOCATION_LIGHT: &str = "emi_loot.location.light";
    pub const LOCATION_SMOKEY: &str = "emi_loot.location.smokey";
    pub const LOCATION_NOT_SMOKEY: &str = "emi_loot.location.not_smokey";
    pub const LOCATION_BLOCK: &str = "emi_loot.location.block";
    pub const LOCATION_FLUID: &str = "emi_loot.location.fluid";
}

/// A displayable text fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Text {
    Literal(String),
    Translatable { key: String, args: Vec<Text> },
}

impl Text {
    pub fn literal(value: impl Into<String>) -> Self {
        Text::Literal(value.into())
    }

    pub fn translatable(key: impl Into<String>) -> Self {
        Text::Translatable {
            key: key.into(),
            args: Vec::new(),
        }
    }

    pub fn translatable_with(key: impl Into<String>, args: Vec<Text>) -> Self {
        Text::Translatable {
            key: key.into(),
            args,
        }
    }
}

/// Plain rendering for logs and reports: `key(arg, ...)` for translatables.
impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::Literal(value) => f.write_str(value),
            Text::Translatable { key, args } => write_call(f, key, args),
        }
    }
}

fn write_call(f: &mut fmt::Formatter<'_>, key: &str, args: &[Text]) -> fmt::Result {
    f.write_str(key)?;
    if args.is_empty() {
        return Ok(());
    }
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str(")")
}

/// Normalized description of a constraint under which an entry is granted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionToken {
    pub key: String,
    pub args: Vec<Text>,
}

impl ConditionToken {
    pub fn new(key: impl Into<String>, args: Vec<Text>) -> Self {
        Self {
            key: key.into(),
            args,
        }
    }
}

impl fmt::Display for ConditionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_call(f, &self.key, &self.args)
    }
}

/// Post-processing annotation on an entry. Nothing produces these yet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionToken {
    pub key: String,
    pub args: Vec<Text>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_tokens() {
        let token = ConditionToken::new(
            keys::VALUE_CHECK,
            vec![Text::translatable("mymod.key.phase"), Text::literal("night")],
        );
        assert_eq!(
            token.to_string(),
            "emi_loot.condition.value_check(mymod.key.phase, night)"
        );
    }

    #[test]
    fn renders_bare_key() {
        assert_eq!(Text::translatable(keys::RAINING).to_string(), keys::RAINING);
    }
}
