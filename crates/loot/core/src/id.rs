//! Namespaced identifiers (`namespace:path`).
//!
//! Every loot table, item, entity type and registered supplier is addressed by
//! a [`ResourceId`]. Parsing follows the resource-location grammar used by the
//! host: a missing namespace defaults to [`ResourceId::DEFAULT_NAMESPACE`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rejected identifier text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid resource id `{value}`: {reason}")]
pub struct InvalidResourceId {
    pub value: String,
    pub reason: &'static str,
}

/// A validated `namespace:path` identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Namespace assumed when the input has no `:` separator.
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";

    /// Builds an identifier from its two halves, validating both.
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, InvalidResourceId> {
        let namespace = namespace.into();
        let path = path.into();

        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(InvalidResourceId {
                value: format!("{namespace}:{path}"),
                reason: "namespace must be non-empty and match [a-z0-9_.-]",
            });
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(InvalidResourceId {
                value: format!("{namespace}:{path}"),
                reason: "path must be non-empty and match [a-z0-9_.-/]",
            });
        }

        Ok(Self { namespace, path })
    }

    /// Parses `namespace:path`, or `path` alone in the default namespace.
    pub fn parse(value: &str) -> Result<Self, InvalidResourceId> {
        match value.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(Self::DEFAULT_NAMESPACE, value),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceId {
    type Err = InvalidResourceId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResourceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ResourceId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaced_id() {
        let id = ResourceId::parse("mymod:chests/custom").unwrap();
        assert_eq!(id.namespace(), "mymod");
        assert_eq!(id.path(), "chests/custom");
        assert_eq!(id.to_string(), "mymod:chests/custom");
    }

    #[test]
    fn bare_path_uses_default_namespace() {
        let id = ResourceId::parse("diamond").unwrap();
        assert_eq!(id.namespace(), "minecraft");
        assert_eq!(id.to_string(), "minecraft:diamond");
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(ResourceId::parse("MyMod:thing").is_err());
        assert!(ResourceId::parse("mymod:Thing").is_err());
        assert!(ResourceId::parse("mymod:").is_err());
        assert!(ResourceId::parse(":thing").is_err());
        assert!(ResourceId::parse("a:b:c").is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let id: ResourceId = serde_json::from_str("\"minecraft:stone\"").unwrap();
        assert_eq!(id, ResourceId::parse("stone").unwrap());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"minecraft:stone\"");
    }
}
