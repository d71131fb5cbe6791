//! Location and weather predicate descriptions.
//!
//! Predicates are read with the same field names the host's location-check
//! grammar uses and turned into one display clause per constrained field.

use loot_core::{ResourceId, Text, keys};
use serde::Deserialize;

/// Numeric bound: an exact value or an optional `min`/`max` pair.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Bounds {
    Exact(f64),
    Range {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
}

impl Bounds {
    /// Compact form such as `0..64`, `>= 3` or `= 5`. `None` when unbounded.
    pub fn describe(&self) -> Option<String> {
        match *self {
            Bounds::Exact(value) => Some(format!("= {}", number(value))),
            Bounds::Range {
                min: Some(min),
                max: Some(max),
            } => Some(format!("{}..{}", number(min), number(max))),
            Bounds::Range {
                min: Some(min),
                max: None,
            } => Some(format!(">= {}", number(min))),
            Bounds::Range {
                min: None,
                max: Some(max),
            } => Some(format!("<= {}", number(max))),
            Bounds::Range {
                min: None,
                max: None,
            } => None,
        }
    }
}

fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PositionPredicate {
    pub x: Option<Bounds>,
    pub y: Option<Bounds>,
    pub z: Option<Bounds>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LightPredicate {
    pub light: Option<Bounds>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlockPredicate {
    pub blocks: Vec<ResourceId>,
    pub tag: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FluidPredicate {
    pub fluid: Option<ResourceId>,
    pub tag: Option<String>,
}

/// Location constraint read from a `location` condition object.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocationPredicate {
    pub biome: Option<ResourceId>,
    #[serde(alias = "feature")]
    pub structure: Option<ResourceId>,
    pub dimension: Option<ResourceId>,
    pub position: Option<PositionPredicate>,
    pub light: Option<LightPredicate>,
    pub smokey: Option<bool>,
    pub block: Option<BlockPredicate>,
    pub fluid: Option<FluidPredicate>,
}

impl LocationPredicate {
    /// One clause per constrained field, in a fixed order. Empty when the
    /// predicate constrains nothing.
    pub fn describe(&self) -> Vec<Text> {
        let mut clauses = Vec::new();

        if let Some(biome) = &self.biome {
            let name = Text::translatable(format!("biome.{}.{}", biome.namespace(), biome.path()));
            clauses.push(Text::translatable_with(keys::LOCATION_BIOME, vec![name]));
        }
        if let Some(structure) = &self.structure {
            clauses.push(Text::translatable_with(
                keys::LOCATION_STRUCTURE,
                vec![Text::literal(structure.to_string())],
            ));
        }
        if let Some(dimension) = &self.dimension {
            clauses.push(Text::translatable_with(
                keys::LOCATION_DIMENSION,
                vec![Text::literal(dimension.to_string())],
            ));
        }
        if let Some(position) = &self.position {
            let axes: Vec<Text> = [("x", position.x), ("y", position.y), ("z", position.z)]
                .into_iter()
                .filter_map(|(axis, bounds)| {
                    let range = bounds?.describe()?;
                    Some(Text::literal(format!("{axis} {range}")))
                })
                .collect();
            if !axes.is_empty() {
                clauses.push(Text::translatable_with(keys::LOCATION_POSITION, axes));
            }
        }
        if let Some(range) = self
            .light
            .as_ref()
            .and_then(|light| light.light)
            .and_then(|bounds| bounds.describe())
        {
            clauses.push(Text::translatable_with(
                keys::LOCATION_LIGHT,
                vec![Text::literal(range)],
            ));
        }
        if let Some(smokey) = self.smokey {
            let key = if smokey {
                keys::LOCATION_SMOKEY
            } else {
                keys::LOCATION_NOT_SMOKEY
            };
            clauses.push(Text::translatable(key));
        }
        if let Some(block) = &self.block {
            let mut args: Vec<Text> = block
                .blocks
                .iter()
                .map(|id| Text::literal(id.to_string()))
                .collect();
            args.extend(block.tag.iter().map(|tag| Text::literal(format!("#{tag}"))));
            if !args.is_empty() {
                clauses.push(Text::translatable_with(keys::LOCATION_BLOCK, args));
            }
        }
        if let Some(fluid) = &self.fluid {
            let mut args: Vec<Text> = fluid
                .fluid
                .iter()
                .map(|id| Text::literal(id.to_string()))
                .collect();
            args.extend(fluid.tag.iter().map(|tag| Text::literal(format!("#{tag}"))));
            if !args.is_empty() {
                clauses.push(Text::translatable_with(keys::LOCATION_FLUID, args));
            }
        }

        clauses
    }
}

/// Weather constraint read from a `weather` condition object.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeatherPredicate {
    pub raining: Option<bool>,
    pub thundering: Option<bool>,
}

impl WeatherPredicate {
    pub fn describe(&self) -> Vec<Text> {
        let raining = self.raining.map(|raining| {
            Text::translatable(if raining {
                keys::RAINING
            } else {
                keys::NOT_RAINING
            })
        });
        let thundering = self.thundering.map(|thundering| {
            Text::translatable(if thundering {
                keys::THUNDERING
            } else {
                keys::NOT_THUNDERING
            })
        });

        raining.into_iter().chain(thundering).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bounds_forms() {
        let exact: Bounds = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(exact.describe().as_deref(), Some("= 5"));

        let range: Bounds = serde_json::from_value(json!({"min": 0, "max": 64.5})).unwrap();
        assert_eq!(range.describe().as_deref(), Some("0..64.5"));

        let open: Bounds = serde_json::from_value(json!({"max": 7})).unwrap();
        assert_eq!(open.describe().as_deref(), Some("<= 7"));

        let empty: Bounds = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.describe(), None);
    }

    #[test]
    fn describes_biome_and_position() {
        let predicate: LocationPredicate = serde_json::from_value(json!({
            "biome": "minecraft:plains",
            "position": {"y": {"min": -64, "max": 0}}
        }))
        .unwrap();

        let clauses = predicate.describe();
        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses[0].to_string(),
            "emi_loot.location.biome(biome.minecraft.plains)"
        );
        assert_eq!(clauses[1].to_string(), "emi_loot.location.position(y -64..0)");
    }

    #[test]
    fn empty_location_has_no_clauses() {
        let predicate: LocationPredicate = serde_json::from_value(json!({})).unwrap();
        assert!(predicate.describe().is_empty());
    }

    #[test]
    fn weather_clauses() {
        let predicate = WeatherPredicate {
            raining: Some(true),
            thundering: Some(false),
        };
        let rendered: Vec<String> = predicate.describe().iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec![keys::RAINING, keys::NOT_THUNDERING]);
    }
}
