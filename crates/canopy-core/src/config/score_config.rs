use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::ontology::UnitKind;

/// Per-kind score bonus. Total over [`UnitKind`]: every variant has a
/// value, `other` covers unrecognized kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeBonus {
    pub chunk: f32,
    pub caption: f32,
    pub section_title: f32,
    pub list_item: f32,
    pub other: f32,
}

impl Default for TypeBonus {
    fn default() -> Self {
        Self {
            chunk: defaults::DEFAULT_BONUS_CHUNK,
            caption: defaults::DEFAULT_BONUS_CAPTION,
            section_title: defaults::DEFAULT_BONUS_SECTION_TITLE,
            list_item: defaults::DEFAULT_BONUS_LIST_ITEM,
            other: 0.0,
        }
    }
}

impl TypeBonus {
    /// Bonus for a unit kind. Total: never misses.
    pub fn for_kind(&self, kind: UnitKind) -> f32 {
        match kind {
            UnitKind::Chunk => self.chunk,
            UnitKind::Caption => self.caption,
            UnitKind::SectionTitle => self.section_title,
            UnitKind::ListItem => self.list_item,
            UnitKind::Other => self.other,
        }
    }
}

/// Multi-factor scoring configuration: factor weights, per-kind and
/// per-level bonuses, and the ranked-output size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub w_text: f32,
    pub w_type: f32,
    pub w_level: f32,
    pub w_dist: f32,
    pub type_bonus: TypeBonus,
    /// Bonus per section level; levels not listed score 0.
    #[serde(with = "level_keys")]
    pub level_bonus: BTreeMap<u32, f32>,
    /// Ranked text units returned per query.
    pub top_k: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            w_text: defaults::DEFAULT_W_TEXT,
            w_type: defaults::DEFAULT_W_TYPE,
            w_level: defaults::DEFAULT_W_LEVEL,
            w_dist: defaults::DEFAULT_W_DIST,
            type_bonus: TypeBonus::default(),
            level_bonus: BTreeMap::from([(1, 0.1), (2, 0.2), (3, 0.3)]),
            top_k: defaults::DEFAULT_TOP_K_UNITS,
        }
    }
}

/// TOML tables only key by string, so the per-level map crosses the wire
/// with stringified levels.
mod level_keys {
    use std::collections::BTreeMap;

    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<u32, f32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let keyed: BTreeMap<String, f32> =
            map.iter().map(|(level, v)| (level.to_string(), *v)).collect();
        keyed.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<u32, f32>, D::Error> {
        BTreeMap::<String, f32>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, v)| {
                key.parse::<u32>()
                    .map(|level| (level, v))
                    .map_err(|_| de::Error::custom(format!("invalid section level `{key}`")))
            })
            .collect()
    }
}

impl ScoreConfig {
    /// Level bonus for a section level, 0 when unlisted.
    pub fn level_bonus_for(&self, level: u32) -> f32 {
        self.level_bonus.get(&level).copied().unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("w_text", self.w_text),
            ("w_type", self.w_type),
            ("w_level", self.w_level),
            ("w_dist", self.w_dist),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if self.top_k == 0 {
            return Err(ConfigError::ZeroBudget { name: "top_k" });
        }
        Ok(())
    }
}
