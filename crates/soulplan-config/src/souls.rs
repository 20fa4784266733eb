//! Soul database files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use soulplan_core::{soul_type, Inventory, PlanError, Soul};

use crate::team::has_toml_extension;
use crate::ConfigError;

/// The souls owned, listed per slot.
///
/// ```yaml
/// slot1:
///   - { type: shadow, atk: 486, crit: 8 }
/// slot2:
///   - { type: seductress, atk_bonus: 55, spd: 12 }
/// ```
///
/// Every soul type must be in the soul-type catalog. Missing slots are
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SoulDb {
    #[serde(default)]
    pub slot1: Vec<Soul>,
    #[serde(default)]
    pub slot2: Vec<Soul>,
    #[serde(default)]
    pub slot3: Vec<Soul>,
    #[serde(default)]
    pub slot4: Vec<Soul>,
    #[serde(default)]
    pub slot5: Vec<Soul>,
    #[serde(default)]
    pub slot6: Vec<Soul>,
}

impl SoulDb {
    /// Loads a database, picking the format from the extension (`.toml`,
    /// anything else is read as YAML).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        if has_toml_extension(path) {
            Self::from_toml_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let db: Self = toml::from_str(s)?;
        db.validate()?;
        Ok(db)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let db: Self = serde_yaml::from_str(s)?;
        db.validate()?;
        Ok(db)
    }

    /// Writes the database back, in TOML for a `.toml` path and YAML otherwise.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = if has_toml_extension(path) {
            toml::to_string(self)?
        } else {
            self.to_yaml_string()?
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Rejects soul types missing from the catalog.
    pub fn validate(&self) -> Result<(), PlanError> {
        let unknown = self
            .slots()
            .into_iter()
            .flatten()
            .find(|soul| soul_type(&soul.kind).is_none());
        match unknown {
            Some(soul) => Err(PlanError::UnknownSoulType(soul.kind.clone())),
            None => Ok(()),
        }
    }

    fn slots(&self) -> [&Vec<Soul>; 6] {
        [
            &self.slot1,
            &self.slot2,
            &self.slot3,
            &self.slot4,
            &self.slot5,
            &self.slot6,
        ]
    }

    pub fn len(&self) -> usize {
        self.slots().iter().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<SoulDb> for Inventory {
    fn from(db: SoulDb) -> Self {
        Inventory::new([db.slot1, db.slot2, db.slot3, db.slot4, db.slot5, db.slot6])
    }
}

impl From<Inventory> for SoulDb {
    fn from(inventory: Inventory) -> Self {
        let [slot1, slot2, slot3, slot4, slot5, slot6] = inventory.into_slots();
        SoulDb {
            slot1,
            slot2,
            slot3,
            slot4,
            slot5,
            slot6,
        }
    }
}
