//! Soul - a single equippable item.

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use super::normalize_name;

/// An equippable soul: a type name plus flat and percentage stat contributions.
///
/// Souls are plain values. Two souls with identical fields are
/// interchangeable, which is what lets [`Inventory::remove`](super::Inventory::remove)
/// take any matching entry.
///
/// # Examples
///
/// ```
/// use soulplan_core::Soul;
///
/// let soul = Soul::new("Seductress").with_atk(486).with_crit(8);
/// assert_eq!(soul.kind, "seductress");
/// assert_eq!(soul.atk, 486);
/// assert_eq!(soul.hp, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Soul {
    /// Normalized soul type name.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", deserialize_with = "deserialize_kind")
    )]
    pub kind: String,

    /// Flat attack.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_zero"))]
    pub atk: i32,

    /// Attack bonus, in percent.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "atkbonus", skip_serializing_if = "is_zero")
    )]
    pub atk_bonus: i32,

    /// Crit chance, in percentage points.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_zero"))]
    pub crit: i32,

    /// Crit damage, in percent.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "critdmg", skip_serializing_if = "is_zero")
    )]
    pub crit_dmg: i32,

    /// Flat speed.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "speed", skip_serializing_if = "is_zero")
    )]
    pub spd: i32,

    /// Flat HP.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_zero"))]
    pub hp: i32,

    /// HP bonus, in percent.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "hpbonus", skip_serializing_if = "is_zero")
    )]
    pub hp_bonus: i32,
}

impl Soul {
    /// Creates a soul of the given type with all stats zero.
    pub fn new(kind: impl AsRef<str>) -> Self {
        Self {
            kind: normalize_name(kind.as_ref()),
            ..Self::default()
        }
    }

    pub fn with_atk(mut self, atk: i32) -> Self {
        self.atk = atk;
        self
    }

    pub fn with_atk_bonus(mut self, atk_bonus: i32) -> Self {
        self.atk_bonus = atk_bonus;
        self
    }

    pub fn with_crit(mut self, crit: i32) -> Self {
        self.crit = crit;
        self
    }

    pub fn with_crit_dmg(mut self, crit_dmg: i32) -> Self {
        self.crit_dmg = crit_dmg;
        self
    }

    pub fn with_spd(mut self, spd: i32) -> Self {
        self.spd = spd;
        self
    }

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn with_hp_bonus(mut self, hp_bonus: i32) -> Self {
        self.hp_bonus = hp_bonus;
        self
    }

    /// Returns true if this soul's type matches `kind`, ignoring case.
    #[inline]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }
}

#[cfg(feature = "serde")]
fn is_zero(value: &i32) -> bool {
    *value == 0
}

#[cfg(feature = "serde")]
fn deserialize_kind<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_name(&raw))
}
