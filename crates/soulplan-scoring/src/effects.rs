//! Set effects beyond the flat pair bonuses.
//!
//! Four-piece effects are mutually exclusive. [`FOUR_PIECE_EFFECTS`] is
//! evaluated top to bottom and only the first rule whose soul type reaches
//! its piece count applies.

use soulplan_core::{Candidate, StatOptions};

/// Pieces needed for a pair bonus or pair multiplier.
pub const PAIR_PIECES: usize = 2;

/// Pieces needed for a four-piece set effect.
pub const SET_PIECES: usize = 4;

/// Unconditional damage multipliers unlocked by a pair of the given type.
pub static PAIR_MULTIPLIERS: &[(&str, f64)] = &[("odokuro", 1.10)];

/// Soul type whose pair makes multi-hit attacks deal periodic extra damage.
pub const MULTI_HIT_SOUL: &str = "tsuchigumo";

/// Extra damage per attack from [`MULTI_HIT_SOUL`], as a fraction of attack.
pub const MULTI_HIT_RATIO: f64 = 2.55 / 6.0;

/// How a four-piece set effect changes damage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetEffect {
    /// Adds `ratio × crit × attack`.
    CritScaled { ratio: f64 },
    /// Multiplies damage.
    Multiplier(f64),
    /// Multiplies damage by `1 + per_resource × resource_count`.
    PerResource { per_resource: f64 },
}

impl SetEffect {
    /// Applies the effect to `damage`, given effective attack and crit fraction.
    #[inline]
    pub fn apply(&self, damage: f64, attack: f64, crit: f64, options: &StatOptions) -> f64 {
        match *self {
            SetEffect::CritScaled { ratio } => damage + ratio * crit * attack,
            SetEffect::Multiplier(factor) => damage * factor,
            SetEffect::PerResource { per_resource } => {
                damage * (1.0 + per_resource * f64::from(options.resource_count))
            }
        }
    }
}

/// A soul type, the pieces it needs and the effect it unlocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetEffectRule {
    pub kind: &'static str,
    pub pieces: usize,
    pub effect: SetEffect,
}

impl SetEffectRule {
    #[inline]
    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        candidate.has_set(self.kind, self.pieces)
    }
}

/// Four-piece effects in priority order.
pub static FOUR_PIECE_EFFECTS: &[SetEffectRule] = &[
    SetEffectRule {
        kind: "seductress",
        pieces: SET_PIECES,
        effect: SetEffect::CritScaled { ratio: 1.2 },
    },
    SetEffectRule {
        kind: "shadow",
        pieces: SET_PIECES,
        effect: SetEffect::Multiplier(1.4),
    },
    SetEffectRule {
        kind: "kyoukotsu",
        pieces: SET_PIECES,
        effect: SetEffect::PerResource { per_resource: 0.08 },
    },
];

/// The four-piece effect that applies to `candidate`, if any.
pub fn active_set_effect(candidate: &Candidate<'_>) -> Option<&'static SetEffectRule> {
    FOUR_PIECE_EFFECTS.iter().find(|rule| rule.matches(candidate))
}

/// Product of the pair multipliers unlocked by `candidate`.
pub fn pair_multiplier(candidate: &Candidate<'_>) -> f64 {
    PAIR_MULTIPLIERS
        .iter()
        .filter(|(kind, _)| candidate.has_set(kind, PAIR_PIECES))
        .map(|(_, factor)| factor)
        .product()
}
