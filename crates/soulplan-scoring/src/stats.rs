//! Stat formulas.
//!
//! Soul and shikigami numbers are whole-number percentages; they are
//! converted to fractions here. Functions return `f64`; callers truncate
//! toward zero when storing integers.

use soulplan_core::{Candidate, Modifiers, PairBonus, Shikigami, StatOptions};

use crate::effects::{
    active_set_effect, pair_multiplier, MULTI_HIT_RATIO, MULTI_HIT_SOUL, PAIR_PIECES,
};

/// Bonus per distinct pair of an attack-bonus or HP-bonus soul type.
pub const PAIR_STAT_BONUS: f64 = 0.15;

/// Crit points per distinct pair of a crit soul type.
pub const PAIR_CRIT_BONUS: i32 = 15;

/// Crit points granted by the support crit buff.
pub const CRIT_BUFF: i32 = 30;

/// Distinct soul types in `candidate` with the given pair bonus and at least two pieces.
fn pairs_with(candidate: &Candidate<'_>, bonus: PairBonus) -> usize {
    candidate
        .counts()
        .filter(|(kind, n)| *n >= PAIR_PIECES && PairBonus::of(kind) == Some(bonus))
        .count()
}

/// Effective crit chance in percentage points, clamped to `0..=100`.
///
/// Sums base crit, the flat crit modifier, each soul's crit, 15 points per
/// crit pair and the optional crit buff.
pub fn compute_crit(
    shiki: &Shikigami,
    candidate: &Candidate<'_>,
    modifiers: &Modifiers,
    options: &StatOptions,
) -> i32 {
    let mut crit = shiki.crit + modifiers.crit + candidate.sum(|s| s.crit);
    crit += PAIR_CRIT_BONUS * pairs_with(candidate, PairBonus::Crit) as i32;
    if options.crit_buff {
        crit += CRIT_BUFF;
    }
    crit.clamp(0, 100)
}

/// Shikigami speed plus soul speed.
pub fn speed(shiki: &Shikigami, candidate: &Candidate<'_>) -> i32 {
    shiki.spd + candidate.sum(|s| s.spd)
}

// Crit fraction used for expected damage; zero when crits are ignored.
fn effective_crit(
    shiki: &Shikigami,
    candidate: &Candidate<'_>,
    modifiers: &Modifiers,
    options: &StatOptions,
) -> f64 {
    if options.ignore_crit {
        return 0.0;
    }
    f64::from(compute_crit(shiki, candidate, modifiers, options)) / 100.0
}

fn crit_damage(shiki: &Shikigami, candidate: &Candidate<'_>, modifiers: &Modifiers) -> f64 {
    f64::from(shiki.crit_dmg + modifiers.crit_dmg + candidate.sum(|s| s.crit_dmg)) / 100.0
}

// Expected multiplier of one hit: crit × critDamage + (1 − crit).
#[inline]
fn expected_hit(crit: f64, crit_dmg: f64) -> f64 {
    crit * crit_dmg + (1.0 - crit)
}

/// Effective attack: base and flat modifier scaled by attack bonuses, plus soul flat attack.
pub fn attack(shiki: &Shikigami, candidate: &Candidate<'_>, modifiers: &Modifiers) -> f64 {
    let mut bonus = 1.0 + f64::from(modifiers.atk_bonus + candidate.sum(|s| s.atk_bonus)) / 100.0;
    bonus += PAIR_STAT_BONUS * pairs_with(candidate, PairBonus::AttackBonus) as f64;

    f64::from(shiki.atk + modifiers.atk) * bonus + f64::from(candidate.sum(|s| s.atk))
}

/// Expected damage of one attack.
///
/// The caller is responsible for rejecting candidates that miss the
/// primary set requirement before asking for damage.
pub fn damage(
    shiki: &Shikigami,
    candidate: &Candidate<'_>,
    modifiers: &Modifiers,
    options: &StatOptions,
) -> f64 {
    let atk = attack(shiki, candidate, modifiers);
    let crit = effective_crit(shiki, candidate, modifiers, options);
    let crit_dmg = crit_damage(shiki, candidate, modifiers);

    let mut dmg = atk * expected_hit(crit, crit_dmg);
    dmg *= pair_multiplier(candidate);

    if options.set_effects {
        if let Some(rule) = active_set_effect(candidate) {
            dmg = rule.effect.apply(dmg, atk, crit, options);
        }
    }

    if shiki.multi_hit && candidate.has_set(MULTI_HIT_SOUL, PAIR_PIECES) {
        dmg += MULTI_HIT_RATIO * atk;
    }
    dmg
}

/// Effective HP: base HP scaled by HP bonuses, plus soul flat HP.
pub fn hp(shiki: &Shikigami, candidate: &Candidate<'_>, modifiers: &Modifiers) -> f64 {
    let mut bonus = 1.0 + f64::from(modifiers.hp_bonus + candidate.sum(|s| s.hp_bonus)) / 100.0;
    bonus += PAIR_STAT_BONUS * pairs_with(candidate, PairBonus::HpBonus) as f64;

    f64::from(shiki.hp) * bonus + f64::from(candidate.sum(|s| s.hp))
}

/// Expected healing: HP-scaled, with crits applied like damage.
pub fn heal(
    shiki: &Shikigami,
    candidate: &Candidate<'_>,
    modifiers: &Modifiers,
    options: &StatOptions,
) -> f64 {
    let crit = effective_crit(shiki, candidate, modifiers, options);
    let crit_dmg = crit_damage(shiki, candidate, modifiers);
    hp(shiki, candidate, modifiers) * expected_hit(crit, crit_dmg)
}
