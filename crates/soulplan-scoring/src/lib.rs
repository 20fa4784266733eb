//! Stat model for soulplan.
//!
//! Pure functions turning a shikigami's base stats, a six-soul candidate
//! and external modifiers into effective crit, damage, HP and heal:
//! - [`stats`]: the stat formulas
//! - [`effects`]: pair multipliers and priority-ordered four-piece set effects
//! - [`StatEvaluator`]: per-member scoring of candidates into [`Evaluation`]s
//!
//! Nothing here holds shared state; every function is safe to call from
//! many search workers at once.
//!
//! [`Evaluation`]: soulplan_core::Evaluation

pub mod effects;
pub mod evaluator;
pub mod stats;


pub use effects::{SetEffect, SetEffectRule, FOUR_PIECE_EFFECTS, PAIR_MULTIPLIERS};
pub use evaluator::StatEvaluator;
pub use stats::{attack, compute_crit, damage, heal, hp, speed};
