//! soulplan Core - data model for soul-set optimization
//!
//! This crate provides the fundamental types shared by every soulplan crate:
//! - Domain types: souls, the six-slot inventory, candidates, shikigami
//! - Static catalogs: shikigami stats with aliases, soul types with pair bonuses
//! - Search inputs: set requirements, attribute constraints, stat modifiers
//! - [`Member`]: one resolved team member bundling the search inputs
//! - Evaluation types for ranking candidates by an objective

pub mod constraint;
pub mod domain;
pub mod error;
pub mod member;
pub mod modifiers;
pub mod requirement;
pub mod score;

pub use constraint::{Attribute, ConstraintParseError, Constraints, RangeConstraint};
pub use domain::{
    normalize_name, soul_type, Candidate, Inventory, PairBonus, Shikigami, ShikigamiEntry,
    Soul, SoulType, SLOT_COUNT,
};
pub use error::{PlanError, Result};
pub use member::Member;
pub use modifiers::{Modifiers, StatOptions};
pub use requirement::{Membership, SetRequirement, PRIMARY_PIECES, SECONDARY_PIECES};
pub use score::{Evaluation, Loadout, Objective};
