//! Evaluation types for ranking candidates
//!
//! An [`Evaluation`] holds every stat computed for one candidate; the
//! [`Objective`] selects which of them is compared between candidates.

mod evaluation;
mod objective;


pub use evaluation::{Evaluation, Loadout};
pub use objective::Objective;
