//! Shared test fixtures for soulplan crates.
//!
//! This crate provides data builders and a reference search for testing.
//! It depends only on `soulplan-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`fixtures`] - shikigami and inventory builders
//! - [`random`] - seeded random inventories
//! - [`brute_force`] - unpruned, sequential reference for the combination search
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! soulplan-test = { workspace = true }
//! ```

pub mod brute_force;
pub mod fixtures;
pub mod random;

pub use brute_force::brute_force_best;
pub use fixtures::{candidate_of, inventory_of, striker, uniform_inventory};
pub use random::random_inventory;
