//! Archetype tables for RAMPART.
//!
//! Per-kind enemy profiles with wave/level stat derivation, and per-ability
//! tower profiles (projectile flight, pierce, splash and boost parameters).

pub mod abilities;
pub mod profiles;
pub mod stats;

pub use rampart_core as core;

#[cfg(test)]
mod tests;
