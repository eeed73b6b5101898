//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components, `GameState` and
//! the `WaveDirector`. Every system iterates in id order, never in storage
//! order, because hecs reorders archetype storage on despawn.

pub mod abilities;
pub mod cleanup;
pub mod collision;
pub mod enemies;
pub mod projectiles;
pub mod snapshot;
pub mod targeting;
pub mod towers;
pub mod wave_director;
