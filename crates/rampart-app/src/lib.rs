//! RAMPART headless runner.
//!
//! This crate wires the simulation engine to a paced game-loop thread, a
//! command-line interface and a simple autoplayer.

pub mod autoplay;
pub mod cli;
pub mod game_loop;
pub mod state;

pub use rampart_core as core;
