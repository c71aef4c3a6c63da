//! Imp - terminal flap-and-dodge arcade game library
//!
//! This module exposes the simulation, input mapping, and persistence for
//! testing and external use. The binary drives these through a fixed
//! 60Hz tick loop.

pub mod constants;
pub mod game;
pub mod input;
pub mod scores;
pub mod ui;

pub use game::{step, Imp, Pillar, Run};
pub use scores::{ScoreRecord, ScoreStore};
