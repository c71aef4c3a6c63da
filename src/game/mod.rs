//! Run simulation: entity state and the per-tick step.

pub mod logic;
pub mod types;

pub use logic::step;
pub use types::{Imp, Pillar, Run};
