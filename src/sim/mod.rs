//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by cell index)
//! - Every transition completes synchronously
//! - No rendering or platform dependencies

pub mod distribution;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod pyramid;
pub mod selection;
pub mod state;
pub mod support;

pub use distribution::{Distribution, Tile, ValueSet};
pub use error::BuildError;
pub use geometry::{Footprint, Point, cross, vector};
pub use hit::hit_test;
pub use input::{PointerInput, apply};
pub use pyramid::{PyramidLayout, build};
pub use selection::{DropOutcome, Phase, PickOutcome, SelectionController};
pub use state::{Board, Cell, GameEvent, GameRules, GameState};
pub use support::{ReleasedSupport, SupportEntry, SupportGraph};
