//! Construction-time failures
//!
//! Play itself never fails: bad picks and bad drops are ordinary outcomes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A pyramid needs at least one layer
    NoLayers,
    /// More layers than a deal accepts
    TooManyLayers { layer_count: usize, max: usize },
    /// No groups or no seed values to deal from
    EmptyDistribution,
    /// Total cell count cannot be split evenly across groups
    UnevenGroups { total: usize, group_count: u8 },
    /// Distribution has fewer tiles than the pyramid has cells
    DistributionExhausted { cells: usize, tiles: usize },
    /// Distribution would have tiles left over after dealing
    DistributionSurplus { cells: usize, tiles: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::NoLayers => write!(f, "pyramid must have at least one layer"),
            BuildError::TooManyLayers { layer_count, max } => {
                write!(f, "{layer_count} layers requested, at most {max} allowed")
            }
            BuildError::EmptyDistribution => write!(f, "distribution has no groups or values"),
            BuildError::UnevenGroups { total, group_count } => {
                write!(f, "{total} cells cannot be split across {group_count} groups")
            }
            BuildError::DistributionExhausted { cells, tiles } => {
                write!(f, "pyramid needs {cells} tiles but distribution holds {tiles}")
            }
            BuildError::DistributionSurplus { cells, tiles } => {
                write!(f, "distribution holds {tiles} tiles for only {cells} cells")
            }
        }
    }
}

impl std::error::Error for BuildError {}
