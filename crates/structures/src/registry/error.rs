// ---------------------------------------------------------------------------
// RegistryError: world-authoring defects found by registry queries
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::TileCoord;

/// Name and anchor of a structure, detached from its footprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructureSummary {
    pub name: String,
    pub anchor: TileCoord,
}

impl fmt::Display for StructureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.anchor)
    }
}

/// Errors raised by the structure registry.
///
/// These describe broken world data, not runtime conditions. Callers are
/// expected to stop rather than pick one of the candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// More than one structure claims `coordinate`.
    OverlapDetected {
        coordinate: TileCoord,
        candidates: Vec<StructureSummary>,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::OverlapDetected {
                coordinate,
                candidates,
            } => {
                write!(
                    f,
                    "Got {} intersecting structures at {coordinate}: [",
                    candidates.len()
                )?;
                for (i, candidate) in candidates.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{candidate}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
