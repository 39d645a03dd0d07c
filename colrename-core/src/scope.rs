use crate::blocks::{apply_mappings_in_blocks, DEFAULT_DELIMITER};
use crate::mapping::MappingTable;
use crate::replace::{apply_mappings, Replacement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of a file the mappings may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// Whole-file substring replacement
    #[default]
    Unrestricted,
    /// Only inside delimiter pairs
    Delimited,
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => write!(f, "unrestricted"),
            Self::Delimited => write!(f, "delimited"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeMode {
    #[default]
    Unrestricted,
    Delimited { delimiter: char },
}

impl ScopeMode {
    pub fn new(kind: ModeKind, delimiter: Option<char>) -> Self {
        match kind {
            ModeKind::Unrestricted => Self::Unrestricted,
            ModeKind::Delimited => Self::Delimited {
                delimiter: delimiter.unwrap_or(DEFAULT_DELIMITER),
            },
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Unrestricted => ModeKind::Unrestricted,
            Self::Delimited { .. } => ModeKind::Delimited,
        }
    }

    pub fn apply(&self, content: &str, table: &MappingTable) -> Replacement {
        match *self {
            Self::Unrestricted => apply_mappings(content, table),
            Self::Delimited { delimiter } => apply_mappings_in_blocks(content, delimiter, table),
        }
    }
}

impl fmt::Display for ScopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => write!(f, "unrestricted"),
            Self::Delimited { delimiter } => write!(f, "delimited ({delimiter})"),
        }
    }
}
