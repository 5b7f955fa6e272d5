//! the two map axes group operations act on
use std::{fmt, str::FromStr};

use crate::error::ModelError;

/// The axis of an [AlertGroup][crate::AlertGroup] operation: either the
/// annotation maps or the label maps. Every reconciliation operation runs the
/// same algorithm against whichever axis it is handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// free form descriptive metadata
    Annotations,
    /// identifying metadata used for routing and grouping
    Labels,
}

impl Target {
    /// both axes, in the order the update methods default to
    pub const ALL: [Target; 2] = [Target::Annotations, Target::Labels];

    /// the axis name as it appears in payloads and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Annotations => "annotations",
            Target::Labels => "labels",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annotations" => Ok(Target::Annotations),
            "labels" => Ok(Target::Labels),
            other => Err(ModelError::InvalidTarget(other.to_owned())),
        }
    }
}
