use crate::domain::parser::RejectionReason;
use crate::domain::tally::SpeciesTally;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of species the zoo keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Hyena,
    Lion,
    Tiger,
    Bear,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Hyena, Species::Lion, Species::Tiger, Species::Bear];

    pub fn label(&self) -> &'static str {
        match self {
            Species::Hyena => "Hyena",
            Species::Lion => "Lion",
            Species::Tiger => "Tiger",
            Species::Bear => "Bear",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = RejectionReason;

    /// Exact, case-sensitive match against the canonical labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.label() == s)
            .ok_or_else(|| RejectionReason::UnknownSpecies {
                species: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub species: Species,
    pub name: String,
    pub age: u32,
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Age: {}", self.name, self.age)
    }
}

/// An input line excluded from the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based position in the input.
    pub line_number: usize,
    pub raw: String,
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub lines_read: usize,
    pub tally: SpeciesTally,
    pub rejected: Vec<RejectedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub species: Species,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: String,
    pub output: String,
    pub lines_read: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub species: Vec<SpeciesCount>,
    pub generated_at: DateTime<Utc>,
}
