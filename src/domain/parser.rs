//! Line parsing and species classification.
//!
//! Input lines have the shape `species,name,age`. Fields are split on every
//! comma with no quoting support, so a name containing a comma is rejected
//! as malformed. Trailing empty fields are dropped before counting, so
//! `Lion,Leo,5,` is still a three-field record.

use crate::domain::model::{AnimalRecord, Species};
use thiserror::Error;

/// Why a line was left out of the tally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Incorrect data format: expected 3 fields, found {fields}")]
    MalformedRecord { fields: usize },

    #[error("Invalid age '{value}': must be a non-negative integer")]
    InvalidAge { value: String },

    #[error("Unknown species: {species}")]
    UnknownSpecies { species: String },
}

impl RejectionReason {
    pub fn kind(&self) -> &'static str {
        match self {
            RejectionReason::MalformedRecord { .. } => "MalformedRecord",
            RejectionReason::InvalidAge { .. } => "InvalidAge",
            RejectionReason::UnknownSpecies { .. } => "UnknownSpecies",
        }
    }
}

/// Parses one raw line into a record.
///
/// Checks run in order: field count, age, species.
pub fn parse_line(line: &str) -> Result<AnimalRecord, RejectionReason> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    let [species, name, age] = fields.as_slice() else {
        return Err(RejectionReason::MalformedRecord {
            fields: fields.len(),
        });
    };

    let age = parse_age(age.trim())?;
    let species: Species = species.trim().parse()?;

    Ok(AnimalRecord {
        species,
        name: name.trim().to_string(),
        age,
    })
}

fn parse_age(raw: &str) -> Result<u32, RejectionReason> {
    let invalid = || RejectionReason::InvalidAge {
        value: raw.to_string(),
    };

    let value: i32 = raw.parse().map_err(|_| invalid())?;
    u32::try_from(value).map_err(|_| invalid())
}
