use derive_more::{Display, Error};
use itertools::Itertools;
use std::fmt::Formatter;

/// Upper bound on the number of offending positions kept in [`InvalidInput::InvalidCharacters`].
pub const MAX_REPORTED_POSITIONS: usize = 5;

/// Reasons a sequence can't be turned into an electron count.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Error)]
pub enum InvalidInput {
    /// The sequence has no nucleotides at all.
    EmptySequence,
    /// The sequence contains bytes outside of `ATGC` (case-insensitive).
    InvalidCharacters {
        /// 0-based byte offsets of the first offenders, at most [`MAX_REPORTED_POSITIONS`].
        positions: Vec<usize>,
        /// Offenders found after the reported ones.
        remaining: usize,
    },
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::EmptySequence => write!(f, "Sequence must be non-empty"),
            InvalidInput::InvalidCharacters {
                positions,
                remaining,
            } => {
                write!(
                    f,
                    "Sequence contains non-ATGC characters at positions: {}",
                    positions.iter().join(", ")
                )?;
                if *remaining > 0 {
                    write!(f, " and {remaining} more")?;
                }
                Ok(())
            }
        }
    }
}

/// The first record of a batch that failed validation. Nothing computed for the batch is kept.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, Error)]
#[display("Invalid sequence in record #{index} ({id:?})")]
pub struct BatchError {
    index: usize,
    id: String,
    source: InvalidInput,
}

impl BatchError {
    pub fn new(index: usize, id: impl Into<String>, source: InvalidInput) -> Self {
        Self {
            index,
            id: id.into(),
            source,
        }
    }

    /// 0-based position of the record in the batch.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn reason(&self) -> &InvalidInput {
        &self.source
    }
}
