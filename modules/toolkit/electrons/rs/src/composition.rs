use crate::error::{InvalidInput, MAX_REPORTED_POSITIONS};
use dnael_core_rs::dna::Nucleotide;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::ops::Index;

/// Number of occurrences of each canonical base in a sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Composition {
    counts: [usize; 4],
}

impl Composition {
    /// Count the bases of a sequence in a single pass. Lower-case symbols are counted as their
    /// upper-case counterparts.
    ///
    /// Fails on empty input and on any byte outside of `ATGC`. In the latter case the error lists
    /// the offsets of the first [`MAX_REPORTED_POSITIONS`] offenders and how many more follow.
    pub fn scan(sequence: &[u8]) -> Result<Self, InvalidInput> {
        if sequence.is_empty() {
            return Err(InvalidInput::EmptySequence);
        }

        let mut counts = [0; 4];
        let mut positions = Vec::new();
        let mut invalid = 0;
        for (i, &symbol) in sequence.iter().enumerate() {
            match Nucleotide::from_ascii(symbol) {
                Some(base) => counts[base.index()] += 1,
                None => {
                    if positions.len() < MAX_REPORTED_POSITIONS {
                        positions.push(i);
                    }
                    invalid += 1;
                }
            }
        }

        if invalid > 0 {
            return Err(InvalidInput::InvalidCharacters {
                remaining: invalid - positions.len(),
                positions,
            });
        }
        Ok(Self { counts })
    }

    pub fn get(&self, base: Nucleotide) -> usize {
        self.counts[base.index()]
    }

    /// Total number of bases, i.e. the length of the scanned sequence.
    pub fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bases with their counts, in `A, T, G, C` order. Zero counts are included.
    pub fn iter(&self) -> impl Iterator<Item = (Nucleotide, usize)> + '_ {
        Nucleotide::ALL.into_iter().map(|base| (base, self.get(base)))
    }
}

impl Index<Nucleotide> for Composition {
    type Output = usize;

    fn index(&self, base: Nucleotide) -> &Self::Output {
        &self.counts[base.index()]
    }
}

impl Display for Composition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|(base, count)| format!("{base}: {count}"))
                .join(", ")
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Composition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Nucleotide::ALL.len()))?;
        for (base, count) in self.iter() {
            map.serialize_entry(&base.symbol(), &count)?;
        }
        map.end()
    }
}
