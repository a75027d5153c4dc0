use crate::composition::Composition;
use crate::config::Config;
use crate::error::InvalidInput;
use dnael_core_rs::dna::Nucleotide;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Electrons of a free base, derived from its chemical formula.
pub const fn base_electrons(base: Nucleotide) -> u64 {
    match base {
        Nucleotide::A => 70, // C5H5N5
        Nucleotide::T => 66, // C5H6N2O2
        Nucleotide::G => 78, // C5H5N5O
        Nucleotide::C => 58, // C4H5N3O
    }
}

/// Base electrons of any Watson–Crick pair: A·T and G·C both carry 136.
pub const BASE_PAIR_ELECTRONS: u64 = 136;

const _: () = assert!(
    base_electrons(Nucleotide::A) + base_electrons(Nucleotide::T) == BASE_PAIR_ELECTRONS
        && base_electrons(Nucleotide::G) + base_electrons(Nucleotide::C) == BASE_PAIR_ELECTRONS
);

pub const DEOXYRIBOSE_ELECTRONS: u64 = 70;
pub const PHOSPHATE_ELECTRONS: u64 = 49;

/// Uncharged sugar-phosphate backbone of one base pair: two deoxyriboses and two phosphates.
pub const BACKBONE_ELECTRONS: u64 = 2 * DEOXYRIBOSE_ELECTRONS + 2 * PHOSPHATE_ELECTRONS;

/// Extra electrons from the negative charge of the phosphates of one base pair.
pub const PHOSPHATE_CHARGE_ELECTRONS: u64 = 2;

/// Named parts of the electron total.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Contribution {
    Bases,
    Backbone,
    PhosphateCharge,
}

impl Contribution {
    pub const ALL: [Contribution; 3] = [Self::Bases, Self::Backbone, Self::PhosphateCharge];

    pub fn name(&self) -> &'static str {
        match self {
            Contribution::Bases => "bases",
            Contribution::Backbone => "backbone",
            Contribution::PhosphateCharge => "phosphate_charge",
        }
    }
}

impl Display for Contribution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Electron total split into contributions. Bases are always present, the backbone and the
/// phosphate charge only when they were requested.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Breakdown {
    bases: u64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    backbone: Option<u64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    phosphate_charge: Option<u64>,
}

impl Breakdown {
    pub fn bases(&self) -> u64 {
        self.bases
    }

    pub fn backbone(&self) -> Option<u64> {
        self.backbone
    }

    pub fn phosphate_charge(&self) -> Option<u64> {
        self.phosphate_charge
    }

    pub fn get(&self, contribution: Contribution) -> Option<u64> {
        match contribution {
            Contribution::Bases => Some(self.bases),
            Contribution::Backbone => self.backbone,
            Contribution::PhosphateCharge => self.phosphate_charge,
        }
    }

    pub fn contains(&self, contribution: Contribution) -> bool {
        self.get(contribution).is_some()
    }

    /// Present contributions in `bases, backbone, phosphate_charge` order.
    pub fn iter(&self) -> impl Iterator<Item = (Contribution, u64)> + '_ {
        Contribution::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|value| (c, value)))
    }

    pub fn total(&self) -> u64 {
        self.iter().map(|(_, value)| value).sum()
    }
}

impl Display for Breakdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .join(", ")
        )
    }
}

/// Electron count of one sequence together with everything used to derive it.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Electrons {
    total: u64,
    breakdown: Breakdown,
    counts: Composition,
    sequence_length: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    config: Config,
}

impl Electrons {
    /// Apply the electron model to an already validated composition.
    pub fn from_composition(counts: Composition, config: Config) -> Self {
        let n = counts.len() as u64;

        // Per-unit electrons: a unit is a base pair for duplexes and a nucleotide otherwise
        let (bases, backbone, charge) = if config.double_stranded {
            (
                BASE_PAIR_ELECTRONS * n,
                BACKBONE_ELECTRONS,
                PHOSPHATE_CHARGE_ELECTRONS,
            )
        } else {
            let bases = counts
                .iter()
                .map(|(base, count)| base_electrons(base) * count as u64)
                .sum::<u64>();
            (bases, BACKBONE_ELECTRONS / 2, PHOSPHATE_CHARGE_ELECTRONS / 2)
        };

        let breakdown = Breakdown {
            bases,
            backbone: config.include_backbone.then_some(backbone * n),
            phosphate_charge: config.include_phosphate_charge.then_some(charge * n),
        };

        Self {
            total: breakdown.total(),
            breakdown,
            counts,
            sequence_length: counts.len(),
            config,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn counts(&self) -> &Composition {
        &self.counts
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn double_stranded(&self) -> bool {
        self.config.double_stranded
    }

    pub fn include_backbone(&self) -> bool {
        self.config.include_backbone
    }

    pub fn include_phosphate_charge(&self) -> bool {
        self.config.include_phosphate_charge
    }
}

/// Count the electrons of a DNA sequence.
///
/// The sequence is read case-insensitively and must consist of `A`, `T`, `G` and `C` only.
/// Offending positions in errors are byte offsets into `sequence`.
pub fn compute(sequence: impl AsRef<[u8]>, config: Config) -> Result<Electrons, InvalidInput> {
    let counts = Composition::scan(sequence.as_ref())?;
    Ok(Electrons::from_composition(counts, config))
}
