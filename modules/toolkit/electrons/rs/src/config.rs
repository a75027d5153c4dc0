use std::fmt::{Display, Formatter};

/// Switches of the electron model. All combinations are valid and the fields are independent.
///
/// The default enables everything: a fully paired duplex with backbone and phosphate charge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Config {
    /// Treat the sequence as one strand of a perfectly paired duplex.
    ///
    /// When `true`, every nucleotide stands for a base pair: bases add 136 e⁻ per pair regardless
    /// of composition, the backbone adds 238 e⁻ per pair and the charge adds 2 e⁻ per pair.
    /// When `false`, bases add their own free-base electrons, while the backbone and charge add
    /// half of the per-pair value (119 e⁻ and 1 e⁻) per nucleotide.
    pub double_stranded: bool,
    /// Add the sugar-phosphate backbone (2 deoxyriboses and 2 phosphates per pair, uncharged).
    pub include_backbone: bool,
    /// Add the electrons carried by the negative charge of the phosphate groups.
    pub include_phosphate_charge: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            double_stranded: true,
            include_backbone: true,
            include_phosphate_charge: true,
        }
    }
}

impl Config {
    /// Bare bases of a single strand, nothing else.
    pub const SINGLE_STRAND_BASES: Config = Config {
        double_stranded: false,
        include_backbone: false,
        include_phosphate_charge: false,
    };

    /// Every combination of the three switches.
    pub fn all() -> impl Iterator<Item = Config> {
        (0u8..8).map(|bits| Config {
            double_stranded: bits & 0b001 != 0,
            include_backbone: bits & 0b010 != 0,
            include_phosphate_charge: bits & 0b100 != 0,
        })
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let strands = if self.double_stranded { "ds" } else { "ss" };
        write!(
            f,
            "{strands}, backbone={}, phosphate_charge={}",
            self.include_backbone, self.include_phosphate_charge
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_combinations_are_distinct() {
        let all: HashSet<_> = Config::all().collect();
        assert_eq!(all.len(), 8);
        assert!(all.contains(&Config::default()));
        assert!(all.contains(&Config::SINGLE_STRAND_BASES));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Config::default().to_string(),
            "ds, backbone=true, phosphate_charge=true"
        );
        assert_eq!(
            Config::SINGLE_STRAND_BASES.to_string(),
            "ss, backbone=false, phosphate_charge=false"
        );
    }
}
