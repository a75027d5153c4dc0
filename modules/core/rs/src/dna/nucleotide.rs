use std::fmt::Display;

/// One of the four canonical DNA bases.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Nucleotide {
    /// Adenine, pairs with thymine.
    A = b'A',
    /// Thymine, pairs with adenine.
    T = b'T',
    /// Guanine, pairs with cytosine.
    G = b'G',
    /// Cytosine, pairs with guanine.
    C = b'C',
}

impl Nucleotide {
    /// All canonical bases in the conventional reporting order.
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::T, Self::G, Self::C];

    /// Parse a base from an ASCII symbol, ignoring case. Returns `None` for anything
    /// outside of the canonical alphabet (including IUPAC ambiguity codes).
    #[inline(always)]
    pub fn from_ascii(symbol: u8) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'T' => Some(Self::T),
            b'G' => Some(Self::G),
            b'C' => Some(Self::C),
            _ => None,
        }
    }

    /// Watson–Crick partner of the base.
    pub fn complement(&self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::G => Self::C,
            Self::C => Self::G,
        }
    }

    /// Get the upper-case symbol of the base.
    pub fn symbol(&self) -> char {
        *self as u8 as char
    }

    /// Position of the base inside [`Nucleotide::ALL`].
    #[inline(always)]
    pub fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::T => 1,
            Self::G => 2,
            Self::C => 3,
        }
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(value).ok_or(())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii() {
            Self::try_from(value as u8)
        } else {
            Err(())
        }
    }
}
