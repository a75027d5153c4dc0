pub use nucleotide::Nucleotide;

mod nucleotide;
