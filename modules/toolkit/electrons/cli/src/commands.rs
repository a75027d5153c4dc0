use clap::{Args, Parser, ValueEnum};
use dnael_electrons_rs::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dna-electrons", version)]
#[command(about = "Compute total electrons for DNA sequences.")]
pub struct CommandLine {
    #[command(flatten)]
    pub input: Input,
    /// Treat as double-stranded (default if neither flag given)
    #[arg(long, conflicts_with = "single")]
    pub double: bool,
    /// Treat as single-stranded
    #[arg(long)]
    pub single: bool,
    /// Include sugar-phosphate backbone electrons
    #[arg(long)]
    pub include_backbone: bool,
    /// Include phosphate negative-charge electrons
    #[arg(long)]
    pub include_charge: bool,
    /// Output format. CSV puts the base counts of a record into one cell: A=1;T=0;G=0;C=0
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub output: Format,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Input {
    /// DNA sequence (ATGC). With --double, treated as one strand of a duplex
    #[arg(long)]
    pub seq: Option<String>,
    /// Path to a FASTA file with one or more sequences (.gz and .bgz are decompressed). Records
    /// are labeled with the first word of their header
    #[arg(long)]
    pub fasta: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    /// Human-readable summary
    Text,
    /// Header line, then one row per record
    Csv,
    /// One object for --seq, an array of objects for --fasta
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            double_stranded: !self.single,
            include_backbone: self.include_backbone,
            include_phosphate_charge: self.include_charge,
        }
    }
}
