mod commands;
mod report;

use commands::CommandLine;
use dnael_electrons_rs::{compute, from_reader, Row};
use dnael_io_rs::compression::decode;
use dnael_io_rs::{fasta, WriteRecord};
use eyre::{Result, WrapErr};
use report::{Layout, Report};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::io::BufWriter;

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        simplelog::ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let args = CommandLine::parse_args();
    init_logging(args.verbose)?;

    let config = args.config();
    log::info!("Electron model: {config}");

    let stdout = BufWriter::new(std::io::stdout().lock());
    let mut report = match (&args.input.seq, &args.input.fasta) {
        (Some(seq), _) => {
            let electrons = compute(seq, config).wrap_err("Invalid --seq")?;
            let mut report = Report::new(stdout, args.output, Layout::Single);
            report.write_record(&Row::new("sequence".to_string(), electrons))?;
            report
        }
        (None, Some(path)) => {
            let compression = decode::Config::infer_from_path(path);
            let mut reader = fasta::Reader::from_path(path, &compression)?;
            let rows = from_reader(reader.as_mut(), config)
                .wrap_err_with(|| format!("Failed to process {}", path.display()))?;
            log::info!("Processed {} record(s) from {}", rows.len(), path.display());

            let mut report = Report::new(stdout, args.output, Layout::Batch);
            report.write_records(&rows)?;
            report
        }
        (None, None) => eyre::bail!("Either --seq or --fasta must be given"),
    };
    report.flush()
}
