use crate::commands::Format;
use dnael_electrons_rs::{Composition, Row};
use dnael_io_rs::WriteRecord;
use eyre::Result;
use itertools::Itertools;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

/// Whether the report describes a single `--seq` input or a batch of FASTA records.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layout {
    Single,
    Batch,
}

/// Flat view of a row. Absent contributions are reported as 0.
#[derive(Serialize)]
struct Flat<'a> {
    id: &'a str,
    length: usize,
    bases: u64,
    backbone: u64,
    phosphate_charge: u64,
    total: u64,
    counts: &'a Composition,
}

impl<'a> From<&'a Row> for Flat<'a> {
    fn from(row: &'a Row) -> Self {
        let electrons = row.electrons();
        let breakdown = electrons.breakdown();
        Self {
            id: row.id(),
            length: electrons.sequence_length(),
            bases: breakdown.bases(),
            backbone: breakdown.backbone().unwrap_or(0),
            phosphate_charge: breakdown.phosphate_charge().unwrap_or(0),
            total: electrons.total(),
            counts: electrons.counts(),
        }
    }
}

const CSV_HEADER: &str = "id,length,bases,backbone,phosphate_charge,total,counts";

fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Renders rows as text, CSV or JSON. Text and CSV are streamed; JSON is collected and written
/// on [`WriteRecord::flush`].
pub struct Report<W> {
    writer: W,
    format: Format,
    layout: Layout,
    header_written: bool,
    json: Vec<serde_json::Value>,
}

impl<W: Write> Report<W> {
    pub fn new(writer: W, format: Format, layout: Layout) -> Self {
        Self {
            writer,
            format,
            layout,
            header_written: false,
            json: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_text(&mut self, row: &Row) -> Result<()> {
        let electrons = row.electrons();
        match self.layout {
            Layout::Single => {
                writeln!(self.writer, "Total electrons: {}", electrons.total())?;
                writeln!(self.writer, "Breakdown: {}", electrons.breakdown())?;
                writeln!(self.writer, "Counts: {}", electrons.counts())?;
            }
            Layout::Batch => {
                let flat = Flat::from(row);
                writeln!(
                    self.writer,
                    ">{}  len={}  total={}",
                    flat.id, flat.length, flat.total
                )?;
                writeln!(
                    self.writer,
                    "  bases={} backbone={} charge={} counts={}",
                    flat.bases, flat.backbone, flat.phosphate_charge, flat.counts
                )?;
            }
        }
        Ok(())
    }

    fn write_csv(&mut self, row: &Row) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "{CSV_HEADER}")?;
            self.header_written = true;
        }
        let flat = Flat::from(row);
        let counts = flat
            .counts
            .iter()
            .map(|(base, count)| format!("{base}={count}"))
            .join(";");
        writeln!(
            self.writer,
            "{},{},{},{},{},{},{}",
            csv_field(flat.id),
            flat.length,
            flat.bases,
            flat.backbone,
            flat.phosphate_charge,
            flat.total,
            counts
        )?;
        Ok(())
    }
}

impl<W: Write> WriteRecord for Report<W> {
    type Record = Row;

    fn write_record(&mut self, row: &Row) -> Result<()> {
        match self.format {
            Format::Text => self.write_text(row),
            Format::Csv => self.write_csv(row),
            Format::Json => {
                self.json.push(serde_json::to_value(Flat::from(row))?);
                Ok(())
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        if self.format == Format::Json {
            let rows = std::mem::take(&mut self.json);
            match (self.layout, rows.len()) {
                (Layout::Single, 1) => serde_json::to_writer_pretty(&mut self.writer, &rows[0])?,
                _ => serde_json::to_writer_pretty(&mut self.writer, &rows)?,
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
