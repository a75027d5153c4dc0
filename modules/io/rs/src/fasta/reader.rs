use super::record::Record;
use crate::compression::decode;
use crate::traits::ReadRecord;
use derive_getters::Dissolve;
use eyre::{ensure, Result, WrapErr};
use std::io::BufRead;
use std::path::Path;

/// A strict FASTA reader that yields one record at a time. The header is split at the first
/// whitespace into the record ID and its description. Tolerates:
/// - Carriage returns at the end of lines (Windows line endings)
/// - Blank lines inside the sequence block
///
/// Returns an error if there are:
/// - Errors while reading from the underlying reader
/// - Extra characters before the first record
/// - Whitespace inside the sequence, including a CR that is not followed by a LF
/// - Empty ID or sequence fields in any record
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
    records: usize,
}

impl Reader<()> {
    /// Open a FASTA file, decoding it according to the given compression config.
    pub fn from_path(
        path: impl AsRef<Path>,
        compression: &decode::Config,
    ) -> Result<Box<dyn ReadRecord<Record = Record> + Send + Sync + 'static>> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("Failed to open FASTA file {}", path.display()))?;
        log::debug!("Reading FASTA {} ({compression})", path.display());

        let boxed: Box<dyn ReadRecord<Record = Record> + Send + Sync + 'static> =
            match decode::Stream::new(file, compression)? {
                decode::Stream::Raw(x) => Box::new(Reader::new(std::io::BufReader::new(x))?),
                decode::Stream::Gzip(x) => Box::new(Reader::new(std::io::BufReader::new(x))?),
                decode::Stream::Bgzf(x) => Box::new(Reader::new(std::io::BufReader::new(x))?),
            };
        Ok(boxed)
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(mut reader: R) -> Result<Self> {
        let buffer = reader.fill_buf()?;
        ensure!(
            buffer.first().map(|x| *x == b'>').unwrap_or(true),
            "Expected '>' at the start of the FASTA file"
        );
        Ok(Self { reader, records: 0 })
    }

    fn read_parts(&mut self, record: &mut Record) -> Result<bool> {
        let buffer = self.reader.fill_buf()?;
        if buffer.is_empty() {
            return Ok(false);
        }
        ensure!(
            buffer[0] == b'>',
            "Expected '>' at the start of FASTA record #{}",
            self.records + 1
        );
        self.reader.consume(1);

        let (id, description, seq) = record.buffers();

        // Header line: ID up to the first whitespace, the rest is the description
        id.clear();
        description.clear();
        let read = self.reader.read_line(id)?;
        ensure!(read > 0, "Unexpected EOF after '>'");
        ensure!(
            id.ends_with('\n'),
            "FASTA ID line is not terminated with a newline: {id:?}"
        );
        let end = id.trim_end().len();
        id.truncate(end);
        let start = id.len() - id.trim_start().len();
        id.replace_range(..start, "");
        if let Some(pos) = id.find(char::is_whitespace) {
            description.push_str(id[pos..].trim_start());
            id.truncate(pos);
        }
        Record::validate_id(id)?;

        // Sequence lines until the next header or EOF
        seq.clear();
        let mut pending_cr = false;
        loop {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() || buffer[0] == b'>' {
                break;
            }

            // A CR at the end of the previous chunk is a line ending only if a LF follows it
            if pending_cr && buffer[0] != b'\n' {
                seq.push(b'\r');
            }

            let consume = match memchr::memchr(b'\n', buffer) {
                Some(pos) => {
                    let line = &buffer[..pos];
                    seq.extend_from_slice(line.strip_suffix(b"\r").unwrap_or(line));
                    pending_cr = false;
                    pos + 1
                }
                None => {
                    let chunk = buffer.strip_suffix(b"\r");
                    pending_cr = chunk.is_some();
                    seq.extend_from_slice(chunk.unwrap_or(buffer));
                    buffer.len()
                }
            };
            self.reader.consume(consume);
        }
        Record::validate_seq(seq).wrap_err_with(|| format!("Invalid FASTA record {id:?}"))?;

        self.records += 1;
        Ok(true)
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    /// Parse the next FASTA record into the given buffer. Returns `false` at EOF.
    ///
    /// On error the buffer is left in an unspecified (but reusable) state.
    fn read_record(&mut self, buf: &mut Self::Record) -> Result<bool> {
        self.read_parts(buf)
    }
}
