use crate::config::Config;
use crate::electrons::{compute, Electrons};
use crate::error::BatchError;
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use dnael_io_rs::{fasta, ReadRecord};
use eyre::Result;
use std::iter::FusedIterator;

/// Electron count of a single labeled sequence in a batch.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Constructor, Dissolve, Getters)]
pub struct Row {
    id: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    electrons: Electrons,
}

impl Row {
    fn compute(
        index: usize,
        id: impl Into<String>,
        sequence: impl AsRef<[u8]>,
        config: Config,
    ) -> std::result::Result<Self, BatchError> {
        let id = id.into();
        match compute(sequence, config) {
            Ok(electrons) => Ok(Self { id, electrons }),
            Err(source) => Err(BatchError::new(index, id, source)),
        }
    }
}

/// Lazy batch over `(id, sequence)` pairs. Rows come out in input order; after the first invalid
/// record the error is yielded and the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Batch<I> {
    records: I,
    config: Config,
    index: usize,
    failed: bool,
}

impl<I: Iterator> Batch<I> {
    pub fn new(records: impl IntoIterator<IntoIter = I>, config: Config) -> Self {
        Self {
            records: records.into_iter(),
            config,
            index: 0,
            failed: false,
        }
    }
}

impl<I, ID, SEQ> Iterator for Batch<I>
where
    I: Iterator<Item = (ID, SEQ)>,
    ID: Into<String>,
    SEQ: AsRef<[u8]>,
{
    type Item = std::result::Result<Row, BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (id, sequence) = self.records.next()?;

        let row = Row::compute(self.index, id, sequence, self.config);
        self.index += 1;
        self.failed = row.is_err();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            let (_, upper) = self.records.size_hint();
            (0, upper)
        }
    }
}

impl<I, ID, SEQ> FusedIterator for Batch<I>
where
    I: FusedIterator<Item = (ID, SEQ)>,
    ID: Into<String>,
    SEQ: AsRef<[u8]>,
{
}

/// Compute every record of a batch, failing fast on the first invalid one.
pub fn compute_batch<R, ID, SEQ>(
    records: R,
    config: Config,
) -> std::result::Result<Vec<Row>, BatchError>
where
    R: IntoIterator<Item = (ID, SEQ)>,
    ID: Into<String>,
    SEQ: AsRef<[u8]>,
{
    Batch::new(records, config).collect()
}

/// Drain a FASTA source through the batch adapter. The record buffer is reused between reads.
///
/// Read errors and invalid sequences both end the batch. The latter can be recovered from the
/// report with `downcast_ref::<BatchError>()`.
pub fn from_reader<R>(reader: &mut R, config: Config) -> Result<Vec<Row>>
where
    R: ReadRecord<Record = fasta::Record> + ?Sized,
{
    let mut rows = Vec::new();
    let mut record = fasta::Record::default();
    while reader.read_record(&mut record)? {
        rows.push(Row::compute(
            rows.len(),
            record.id().as_str(),
            record.seq(),
            config,
        )?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    #[test]
    fn test_batch_preserves_order() -> Result<()> {
        let config = Config::default();
        let rows = compute_batch([("seq1", "ATGC"), ("seq2", "A")], config)?;

        let ids: Vec<_> = rows.iter().map(|x| x.id().as_str()).collect();
        assert_eq!(ids, ["seq1", "seq2"]);
        assert_eq!(rows[0].electrons(), &compute("ATGC", config)?);
        assert_eq!(rows[1].electrons(), &compute("A", config)?);
        assert_eq!(rows[1].electrons().total(), 376);
        Ok(())
    }

    #[test]
    fn test_duplicate_ids_pass_through() -> Result<()> {
        let rows = compute_batch(
            vec![("x".to_string(), "AT"), ("x".to_string(), "GC")],
            Config::SINGLE_STRAND_BASES,
        )?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id(), rows[1].id());
        assert_eq!(rows[0].electrons().total(), 70 + 66);
        assert_eq!(rows[1].electrons().total(), 78 + 58);
        Ok(())
    }

    #[test]
    fn test_empty_batch() -> Result<()> {
        let rows = compute_batch(Vec::<(String, String)>::new(), Config::default())?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn test_batch_fails_fast() {
        let err = compute_batch(
            [("ok", "ATGC"), ("bad", "ATQ"), ("never", "")],
            Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(err.id(), "bad");
        assert_eq!(
            err.reason(),
            &InvalidInput::InvalidCharacters {
                positions: vec![2],
                remaining: 0
            }
        );
    }

    #[test]
    fn test_lazy_batch_stops_after_error() {
        let mut batch = Batch::new(
            [("a", "A"), ("b", ""), ("c", "C")],
            Config::default(),
        );
        assert!(matches!(batch.next(), Some(Ok(_))));
        assert!(matches!(batch.next(), Some(Err(ref e)) if e.reason() == &InvalidInput::EmptySequence));
        assert!(batch.next().is_none());
        assert!(batch.next().is_none());
        assert_eq!(batch.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_from_reader() -> Result<()> {
        let mut reader = fasta::Reader::new(std::io::Cursor::new(">seq1\nATGC\n>seq2\nA\n"))?;
        let rows = from_reader(&mut reader, Config::default())?;
        assert_eq!(
            rows,
            compute_batch([("seq1", "ATGC"), ("seq2", "A")], Config::default())?
        );
        Ok(())
    }

    #[test]
    fn test_from_reader_keeps_typed_error() -> Result<()> {
        let mut reader = fasta::Reader::new(std::io::Cursor::new(">seq1\nATGC\n>seq2\nATNN\n"))?;
        let report = from_reader(&mut reader, Config::default()).unwrap_err();
        let err = report
            .downcast_ref::<BatchError>()
            .ok_or_else(|| eyre::eyre!("Unexpected error: {report:?}"))?;
        assert_eq!(err.index(), 1);
        assert_eq!(err.id(), "seq2");
        Ok(())
    }

    #[test]
    fn test_from_reader_reports_gap_symbols() -> Result<()> {
        let mut reader =
            fasta::Reader::new(std::io::Cursor::new(">ok\nATGC\n>gapped\nAT-G\n*N\n"))?;
        let report = from_reader(&mut reader, Config::default()).unwrap_err();
        let err = report
            .downcast_ref::<BatchError>()
            .ok_or_else(|| eyre::eyre!("Unexpected error: {report:?}"))?;
        assert_eq!(err.index(), 1);
        assert_eq!(err.id(), "gapped");
        assert_eq!(
            err.reason(),
            &InvalidInput::InvalidCharacters {
                positions: vec![2, 4, 5],
                remaining: 0
            }
        );
        Ok(())
    }

    #[test]
    fn test_from_reader_uses_first_header_word() -> Result<()> {
        let mut reader = fasta::Reader::new(std::io::Cursor::new(
            ">seq1 some description\nATGC\n>seq2\tsecond\nA\n",
        ))?;
        let rows = from_reader(&mut reader, Config::default())?;
        let ids: Vec<_> = rows.iter().map(|x| x.id().as_str()).collect();
        assert_eq!(ids, ["seq1", "seq2"]);
        Ok(())
    }
}
