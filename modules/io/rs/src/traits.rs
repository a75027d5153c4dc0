use eyre::Result;

/// A source of structured records, read one at a time into caller-owned buffers so that
/// allocations can be reused across records.
pub trait ReadRecord {
    /// The type of the records that will be read.
    type Record;

    /// Read a single record from the input into the provided buffer.
    /// Returns `true` if a record was read and `false` if the end of the input was reached.
    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool>;

    /// Fill a buffer with records from the input. Returns the number of records read, which could
    /// be less than the length of the buffer or equals 0 if the end of the input is reached.
    fn read_records(&mut self, into: &mut [Self::Record]) -> Result<usize> {
        let mut n = 0;
        for buf in into {
            if !self.read_record(buf)? {
                break;
            }
            n += 1;
        }
        Ok(n)
    }

    /// Read all remaining records and append them to the provided vector.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize>
    where
        Self::Record: Default,
    {
        let mut total = 0;
        loop {
            let mut record = Self::Record::default();
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}

/// A sink for structured records.
pub trait WriteRecord {
    type Record;

    /// Write a single record.
    fn write_record(&mut self, record: &Self::Record) -> Result<()>;

    /// Write a slice of records, stopping at the first error.
    fn write_records(&mut self, records: &[Self::Record]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush the output. Writers that buffer whole documents emit them here.
    fn flush(&mut self) -> Result<()>;
}
