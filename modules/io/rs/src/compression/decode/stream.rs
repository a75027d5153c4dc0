use super::config::Config;
use eyre::Result;
use noodles::bgzf;
use std::io::Read;

pub enum Stream<R: Read + Send + Sync + 'static> {
    Raw(R),
    Gzip(flate2::read::MultiGzDecoder<R>),
    Bgzf(bgzf::io::Reader<R>),
}

impl<R: Read + Send + Sync + 'static> Stream<R> {
    pub fn new(inner: R, config: &Config) -> Result<Self> {
        match config {
            Config::Raw => Ok(Stream::Raw(inner)),
            Config::Gzip => Ok(Stream::Gzip(flate2::read::MultiGzDecoder::new(inner))),
            Config::Bgzf => Ok(Stream::Bgzf(bgzf::io::Reader::new(inner))),
        }
    }
}

impl<R: Read + Send + Sync + 'static> Read for Stream<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Stream::Raw(r) => r.read(buf),
            Stream::Gzip(r) => r.read(buf),
            Stream::Bgzf(r) => r.read(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use std::io::{Cursor, Write};

    #[test]
    fn test_gzip_stream() -> Result<()> {
        let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b">id\nACGT\n")?;
        let compressed = encoder.finish()?;

        let mut decoded = String::new();
        Stream::new(Cursor::new(compressed), &Config::Gzip)?.read_to_string(&mut decoded)?;
        assert_eq!(decoded, ">id\nACGT\n");
        Ok(())
    }

    #[test]
    fn test_bgzf_stream() -> Result<()> {
        let mut writer = bgzf::io::Writer::new(Vec::new());
        writer.write_all(b">id\nACGT\n>id2\nT\n")?;
        let compressed = writer.finish()?;

        let mut decoded = String::new();
        Stream::new(Cursor::new(compressed), &Config::Bgzf)?.read_to_string(&mut decoded)?;
        assert_eq!(decoded, ">id\nACGT\n>id2\nT\n");
        Ok(())
    }

    #[test]
    fn test_raw_stream() -> Result<()> {
        let mut decoded = Vec::new();
        Stream::new(Cursor::new(b"ACGT".to_vec()), &Config::Raw)?.read_to_end(&mut decoded)?;
        assert_eq!(decoded, b"ACGT");
        Ok(())
    }
}
