use dnael_io_rs::compression::decode;
use dnael_io_rs::fasta::{Reader, Record};
use dnael_io_rs::ReadRecord;
use eyre::Result;
use flate2::write::GzEncoder;
use std::io::Write;

const CONTENT: &str = ">seq1 first record\nATGC\n>seq2\nA\n";

fn expected() -> Result<Vec<Record>> {
    let first: Record = ("seq1", "ATGC").try_into()?;
    Ok(vec![
        first.with_description("first record")?,
        ("seq2", "A").try_into()?,
    ])
}

#[test]
fn plain_file_from_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("x.fasta");
    std::fs::write(&path, CONTENT)?;

    let compression = decode::Config::infer_from_path(&path);
    assert_eq!(compression, decode::Config::Raw);

    let mut records = Vec::new();
    Reader::from_path(&path, &compression)?.read_to_end(&mut records)?;
    assert_eq!(records, expected()?);
    Ok(())
}

#[test]
fn gzip_file_from_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("x.fasta.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&path)?, flate2::Compression::fast());
    encoder.write_all(CONTENT.as_bytes())?;
    encoder.finish()?;

    let compression = decode::Config::infer_from_path(&path);
    assert_eq!(compression, decode::Config::Gzip);

    let mut records = Vec::new();
    Reader::from_path(&path, &compression)?.read_to_end(&mut records)?;
    assert_eq!(records, expected()?);
    Ok(())
}

#[test]
fn bgzf_file_from_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("x.fasta.bgz");
    let mut writer = noodles::bgzf::io::Writer::new(std::fs::File::create(&path)?);
    writer.write_all(CONTENT.as_bytes())?;
    writer.finish()?;

    let compression = decode::Config::infer_from_path(&path);
    assert_eq!(compression, decode::Config::Bgzf);

    let mut records = Vec::new();
    Reader::from_path(&path, &compression)?.read_to_end(&mut records)?;
    assert_eq!(records, expected()?);
    Ok(())
}

#[test]
fn missing_file_is_reported() {
    let err = Reader::from_path("/definitely/not/here.fa", &decode::Config::Raw)
        .err()
        .expect("opening a missing file must fail");
    assert!(format!("{err}").contains("/definitely/not/here.fa"), "{err}");
}
