use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};
use std::borrow::Cow;
use std::error::Error;

/// A single FASTA entry: the identifier (first word of the header line), the rest of the header
/// as a free-form description, and the concatenated sequence lines.
///
/// Guarantees upheld by every constructor:
/// - the ID is non-empty and free of whitespace;
/// - the description is free of CR/LF characters;
/// - the sequence is non-empty and free of ASCII whitespace.
///
/// Symbols are not checked against any alphabet here. Deciding whether `N`, `-` or `*` is
/// acceptable is up to the consumer of the record.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Dissolve, Getters)]
pub struct Record {
    id: String,
    description: String,
    seq: Vec<u8>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            id: "record".to_string(),
            description: String::new(),
            seq: b"A".to_vec(),
        }
    }
}

impl<ID, SEQ> TryFrom<(ID, SEQ)> for Record
where
    ID: TryInto<String, Error: Error + Send + Sync + 'static>,
    SEQ: TryInto<Vec<u8>, Error: Error + Send + Sync + 'static>,
{
    type Error = eyre::Report;

    fn try_from(value: (ID, SEQ)) -> Result<Self> {
        Self::new(value.0.try_into()?, value.1.try_into()?)
    }
}

impl Record {
    pub fn new(id: String, seq: Vec<u8>) -> Result<Self> {
        Self::validate_id(&id)?;
        Self::validate_seq(&seq)?;
        Ok(Self {
            id,
            description: String::new(),
            seq,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        Self::validate_description(&description)?;
        self.description = description;
        Ok(self)
    }

    pub fn validate_id(id: &str) -> Result<()> {
        ensure!(!id.is_empty(), "FASTA ID cannot be empty");
        ensure!(
            !id.contains(char::is_whitespace),
            "Whitespace is not allowed in the FASTA ID: {id:?}"
        );
        Ok(())
    }

    pub fn validate_description(description: &str) -> Result<()> {
        ensure!(
            !description.contains(['\n', '\r']),
            "Newline characters are not allowed in the FASTA description: {description:?}"
        );
        Ok(())
    }

    pub fn validate_seq(seq: &[u8]) -> Result<()> {
        ensure!(!seq.is_empty(), "FASTA sequence cannot be empty");
        if let Some(i) = seq.iter().position(|x| x.is_ascii_whitespace()) {
            eyre::bail!("Whitespace character at index {i} = {:?}", seq[i] as char);
        }
        Ok(())
    }

    /// Full header line as it would appear after the `>`.
    pub fn header(&self) -> Cow<'_, str> {
        if self.description.is_empty() {
            Cow::Borrowed(&self.id)
        } else {
            Cow::Owned(format!("{} {}", self.id, self.description))
        }
    }

    /// Sequence as a string. Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
    pub fn seq_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.seq)
    }

    /// Raw access for readers that fill the record in place. Callers must re-validate all
    /// fields before handing the record out.
    pub(crate) fn buffers(&mut self) -> (&mut String, &mut String, &mut Vec<u8>) {
        (&mut self.id, &mut self.description, &mut self.seq)
    }
}
