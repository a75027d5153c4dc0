use std::fmt::{Display, Formatter};
use std::path::Path;

/// Compression container of an input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Config {
    /// Plain uncompressed bytes
    #[default]
    Raw,
    /// GZIP container, possibly with several concatenated members
    Gzip,
    /// Blocked GZIP (BGZF) container
    Bgzf,
}

impl Config {
    pub fn infer_from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| match ext.to_ascii_lowercase().as_str() {
                "gz" | "gzip" => Config::Gzip,
                "bgz" | "bgzf" => Config::Bgzf,
                _ => Config::Raw,
            })
            .unwrap_or(Config::Raw)
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Config::Raw => write!(f, "raw"),
            Config::Gzip => write!(f, "gzip"),
            Config::Bgzf => write!(f, "bgzf"),
        }
    }
}
