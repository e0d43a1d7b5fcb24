use std::fmt;

#[derive(Debug)]
pub(crate) enum PrefetchError {
    NotPrefetchFile,
    TruncatedHeader,
    TruncatedVolumeInfo,
    TruncatedFilenames,
    ReadFile,
    ReadDirectory,
}

impl std::error::Error for PrefetchError {}

impl fmt::Display for PrefetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefetchError::NotPrefetchFile => write!(f, "Missing prefetch signature"),
            PrefetchError::TruncatedHeader => write!(f, "File too small for prefetch header"),
            PrefetchError::TruncatedVolumeInfo => {
                write!(f, "Volume information extends past end of file")
            }
            PrefetchError::TruncatedFilenames => {
                write!(f, "Accessed file list extends past end of file")
            }
            PrefetchError::ReadFile => write!(f, "Failed to read file"),
            PrefetchError::ReadDirectory => write!(f, "Failed to read directory"),
        }
    }
}
