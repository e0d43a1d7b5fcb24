use std::fmt;

#[derive(Debug)]
pub(crate) enum FormatError {
    CreateDirectory,
    Output,
}

impl std::error::Error for FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::CreateDirectory => write!(f, "Failed to create output directory"),
            FormatError::Output => write!(f, "Failed to output data"),
        }
    }
}
