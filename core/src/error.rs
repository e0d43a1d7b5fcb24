use std::fmt;

#[derive(Debug)]
pub enum CollectError {
    BadDirectory,
    Output,
}

impl std::error::Error for CollectError {}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::BadDirectory => write!(f, "Could not read input directory"),
            CollectError::Output => write!(f, "Could not write csv output"),
        }
    }
}
