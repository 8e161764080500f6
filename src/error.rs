use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    TerminalQueryFailed { error: Option<io::Error> },
}

impl Error {
    /// The ioctl succeeded but handed back an unusable answer.
    pub fn zero_columns() -> Self {
        Error::TerminalQueryFailed { error: None }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::TerminalQueryFailed { error: Some(error) }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TerminalQueryFailed { error: Some(e) } => {
                write!(f, "An error occured when querying the terminal size: {}", e)
            }
            Error::TerminalQueryFailed { error: None } => {
                write!(f, "The terminal reported a width of zero columns")
            }
        }
    }
}
