use std::error;
use std::fmt;
use std::io;
use std::result;

/// The errors that operations on an `AvlTree` can produce.
#[derive(Debug)]
pub enum Error {
    /// A deletion was requested for a key that is not in the tree.
    NotFound(i32),
    /// A traversal order tag that does not name any traversal.
    InvalidArgument(String),
    /// An input or output error raised while reporting a traversal.
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound(key) => write!(f, "Failed to delete {}: key not found.", key),
            Error::InvalidArgument(tag) => write!(f, "Unknown tree traversal type: {:?}.", tag),
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

/// Convenience alias for results whose error type is `Error`.
pub type Result<T> = result::Result<T, Error>;
