use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The queue no longer accepts bytes: the writer was closed or every
    /// receiver is gone.
    Closed,
    /// `close` was called on a writer that is already closed.
    AlreadyClosed,
    /// A non-blocking send found the queue full.
    WouldBlock,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Error { kind }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Closed => write!(f, "Send on closed channel"),
            ErrorKind::AlreadyClosed => write!(f, "Channel already closed"),
            ErrorKind::WouldBlock => write!(f, "Channel is full"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> std::io::Error {
        let kind = match err.kind {
            ErrorKind::Closed => std::io::ErrorKind::BrokenPipe,
            ErrorKind::AlreadyClosed => std::io::ErrorKind::NotConnected,
            ErrorKind::WouldBlock => std::io::ErrorKind::WouldBlock,
        };
        std::io::Error::new(kind, err)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
