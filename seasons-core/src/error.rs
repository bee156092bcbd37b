use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    Transport(Box<dyn error::Error + Send + Sync>),
    Status(u16),
    Decode(serde_json::Error),
    Io(io::Error),
    InvalidUrl(url::ParseError),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Transport failure: {err}"),
            Self::Status(code) => write!(f, "Unexpected response status: {code}"),
            Self::Decode(err) => write!(f, "Malformed animation document: {err}"),
            Self::Io(err) => err.fmt(f),
            Self::InvalidUrl(err) => write!(f, "Invalid asset URL: {err}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Decode(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::InvalidUrl(err)
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        match err {
            ureq::Error::StatusCode(code) => Error::Status(code),
            ureq::Error::Io(err) => Error::Io(err),
            err => Error::Transport(Box::new(err)),
        }
    }
}
