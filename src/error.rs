use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigMissing(String),
    Decrypt(String),
    Parse(String),
    UnknownProvider(String),
    UnknownRecordType(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigMissing(msg) => write!(f, "Configuration missing: {msg}"),
            Error::Decrypt(msg) => write!(f, "Decryption failed: {msg}"),
            Error::Parse(msg) => write!(f, "Parse error: {msg}"),
            Error::UnknownProvider(msg) => write!(f, "Unknown provider: {msg}"),
            Error::UnknownRecordType(msg) => write!(f, "Unknown record type: {msg}"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
