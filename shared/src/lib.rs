// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("decode: {0}")]
    Decode(String),
    #[error("config: {0}")]
    Config(String),
}

impl Error {
    /// Network failures and non-success statuses, as an AJAX layer would classify them
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
