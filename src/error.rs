use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Can't claim GPIO pin {pin}: {reason}")]
    Gpio { pin: u8, reason: String },

    #[error("Can't write status to {}: {source}", .path.display())]
    Status { path: PathBuf, source: io::Error },

    #[error("Can't read temperature from {from}: {source}")]
    Read { from: String, source: io::Error },

    #[error("Can't parse temperature output {0:?}")]
    Parse(String),

    #[error("Can't switch the fan: {0}")]
    Actuate(String),
}
