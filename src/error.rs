use std::io;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Sending the request or decoding its JSON body failed.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T, E = DemoError> = std::result::Result<T, E>;
