use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error reading {0}: {1}")]
    ReadFile(PathBuf, std::io::Error),
    #[error("error writing {0}: {1}")]
    WriteFile(PathBuf, std::io::Error),
}
