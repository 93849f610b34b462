//! Error types for the deployment tool.

use std::fmt;

/// Deployment error type.
#[derive(Debug)]
pub enum Error {
    /// Settings error (bad layering source, malformed value).
    Config(String),
    /// Wasm artifact could not be resolved or read.
    Artifact(String),
    /// Provisioning backend rejected or failed the instantiation request.
    Provision(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Artifact(msg) => write!(f, "artifact error: {msg}"),
            Error::Provision(msg) => write!(f, "provision error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
