//! Error types for the APT check.
//!
//! Every variant is fatal: the check reports `UNKNOWN` and stops without
//! producing a partial report.

use thiserror::Error;

/// Errors that can abort a check run
#[derive(Error, Debug)]
pub enum CheckError {
    /// A threshold option was not one of OK, WARNING, CRITICAL or UNKNOWN
    #[error("Unknown argument for --{option}: {value}")]
    InvalidThreshold { option: &'static str, value: String },

    /// The critical label pattern did not compile
    #[error("Invalid critical label pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Command line could not be parsed
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Package database could not be opened or simulated
    #[error("Unable to compute upgrade simulation: {0}")]
    Provider(String),

    /// APT configuration could not be read
    #[error("Unable to read APT configuration: {0}")]
    ConfigStore(String),
}

impl CheckError {
    /// Wrap a boundary error as a provider failure, keeping its context chain.
    pub fn provider(err: anyhow::Error) -> Self {
        CheckError::Provider(format!("{:#}", err))
    }

    /// Wrap a boundary error as a config store failure, keeping its context chain.
    pub fn config_store(err: anyhow::Error) -> Self {
        CheckError::ConfigStore(format!("{:#}", err))
    }
}

pub type Result<T, E = CheckError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_threshold_message() {
        let err = CheckError::InvalidThreshold {
            option: "keep",
            value: "maybe".into(),
        };
        assert_eq!(err.to_string(), "Unknown argument for --keep: maybe");
    }

    #[test]
    fn test_provider_keeps_context_chain() {
        let inner = anyhow::anyhow!("No such file or directory").context("Failed to run apt-get");
        let err = CheckError::provider(inner);
        assert_eq!(
            err.to_string(),
            "Unable to compute upgrade simulation: Failed to run apt-get: No such file or directory"
        );
    }

    #[test]
    fn test_config_store_message() {
        let err = CheckError::config_store(anyhow::anyhow!("apt-config exited with status 100"));
        assert_eq!(
            err.to_string(),
            "Unable to read APT configuration: apt-config exited with status 100"
        );
    }
}
