pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, Parser)]
#[command(name = "local-pass")]
#[command(about = "Formats a passenger record into a Mumbai local train pass")]
pub struct CliConfig {
    /// JSON file holding one passenger record; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Exit with status 2 when the passenger is rejected
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input {
            validate_path("input", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config =
            CliConfig::try_parse_from(["local-pass", "--input", "p.json", "--strict"]).unwrap();
        assert_eq!(config.input.as_deref(), Some("p.json"));
        assert!(config.strict);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_input_path_is_rejected() {
        let config = CliConfig {
            input: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stdin_needs_no_path() {
        assert!(CliConfig::default().validate().is_ok());
    }
}
