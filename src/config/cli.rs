use crate::config::CliConfig;
use crate::utils::error::Result;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the binary reads its passenger document from.
#[derive(Debug, Clone)]
pub enum PassengerSource {
    File(PathBuf),
    Stdin,
}

impl PassengerSource {
    pub fn from_config(config: &CliConfig) -> Self {
        match &config.input {
            Some(path) => PassengerSource::File(PathBuf::from(path)),
            None => PassengerSource::Stdin,
        }
    }

    pub fn read_value(&self) -> Result<Value> {
        let content = match self {
            PassengerSource::File(path) => fs::read_to_string(path)?,
            PassengerSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        tracing::debug!("read {} bytes of passenger JSON", content.len());

        parse_passenger(&content)
    }
}

/// Parses any JSON document. Shape checks are left to the formatter, so
/// `null` or an array parse fine here and are rejected later.
pub fn parse_passenger(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}
