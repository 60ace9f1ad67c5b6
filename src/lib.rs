#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::PassengerSource, CliConfig};

pub use core::formatter::{format_pass, PassFormatter, INVALID_PASS};
pub use domain::model::{ClassType, FormattedPass, Passenger};
pub use utils::error::{InvalidPass, PassError, Result};
