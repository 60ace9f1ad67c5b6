pub mod formatter;
pub mod text;

pub use crate::domain::model::{ClassType, FormattedPass, Passenger};
pub use crate::utils::error::{InvalidPass, Result};
