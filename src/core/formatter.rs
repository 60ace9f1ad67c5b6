use crate::core::text::{code_prefix, title_case};
use crate::domain::model::{ClassType, FormattedPass, Passenger, PASS_HEADER, PASS_ID_LABEL};
use crate::utils::error::InvalidPass;
use crate::utils::validation::{require_record, require_text_field};
use serde_json::Value;

/// Returned in place of a pass for any rejected input.
pub const INVALID_PASS: &str = "INVALID PASS";

/// Length of each station segment in the Pass ID.
const STATION_CODE_LEN: usize = 3;

/// Turns a loosely-typed passenger record into a printable local train pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassFormatter;

impl PassFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Checks shape, presence and class of every required field.
    ///
    /// Fields are checked in the order `name`, `from`, `to`, `classType`;
    /// the first failure is reported.
    pub fn validate(&self, input: &Value) -> Result<Passenger, InvalidPass> {
        let record = require_record(input)?;

        let name = require_text_field(record, "name")?;
        let from = require_text_field(record, "from")?;
        let to = require_text_field(record, "to")?;
        let class_type: ClassType = require_text_field(record, "classType")?.parse()?;

        Ok(Passenger {
            name: name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            class_type,
        })
    }

    pub fn pass_id(&self, passenger: &Passenger) -> String {
        let mut id = String::with_capacity(1 + 2 * STATION_CODE_LEN);
        id.push(passenger.class_type.initial());
        id.push_str(&code_prefix(&passenger.from, STATION_CODE_LEN));
        id.push_str(&code_prefix(&passenger.to, STATION_CODE_LEN));
        id
    }

    pub fn render(&self, passenger: &Passenger) -> FormattedPass {
        let pass_id = self.pass_id(passenger);
        tracing::trace!(pass_id = %pass_id, "rendering pass");

        let lines = [
            PASS_HEADER.to_string(),
            "---".to_string(),
            format!("Name: {}", passenger.name.to_ascii_uppercase()),
            format!("From: {}", title_case(&passenger.from)),
            format!("To: {}", title_case(&passenger.to)),
            format!("Class: {}", passenger.class_type.display_name()),
            format!("{}{}", PASS_ID_LABEL, pass_id),
        ];

        FormattedPass::new(lines.join("\n"))
    }

    /// Validates and renders in one step. Never fails: every rejection
    /// collapses to [`INVALID_PASS`].
    pub fn format(&self, input: &Value) -> String {
        match self.validate(input) {
            Ok(passenger) => self.render(&passenger).into_string(),
            Err(reason) => {
                tracing::debug!(field = ?reason.field(), "rejected passenger: {}", reason);
                INVALID_PASS.to_string()
            }
        }
    }
}

/// Shorthand for [`PassFormatter::format`].
pub fn format_pass(input: &Value) -> String {
    PassFormatter::new().format(input)
}
