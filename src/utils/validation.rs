use crate::core::text::trim_whitespace;
use crate::utils::error::{InvalidPass, PassError, Result};
use serde_json::{Map, Value};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PassError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PassError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Views an untrusted value as a keyed record.
pub fn require_record(value: &Value) -> std::result::Result<&Map<String, Value>, InvalidPass> {
    value.as_object().ok_or(InvalidPass::NotARecord)
}

/// Looks up `field` in `record` and returns it trimmed.
///
/// Absent, non-string and whitespace-only values are rejected. JSON `null`
/// counts as present-but-not-text.
pub fn require_text_field<'a>(
    record: &'a Map<String, Value>,
    field: &'static str,
) -> std::result::Result<&'a str, InvalidPass> {
    let value = record
        .get(field)
        .ok_or(InvalidPass::MissingField { field })?;
    let text = value.as_str().ok_or(InvalidPass::NotText { field })?;

    let trimmed = trim_whitespace(text);
    if trimmed.is_empty() {
        return Err(InvalidPass::EmptyField { field });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "passenger.json").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_require_record() {
        assert!(require_record(&json!({})).is_ok());
        assert_eq!(require_record(&Value::Null), Err(InvalidPass::NotARecord));
        assert_eq!(require_record(&json!([1, 2])), Err(InvalidPass::NotARecord));
        assert_eq!(require_record(&json!("dadar")), Err(InvalidPass::NotARecord));
    }

    #[test]
    fn test_require_text_field() {
        let record = json!({
            "name": "  rahul  ",
            "blank": " \t\n",
            "age": 31,
            "nothing": null
        });
        let record = record.as_object().unwrap();

        assert_eq!(require_text_field(record, "name"), Ok("rahul"));
        assert_eq!(
            require_text_field(record, "blank"),
            Err(InvalidPass::EmptyField { field: "blank" })
        );
        assert_eq!(
            require_text_field(record, "age"),
            Err(InvalidPass::NotText { field: "age" })
        );
        assert_eq!(
            require_text_field(record, "nothing"),
            Err(InvalidPass::NotText { field: "nothing" })
        );
        assert_eq!(
            require_text_field(record, "from"),
            Err(InvalidPass::MissingField { field: "from" })
        );
    }

    #[test]
    fn test_require_text_field_bom_only_is_empty() {
        let record = json!({ "name": "\u{FEFF}", "from": "\u{FEFF}dadar", "to": "\u{85}" });
        let record = record.as_object().unwrap();

        assert_eq!(
            require_text_field(record, "name"),
            Err(InvalidPass::EmptyField { field: "name" })
        );
        assert_eq!(require_text_field(record, "from"), Ok("dadar"));
        assert_eq!(require_text_field(record, "to"), Ok("\u{85}"));
    }
}
