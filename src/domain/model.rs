use crate::core::text::trim_whitespace;
use crate::utils::error::InvalidPass;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const PASS_HEADER: &str = "MUMBAI LOCAL PASS";
pub const PASS_ID_LABEL: &str = "Pass ID: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    First,
    Second,
}

impl ClassType {
    /// Leading letter of the Pass ID.
    pub fn initial(self) -> char {
        match self {
            ClassType::First => 'F',
            ClassType::Second => 'S',
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ClassType::First => "FIRST",
            ClassType::Second => "SECOND",
        }
    }
}

impl FromStr for ClassType {
    type Err = InvalidPass;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = trim_whitespace(s);
        match trimmed.to_ascii_lowercase().as_str() {
            "first" => Ok(ClassType::First),
            "second" => Ok(ClassType::Second),
            _ => Err(InvalidPass::UnknownClass {
                value: trimmed.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A passenger that passed validation. Text fields are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passenger {
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "classType")]
    pub class_type: ClassType,
}

/// The seven-line pass text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPass(String);

impl FormattedPass {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }

    pub fn pass_id(&self) -> Option<&str> {
        self.lines()
            .last()
            .and_then(|line| line.strip_prefix(PASS_ID_LABEL))
    }
}

impl fmt::Display for FormattedPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FormattedPass> for String {
    fn from(pass: FormattedPass) -> Self {
        pass.0
    }
}
