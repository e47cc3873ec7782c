use std::fmt;
use std::str::FromStr;

use crate::error::PackError;

/// A product configuration, written `flavor/subsystem` (e.g. `CustA/Disco`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    pub flavor: String,
    pub subsystem: String,
}

impl Variant {
    pub fn new(flavor: impl Into<String>, subsystem: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
            subsystem: subsystem.into(),
        }
    }
}

impl FromStr for Variant {
    type Err = PackError;

    /// Backslashes are accepted as separators so Windows-style `CustA\Disco`
    /// parses the same as `CustA/Disco`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('\\', "/");
        let malformed = || PackError::MalformedVariant {
            input: s.to_string(),
        };

        let (flavor, subsystem) = normalized.split_once('/').ok_or_else(malformed)?;
        if subsystem.contains('/') {
            return Err(malformed());
        }
        if [flavor, subsystem]
            .iter()
            .any(|part| matches!(*part, "" | "." | ".."))
        {
            return Err(malformed());
        }

        Ok(Self::new(flavor, subsystem))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.flavor, self.subsystem)
    }
}
