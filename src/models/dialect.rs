use crate::errors::{AppError, AppResult};
use std::fmt;

/// Shape of a batch of exported log text.
///
/// - `Monthly`: one blob holds many days, each introduced by a delimiter line
///   followed by a `YYYY/MM/DD(W)` header.
/// - `Daily`: one blob is one day, dated by its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Monthly,
    Daily,
}

impl Dialect {
    /// Parse the selector given on the command line.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "monthly" => Ok(Dialect::Monthly),
            "daily" => Ok(Dialect::Daily),
            other => Err(AppError::InvalidDialect(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Monthly => "monthly",
            Dialect::Daily => "daily",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
