use std::fmt;

use protovalid_types::Level;

/// A single instance where a field constraint was not met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    details: String,
    level: Level,
    message: String,
}

impl Finding {
    pub(crate) fn new(details: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            details: details.into(),
            level,
            message: message.into(),
        }
    }

    /// Returns the generated description of the violated rule.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the severity declared by the constraint.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the custom message declared by the constraint, empty if none.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Name of the level without its `LEVEL_` prefix, e.g. `ERROR`.
pub(crate) fn level_name(level: Level) -> &'static str {
    let name = level.as_str_name();
    name.strip_prefix("LEVEL_").unwrap_or(name)
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", level_name(self.level), self.details)?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        Ok(())
    }
}
