use thiserror::Error;

/// Failures while loading or querying a rule catalog.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),

    #[error("no rule set configured for country '{0}'")]
    CountryNotFound(String),

    /// A fixed-date rule no year can satisfy, e.g. April 31.
    #[error("rule '{name}': day {day} is out of range for month {month}")]
    InvalidRule { name: String, month: u32, day: u32 }
}
