/// Result of loading or parsing carousel content, config and reveal settings.
pub type ShowreelResult<T> = Result<T, ShowreelError>;

/// Why content, configuration or a trigger string was rejected.
///
/// Navigation never fails: dropped intents are reported through `GoTo::Ignored` instead.
#[derive(thiserror::Error, Debug)]
pub enum ShowreelError {
    /// Malformed trigger positions, toggle actions or ease names.
    #[error("validation error: {0}")]
    Validation(String),

    /// Catalog rejected: duplicate ids, titles without slug characters, or colliding slugs.
    #[error("content error: {0}")]
    Content(String),

    /// Carousel or reveal settings out of range, or a config file that cannot be opened.
    #[error("config error: {0}")]
    Config(String),

    /// Catalog or config JSON that does not parse.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything raised below the loaders.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShowreelError {
    /// Build a [`ShowreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShowreelError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`ShowreelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ShowreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
