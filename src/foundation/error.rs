pub type BlueboardResult<T> = Result<T, BlueboardError>;

#[derive(thiserror::Error, Debug)]
pub enum BlueboardError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("remote generation error: {0}")]
    RemoteGeneration(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error("startup error: {0}")]
    Startup(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlueboardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteGeneration(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup(msg.into())
    }
}

impl From<serde_json::Error> for BlueboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
