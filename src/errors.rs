use thiserror::Error;

/// Error type for the fallible edges of the widget core: snapshot and config
/// loading, command-line input, category decoding, action URIs and host updates.
///
/// Rendering itself never returns one of these; it degrades to defaults.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid category data: {0}")]
    InvalidCategories(String),
    #[error("Invalid preference snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("Invalid widget action: {0}")]
    InvalidAction(String),
    #[error("Widget host error: {0}")]
    Host(String),
}
