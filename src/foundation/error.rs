/// Result alias used across the crate.
pub type FolioResult<T> = Result<T, FolioError>;

/// Errors raised for invalid inputs to the engine.
///
/// Degraded content (missing assets, empty feature lists, observers whose target never
/// mounts) is not an error; see [`Diagnostic`](crate::Diagnostic).
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// A parameter or configuration value is out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Content data could not be used.
    #[error("content error: {0}")]
    Content(String),

    /// The layout engine rejected the page tree.
    #[error("layout error: {0}")]
    Layout(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Reading an input file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Content`].
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`FolioError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FolioError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

impl From<taffy::TaffyError> for FolioError {
    fn from(e: taffy::TaffyError) -> Self {
        Self::Layout(e.to_string())
    }
}
