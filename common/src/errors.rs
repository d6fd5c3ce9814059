/// Failures of the explorer core. None of them is fatal: adapters log them and
/// leave the page as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerError {
    /// A search term or identifier resolved to no known country.
    NoMatch(String),
    /// Framing was requested but no shape with usable geometry was found.
    NoShapes(String),
    /// The content dataset could not be loaded or parsed.
    DatasetUnavailable(String),
    /// A shape's bounding box is missing or not finite.
    GeometryUnavailable(String),
    /// Shapes or content are still loading.
    NotReady,
    InvalidData(String),
    InvalidConfig(String),
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::InvalidData(err.to_string())
    }
}

impl From<ExplorerError> for String {
    fn from(error: ExplorerError) -> Self {
        error.to_string()
    }
}

impl std::fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExplorerError::NoMatch(term) => write!(f, "No country matches '{}'", term),
            ExplorerError::NoShapes(what) => write!(f, "No shapes to frame for {}", what),
            ExplorerError::DatasetUnavailable(reason) => {
                write!(f, "Content dataset unavailable: {}", reason)
            }
            ExplorerError::GeometryUnavailable(shape) => {
                write!(f, "Bounding box unavailable for shape {}", shape)
            }
            ExplorerError::NotReady => write!(f, "Map data is still loading"),
            ExplorerError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            ExplorerError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ExplorerError {}
