use thiserror::Error;

/// Invalid network shape. Fatal for the build that produced it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("network needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("network has no hub")]
    MissingHub,
    #[error("network has {} hubs ({}), expected exactly one", .0.len(), .0.join(", "))]
    MultipleHubs(Vec<String>),
    #[error("node `{id}` has a malformed coordinate ({lat}, {lon})")]
    MalformedCoordinate { id: String, lat: f64, lon: f64 },
    #[error("node `{0}` is defined more than once")]
    DuplicateNode(String),
    #[error("invalid congestion range [{min}, {max}]")]
    InvalidCongestionRange { min: f64, max: f64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("unknown node `{0}`")]
    UnknownNode(String),
    #[error("degenerate input: {nodes} node(s), at least 2 required")]
    DegenerateInput { nodes: usize },
    #[error("graph is disconnected: reached {reached} of {total} nodes")]
    Disconnected { reached: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
