/// Errors raised while building a [`MetroGraph`](crate::MetroGraph) or
/// starting a traversal over it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A station name did not resolve to a station in the graph.
    #[error("station not found: {0}")]
    StationNotFound(String),
    /// An edge was added before one of its endpoints.
    #[error("invalid edge endpoint: {missing} (edge {from} -- {to})")]
    InvalidEdgeEndpoint {
        from: String,
        to: String,
        missing: String,
    },
    /// Edge distances must be positive.
    #[error("edge {from} -- {to} has zero distance")]
    ZeroDistance { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
