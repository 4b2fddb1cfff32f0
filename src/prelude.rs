pub use crate::dijkstra::Dijkstra;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{Graph, NodeId};
pub use crate::metro_graph::MetroGraph;
pub use crate::pacing::{Paced, Pacing};
pub use crate::path::{Distance, ShortestPath};
pub use crate::search::{BfsIterator, DfsIterator};
pub use crate::station::{Position, Station, StationId};
pub use crate::visit::{Algorithm, Visit};
