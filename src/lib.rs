//! A transit network model with step-wise graph traversals.
//!
//! A [`MetroGraph`] holds named stations joined by undirected, weighted
//! edges.  Three traversals run over it, each as an iterator of [`Visit`]
//! events that a caller pulls at its own pace:
//!
//! - [`MetroGraph::dijkstra`]: shortest path by total distance
//! - [`MetroGraph::bfs`]: breadth-first visitation order
//! - [`MetroGraph::dfs`]: depth-first visitation order
//!
//! ```
//! use metrograph::{Distance, MetroGraph};
//!
//! let mut graph = MetroGraph::new();
//! graph.add_station("A", (0, 0), "Blue");
//! graph.add_station("B", (10, 0), "Blue");
//! graph.add_station("C", (20, 0), "Blue");
//! graph.add_edge("A", "B", 1)?;
//! graph.add_edge("B", "C", 2)?;
//! graph.add_edge("A", "C", 5)?;
//!
//! let mut run = graph.dijkstra("A", "C")?;
//! for visit in run.by_ref() {
//!     println!("finalized {}", graph.station(visit.station).name());
//! }
//! let path = run.finish();
//! assert_eq!(path.names(&graph), ["A", "B", "C"]);
//! assert_eq!(path.distance(), Distance::Finite(3));
//! # Ok::<(), metrograph::GraphError>(())
//! ```
pub mod delhi;
pub mod dijkstra;
pub mod edge;
pub mod error;
pub mod graph;
pub mod metro_graph;
pub mod pacing;
pub mod path;
pub mod prelude;
pub mod search;
pub mod station;
pub mod tracing_support;
pub mod visit;

mod test_support;
mod traversal_tests;
mod visited;

pub use error::{GraphError, Result};
pub use graph::{Graph, NodeId};
pub use metro_graph::MetroGraph;
pub use path::{Distance, ShortestPath};
pub use station::{Position, Station, StationId};
pub use visit::{Algorithm, Visit, visit_trail};
