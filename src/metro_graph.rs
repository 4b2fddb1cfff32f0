use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::{
    dijkstra::Dijkstra,
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
    path::ShortestPath,
    search::{BfsIterator, DfsIterator},
    station::{Position, Station, StationId},
};

/// Distance returned by [`MetroGraph::weight`] when no edge joins the two
/// stations.
pub const FALLBACK_WEIGHT: u32 = 1;

/// A transit network: named stations joined by undirected, weighted edges.
///
/// Stations and edges are kept in insertion order, which fixes the neighbor
/// order of every station and therefore the visitation order of every
/// traversal.  The graph is built once and only read afterwards; traversals
/// borrow it immutably.
#[derive(Debug, Clone, Default)]
pub struct MetroGraph {
    stations: Vec<Station>,
    index: HashMap<String, StationId>,
    edges: Vec<Edge>,
}

impl MetroGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // Construction

    /// Adds a station if no station with this name exists, and records that
    /// `line` serves it.  Adding an existing name only adds the line; the
    /// first position given is kept.
    pub fn add_station(&mut self, name: &str, position: impl Into<Position>, line: &str) -> StationId {
        let sid = match self.index.get(name) {
            Some(&sid) => sid,
            None => {
                let sid = StationId(self.stations.len());
                let position = position.into();
                debug!(station = name, ?sid, x = position.x, y = position.y, "add station");
                self.stations.push(Station::new(name.to_string(), position));
                self.index.insert(name.to_string(), sid);
                sid
            }
        };
        if self.stations[sid.0].add_line(line) {
            debug!(station = name, line, "add line");
        }
        sid
    }

    /// Joins two existing stations with an edge of the given distance.  Each
    /// station is appended to the other's neighbor list.  Parallel edges are
    /// kept.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: u32) -> Result<&Edge> {
        let endpoint = |name: &str| {
            self.index
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::InvalidEdgeEndpoint {
                    from: from.to_string(),
                    to: to.to_string(),
                    missing: name.to_string(),
                })
        };
        let from_id = endpoint(from)?;
        let to_id = endpoint(to)?;
        if distance == 0 {
            return Err(GraphError::ZeroDistance {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        debug!(from, to, distance, "add edge");
        self.stations[from_id.0].push_neighbor(to_id);
        self.stations[to_id.0].push_neighbor(from_id);
        self.edges.push(Edge::new(from_id, to_id, distance));
        Ok(&self.edges[self.edges.len() - 1])
    }

    // Lookup

    /// Resolves a station name to its identifier.
    pub fn station_id(&self, name: &str) -> Result<StationId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::StationNotFound(name.to_string()))
    }

    /// Gets a station by identifier.  Panics if `sid` came from a different
    /// graph with more stations.
    pub fn station(&self, sid: StationId) -> &Station {
        &self.stations[sid.0]
    }

    pub fn station_by_name(&self, name: &str) -> Result<&Station> {
        self.station_id(name).map(|sid| self.station(sid))
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Gets all stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> + '_ {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, station)| (StationId(i), station))
    }

    /// Gets all station names in insertion order, e.g. to fill a station
    /// picker.
    pub fn station_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.stations.iter().map(Station::name)
    }

    /// Gets all edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Gets the names of all lines serving at least one station, sorted.
    pub fn lines(&self) -> BTreeSet<&str> {
        self.stations.iter().flat_map(Station::lines).collect()
    }

    /// Gets the stations served by `line`, in insertion order.
    pub fn stations_on_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = StationId> + 'a {
        self.stations()
            .filter(move |(_, station)| station.is_on_line(line))
            .map(|(sid, _)| sid)
    }

    /// Gets the largest logical x and y coordinates of any station, or
    /// `(0, 0)` for an empty graph.
    pub fn extent(&self) -> Position {
        self.stations.iter().fold(Position::default(), |max, station| {
            let p = station.position();
            Position::new(max.x.max(p.x), max.y.max(p.y))
        })
    }

    /// Gets the distance of the first edge joining `a` and `b`, in either
    /// orientation.
    pub fn edge_distance(&self, a: StationId, b: StationId) -> Option<u32> {
        self.edges
            .iter()
            .find(|edge| edge.connects(a, b))
            .map(Edge::distance)
    }

    // Traversals

    /// Starts a shortest path run between two named stations.  Both names
    /// are resolved before anything is traversed.
    pub fn dijkstra(&self, source: &str, destination: &str) -> Result<Dijkstra<'_, Self>> {
        let source = self.station_id(source)?;
        let destination = self.station_id(destination)?;
        Ok(self.dijkstra_from(source, destination))
    }

    /// Runs Dijkstra to completion, discarding the visit events.
    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<ShortestPath> {
        Ok(self.dijkstra(source, destination)?.finish())
    }

    /// Starts a breadth-first traversal from a named station.
    pub fn bfs(&self, source: &str) -> Result<BfsIterator<'_, Self>> {
        Ok(self.bfs_from(self.station_id(source)?))
    }

    /// Starts a depth-first traversal from a named station.
    pub fn dfs(&self, source: &str) -> Result<DfsIterator<'_, Self>> {
        Ok(self.dfs_from(self.station_id(source)?))
    }
}

impl Graph for MetroGraph {
    type NodeId = StationId;

    fn node_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        (0..self.stations.len()).map(StationId)
    }

    fn num_nodes(&self) -> usize {
        self.stations.len()
    }

    fn neighbors(&self, node: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.station(node).neighbors().iter().copied()
    }

    /// Gets the distance of the first edge joining `a` and `b`.  Falls back
    /// to [`FALLBACK_WEIGHT`] when there is no such edge, which cannot happen
    /// for neighbors of a graph built with [`MetroGraph::add_edge`].
    fn weight(&self, a: StationId, b: StationId) -> u32 {
        self.edge_distance(a, b).unwrap_or_else(|| {
            warn!(?a, ?b, "no edge between stations, using fallback weight");
            FALLBACK_WEIGHT
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_triangle() -> MetroGraph {
        let mut graph = MetroGraph::new();
        graph.add_station("A", (0, 0), "Blue");
        graph.add_station("B", (10, 0), "Blue");
        graph.add_station("C", (10, 20), "Yellow");
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("A", "C", 5).unwrap();
        graph
    }

    #[test]
    fn test_add_station_assigns_dense_ids() {
        let graph = create_triangle();
        assert_eq!(graph.station_id("A"), Ok(StationId(0)));
        assert_eq!(graph.station_id("C"), Ok(StationId(2)));
        assert_eq!(graph.num_stations(), 3);
        assert_eq!(
            graph.station_names().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_add_station_twice_adds_line_and_keeps_position() {
        let mut graph = create_triangle();
        let sid = graph.add_station("A", (99, 99), "Yellow");
        assert_eq!(sid, StationId(0));
        assert_eq!(graph.num_stations(), 3);
        let station = graph.station(sid);
        assert_eq!(station.position(), Position::new(0, 0));
        assert_eq!(station.lines().collect::<Vec<_>>(), vec!["Blue", "Yellow"]);
        assert!(station.is_interchange());
    }

    #[test]
    fn test_add_edge_updates_neighbors_both_ways() {
        let graph = create_triangle();
        let a = graph.station_by_name("A").unwrap();
        let c = graph.station_by_name("C").unwrap();
        assert_eq!(a.neighbors(), &[StationId(1), StationId(2)]);
        assert_eq!(c.neighbors(), &[StationId(1), StationId(0)]);
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn test_add_edge_with_unknown_endpoint() {
        let mut graph = create_triangle();
        let err = graph.add_edge("A", "Z", 3).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEdgeEndpoint {
                from: "A".to_string(),
                to: "Z".to_string(),
                missing: "Z".to_string(),
            }
        );
        assert_eq!(err.to_string(), "invalid edge endpoint: Z (edge A -- Z)");
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.station(StationId(0)).neighbors().len(), 2);
    }

    #[test]
    fn test_add_edge_with_zero_distance() {
        let mut graph = create_triangle();
        assert!(matches!(
            graph.add_edge("A", "B", 0),
            Err(GraphError::ZeroDistance { .. })
        ));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = create_triangle();
        graph.add_edge("B", "A", 7).unwrap();
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(
            graph.station(StationId(0)).neighbors(),
            &[StationId(1), StationId(2), StationId(1)]
        );
        // The first matching edge wins.
        assert_eq!(graph.weight(StationId(0), StationId(1)), 1);
    }

    #[test]
    fn test_weight_either_orientation() {
        let graph = create_triangle();
        assert_eq!(graph.weight(StationId(2), StationId(1)), 2);
        assert_eq!(graph.weight(StationId(1), StationId(2)), 2);
    }

    #[test]
    fn test_weight_fallback_without_edge() {
        let mut graph = create_triangle();
        let d = graph.add_station("D", (5, 5), "Red");
        assert_eq!(graph.edge_distance(StationId(0), d), None);
        assert_eq!(graph.weight(StationId(0), d), FALLBACK_WEIGHT);
    }

    #[test]
    fn test_unknown_station_is_an_error() {
        let graph = create_triangle();
        let err = graph.bfs("Nowhere").unwrap_err();
        assert_eq!(err, GraphError::StationNotFound("Nowhere".to_string()));
        assert_eq!(err.to_string(), "station not found: Nowhere");
        assert!(graph.dfs("Nowhere").is_err());
        assert!(graph.dijkstra("A", "Nowhere").is_err());
        assert!(graph.dijkstra("Nowhere", "A").is_err());
    }

    #[test]
    fn test_lines_and_extent() {
        let graph = create_triangle();
        assert_eq!(graph.lines().into_iter().collect::<Vec<_>>(), vec!["Blue", "Yellow"]);
        assert_eq!(
            graph.stations_on_line("Blue").collect::<Vec<_>>(),
            vec![StationId(0), StationId(1)]
        );
        assert_eq!(graph.extent(), Position::new(10, 20));
        assert_eq!(MetroGraph::new().extent(), Position::default());
    }

    #[test]
    fn test_named_traversals() {
        let graph = create_triangle();
        let path = graph.shortest_path("A", "C").unwrap();
        assert_eq!(path.names(&graph), vec!["A", "B", "C"]);
        assert_eq!(
            path.describe(&graph),
            "Shortest Path: A → B → C\nTotal Distance: 3 km"
        );
        let bfs: Vec<_> = graph.bfs("A").unwrap().map(|v| v.station).collect();
        let dfs: Vec<_> = graph.dfs("A").unwrap().map(|v| v.station).collect();
        assert_eq!(bfs, vec![StationId(0), StationId(1), StationId(2)]);
        assert_eq!(dfs, vec![StationId(0), StationId(1), StationId(2)]);
    }

    #[cfg(feature = "pathfinding")]
    #[test]
    fn test_components() {
        let mut graph = create_triangle();
        let d = graph.add_station("D", (5, 5), "Red");
        let e = graph.add_station("E", (6, 6), "Red");
        graph.add_edge("D", "E", 1).unwrap();
        let mut sizes: Vec<_> = graph
            .connected_components()
            .iter()
            .map(|c| c.len())
            .collect();
        sizes.sort();
        assert_eq!(sizes, vec![2, 3]);
        assert_eq!(graph.reachable_from(d), vec![d, e]);
    }
}
