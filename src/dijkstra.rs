use std::{cmp::Reverse, collections::BinaryHeap};

use derivative::Derivative;
use tracing::{Span, debug, debug_span, trace};

use crate::{
    graph::{Graph, NodeId},
    path::{Distance, ShortestPath},
    visit::{Algorithm, Visit},
    visited::VisitedSet,
};

/// A single-source shortest path run, yielding one [`Visit`] per node as it
/// is finalized.
///
/// The frontier is a binary heap with lazy deletion: improving a node's
/// distance pushes a new entry and leaves the old one in place, and entries
/// for nodes that are already finalized are discarded when popped.  Entries
/// with equal distance pop in the order they were pushed.
///
/// The run does not stop at the destination; it finalizes the whole
/// component reachable from the source.  Call [`Dijkstra::finish`] to drain
/// the remaining events and get the path.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Dijkstra<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    source: G::NodeId,
    destination: G::NodeId,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<G::NodeId>>,
    visited: VisitedSet,
    frontier: BinaryHeap<Reverse<(u64, u64, G::NodeId)>>,
    pushed: u64,
    step: usize,
    #[derivative(Debug = "ignore")]
    span: Span,
}

impl<'g, G> Dijkstra<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, source: G::NodeId, destination: G::NodeId) -> Self {
        let num_nodes = graph.num_nodes();
        let mut dist = vec![None; num_nodes];
        dist[source.index()] = Some(0);
        let mut run = Self {
            graph,
            source,
            destination,
            dist,
            prev: vec![None; num_nodes],
            visited: VisitedSet::new(num_nodes),
            frontier: BinaryHeap::new(),
            pushed: 0,
            step: 0,
            span: debug_span!("dijkstra", source = ?source, destination = ?destination),
        };
        run.push(0, source);
        run
    }

    pub fn source(&self) -> G::NodeId {
        self.source
    }

    pub fn destination(&self) -> G::NodeId {
        self.destination
    }

    /// Returns the best distance known so far from the source to `node`.
    /// Once `node` has been yielded this is its final distance.
    pub fn tentative_distance(&self, node: G::NodeId) -> Distance {
        self.dist[node.index()].into()
    }

    /// Returns true once every reachable node has been finalized.
    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Runs the remaining steps and reconstructs the path to the
    /// destination by following predecessors back to the source.
    pub fn finish(mut self) -> ShortestPath<G::NodeId> {
        self.by_ref().for_each(drop);

        let mut stations = vec![self.destination];
        let mut at = self.destination;
        while let Some(prev) = self.prev[at.index()] {
            stations.push(prev);
            at = prev;
        }
        stations.reverse();

        let distance = self.tentative_distance(self.destination);
        let _guard = self.span.enter();
        debug!(hops = stations.len() - 1, %distance, "shortest path");
        ShortestPath::new(stations, distance)
    }

    fn push(&mut self, distance: u64, node: G::NodeId) {
        self.frontier.push(Reverse((distance, self.pushed, node)));
        self.pushed += 1;
    }

    fn relax(&mut self, from: G::NodeId, from_distance: u64) {
        let graph = self.graph;
        for neighbor in graph.neighbors(from) {
            if self.visited.contains(neighbor.index()) {
                continue;
            }
            let alt = from_distance + u64::from(graph.weight(from, neighbor));
            let improved = self.dist[neighbor.index()].is_none_or(|current| alt < current);
            if improved {
                trace!(from = ?from, to = ?neighbor, distance = alt, "relax");
                self.dist[neighbor.index()] = Some(alt);
                self.prev[neighbor.index()] = Some(from);
                self.push(alt, neighbor);
            }
        }
    }
}

impl<'g, G> Iterator for Dijkstra<'g, G>
where
    G: Graph,
{
    type Item = Visit<G::NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.span.clone();
        let _guard = span.enter();
        while let Some(Reverse((_, _, nid))) = self.frontier.pop() {
            if !self.visited.insert(nid.index()) {
                trace!(station = ?nid, "discard stale frontier entry");
                continue;
            }
            let Some(distance) = self.dist[nid.index()] else {
                unreachable!("frontier entries always have a distance");
            };
            self.relax(nid, distance);
            let visit = Visit {
                algorithm: Algorithm::Dijkstra,
                step: self.step,
                station: nid,
                distance: Some(distance),
            };
            self.step += 1;
            trace!(station = ?nid, step = visit.step, distance, "visit");
            return Some(visit);
        }
        trace!(visited = self.visited.len(), "dijkstra finished");
        None
    }
}
