//! [`Graph`] is the read-only view of an undirected, weighted network that
//! the traversals in this crate run over.  [`MetroGraph`](crate::MetroGraph)
//! is the implementation used for transit networks.
//!
//! All traversals borrow the graph immutably and keep their working state
//! (visited sets, distance tables, queues) inside the returned iterator, so
//! several runs over the same graph never interfere with each other.
use std::{fmt::Debug, hash::Hash};

#[cfg(feature = "pathfinding")]
use std::collections::HashSet;

use crate::{
    dijkstra::Dijkstra,
    search::{BfsIterator, DfsIterator},
};

/// A trait for node identifiers that map onto a dense index range
/// `0..graph.num_nodes()`.  Traversals use the index to size their per-run
/// tables.
pub trait NodeId: Copy + Eq + Hash + Debug + Ord {
    fn index(self) -> usize;
}

impl NodeId for crate::StationId {
    fn index(self) -> usize {
        self.0
    }
}

/// A trait representing an undirected graph with positive integer edge
/// weights.  Neighbor order is significant: it drives the visitation order of
/// every traversal.
pub trait Graph: Sized {
    type NodeId: NodeId;

    /// Gets an iterator over all node identifiers in index order.
    fn node_ids(&self) -> impl Iterator<Item = Self::NodeId> + '_;

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.node_ids().count()
    }

    /// Gets the neighbors of a node in the order their edges were added.  A
    /// neighbor is repeated once per parallel edge.
    fn neighbors(&self, node: Self::NodeId) -> impl Iterator<Item = Self::NodeId> + '_;

    /// Gets the distance used to move between two adjacent nodes.
    fn weight(&self, a: Self::NodeId, b: Self::NodeId) -> u32;

    // Searches

    /// Performs a breadth-first search starting from the given node.
    fn bfs_from(&self, start: Self::NodeId) -> BfsIterator<'_, Self> {
        BfsIterator::new(self, start)
    }

    /// Performs a depth-first search starting from the given node.
    fn dfs_from(&self, start: Self::NodeId) -> DfsIterator<'_, Self> {
        DfsIterator::new(self, start)
    }

    /// Runs Dijkstra's algorithm from `source`.  The returned iterator yields
    /// one event per finalized node; [`Dijkstra::finish`] gives the path to
    /// `destination`.
    fn dijkstra_from(
        &self,
        source: Self::NodeId,
        destination: Self::NodeId,
    ) -> Dijkstra<'_, Self> {
        Dijkstra::new(self, source, destination)
    }

    // Components

    /// Gets every node reachable from `start`, including `start`, in
    /// breadth-first order.
    #[cfg(feature = "pathfinding")]
    fn reachable_from(&self, start: Self::NodeId) -> Vec<Self::NodeId> {
        pathfinding::prelude::bfs_reach(start, |nid| self.neighbors(*nid)).collect()
    }

    /// Partitions the graph into connected components.
    #[cfg(feature = "pathfinding")]
    fn connected_components(&self) -> Vec<HashSet<Self::NodeId>> {
        pathfinding::prelude::connected_components(&self.node_ids().collect::<Vec<_>>(), |nid| {
            self.neighbors(*nid)
        })
    }
}
