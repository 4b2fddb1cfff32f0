use std::fmt;

use crate::{MetroGraph, station::StationId};

/// The traversal that produced a [`Visit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::Bfs, Algorithm::Dfs];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An observable progress point of a traversal: the algorithm has reached
/// (BFS, DFS) or finalized (Dijkstra) `station`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit<N = StationId> {
    pub algorithm: Algorithm,
    /// Zero-based position of this event in its run.
    pub step: usize,
    pub station: N,
    /// The finalized distance from the source.  Only Dijkstra sets this.
    pub distance: Option<u64>,
}

/// Renders visits the way a running log of a traversal reads, one station
/// name per visit, each followed by an arrow: `"A → B → "`.
pub fn visit_trail<'a>(graph: &MetroGraph, visits: impl IntoIterator<Item = &'a Visit>) -> String {
    let mut trail = String::new();
    for visit in visits {
        trail.push_str(graph.station(visit.station).name());
        trail.push_str(" → ");
    }
    trail
}
