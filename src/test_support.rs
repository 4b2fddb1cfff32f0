#![cfg(test)]

use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::{Graph, MetroGraph, StationId};

const LINES: [&str; 3] = ["Blue", "Yellow", "Red"];

/// A small random network with a source and destination picked from it.
/// Networks may be disconnected and may contain parallel edges and self
/// loops.
#[derive(Debug, Clone)]
pub struct ArbNetwork {
    pub graph: MetroGraph,
    pub source: StationId,
    pub destination: StationId,
}

impl Arbitrary for ArbNetwork {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_stations = 1 + usize::arbitrary(g) % 8; // Keep brute force cheap
        let num_edges = usize::arbitrary(g) % 16;
        let num_extra_parallel_edges = usize::arbitrary(g) % 3;

        let mut graph = MetroGraph::new();
        let names: Vec<String> = (0..num_stations).map(|i| format!("S{i}")).collect();
        for (i, name) in names.iter().enumerate() {
            let line = LINES[usize::arbitrary(g) % LINES.len()];
            graph.add_station(name, (i as i32 * 10, (i % 3) as i32 * 10), line);
        }

        for i in 0..num_edges {
            let from = &names[usize::arbitrary(g) % names.len()];
            let to = &names[usize::arbitrary(g) % names.len()];
            graph
                .add_edge(from, to, 1 + u32::arbitrary(g) % 9)
                .expect("endpoints exist");
            if i < num_extra_parallel_edges {
                graph
                    .add_edge(to, from, 1 + u32::arbitrary(g) % 9)
                    .expect("endpoints exist");
            }
        }

        let source = StationId(usize::arbitrary(g) % num_stations);
        let destination = StationId(usize::arbitrary(g) % num_stations);
        ArbNetwork {
            graph,
            source,
            destination,
        }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Finds the smallest total weight over every simple path from `source` to
/// `destination` by enumerating them all.  Returns `None` if there is no
/// path.
pub fn brute_force_distance<G: Graph>(
    graph: &G,
    source: G::NodeId,
    destination: G::NodeId,
) -> Option<u64> {
    brute_force_distance_by(graph, source, destination, &|a, b| {
        u64::from(graph.weight(a, b))
    })
}

/// Like [`brute_force_distance`], counting every edge as one hop.
pub fn brute_force_hops<G: Graph>(
    graph: &G,
    source: G::NodeId,
    destination: G::NodeId,
) -> Option<u64> {
    brute_force_distance_by(graph, source, destination, &|_, _| 1)
}

fn brute_force_distance_by<G: Graph>(
    graph: &G,
    source: G::NodeId,
    destination: G::NodeId,
    weight: &dyn Fn(G::NodeId, G::NodeId) -> u64,
) -> Option<u64> {
    struct Walk<'a, G: Graph> {
        graph: &'a G,
        destination: G::NodeId,
        weight: &'a dyn Fn(G::NodeId, G::NodeId) -> u64,
        on_path: HashSet<G::NodeId>,
        best: Option<u64>,
    }

    impl<G: Graph> Walk<'_, G> {
        fn walk(&mut self, at: G::NodeId, so_far: u64) {
            if at == self.destination {
                self.best = Some(self.best.map_or(so_far, |b| b.min(so_far)));
                return;
            }
            for next in self.graph.neighbors(at).collect::<Vec<_>>() {
                if self.on_path.insert(next) {
                    let step = (self.weight)(at, next);
                    self.walk(next, so_far + step);
                    self.on_path.remove(&next);
                }
            }
        }
    }

    let mut walk = Walk {
        graph,
        destination,
        weight,
        on_path: HashSet::from([source]),
        best: None,
    };
    walk.walk(source, 0);
    walk.best
}

/// Checks that consecutive stations of `path` are adjacent and returns the
/// summed weight, or `None` if some pair is not adjacent.
pub fn path_weight<G: Graph>(graph: &G, path: &[G::NodeId]) -> Option<u64> {
    path.windows(2).try_fold(0u64, |total, pair| {
        graph
            .neighbors(pair[0])
            .any(|n| n == pair[1])
            .then(|| total + u64::from(graph.weight(pair[0], pair[1])))
    })
}
