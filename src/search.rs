use std::collections::VecDeque;

use derivative::Derivative;
use tracing::{Span, debug_span, trace};

use crate::{
    graph::{Graph, NodeId},
    visit::{Algorithm, Visit},
    visited::VisitedSet,
};

/// Breadth-first traversal yielding one [`Visit`] per reachable node.
///
/// Nodes are marked visited when they are enqueued, so each node is queued
/// at most once.  Neighbors are enqueued in neighbor-list order.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct BfsIterator<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: VisitedSet,
    queue: VecDeque<G::NodeId>,
    step: usize,
    #[derivative(Debug = "ignore")]
    span: Span,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: G::NodeId) -> Self {
        let mut visited = VisitedSet::new(graph.num_nodes());
        visited.insert(start.index());
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
            step: 0,
            span: debug_span!("bfs", source = ?start),
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = Visit<G::NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let _guard = self.span.enter();
        let Some(nid) = self.queue.pop_front() else {
            trace!(visited = self.visited.len(), "bfs finished");
            return None;
        };
        for neighbor in self.graph.neighbors(nid) {
            if self.visited.insert(neighbor.index()) {
                self.queue.push_back(neighbor);
            }
        }
        let visit = Visit {
            algorithm: Algorithm::Bfs,
            step: self.step,
            station: nid,
            distance: None,
        };
        self.step += 1;
        trace!(station = ?nid, step = visit.step, "visit");
        Some(visit)
    }
}

/// Depth-first traversal yielding one [`Visit`] per reachable node.
///
/// Visits nodes in the same order as the recursive formulation: the current
/// node first, then each neighbor in list order that is still unvisited when
/// its turn comes.  The explicit stack holds one frame per node on the
/// current path, so memory does not depend on the call stack.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct DfsIterator<'g, G: Graph> {
    #[derivative(Debug = "ignore")]
    graph: &'g G,
    visited: VisitedSet,
    /// Nodes on the current path, each with the position of the next
    /// neighbor to try.
    stack: Vec<(G::NodeId, usize)>,
    pending: Option<G::NodeId>,
    step: usize,
    #[derivative(Debug = "ignore")]
    span: Span,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: G::NodeId) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(graph.num_nodes()),
            stack: Vec::new(),
            pending: Some(start),
            step: 0,
            span: debug_span!("dfs", source = ?start),
        }
    }

    /// Finds the next node to enter by resuming the deepest frame that still
    /// has untried neighbors.  Exhausted frames are popped.
    fn advance(&mut self) -> Option<G::NodeId> {
        while let Some((nid, cursor)) = self.stack.last_mut() {
            let next = self
                .graph
                .neighbors(*nid)
                .enumerate()
                .skip(*cursor)
                .find(|(_, neighbor)| !self.visited.contains(neighbor.index()));
            match next {
                Some((position, neighbor)) => {
                    *cursor = position + 1;
                    return Some(neighbor);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = Visit<G::NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.span.clone();
        let _guard = span.enter();
        let nid = match self.pending.take() {
            Some(nid) => nid,
            None => match self.advance() {
                Some(nid) => nid,
                None => {
                    trace!(visited = self.visited.len(), "dfs finished");
                    return None;
                }
            },
        };
        self.visited.insert(nid.index());
        self.stack.push((nid, 0));
        let visit = Visit {
            algorithm: Algorithm::Dfs,
            step: self.step,
            station: nid,
            distance: None,
        };
        self.step += 1;
        trace!(station = ?nid, step = visit.step, depth = self.stack.len(), "visit");
        Some(visit)
    }
}
