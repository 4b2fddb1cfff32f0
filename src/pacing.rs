//! Pacing of visit events for consumers that animate a traversal.
//!
//! Traversals never sleep; a consumer that wants to show progress at a
//! readable speed wraps the event iterator in [`Paced`].
use std::{thread, time::Duration};

use crate::visit::Algorithm;

/// Delay between consecutive visit events, per algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub dijkstra: Duration,
    pub bfs: Duration,
    pub dfs: Duration,
}

impl Pacing {
    /// No delay at all.
    pub const fn none() -> Self {
        Pacing {
            dijkstra: Duration::ZERO,
            bfs: Duration::ZERO,
            dfs: Duration::ZERO,
        }
    }

    /// The same delay for every algorithm.
    pub const fn uniform(delay: Duration) -> Self {
        Pacing {
            dijkstra: delay,
            bfs: delay,
            dfs: delay,
        }
    }

    pub fn delay(&self, algorithm: Algorithm) -> Duration {
        match algorithm {
            Algorithm::Dijkstra => self.dijkstra,
            Algorithm::Bfs => self.bfs,
            Algorithm::Dfs => self.dfs,
        }
    }

    /// Wraps an event iterator so each event after the first is delivered
    /// `delay(algorithm)` after the previous one was pulled.
    pub fn pace<I>(&self, algorithm: Algorithm, events: I) -> Paced<I::IntoIter>
    where
        I: IntoIterator,
    {
        Paced::new(events.into_iter(), self.delay(algorithm))
    }
}

impl Default for Pacing {
    /// 700 ms between Dijkstra events, 600 ms between BFS and DFS events.
    fn default() -> Self {
        Pacing {
            dijkstra: Duration::from_millis(700),
            bfs: Duration::from_millis(600),
            dfs: Duration::from_millis(600),
        }
    }
}

/// An iterator adapter that sleeps for a fixed delay before every item
/// except the first.  Dropping it cancels the traversal it wraps.
#[derive(Debug, Clone)]
pub struct Paced<I> {
    inner: I,
    delay: Duration,
    started: bool,
}

impl<I> Paced<I> {
    pub fn new(inner: I, delay: Duration) -> Self {
        Paced {
            inner,
            delay,
            started: false,
        }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for Paced<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.started = true;
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
