//! Subscriber setup for the traversal instrumentation.
//!
//! Every traversal run opens a `debug` span (`dijkstra`, `bfs`, `dfs`) that
//! lives as long as its iterator, and emits `trace` events per visit.  With
//! the `tracing` feature this module installs a `tracing-subscriber` fmt
//! subscriber and offers [`TraversalTimings`] to total up run durations;
//! without it [`init_tracing`] does nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        collections::BTreeMap,
        fmt::Write as _,
        sync::{Arc, Mutex, Once, PoisonError},
        time::{Duration, Instant},
    };

    use tracing::{Level, level_filters::LevelFilter};
    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    /// Accumulated duration and count of closed spans with the same name.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    /// A subscriber layer that totals the lifetime of closed spans by name.
    /// Clones share the same totals.
    #[derive(Debug, Clone, Default)]
    pub struct TraversalTimings {
        totals: Arc<Mutex<BTreeMap<&'static str, SpanTiming>>>,
    }

    impl TraversalTimings {
        pub fn new() -> Self {
            Self::default()
        }

        /// Gets the timing recorded for spans named `name`, if any closed.
        pub fn get(&self, name: &str) -> Option<SpanTiming> {
            self.lock().get(name).copied()
        }

        /// Formats the totals, longest first, one span name per line.
        pub fn report(&self) -> String {
            let totals = self.lock();
            let mut entries: Vec<_> = totals.iter().collect();
            entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
            let mut out = String::new();
            for (name, timing) in entries {
                let _ = writeln!(out, "{name}: {:?} ({}x)", timing.total, timing.count);
            }
            out
        }

        pub fn reset(&self) {
            self.lock().clear();
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<&'static str, SpanTiming>> {
            self.totals.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl<S> Layer<S> for TraversalTimings
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let mut totals = self.lock();
                    let entry = totals.entry(name).or_default();
                    entry.total += start.elapsed();
                    entry.count += 1;
                }
            }
        }
    }

    /// Installs a global fmt subscriber writing to stderr at `level`.  Only
    /// the first call has any effect.
    pub fn init_tracing(level: Level) {
        init_tracing_with(level, None);
    }

    /// Like [`init_tracing`], additionally feeding span timings to
    /// `timings`.
    pub fn init_tracing_with(level: Level, timings: Option<TraversalTimings>) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(LevelFilter::from_level(level))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .with(timings)
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use tracing::Level;

    pub fn init_tracing(_level: Level) {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use tracing_subscriber::{Registry, layer::SubscriberExt};

    use super::*;
    use crate::MetroGraph;

    fn create_path_graph() -> MetroGraph {
        let mut graph = MetroGraph::new();
        graph.add_station("A", (0, 0), "Blue");
        graph.add_station("B", (1, 0), "Blue");
        graph.add_edge("A", "B", 1).unwrap();
        graph
    }

    #[test]
    fn test_timings_count_closed_runs() {
        let timings = TraversalTimings::new();
        let subscriber = Registry::default().with(timings.clone());
        let graph = create_path_graph();
        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(graph.bfs("A").unwrap().count(), 2);
            assert_eq!(graph.bfs("B").unwrap().count(), 2);
            let _ = graph.shortest_path("A", "B").unwrap();
        });
        assert_eq!(timings.get("bfs").map(|t| t.count), Some(2));
        assert_eq!(timings.get("dijkstra").map(|t| t.count), Some(1));
        assert_eq!(timings.get("dfs"), None);
        assert!(timings.report().contains("bfs: "));
        timings.reset();
        assert_eq!(timings.get("bfs"), None);
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(tracing::Level::WARN);
        init_tracing(tracing::Level::TRACE);
    }
}
