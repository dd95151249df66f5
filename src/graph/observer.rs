//! Instrumentation points around algorithm dispatch.

use std::time::Duration;

use super::entity::Graph;
use super::error::GraphResult;
use crate::config::{settings, Algorithm, AlgorithmOutput};

/// Receives an event immediately before and after a graph dispatches its
/// configured algorithm.
///
/// Observers see the raw algorithm outcome, before it is compared with
/// the expected result. They cannot influence the result.
pub trait RunObserver {
    /// Called once the required attributes are validated, before dispatch.
    fn before_dispatch(&self, graph: &Graph, algorithm: Algorithm);

    /// Called after the algorithm returns.
    fn after_dispatch(
        &self,
        graph: &Graph,
        algorithm: Algorithm,
        outcome: &GraphResult<AlgorithmOutput>,
        elapsed: Duration,
    );
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {
    fn before_dispatch(&self, _graph: &Graph, _algorithm: Algorithm) {}

    fn after_dispatch(
        &self,
        _graph: &Graph,
        _algorithm: Algorithm,
        _outcome: &GraphResult<AlgorithmOutput>,
        _elapsed: Duration,
    ) {
    }
}

/// Emits `tracing` start/finish events when the process-wide
/// `track_performance` setting is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceLog;

impl RunObserver for PerformanceLog {
    fn before_dispatch(&self, graph: &Graph, algorithm: Algorithm) {
        if !settings::track_performance() {
            return;
        }
        tracing::info!(
            graph = graph.id().unwrap_or_default(),
            nodes = graph.node_count().unwrap_or_default(),
            %algorithm,
            "starting algorithm"
        );
    }

    fn after_dispatch(
        &self,
        graph: &Graph,
        algorithm: Algorithm,
        outcome: &GraphResult<AlgorithmOutput>,
        elapsed: Duration,
    ) {
        if !settings::track_performance() {
            return;
        }
        tracing::info!(
            graph = graph.id().unwrap_or_default(),
            %algorithm,
            elapsed_us = elapsed.as_micros() as u64,
            ok = outcome.is_ok(),
            "finished algorithm"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Restores the process-wide flag when dropped.
    struct TrackingGuard;

    impl Drop for TrackingGuard {
        fn drop(&mut self) {
            settings::set_track_performance(false);
        }
    }

    fn graph() -> Graph {
        Graph::new()
            .with_id("tracked")
            .with_node_count(4)
            .with_edges(vec![(0, 1), (0, 2), (1, 3), (2, 3)])
            .with_algorithm(Algorithm::TopologicalSort)
            .with_expected_result(vec![0, 2, 1, 3])
    }

    fn run_captured(graph: &Graph) -> (GraphResult<AlgorithmOutput>, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || graph.run_algorithm());
        (result, captured.text())
    }

    #[test]
    fn test_tracking_logs_start_and_finish_without_changing_result() {
        let graph = graph();
        let _guard = TrackingGuard;

        settings::set_track_performance(false);
        let (quiet, quiet_log) = run_captured(&graph);
        assert!(!quiet_log.contains("starting algorithm"));
        assert!(!quiet_log.contains("finished algorithm"));

        settings::set_track_performance(true);
        let (tracked, tracked_log) = run_captured(&graph);
        assert!(tracked_log.contains("starting algorithm"), "{tracked_log}");
        assert!(tracked_log.contains("finished algorithm"), "{tracked_log}");
        assert!(tracked_log.contains("graph=\"tracked\"") || tracked_log.contains("graph=tracked"));
        assert!(tracked_log.contains("algorithm=topological_sort"));

        assert_eq!(quiet.unwrap(), tracked.unwrap());
    }

    #[test]
    fn test_noop_observer_matches_performance_log() {
        let graph = graph();
        assert_eq!(
            graph.run_algorithm_with(&NoopObserver).unwrap(),
            graph.run_algorithm_with(&PerformanceLog).unwrap()
        );
    }
}
