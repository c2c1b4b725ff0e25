//! Background search on a worker thread.
//!
//! The worker owns its own copy of the position. It talks to the caller only
//! through a shared stop flag and a result slot.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use super::super::Position;
use super::{run, SearchParams, SearchResult};

/// A search running on its own thread.
///
/// Dropping the handle stops the search and waits for the worker.
pub struct SearchHandle {
    stop: Arc<AtomicBool>,
    result: Arc<Mutex<Option<SearchResult>>>,
    worker: Option<JoinHandle<()>>,
}

impl SearchHandle {
    /// Start searching `position` in the background.
    ///
    /// Fails only if the operating system refuses to spawn a thread.
    pub fn spawn(position: Position, params: SearchParams) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let result = Arc::new(Mutex::new(None));

        let worker_stop = Arc::clone(&stop);
        let worker_result = Arc::clone(&result);
        let worker = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || {
                #[cfg(feature = "logging")]
                log::trace!("search started at depth {}", params.depth);
                let mut board = position.board;

                #[cfg(feature = "logging")]
                let logger = super::LogLogger;
                #[cfg(not(feature = "logging"))]
                let logger = super::NoopLogger;

                let outcome = run(
                    &mut board,
                    position.side_to_move,
                    position.castling_rights,
                    position.last_move,
                    &params,
                    &worker_stop,
                    &logger,
                );
                #[cfg(feature = "logging")]
                log::trace!("search finished after {} nodes", outcome.stats.nodes);
                *worker_result.lock() = Some(outcome);
            })?;

        Ok(SearchHandle {
            stop,
            result,
            worker: Some(worker),
        })
    }

    /// Ask the search to finish early.
    ///
    /// The result then holds the best move among the root moves searched to
    /// completion, or the first root move if none completed.
    pub fn stop(&self) {
        #[cfg(feature = "logging")]
        log::trace!("search stop requested");
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether the result is ready
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.lock().is_some()
    }

    /// Copy of the result if the search has finished, without blocking
    #[must_use]
    pub fn try_result(&self) -> Option<SearchResult> {
        *self.result.lock()
    }

    /// Wait for the search to finish and take its result.
    ///
    /// Returns `None` only if the worker panicked.
    pub fn join(mut self) -> Option<SearchResult> {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                return None;
            }
        }
        self.result.lock().take()
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            self.stop.store(true, Ordering::Relaxed);
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_with_same_move_as_synchronous_search() {
        let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
        let params = SearchParams::default().depth(2);
        let handle = SearchHandle::spawn(position, params).unwrap();
        let result = handle.join().unwrap();
        assert_eq!(result, position.search(&params));
        assert_eq!(result.best_move.unwrap().to_string(), "e1e8");
    }

    #[test]
    fn stop_still_yields_a_legal_move() {
        let position = Position::new();
        let handle = SearchHandle::spawn(position, SearchParams::default().depth(6)).unwrap();
        handle.stop();
        let result = handle.join().unwrap();
        let m = result.best_move.unwrap();
        assert!(position.all_legal_moves().iter().any(|legal| *legal == m));
    }

    #[test]
    fn no_moves_means_no_result_move() {
        let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let handle = SearchHandle::spawn(position, SearchParams::default()).unwrap();
        let result = handle.join().unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }
}
