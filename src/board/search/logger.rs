use std::fmt;
use std::time::Duration;

use super::super::Move;

/// Summary of a finished search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub nodes: u64,
    pub cutoffs: u64,
    pub score: i32,
    pub best_move: Option<Move>,
    pub elapsed: Duration,
    /// The stop flag cut the root loop short
    pub stopped: bool,
}

impl fmt::Display for SearchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth {} score {} nodes {} cutoffs {} time {}ms",
            self.depth,
            self.score,
            self.nodes,
            self.cutoffs,
            self.elapsed.as_millis()
        )?;
        match self.best_move {
            Some(m) => write!(f, " bestmove {m}")?,
            None => write!(f, " bestmove none")?,
        }
        if self.stopped {
            write!(f, " (stopped)")?;
        }
        Ok(())
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Discards everything.
pub struct NoopLogger;

impl SearchLogger for NoopLogger {
    fn info(&self, _info: &SearchInfo) {}
}

/// Forwards search summaries to the `log` facade at debug level.
#[cfg(feature = "logging")]
pub struct LogLogger;

#[cfg(feature = "logging")]
impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::debug!("search {info}");
    }
}
