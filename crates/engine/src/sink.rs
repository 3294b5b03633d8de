//! Outbound collaborator contracts.
//!
//! Both sinks are best-effort: the controller logs and drops any error they
//! return, so a flaky backend can never stall or corrupt local play.

use anyhow::Result;

use crate::types::{GameMode, LiveStatus};

/// Receives the final score of a finished session.
pub trait ScoreSink {
    fn submit_score(&self, score: u32, mode: GameMode) -> Result<()>;
}

/// Receives periodic snapshots of the running session for spectators.
pub trait LiveStatusSink {
    fn update_live_status(&self, status: &LiveStatus) -> Result<()>;
}

/// Sink that accepts and discards everything (offline play).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn submit_score(&self, _score: u32, _mode: GameMode) -> Result<()> {
        Ok(())
    }
}

impl LiveStatusSink for NullSink {
    fn update_live_status(&self, _status: &LiveStatus) -> Result<()> {
        Ok(())
    }
}
