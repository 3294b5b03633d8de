//! Arena link runtime.
//!
//! Bridges the synchronous game loop with the async store task: sinks push
//! events into an unbounded channel and return immediately, a task on a
//! private tokio runtime applies them to the shared store in arrival order.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, info, warn};

use crate::engine::{LiveStatusSink, ScoreSink};
use crate::store::ArenaStore;
use crate::types::{GameMode, LeaderboardEntry, LivePlayer, LiveStatus, PlayerIdentity};

/// Event delivered to the store task.
#[derive(Debug)]
pub enum ArenaEvent {
    Score {
        player: PlayerIdentity,
        score: u32,
        mode: GameMode,
    },
    LiveStatus {
        player: PlayerIdentity,
        status: LiveStatus,
    },
    /// Answered once every earlier event has been applied.
    Flush(oneshot::Sender<()>),
}

/// Apply events to `store` until every sender is dropped.
pub async fn run_store_task(
    store: Arc<RwLock<ArenaStore>>,
    mut rx: mpsc::UnboundedReceiver<ArenaEvent>,
) {
    while let Some(event) = rx.recv().await {
        match event {
            ArenaEvent::Score {
                player,
                score,
                mode,
            } => {
                let result = store
                    .write()
                    .await
                    .add_score(&player.id, &player.username, score, mode);
                match result {
                    Ok(entry) => info!(
                        user = %entry.username,
                        score,
                        mode = mode.as_str(),
                        "score recorded"
                    ),
                    Err(e) => warn!(error = %e, "score rejected"),
                }
            }
            ArenaEvent::LiveStatus { player, status } => {
                debug!(
                    payload = %serde_json::to_string(&status).unwrap_or_default(),
                    "live status"
                );
                let mut store = store.write().await;
                if status.is_playing {
                    let live = LivePlayer::from_status(&player.id, &player.username, &status);
                    if let Err(e) = store.update_live_player(live) {
                        warn!(error = %e, "live status rejected");
                    }
                } else {
                    store.remove_live_player(&player.id);
                }
            }
            ArenaEvent::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    debug!("arena link closed");
}

/// Running link instance.
pub struct ArenaLink {
    rt: Runtime,
    store: Arc<RwLock<ArenaStore>>,
    tx: mpsc::UnboundedSender<ArenaEvent>,
}

impl ArenaLink {
    /// Spawn the store task on a fresh runtime.
    pub fn start(store: ArenaStore) -> Result<Self> {
        let rt = Runtime::new()?;
        let store = Arc::new(RwLock::new(store));
        let (tx, rx) = mpsc::unbounded_channel::<ArenaEvent>();
        rt.spawn(run_store_task(Arc::clone(&store), rx));

        Ok(Self { rt, store, tx })
    }

    /// Sink that reports on behalf of `player`.
    pub fn sink(&self, player: PlayerIdentity) -> ArenaSink {
        ArenaSink {
            player,
            tx: self.tx.clone(),
        }
    }

    /// Shared store handle.
    pub fn store(&self) -> Arc<RwLock<ArenaStore>> {
        Arc::clone(&self.store)
    }

    /// Block until every event sent so far has been applied.
    pub fn flush(&self) -> Result<()> {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx
            .send(ArenaEvent::Flush(done_tx))
            .map_err(|_| anyhow!("arena link closed"))?;
        self.rt
            .block_on(done_rx)
            .map_err(|_| anyhow!("arena link closed"))
    }

    /// Run `f` against a read-locked store.
    pub fn with_store<R>(&self, f: impl FnOnce(&ArenaStore) -> R) -> R {
        self.rt.block_on(async { f(&*self.store.read().await) })
    }

    pub fn leaderboard(&self, mode: Option<GameMode>) -> Vec<LeaderboardEntry> {
        self.rt
            .block_on(async { self.store.read().await.leaderboard(mode) })
    }

    pub fn user_high_score(&self, user_id: &str, mode: Option<GameMode>) -> u32 {
        self.rt
            .block_on(async { self.store.read().await.user_high_score(user_id, mode) })
    }

    pub fn live_players(&self) -> Vec<LivePlayer> {
        self.rt
            .block_on(async { self.store.read().await.live_players() })
    }

    pub fn live_player(&self, id: &str) -> Option<LivePlayer> {
        self.rt
            .block_on(async { self.store.read().await.live_player(id) })
    }
}

/// Channel-backed score and live-status sink for one player.
#[derive(Debug, Clone)]
pub struct ArenaSink {
    player: PlayerIdentity,
    tx: mpsc::UnboundedSender<ArenaEvent>,
}

impl ScoreSink for ArenaSink {
    fn submit_score(&self, score: u32, mode: GameMode) -> Result<()> {
        self.tx
            .send(ArenaEvent::Score {
                player: self.player.clone(),
                score,
                mode,
            })
            .map_err(|_| anyhow!("arena link closed"))
    }
}

impl LiveStatusSink for ArenaSink {
    fn update_live_status(&self, status: &LiveStatus) -> Result<()> {
        self.tx
            .send(ArenaEvent::LiveStatus {
                player: self.player.clone(),
                status: status.clone(),
            })
            .map_err(|_| anyhow!("arena link closed"))
    }
}
