//! In-memory arena store: leaderboard plus the live-player table.
//!
//! There is no global instance. Each process (or test) builds its own store
//! and hands it to whatever needs it.

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{GameMode, LeaderboardEntry, LivePlayer};

#[derive(Debug, Default)]
pub struct ArenaStore {
    /// Sorted by score, highest first; equal scores keep submission order.
    leaderboard: Vec<LeaderboardEntry>,
    live_players: BTreeMap<String, LivePlayer>,
}

impl ArenaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game.
    pub fn add_score(
        &mut self,
        user_id: &str,
        username: &str,
        score: u32,
        mode: GameMode,
    ) -> Result<LeaderboardEntry, StoreError> {
        if user_id.trim().is_empty() {
            return Err(StoreError::MissingUserId);
        }
        if username.trim().is_empty() {
            return Err(StoreError::MissingUsername);
        }

        let entry = LeaderboardEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            username: username.to_string(),
            score,
            mode,
            created_at: Utc::now(),
        };
        let idx = self.leaderboard.partition_point(|e| e.score >= score);
        self.leaderboard.insert(idx, entry.clone());
        Ok(entry)
    }

    /// Entries ordered by score descending, optionally for one mode only.
    pub fn leaderboard(&self, mode: Option<GameMode>) -> Vec<LeaderboardEntry> {
        self.leaderboard
            .iter()
            .filter(|e| mode.map_or(true, |m| e.mode == m))
            .cloned()
            .collect()
    }

    /// Best score of a user, 0 when they have none.
    pub fn user_high_score(&self, user_id: &str, mode: Option<GameMode>) -> u32 {
        self.leaderboard
            .iter()
            .filter(|e| e.user_id == user_id && mode.map_or(true, |m| e.mode == m))
            .map(|e| e.score)
            .max()
            .unwrap_or(0)
    }

    /// Insert or replace a player's live snapshot.
    pub fn update_live_player(&mut self, player: LivePlayer) -> Result<(), StoreError> {
        if player.id.trim().is_empty() {
            return Err(StoreError::MissingUserId);
        }
        self.live_players.insert(player.id.clone(), player);
        Ok(())
    }

    /// Returns true if the player was listed.
    pub fn remove_live_player(&mut self, id: &str) -> bool {
        self.live_players.remove(id).is_some()
    }

    pub fn live_players(&self) -> Vec<LivePlayer> {
        self.live_players.values().cloned().collect()
    }

    pub fn live_player(&self, id: &str) -> Option<LivePlayer> {
        self.live_players.get(id).cloned()
    }

    pub fn clear_live_players(&mut self) {
        self.live_players.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Position};

    fn live(id: &str, score: u32) -> LivePlayer {
        LivePlayer {
            id: id.to_string(),
            username: format!("{}-name", id),
            score,
            mode: GameMode::Walls,
            snake: vec![Position::new(3, 3), Position::new(2, 3)],
            food: Position::new(9, 9),
            direction: Direction::Right,
            is_playing: true,
        }
    }

    #[test]
    fn leaderboard_sorted_by_score_desc() {
        let mut store = ArenaStore::new();
        store.add_score("u1", "alice", 50, GameMode::Walls).unwrap();
        store.add_score("u2", "bob", 120, GameMode::PassThrough).unwrap();
        store.add_score("u3", "carol", 80, GameMode::Walls).unwrap();

        let scores: Vec<u32> = store.leaderboard(None).iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![120, 80, 50]);
    }

    #[test]
    fn equal_scores_keep_submission_order() {
        let mut store = ArenaStore::new();
        store.add_score("u1", "alice", 70, GameMode::Walls).unwrap();
        store.add_score("u2", "bob", 70, GameMode::Walls).unwrap();

        let names: Vec<String> = store
            .leaderboard(None)
            .into_iter()
            .map(|e| e.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn leaderboard_filters_by_mode() {
        let mut store = ArenaStore::new();
        store.add_score("u1", "alice", 50, GameMode::Walls).unwrap();
        store.add_score("u2", "bob", 120, GameMode::PassThrough).unwrap();

        let walls = store.leaderboard(Some(GameMode::Walls));
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].username, "alice");
        assert_eq!(walls[0].user_id, "u1");
    }

    #[test]
    fn entries_get_unique_ids() {
        let mut store = ArenaStore::new();
        let a = store.add_score("u1", "alice", 10, GameMode::Walls).unwrap();
        let b = store.add_score("u1", "alice", 10, GameMode::Walls).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rejects_anonymous_scores() {
        let mut store = ArenaStore::new();
        assert_eq!(
            store.add_score("", "alice", 10, GameMode::Walls),
            Err(StoreError::MissingUserId)
        );
        assert_eq!(
            store.add_score("u1", "  ", 10, GameMode::Walls),
            Err(StoreError::MissingUsername)
        );
        assert!(store.leaderboard(None).is_empty());
    }

    #[test]
    fn user_high_score_per_mode() {
        let mut store = ArenaStore::new();
        store.add_score("u1", "alice", 50, GameMode::Walls).unwrap();
        store.add_score("u1", "alice", 90, GameMode::PassThrough).unwrap();
        store.add_score("u2", "bob", 300, GameMode::Walls).unwrap();

        assert_eq!(store.user_high_score("u1", None), 90);
        assert_eq!(store.user_high_score("u1", Some(GameMode::Walls)), 50);
        assert_eq!(store.user_high_score("nobody", None), 0);
    }

    #[test]
    fn live_players_upsert_and_remove() {
        let mut store = ArenaStore::new();
        store.update_live_player(live("p1", 10)).unwrap();
        store.update_live_player(live("p2", 20)).unwrap();
        store.update_live_player(live("p1", 30)).unwrap();

        assert_eq!(store.live_players().len(), 2);
        assert_eq!(store.live_player("p1").map(|p| p.score), Some(30));

        assert!(store.remove_live_player("p1"));
        assert!(!store.remove_live_player("p1"));
        assert_eq!(store.live_player("p1"), None);

        store.clear_live_players();
        assert!(store.live_players().is_empty());
    }

    #[test]
    fn stores_are_independent() {
        let mut a = ArenaStore::new();
        let b = ArenaStore::new();
        a.update_live_player(live("p1", 10)).unwrap();
        assert!(b.live_players().is_empty());
    }
}
