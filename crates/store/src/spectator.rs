//! Spectator cursor over the live-player table.
//!
//! Holds only the id being watched; every poll reads the latest snapshot from
//! the store, so a spectator never holds stale player state.

use crate::store::ArenaStore;
use crate::types::LivePlayer;

#[derive(Debug, Clone, Default)]
pub struct Spectator {
    watching: Option<String>,
}

impl Spectator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watching(&self) -> Option<&str> {
        self.watching.as_deref()
    }

    /// Latest snapshot of the watched player.
    ///
    /// Falls back to the first live player when nobody is selected or the
    /// watched player has left.
    pub fn poll(&mut self, store: &ArenaStore) -> Option<LivePlayer> {
        if let Some(player) = self.watching.as_deref().and_then(|id| store.live_player(id)) {
            return Some(player);
        }
        let first = store.live_players().into_iter().next();
        self.watching = first.as_ref().map(|p| p.id.clone());
        first
    }

    /// Watch the next live player, wrapping around.
    pub fn next(&mut self, store: &ArenaStore) -> Option<LivePlayer> {
        self.step(store, 1)
    }

    /// Watch the previous live player, wrapping around.
    pub fn prev(&mut self, store: &ArenaStore) -> Option<LivePlayer> {
        self.step(store, -1)
    }

    fn step(&mut self, store: &ArenaStore, delta: isize) -> Option<LivePlayer> {
        let players = store.live_players();
        if players.is_empty() {
            self.watching = None;
            return None;
        }
        let len = players.len() as isize;
        let current = self
            .watching
            .as_deref()
            .and_then(|id| players.iter().position(|p| p.id == id))
            .map(|i| i as isize);
        let idx = match current {
            Some(i) => (i + delta).rem_euclid(len),
            None => 0,
        };
        let player = players.into_iter().nth(idx as usize);
        self.watching = player.as_ref().map(|p| p.id.clone());
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, GameMode, Position};

    fn live(id: &str, score: u32) -> LivePlayer {
        LivePlayer {
            id: id.to_string(),
            username: id.to_uppercase(),
            score,
            mode: GameMode::PassThrough,
            snake: vec![Position::new(5, 5)],
            food: Position::new(1, 1),
            direction: Direction::Up,
            is_playing: true,
        }
    }

    fn store_with(ids: &[&str]) -> ArenaStore {
        let mut store = ArenaStore::new();
        for (i, id) in ids.iter().enumerate() {
            store.update_live_player(live(id, i as u32 * 10)).unwrap();
        }
        store
    }

    #[test]
    fn poll_selects_first_then_follows_updates() {
        let mut store = store_with(&["a", "b"]);
        let mut watcher = Spectator::new();

        assert_eq!(watcher.poll(&store).map(|p| p.id), Some("a".to_string()));
        store.update_live_player(live("a", 99)).unwrap();
        assert_eq!(watcher.poll(&store).map(|p| p.score), Some(99));
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let store = store_with(&["a", "b", "c"]);
        let mut watcher = Spectator::new();
        watcher.poll(&store);

        assert_eq!(watcher.next(&store).map(|p| p.id), Some("b".to_string()));
        assert_eq!(watcher.next(&store).map(|p| p.id), Some("c".to_string()));
        assert_eq!(watcher.next(&store).map(|p| p.id), Some("a".to_string()));
        assert_eq!(watcher.prev(&store).map(|p| p.id), Some("c".to_string()));
    }

    #[test]
    fn watched_player_leaving_falls_back() {
        let mut store = store_with(&["a", "b"]);
        let mut watcher = Spectator::new();
        watcher.poll(&store);
        watcher.next(&store);
        assert_eq!(watcher.watching(), Some("b"));

        store.remove_live_player("b");
        assert_eq!(watcher.poll(&store).map(|p| p.id), Some("a".to_string()));

        store.clear_live_players();
        assert_eq!(watcher.poll(&store), None);
        assert_eq!(watcher.watching(), None);
        assert_eq!(watcher.next(&store), None);
    }
}
