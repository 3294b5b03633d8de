use crate::game_state::GameState;
use crate::types::LiveStatus;

impl GameState {
    /// Build the live-status payload for this snapshot.
    pub fn live_status(&self, is_playing: bool) -> LiveStatus {
        LiveStatus {
            score: self.score(),
            mode: self.mode(),
            snake: self.snake().to_vec(),
            food: self.food(),
            direction: self.direction(),
            is_playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::GameState;
    use crate::types::{Direction, GameMode, GameStatus, Position};

    #[test]
    fn live_status_mirrors_state() {
        let state = GameState::new(GameMode::Walls, 9)
            .with_status(GameStatus::Playing)
            .with_score(20)
            .with_food(Position::new(1, 1))
            .with_direction(Direction::Down);
        let status = state.live_status(true);

        assert_eq!(status.score, 20);
        assert_eq!(status.mode, GameMode::Walls);
        assert_eq!(status.snake, state.snake().to_vec());
        assert_eq!(status.food, Position::new(1, 1));
        assert_eq!(status.direction, Direction::Down);
        assert!(status.is_playing);
        assert!(!state.live_status(false).is_playing);
    }
}
