//! Game state module - the immutable simulation snapshot and its transitions
//!
//! Every transition takes `&self` and returns a fresh `GameState`; nothing is
//! mutated in place and no references are retained. The food RNG travels with
//! the state, so a transition is a pure function of its input.

use arrayvec::ArrayVec;

use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::types::*;

/// Snake body, head first
pub type Body = ArrayVec<Position, GRID_CELLS>;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    snake: Body,
    food: Position,
    /// Direction applied on the most recent tick (not the latest request).
    direction: Direction,
    score: u32,
    status: GameStatus,
    mode: GameMode,
    /// Milliseconds per tick.
    speed: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create an idle session in `mode`, seeding food placement with `seed`
    pub fn new(mode: GameMode, seed: u32) -> Self {
        let snake: Body = (0..INITIAL_LENGTH as i8)
            .map(|i| Position::new(INITIAL_HEAD.x - i, INITIAL_HEAD.y))
            .collect();
        let mut rng = SimpleRng::new(seed);
        // Three cells on a 400-cell grid always leave room.
        let food = place_food(&snake, &mut rng).unwrap_or_default();

        Self {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            status: GameStatus::Idle,
            mode,
            speed: INITIAL_SPEED_MS,
            rng,
        }
    }

    pub fn snake(&self) -> &[Position] {
        &self.snake
    }

    /// Head segment. The body is never empty.
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Replace the body (head first). An empty iterator leaves the body as is;
    /// anything past the grid's cell count is ignored.
    pub fn with_snake(mut self, body: impl IntoIterator<Item = Position>) -> Self {
        let body: Body = body.into_iter().take(GRID_CELLS).collect();
        if !body.is_empty() {
            self.snake = body;
        }
        self
    }

    pub fn with_food(mut self, food: Position) -> Self {
        self.food = food;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    fn ended(&self) -> Self {
        self.clone().with_status(GameStatus::GameOver)
    }

    /// Advance the simulation by one tick
    ///
    /// Moves the head one cell along `direction`, applies the boundary policy,
    /// checks self-collision against the current body, then grows or slides
    /// the snake. Eating food adds [`SCORE_PER_FOOD`], shortens the tick
    /// interval by [`SPEED_DECREMENT_MS`] (floored at [`MIN_SPEED_MS`]) and
    /// respawns the food off the new body.
    pub fn advance(&self) -> Self {
        if self.status != GameStatus::Playing {
            return self.clone();
        }

        let mut new_head = self.head().offset(self.direction);
        match self.mode {
            GameMode::Walls => {
                if !new_head.in_bounds() {
                    return self.ended();
                }
            }
            GameMode::PassThrough => new_head = new_head.wrapped(),
        }

        // The tail cell counts: it has not moved yet.
        if self.snake.contains(&new_head) {
            return self.ended();
        }

        let ate_food = new_head == self.food;
        let mut next = self.clone();
        if !ate_food {
            next.snake.pop();
        }
        if next.snake.try_insert(0, new_head).is_err() {
            return self.ended();
        }

        if ate_food {
            next.score = next.score.saturating_add(SCORE_PER_FOOD);
            next.speed = next
                .speed
                .saturating_sub(SPEED_DECREMENT_MS)
                .max(MIN_SPEED_MS);
            match place_food(&next.snake, &mut next.rng) {
                Some(food) => next.food = food,
                // Nowhere left to put food: the board is full.
                None => next.status = GameStatus::GameOver,
            }
        }

        next
    }

    /// Request a new heading
    ///
    /// Ignored unless playing, and ignored when `requested` reverses the
    /// direction applied on the last tick.
    pub fn apply_direction(&self, requested: Direction) -> Self {
        if self.status != GameStatus::Playing || requested == self.direction.opposite() {
            return self.clone();
        }
        self.clone().with_direction(requested)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default(), 1)
    }
}

/// Fresh idle session in `mode`
pub fn initial_state(mode: GameMode, seed: u32) -> GameState {
    GameState::new(mode, seed)
}

/// One simulation tick; see [`GameState::advance`]
pub fn advance(state: &GameState) -> GameState {
    state.advance()
}

/// Direction request; see [`GameState::apply_direction`]
pub fn apply_direction(state: &GameState, requested: Direction) -> GameState {
    state.apply_direction(requested)
}
