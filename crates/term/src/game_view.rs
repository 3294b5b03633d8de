//! GameView: maps a `GameState` snapshot into a framebuffer.
//!
//! Pure, no I/O. The view never mutates the state it reads.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameMode, GameStatus, LeaderboardEntry, LivePlayer, Position, GRID_SIZE};

const BOARD_BG: Rgb = Rgb::new(20, 24, 28);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Arena details: shown under the game stats, plus the top scores drawn on
/// the board between games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaPanel<'a> {
    pub player: Option<&'a str>,
    pub best: u32,
    pub live_players: u16,
    /// Highest first; only the first [`LEADERBOARD_ROWS`] are drawn.
    pub leaderboard: &'a [LeaderboardEntry],
    /// Live player selected by the spectator cursor.
    pub watching: Option<&'a LivePlayer>,
}

pub const LEADERBOARD_ROWS: usize = 5;

pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares the cells on common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Outer size of the bordered grid in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (n * self.cell_w + 2, n * self.cell_h + 2)
    }

    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, None, viewport, &mut fb);
        fb
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        state: &GameState,
        arena: Option<&ArenaPanel<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w + 2 + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border_fg = match state.mode() {
            GameMode::Walls => Rgb::new(230, 90, 80),
            GameMode::PassThrough => Rgb::new(110, 110, 130),
        };
        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(border_fg, PANEL_BG),
        );

        let grid = CellStyle::new(Rgb::new(60, 64, 72), BOARD_BG).dim();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.fill_cell(fb, start_x, start_y, Position::new(x, y), '·', grid);
            }
        }

        let food = CellStyle::new(Rgb::new(240, 70, 70), BOARD_BG).bold();
        self.fill_cell(fb, start_x, start_y, state.food(), '●', food);

        let body = CellStyle::new(Rgb::new(90, 200, 110), BOARD_BG);
        let head = CellStyle::new(Rgb::new(170, 255, 150), BOARD_BG).bold();
        // Tail first so the head wins on overlap after a collision.
        for (i, seg) in state.snake().iter().enumerate().rev() {
            let style = if i == 0 { head } else { body };
            self.fill_cell(fb, start_x, start_y, *seg, '█', style);
        }

        self.draw_side_panel(fb, state, arena, viewport, start_x + frame_w + 2, start_y);

        let overlay = match state.status() {
            GameStatus::Idle => Some("PRESS SPACE"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = overlay {
            draw_centered(fb, start_x, start_y + frame_h / 2, frame_w, text);
        }

        let between_games = matches!(state.status(), GameStatus::Idle | GameStatus::GameOver);
        if let (true, Some(arena)) = (between_games, arena) {
            draw_leaderboard(fb, start_x, start_y + frame_h / 2 + 2, frame_w, arena.leaderboard);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        if !pos.in_bounds() {
            return;
        }
        let px = start_x + 1 + pos.x as u16 * self.cell_w;
        let py = start_y + 1 + pos.y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        arena: Option<&ArenaPanel<'_>>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, state.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_u32(panel_x, y + 1, state.speed(), value);
        fb.put_str(panel_x + digits(state.speed()), y + 1, "ms", value.dim());
        y += 3;

        fb.put_str(panel_x, y, "MODE", label);
        fb.put_str(panel_x, y + 1, state.mode().as_str(), value);
        y += 3;

        fb.put_str(panel_x, y, "STATUS", label);
        fb.put_str(panel_x, y + 1, state.status().as_str(), value);
        y += 3;

        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, state.snake().len() as u32, value);
        y += 3;

        let Some(arena) = arena else {
            return;
        };
        fb.put_str(panel_x, y, "PLAYER", label);
        fb.put_str(panel_x, y + 1, arena.player.unwrap_or("offline"), value);
        y += 2;
        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x, y + 1, arena.best, value);
        y += 2;
        fb.put_str(panel_x, y, "LIVE", label);
        fb.put_u32(panel_x, y + 1, arena.live_players as u32, value);
        y += 2;
        fb.put_str(panel_x, y, "WATCHING", label);
        match arena.watching {
            Some(p) => {
                let name: String = p.username.chars().take(8).collect();
                fb.put_str(panel_x, y + 1, &name, value);
                fb.put_u32(panel_x + 9, y + 1, p.score, value);
            }
            None => fb.put_str(panel_x, y + 1, "-", value.dim()),
        }
    }
}

const PANEL_W: u16 = 14;

fn digits(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// `TOP SCORES` heading followed by one ranked row per entry.
fn draw_leaderboard(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, entries: &[LeaderboardEntry]) {
    draw_centered(fb, x, y, w, "TOP SCORES");
    if entries.is_empty() {
        let style = CellStyle::new(Rgb::new(150, 150, 160), BOARD_BG).dim();
        fb.put_str(x + w.saturating_sub(12) / 2, y + 1, "no games yet", style);
        return;
    }
    let style = CellStyle::new(Rgb::new(240, 210, 120), BOARD_BG);
    for (i, entry) in entries.iter().take(LEADERBOARD_ROWS).enumerate() {
        let name: String = entry.username.chars().take(12).collect();
        let row = format!("{:>2}. {:<12} {:>5}", i + 1, name, entry.score);
        let row_w = row.chars().count() as u16;
        fb.put_str(x + w.saturating_sub(row_w) / 2, y + 1 + i as u16, &row, style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, GameMode};

    fn playing() -> GameState {
        GameState::new(GameMode::Walls, 7)
            .with_snake([Position::new(3, 2), Position::new(2, 2), Position::new(1, 2)])
            .with_food(Position::new(8, 5))
            .with_direction(Direction::Right)
            .with_status(GameStatus::Playing)
            .with_score(30)
    }

    fn find(fb: &FrameBuffer, ch: char) -> Vec<(u16, u16)> {
        let mut hits = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get(x, y).map(|c| c.ch) == Some(ch) {
                    hits.push((x, y));
                }
            }
        }
        hits
    }

    #[test]
    fn draws_snake_and_food_at_scaled_cells() {
        let view = GameView::default();
        let (fw, fh) = view.frame_size();
        let fb = view.render(&playing(), Viewport::new(fw, fh));

        // Head + two body segments, two columns each.
        assert_eq!(find(&fb, '█').len(), 6);
        assert_eq!(find(&fb, '●'), vec![(1 + 16, 1 + 5), (2 + 16, 1 + 5)]);
        assert_eq!(fb.get(1 + 6, 3).map(|c| c.style.bold), Some(true));
        assert_eq!(fb.get(1 + 4, 3).map(|c| c.style.bold), Some(false));
    }

    #[test]
    fn frame_is_bordered() {
        let view = GameView::default();
        let (fw, fh) = view.frame_size();
        assert_eq!((fw, fh), (42, 22));
        let fb = view.render(&playing(), Viewport::new(fw, fh));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(fw - 1, fh - 1).map(|c| c.ch), Some('┘'));
    }

    #[test]
    fn side_panel_shows_stats_when_room() {
        let view = GameView::default();
        let (fw, fh) = view.frame_size();
        let vp = Viewport::new(fw + PANEL_W + 2, fh);
        let arena = ArenaPanel {
            player: Some("viper"),
            best: 120,
            live_players: 2,
            leaderboard: &[],
            watching: None,
        };
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&playing(), Some(&arena), vp, &mut fb);

        let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
        assert!(text.contains("SCORE"));
        assert!(text.contains("30"));
        assert!(text.contains("200ms"));
        assert!(text.contains("walls"));
        assert!(text.contains("viper"));
        assert!(text.contains("120"));
    }

    #[test]
    fn overlay_follows_status() {
        let view = GameView::default();
        let (fw, fh) = view.frame_size();
        let vp = Viewport::new(fw, fh);
        let row = |state: &GameState| view.render(state, vp).row_text(fh / 2);

        assert!(row(&playing().with_status(GameStatus::Paused)).contains("PAUSED"));
        assert!(row(&playing().with_status(GameStatus::GameOver)).contains("GAME OVER"));
        assert!(row(&GameState::new(GameMode::Walls, 1)).contains("PRESS SPACE"));
        assert!(!row(&playing()).contains("PAUSED"));
    }

    fn entry(username: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: format!("e-{username}"),
            user_id: username.to_string(),
            username: username.to_string(),
            score,
            mode: GameMode::Walls,
            created_at: chrono::Utc::now(),
        }
    }

    fn frame_text(fb: &FrameBuffer) -> String {
        (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
    }

    #[test]
    fn leaderboard_drawn_between_games_only() {
        let view = GameView::default();
        let (fw, fh) = view.frame_size();
        let vp = Viewport::new(fw + PANEL_W + 2, fh + 2);
        let board: Vec<_> = (0..7).map(|i| entry(&format!("p{i}"), 100 - i * 10)).collect();
        let arena = ArenaPanel {
            player: Some("p0"),
            best: 100,
            live_players: 0,
            leaderboard: &board,
            watching: None,
        };
        let mut fb = FrameBuffer::new(1, 1);

        view.render_into(&playing().with_status(GameStatus::GameOver), Some(&arena), vp, &mut fb);
        let text = frame_text(&fb);
        assert!(text.contains("TOP SCORES"));
        assert!(text.contains(" 1. p0"));
        assert!(text.contains(" 5. p4"));
        assert!(!text.contains("p5"));

        view.render_into(&playing(), Some(&arena), vp, &mut fb);
        assert!(!frame_text(&fb).contains("TOP SCORES"));

        let empty = ArenaPanel {
            leaderboard: &[],
            ..arena
        };
        view.render_into(&GameState::new(GameMode::Walls, 1), Some(&empty), vp, &mut fb);
        assert!(frame_text(&fb).contains("no games yet"));
    }

    #[test]
    fn panel_shows_watched_player() {
        let view = GameView::default();
        let (fw, fh) = view.frame_size();
        let vp = Viewport::new(fw + PANEL_W + 2, fh + 2);
        let adder = LivePlayer {
            id: "u2".to_string(),
            username: "adder".to_string(),
            score: 70,
            mode: GameMode::PassThrough,
            snake: vec![Position::new(4, 4)],
            food: Position::new(9, 9),
            direction: Direction::Left,
            is_playing: true,
        };
        let arena = ArenaPanel {
            player: Some("viper"),
            best: 0,
            live_players: 2,
            leaderboard: &[],
            watching: Some(&adder),
        };
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&playing(), Some(&arena), vp, &mut fb);

        let text = frame_text(&fb);
        assert!(text.contains("WATCHING"));
        assert!(text.contains("adder    70"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&playing(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
