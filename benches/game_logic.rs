use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snake_arena::core::{place_food, GameState, SimpleRng};
use snake_arena::term::{FrameBuffer, GameView, Viewport};
use snake_arena::types::{Direction, GameMode, GameStatus, Position, GRID_SIZE};

fn long_snake() -> Vec<Position> {
    // Serpentine over the top 15 rows.
    (0..15)
        .flat_map(|y| {
            let row: Vec<Position> = (0..GRID_SIZE).map(|x| Position::new(x, y)).collect();
            if y % 2 == 0 {
                row
            } else {
                row.into_iter().rev().collect()
            }
        })
        .collect()
}

fn bench_advance(c: &mut Criterion) {
    let state = GameState::new(GameMode::PassThrough, 12345).with_status(GameStatus::Playing);

    c.bench_function("advance_short_snake", |b| {
        b.iter(|| black_box(&state).advance())
    });
}

fn bench_advance_long(c: &mut Criterion) {
    let mut body = long_snake();
    body.reverse();
    let state = GameState::new(GameMode::PassThrough, 12345)
        .with_snake(body)
        .with_direction(Direction::Down)
        .with_food(Position::new(0, 19))
        .with_status(GameStatus::Playing);

    c.bench_function("advance_300_segments", |b| {
        b.iter(|| black_box(&state).advance())
    });
}

fn bench_place_food_crowded(c: &mut Criterion) {
    let snake = long_snake();
    let mut rng = SimpleRng::new(7);

    c.bench_function("place_food_75pct_full", |b| {
        b.iter(|| place_food(black_box(&snake), &mut rng))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(GameMode::Walls, 12345).with_status(GameStatus::Playing);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render_into(black_box(&state), None, Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_advance_long,
    bench_place_food_crowded,
    bench_render
);
criterion_main!(benches);
